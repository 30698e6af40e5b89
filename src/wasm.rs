use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::jsonapi::parse_input_errors;
use crate::kind::{ErrorKind, parse_kind};
use crate::obstruction::Obstructions;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn render(json: &str) -> Result<serde_json::Value, Error> {
    let obstructions: Obstructions = serde_json::from_str(json)?;
    Ok(serde_json::to_value(obstructions.to_json_api())?)
}

/// Render `[{code, text, params?}]` as JSON:API obstruction resources.
#[wasm_bindgen]
pub fn render_obstructions(json: &str) -> JsValue {
    match render(json) {
        Ok(rendered) => to_js(&rendered),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Check that a payload is an array of JSON:API error objects.
#[wasm_bindgen]
pub fn validate_input_errors(json: &str) -> JsValue {
    let parsed: serde_json::Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(_) => return error_result("Invalid JSON"),
    };
    match parse_input_errors(&parsed) {
        Ok(errors) => to_js(&serde_json::json!({
            "valid": true,
            "count": errors.len(),
        })),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Ancestor chain of a kind, self first.
#[wasm_bindgen]
pub fn kind_lineage(kind: &str) -> JsValue {
    match parse_kind(kind) {
        Ok(k) => {
            let chain: Vec<String> = k.lineage().iter().map(ToString::to_string).collect();
            to_js(&serde_json::json!(chain))
        }
        Err(e) => error_result(&e.to_string()),
    }
}

/// Whether a handler for `ancestor` catches `kind`. Unknown names never match.
#[wasm_bindgen]
pub fn kind_is_a(kind: &str, ancestor: &str) -> bool {
    match (parse_kind(kind), parse_kind(ancestor)) {
        (Ok(k), Ok(a)) => k.is_a(a),
        _ => false,
    }
}

/// Every kind with its parent, family and description.
#[wasm_bindgen]
pub fn get_all_kinds() -> JsValue {
    let kinds: Vec<serde_json::Value> = ErrorKind::all()
        .map(|k| {
            serde_json::json!({
                "id": k.to_string(),
                "parent": k.parent().map(|p| p.to_string()),
                "family": k.family().to_string(),
                "description": k.description(),
            })
        })
        .collect();
    to_js(&serde_json::Value::Array(kinds))
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
