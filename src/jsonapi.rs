use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A JSON:API error object, as carried in a document's `errors` array.
///
/// Unknown members are rejected on deserialization, so an arbitrary JSON
/// object does not pass for an error object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<serde_json::Map<String, serde_json::Value>>,
    /// HTTP status code, expressed as a string value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Where in the request an error originated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorSource {
    /// JSON Pointer (RFC 6901) into the request document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl JsonApiError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field-level error pointing at `pointer` in the request document.
    pub fn for_pointer(pointer: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            source: Some(ErrorSource {
                pointer: Some(pointer.into()),
                ..ErrorSource::default()
            }),
            ..Self::default()
        }
    }

    /// Error attributed to a query parameter.
    pub fn for_parameter(parameter: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            source: Some(ErrorSource {
                parameter: Some(parameter.into()),
                ..ErrorSource::default()
            }),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// `true` when no member is set. Such an object tells a client nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

const INPUT_ERRORS_CONTRACT: &str = "input errors must be an array of JSON:API error objects";

/// Validate an untyped payload as a list of JSON:API error objects.
///
/// Stricter than JSON:API itself, where every error member is optional: an
/// element with no members at all (`{}`) is rejected, since it cannot tell a
/// client which field failed.
pub fn parse_input_errors(value: &serde_json::Value) -> Result<Vec<JsonApiError>, Error> {
    let items = value.as_array().ok_or_else(|| Error::Consistency {
        reason: format!("{INPUT_ERRORS_CONTRACT}, got {}", json_type_name(value)),
    })?;

    let mut errors = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let parsed =
            JsonApiError::deserialize(item).map_err(|source| Error::Consistency {
                reason: format!("{INPUT_ERRORS_CONTRACT}; element {idx}: {source}"),
            })?;
        if parsed.is_empty() {
            return Err(Error::Consistency {
                reason: format!("{INPUT_ERRORS_CONTRACT}; element {idx} has no members"),
            });
        }
        errors.push(parsed);
    }
    Ok(errors)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A JSON:API resource owned by the resource layer.
///
/// Errors only hold shared references to resources, never copies.
pub trait BaseResource: fmt::Debug + Send + Sync {
    fn resource_type(&self) -> &str;

    /// `None` for resources that have not been persisted yet.
    fn id(&self) -> Option<&str>;
}

/// Minimal `{type, id}` resource reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ResourceIdentifier {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: Some(id.into()),
        }
    }

    pub fn of(resource: &dyn BaseResource) -> Self {
        Self {
            resource_type: resource.resource_type().to_string(),
            id: resource.id().map(str::to_string),
        }
    }
}

impl BaseResource for ResourceIdentifier {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
