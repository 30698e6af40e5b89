use serde::{Deserialize, Serialize};

/// Resource type emitted for every rendered obstruction.
pub const OBSTRUCTION_RESOURCE_TYPE: &str = "obstructions";

/// A structured reason an operation was refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstruction {
    /// Stable identifier; becomes the `id` of the rendered resource.
    pub code: String,
    /// Human-readable detail.
    pub text: String,
    /// Values clients can interpolate into `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl Obstruction {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
            params: None,
        }
    }

    /// A JSON `null` leaves `params` absent.
    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = (!params.is_null()).then_some(params);
        self
    }

    pub fn to_json_api(&self) -> JsonApiObstruction {
        JsonApiObstruction {
            id: self.code.clone(),
            resource_type: OBSTRUCTION_RESOURCE_TYPE.to_string(),
            attributes: ObstructionAttributes {
                detail: self.text.clone(),
                params: self.params.clone(),
            },
        }
    }
}

/// JSON:API error-resource form of an [`Obstruction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonApiObstruction {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: ObstructionAttributes,
}

/// `params` is always written, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstructionAttributes {
    pub detail: String,
    pub params: Option<serde_json::Value>,
}

/// Ordered, non-deduplicated obstruction list embedded by error types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Obstructions(Vec<Obstruction>);

impl Obstructions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, obstructions: Vec<Obstruction>) {
        self.0 = obstructions;
    }

    pub fn push(&mut self, obstruction: Obstruction) {
        self.0.push(obstruction);
    }

    pub fn as_slice(&self) -> &[Obstruction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstruction> {
        self.0.iter()
    }

    pub fn to_json_api(&self) -> Vec<JsonApiObstruction> {
        self.0.iter().map(Obstruction::to_json_api).collect()
    }
}

impl From<Vec<Obstruction>> for Obstructions {
    fn from(obstructions: Vec<Obstruction>) -> Self {
        Self(obstructions)
    }
}

impl FromIterator<Obstruction> for Obstructions {
    fn from_iter<I: IntoIterator<Item = Obstruction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Obstructions {
    type Item = &'a Obstruction;
    type IntoIter = std::slice::Iter<'a, Obstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Obstruction management for any type that embeds an [`Obstructions`] list.
///
/// Implementors only provide access to the list; every operation is a
/// default method. Setters return `&mut Self` so calls can be chained.
pub trait Obstructed {
    fn obstruction_list(&self) -> &Obstructions;

    fn obstruction_list_mut(&mut self) -> &mut Obstructions;

    /// Replaces the whole list.
    fn set_obstructions(&mut self, obstructions: Vec<Obstruction>) -> &mut Self {
        self.obstruction_list_mut().replace(obstructions);
        self
    }

    /// Appends after any existing obstructions.
    fn add_obstruction(&mut self, obstruction: Obstruction) -> &mut Self {
        self.obstruction_list_mut().push(obstruction);
        self
    }

    fn obstructions(&self) -> &[Obstruction] {
        self.obstruction_list().as_slice()
    }

    fn json_api_obstructions(&self) -> Vec<JsonApiObstruction> {
        self.obstruction_list().to_json_api()
    }
}

impl Obstructed for Obstructions {
    fn obstruction_list(&self) -> &Obstructions {
        self
    }

    fn obstruction_list_mut(&mut self) -> &mut Obstructions {
        self
    }
}
