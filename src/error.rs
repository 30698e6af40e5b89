#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("consistency error: {reason}")]
    Consistency { reason: String },

    #[error("unknown error kind: {name}")]
    UnknownKind { name: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
