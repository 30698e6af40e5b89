#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod exception;
pub mod jsonapi;
pub mod kind;
pub mod obstruction;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;
pub use exception::{BoxError, Exception};
pub use jsonapi::{BaseResource, ErrorSource, JsonApiError, ResourceIdentifier, parse_input_errors};
pub use kind::lineage::nearest_common_ancestor;
pub use kind::{ErrorKind, Family, parse_kind};
pub use obstruction::{
    JsonApiObstruction, OBSTRUCTION_RESOURCE_TYPE, Obstructed, Obstruction, ObstructionAttributes,
    Obstructions,
};
