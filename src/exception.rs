use std::sync::Arc;

use crate::error::Error;
use crate::jsonapi::{BaseResource, JsonApiError, parse_input_errors};
use crate::kind::{ErrorKind, Family};
use crate::obstruction::{Obstructed, Obstruction, Obstructions};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Data only some kinds carry.
#[derive(Debug, Default)]
enum Extension {
    #[default]
    None,
    BadInput {
        input_errors: Vec<JsonApiError>,
    },
    DuplicateResource {
        duplicate: Option<Arc<dyn BaseResource>>,
    },
}

impl Extension {
    fn for_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::BadInput => Self::BadInput {
                input_errors: Vec::new(),
            },
            ErrorKind::DuplicateResource => Self::DuplicateResource { duplicate: None },
            _ => Self::None,
        }
    }
}

/// An error raised by CFX services.
///
/// Callers dispatch on [`Exception::kind`] (or [`Exception::is_a`] for a
/// whole subtree) to pick a response; obstructions and input errors carry the
/// detail a boundary layer renders for clients.
#[derive(thiserror::Error, Debug)]
#[error("{kind}: {message}")]
pub struct Exception {
    kind: ErrorKind,
    message: String,
    obstructions: Obstructions,
    extension: Extension,
    #[source]
    source: Option<BoxError>,
}

impl Exception {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            obstructions: Obstructions::new(),
            extension: Extension::for_kind(kind),
            source: None,
        }
    }

    /// Wrap an arbitrary error in a [`ErrorKind::Debug`] exception.
    ///
    /// The wrapper takes over the inner message, and its obstructions when
    /// the inner error is itself an `Exception`.
    pub fn debug_wrap<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let inner: &(dyn std::error::Error + 'static) = &err;
        let obstructions = inner
            .downcast_ref::<Exception>()
            .map(|e| e.obstructions.clone())
            .unwrap_or_default();
        let message = err.to_string();
        tracing::debug!(%message, carried = obstructions.len(), "wrapping error for debugging");

        let mut wrapped = Self::new(ErrorKind::Debug, message);
        wrapped.obstructions = obstructions;
        wrapped.with_source(err)
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_obstruction(mut self, obstruction: Obstruction) -> Self {
        self.obstructions.push(obstruction);
        self
    }

    pub fn with_obstructions(mut self, obstructions: Vec<Obstruction>) -> Self {
        self.obstructions.replace(obstructions);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn family(&self) -> Family {
        self.kind.family()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `true` when a handler for `kind` catches this exception.
    pub fn is_a(&self, kind: ErrorKind) -> bool {
        self.kind.is_a(kind)
    }

    pub fn is_input_error(&self) -> bool {
        self.family() == Family::InvalidArgument
    }

    pub fn input_errors(&self) -> &[JsonApiError] {
        match &self.extension {
            Extension::BadInput { input_errors } => input_errors,
            _ => &[],
        }
    }

    /// Replace the field-level errors of a [`ErrorKind::BadInput`] exception.
    pub fn set_input_errors(&mut self, errors: Vec<JsonApiError>) -> Result<&mut Self, Error> {
        if let Extension::BadInput { input_errors } = &mut self.extension {
            *input_errors = errors;
            return Ok(self);
        }
        Err(self.kind_mismatch(ErrorKind::BadInput, "set_input_errors"))
    }

    /// Like [`Exception::set_input_errors`], for payloads that arrive as
    /// untyped JSON. Every element must be a JSON:API error object.
    pub fn set_input_errors_from_value(
        &mut self,
        value: &serde_json::Value,
    ) -> Result<&mut Self, Error> {
        let errors = parse_input_errors(value).inspect_err(|err| {
            tracing::warn!(kind = %self.kind, error = %err, "rejected input errors");
        })?;
        self.set_input_errors(errors)
    }

    pub fn duplicate_resource(&self) -> Option<&Arc<dyn BaseResource>> {
        match &self.extension {
            Extension::DuplicateResource { duplicate } => duplicate.as_ref(),
            _ => None,
        }
    }

    /// Record the existing resource a [`ErrorKind::DuplicateResource`]
    /// submission collided with. Only the reference is kept.
    pub fn set_duplicate_resource(
        &mut self,
        resource: Arc<dyn BaseResource>,
    ) -> Result<&mut Self, Error> {
        if let Extension::DuplicateResource { duplicate } = &mut self.extension {
            *duplicate = Some(resource);
            return Ok(self);
        }
        Err(self.kind_mismatch(ErrorKind::DuplicateResource, "set_duplicate_resource"))
    }

    fn kind_mismatch(&self, expected: ErrorKind, operation: &str) -> Error {
        tracing::warn!(kind = %self.kind, %expected, operation, "setter called on wrong kind");
        Error::Consistency {
            reason: format!(
                "`{operation}` requires a {expected} exception, got {}",
                self.kind
            ),
        }
    }
}

impl From<ErrorKind> for Exception {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, kind.description())
    }
}

impl Obstructed for Exception {
    fn obstruction_list(&self) -> &Obstructions {
        &self.obstructions
    }

    fn obstruction_list_mut(&mut self) -> &mut Obstructions {
        &mut self.obstructions
    }
}

macro_rules! kind_constructors {
    ($($name:ident => $kind:ident $(; $note:literal)?),* $(,)?) => {
        impl Exception {
            $(
                #[doc = concat!("Creates an [`ErrorKind::", stringify!($kind), "`] exception.")]
                $(#[doc = ""] #[doc = $note])?
                pub fn $name(message: impl Into<String>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )*
        }
    };
}

kind_constructors! {
    debug => Debug,
    unimplemented_feature => UnimplementedFeature,
    unprepared_object => UnpreparedObject,
    protocol => Protocol,
    bad_uri_format => BadUriFormat,
    upstream_service => UpstreamService,
    unknown_datasource => UnknownDatasource,
    corrupt_data => CorruptData,
    resource_not_found => ResourceNotFound,
    unknown_resource_type => UnknownResourceType,
    bad_input => BadInput,
    duplicate_resource_conflict => DuplicateResource;
        "Named apart from the kind because [`Exception::duplicate_resource`] is the getter.",
    unidentified_resource => UnidentifiedResource,
    uninitialized_resource => UninitializedResource,
    authn => Authn,
    authn_missing_credentials => AuthnMissingCredentials,
    authn_invalid_credentials => AuthnInvalidCredentials,
    authz => Authz,
    authz_unauthorized_user => AuthzUnauthorizedUser,
    authz_missing_credentials => AuthzMissingCredentials,
    authz_unauthenticated_request => AuthzUnauthenticatedRequest,
    path_overconsumed => PathOverconsumed,
}
