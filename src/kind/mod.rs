pub mod lineage;

use strum::IntoEnumIterator;

use crate::error::Error;

/// The two unrelated roots of the taxonomy.
///
/// A catch site that only cares whether the caller supplied bad input can
/// dispatch on the family without knowing individual kind names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Family {
    Runtime,
    InvalidArgument,
}

/// Every named failure category a CFX service can raise.
///
/// The set is closed. Hierarchy is expressed through [`ErrorKind::lineage`]
/// rather than through nesting, so a kind can be tested against any of its
/// ancestors with [`ErrorKind::is_a`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Exception,
    InvalidArgument,

    Debug,
    UnimplementedFeature,
    UnpreparedObject,

    Protocol,
    BadUriFormat,

    UpstreamService,

    UnknownDatasource,
    CorruptData,
    ResourceNotFound,
    UnknownResourceType,
    BadInput,
    DuplicateResource,
    UnidentifiedResource,
    UninitializedResource,

    Authn,
    AuthnMissingCredentials,
    AuthnInvalidCredentials,

    Authz,
    AuthzUnauthorizedUser,
    AuthzMissingCredentials,
    AuthzUnauthenticatedRequest,

    PathOverconsumed,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub fn all() -> impl Iterator<Item = ErrorKind> {
        Self::iter()
    }

    /// Ordered tags from this kind up to its root, self first.
    pub fn lineage(self) -> &'static [ErrorKind] {
        lineage::lineage_of(self)
    }

    pub fn parent(self) -> Option<ErrorKind> {
        self.lineage().get(1).copied()
    }

    pub fn root(self) -> ErrorKind {
        self.lineage().last().copied().unwrap_or(self)
    }

    pub fn is_root(self) -> bool {
        self.parent().is_none()
    }

    pub fn family(self) -> Family {
        match self.root() {
            ErrorKind::InvalidArgument => Family::InvalidArgument,
            _ => Family::Runtime,
        }
    }

    /// `true` when a handler for `ancestor` would catch an error of this kind.
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        self.lineage().contains(&ancestor)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Exception => "general runtime failure",
            Self::InvalidArgument => "invalid argument supplied by the caller",
            Self::Debug => "wrapped failure surfaced for debugging",
            Self::UnimplementedFeature => "requested functionality is not implemented yet",
            Self::UnpreparedObject => {
                "object lacks the dependencies or data needed for this operation"
            }
            Self::Protocol => "request does not follow the expected protocol",
            Self::BadUriFormat => "URI is not formatted correctly",
            Self::UpstreamService => "failed to communicate with an upstream service",
            Self::UnknownDatasource => "requested datasource is not known",
            Self::CorruptData => "stored data is malformed or inconsistent",
            Self::ResourceNotFound => "no resource exists with the given id",
            Self::UnknownResourceType => "resource type is not handled in this context",
            Self::BadInput => "input data is malformed",
            Self::DuplicateResource => "submitted resource conflicts with an existing one",
            Self::UnidentifiedResource => "resource has no id to fetch data with",
            Self::UninitializedResource => "resource has not been initialized",
            Self::Authn => "authentication failed",
            Self::AuthnMissingCredentials => "required credentials are missing",
            Self::AuthnInvalidCredentials => "credentials are invalid",
            Self::Authz => "access is not authorized",
            Self::AuthzUnauthorizedUser => "user may not access this functionality",
            Self::AuthzMissingCredentials => "credentials required for authorization are missing",
            Self::AuthzUnauthenticatedRequest => "action requires an authenticated user",
            Self::PathOverconsumed => "path was consumed beyond its end",
        }
    }
}

pub fn parse_kind(name: &str) -> Result<ErrorKind, Error> {
    name.parse::<ErrorKind>().map_err(|_| Error::UnknownKind {
        name: name.to_string(),
    })
}
