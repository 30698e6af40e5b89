use crate::kind::ErrorKind::{
    self, Authn, AuthnInvalidCredentials, AuthnMissingCredentials, Authz,
    AuthzMissingCredentials, AuthzUnauthenticatedRequest, AuthzUnauthorizedUser, BadInput,
    BadUriFormat, CorruptData, Debug, DuplicateResource, Exception, InvalidArgument,
    PathOverconsumed, Protocol, ResourceNotFound, UnidentifiedResource, UnimplementedFeature,
    UninitializedResource, UnknownDatasource, UnknownResourceType, UnpreparedObject,
    UpstreamService,
};

const EXCEPTION: &[ErrorKind] = &[Exception];
const INVALID_ARGUMENT: &[ErrorKind] = &[InvalidArgument];

const DEBUG: &[ErrorKind] = &[Debug, Exception];
const UNIMPLEMENTED_FEATURE: &[ErrorKind] = &[UnimplementedFeature, Exception];
const UNPREPARED_OBJECT: &[ErrorKind] = &[UnpreparedObject, Exception];

const PROTOCOL: &[ErrorKind] = &[Protocol, Exception];
const BAD_URI_FORMAT: &[ErrorKind] = &[BadUriFormat, Protocol, Exception];

const UPSTREAM_SERVICE: &[ErrorKind] = &[UpstreamService, Exception];

const UNKNOWN_DATASOURCE: &[ErrorKind] = &[UnknownDatasource, Exception];
const CORRUPT_DATA: &[ErrorKind] = &[CorruptData, Exception];
const RESOURCE_NOT_FOUND: &[ErrorKind] = &[ResourceNotFound, InvalidArgument];
const UNKNOWN_RESOURCE_TYPE: &[ErrorKind] = &[UnknownResourceType, Exception];
const BAD_INPUT: &[ErrorKind] = &[BadInput, InvalidArgument];
const DUPLICATE_RESOURCE: &[ErrorKind] = &[DuplicateResource, Exception];
const UNIDENTIFIED_RESOURCE: &[ErrorKind] = &[UnidentifiedResource, Exception];
const UNINITIALIZED_RESOURCE: &[ErrorKind] = &[UninitializedResource, Exception];

const AUTHN: &[ErrorKind] = &[Authn, Exception];
const AUTHN_MISSING_CREDENTIALS: &[ErrorKind] = &[AuthnMissingCredentials, Authn, Exception];
const AUTHN_INVALID_CREDENTIALS: &[ErrorKind] = &[AuthnInvalidCredentials, Authn, Exception];

const AUTHZ: &[ErrorKind] = &[Authz, Exception];
const AUTHZ_UNAUTHORIZED_USER: &[ErrorKind] = &[AuthzUnauthorizedUser, Authz, Exception];
const AUTHZ_MISSING_CREDENTIALS: &[ErrorKind] = &[AuthzMissingCredentials, Authz, Exception];
const AUTHZ_UNAUTHENTICATED_REQUEST: &[ErrorKind] =
    &[AuthzUnauthenticatedRequest, Authz, Exception];

const PATH_OVERCONSUMED: &[ErrorKind] = &[PathOverconsumed, Exception];

/// Fixed ancestor chain for `kind`, self first and root last.
pub fn lineage_of(kind: ErrorKind) -> &'static [ErrorKind] {
    match kind {
        Exception => EXCEPTION,
        InvalidArgument => INVALID_ARGUMENT,
        Debug => DEBUG,
        UnimplementedFeature => UNIMPLEMENTED_FEATURE,
        UnpreparedObject => UNPREPARED_OBJECT,
        Protocol => PROTOCOL,
        BadUriFormat => BAD_URI_FORMAT,
        UpstreamService => UPSTREAM_SERVICE,
        UnknownDatasource => UNKNOWN_DATASOURCE,
        CorruptData => CORRUPT_DATA,
        ResourceNotFound => RESOURCE_NOT_FOUND,
        UnknownResourceType => UNKNOWN_RESOURCE_TYPE,
        BadInput => BAD_INPUT,
        DuplicateResource => DUPLICATE_RESOURCE,
        UnidentifiedResource => UNIDENTIFIED_RESOURCE,
        UninitializedResource => UNINITIALIZED_RESOURCE,
        Authn => AUTHN,
        AuthnMissingCredentials => AUTHN_MISSING_CREDENTIALS,
        AuthnInvalidCredentials => AUTHN_INVALID_CREDENTIALS,
        Authz => AUTHZ,
        AuthzUnauthorizedUser => AUTHZ_UNAUTHORIZED_USER,
        AuthzMissingCredentials => AUTHZ_MISSING_CREDENTIALS,
        AuthzUnauthenticatedRequest => AUTHZ_UNAUTHENTICATED_REQUEST,
        PathOverconsumed => PATH_OVERCONSUMED,
    }
}

/// Closest kind that catches both `a` and `b`, if they share a family.
pub fn nearest_common_ancestor(a: ErrorKind, b: ErrorKind) -> Option<ErrorKind> {
    let other = lineage_of(b);
    lineage_of(a).iter().copied().find(|k| other.contains(k))
}
