#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use std::sync::Arc;

use cfx_errors::{
    BaseResource, Error, ErrorKind, Exception, Family, JsonApiError, Obstructed, Obstruction,
    ResourceIdentifier, nearest_common_ancestor,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct ObstructionCase {
    name: String,
    obstructions: Vec<Obstruction>,
    expected: serde_json::Value,
}

#[derive(Deserialize)]
struct InputErrorFixture {
    valid: serde_json::Value,
    invalid: Vec<InvalidCase>,
}

#[derive(Deserialize)]
struct InvalidCase {
    name: String,
    payload: serde_json::Value,
}

fn load_fixture<T: serde::de::DeserializeOwned>(filename: &str) -> T {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

// ──────────────────── Obstructions ────────────────────

#[test]
fn obstruction_rendering_from_fixture() {
    let cases: Vec<ObstructionCase> = load_fixture("obstructions.json");
    assert!(!cases.is_empty());

    for case in cases {
        let mut err = Exception::bad_input("fixture");
        for o in &case.obstructions {
            err.add_obstruction(o.clone());
        }
        assert_eq!(err.obstructions(), case.obstructions.as_slice(), "{}", case.name);

        let rendered = serde_json::to_value(err.json_api_obstructions()).unwrap();
        assert_eq!(rendered, case.expected, "{}", case.name);
    }
}

#[test]
fn obstruction_rendering_same_for_both_families() {
    let cases: Vec<ObstructionCase> = load_fixture("obstructions.json");

    for case in cases {
        let runtime = Exception::authz_unauthorized_user("fixture")
            .with_obstructions(case.obstructions.clone());
        let input = Exception::resource_not_found("fixture")
            .with_obstructions(case.obstructions.clone());
        assert_eq!(runtime.family(), Family::Runtime);
        assert_eq!(input.family(), Family::InvalidArgument);
        assert_eq!(
            runtime.json_api_obstructions(),
            input.json_api_obstructions(),
            "{}",
            case.name
        );
    }
}

#[test]
fn params_key_never_omitted() {
    let cases: Vec<ObstructionCase> = load_fixture("obstructions.json");

    for case in cases {
        let err = Exception::from(ErrorKind::Protocol).with_obstructions(case.obstructions);
        let rendered = serde_json::to_value(err.json_api_obstructions()).unwrap();
        for item in rendered.as_array().unwrap() {
            let attributes = item["attributes"].as_object().unwrap();
            assert!(attributes.contains_key("params"), "{}", case.name);
        }
    }
}

// ──────────────────── Input errors ────────────────────

#[test]
fn valid_input_errors_from_fixture() {
    let fixture: InputErrorFixture = load_fixture("input_errors.json");
    let mut err = Exception::bad_input("invalid account form");
    err.set_input_errors_from_value(&fixture.valid).unwrap();

    let errors = err.input_errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].title.as_deref(), Some("Missing field"));
    assert_eq!(
        errors[1].source.as_ref().unwrap().pointer.as_deref(),
        Some("/data/attributes/email")
    );
    assert_eq!(
        errors[2].source.as_ref().unwrap().parameter.as_deref(),
        Some("sort")
    );

    let reserialized = serde_json::to_value(errors).unwrap();
    assert_eq!(reserialized, fixture.valid);
}

#[test]
fn invalid_input_errors_from_fixture() {
    let fixture: InputErrorFixture = load_fixture("input_errors.json");
    let original = vec![JsonApiError::for_pointer("/data/id", "kept")];

    for case in fixture.invalid {
        let mut err = Exception::bad_input("fixture");
        err.set_input_errors(original.clone()).unwrap();

        match err.set_input_errors_from_value(&case.payload) {
            Err(Error::Consistency { .. }) => {}
            Err(other) => panic!("{}: unexpected error {other}", case.name),
            Ok(_) => panic!("{}: payload accepted", case.name),
        }
        assert_eq!(err.input_errors(), original.as_slice(), "{}", case.name);
    }
}

// ──────────────────── Duplicate resources ────────────────────

#[derive(Debug)]
struct Investor {
    id: String,
    email: String,
}

impl BaseResource for Investor {
    fn resource_type(&self) -> &str {
        "investors"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[test]
fn duplicate_resource_holds_caller_resource() {
    let existing = Arc::new(Investor {
        id: "inv-1".to_string(),
        email: "a@example.com".to_string(),
    });

    let mut err = Exception::duplicate_resource_conflict("email already registered");
    assert!(err.duplicate_resource().is_none());

    let shared: Arc<dyn BaseResource> = existing.clone();
    err.set_duplicate_resource(shared).unwrap();
    assert_eq!(Arc::strong_count(&existing), 2);

    let stored = err.duplicate_resource().unwrap();
    assert_eq!(
        ResourceIdentifier::of(&**stored),
        ResourceIdentifier::new("investors", "inv-1")
    );
    assert_eq!(existing.email, "a@example.com");

    drop(err);
    assert_eq!(Arc::strong_count(&existing), 1);
}

// ──────────────────── Catch by kind ────────────────────

#[test]
fn catch_table() {
    let table: &[(ErrorKind, &[ErrorKind])] = &[
        (ErrorKind::BadUriFormat, &[ErrorKind::Protocol, ErrorKind::Exception]),
        (ErrorKind::AuthnMissingCredentials, &[ErrorKind::Authn, ErrorKind::Exception]),
        (ErrorKind::AuthnInvalidCredentials, &[ErrorKind::Authn, ErrorKind::Exception]),
        (ErrorKind::AuthzUnauthorizedUser, &[ErrorKind::Authz, ErrorKind::Exception]),
        (ErrorKind::AuthzMissingCredentials, &[ErrorKind::Authz, ErrorKind::Exception]),
        (
            ErrorKind::AuthzUnauthenticatedRequest,
            &[ErrorKind::Authz, ErrorKind::Exception],
        ),
        (ErrorKind::ResourceNotFound, &[ErrorKind::InvalidArgument]),
        (ErrorKind::BadInput, &[ErrorKind::InvalidArgument]),
        (ErrorKind::DuplicateResource, &[ErrorKind::Exception]),
        (ErrorKind::PathOverconsumed, &[ErrorKind::Exception]),
    ];

    for (kind, ancestors) in table {
        let err = Exception::from(*kind);
        assert!(err.is_a(*kind), "{kind}");
        for ancestor in *ancestors {
            assert!(err.is_a(*ancestor), "{kind} should be caught as {ancestor}");
        }
        let other_root = match kind.family() {
            Family::Runtime => ErrorKind::InvalidArgument,
            Family::InvalidArgument => ErrorKind::Exception,
        };
        assert!(!err.is_a(other_root), "{kind} leaked into {other_root}");
    }
}

#[test]
fn boundary_dispatch_by_family() {
    fn status_for(err: &Exception) -> u16 {
        if err.is_a(ErrorKind::ResourceNotFound) {
            404
        } else if err.is_input_error() {
            400
        } else if err.is_a(ErrorKind::Authn) {
            401
        } else if err.is_a(ErrorKind::Authz) {
            403
        } else {
            500
        }
    }

    assert_eq!(status_for(&Exception::resource_not_found("x")), 404);
    assert_eq!(status_for(&Exception::bad_input("x")), 400);
    assert_eq!(status_for(&Exception::authn_invalid_credentials("x")), 401);
    assert_eq!(status_for(&Exception::authz_unauthenticated_request("x")), 403);
    assert_eq!(status_for(&Exception::corrupt_data("x")), 500);
    assert_eq!(
        nearest_common_ancestor(ErrorKind::BadInput, ErrorKind::ResourceNotFound),
        Some(ErrorKind::InvalidArgument)
    );
}
