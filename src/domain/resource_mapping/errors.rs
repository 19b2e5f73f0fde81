// src/domain/resource_mapping/errors.rs
//! Classified failures raised by user resource mapping backends.
//!
//! Every constructor is pure: the same input always yields the same kind and
//! message. Causes are interpolated with their `Display` text and kept as the
//! error source.

use crate::domain::{
    errors::{BoxError, ClassifiedError, ErrorKind},
    id::PlatformId,
};

/// Operation label attached to every mapping error.
pub const URM_OP: &str = "kv/userResourceMapping";

/// The service was handed an ID it could not decode.
pub fn invalid_urm_id() -> ClassifiedError {
    ClassifiedError::new(
        ErrorKind::Invalid,
        "provided user resource mapping ID has invalid format",
    )
    .with_op(URM_OP)
}

pub fn urm_not_found() -> ClassifiedError {
    ClassifiedError::new(ErrorKind::NotFound, "user to resource mapping not found").with_op(URM_OP)
}

/// The backing store could not be reached.
pub fn unavailable_urm_service(cause: impl Into<BoxError>) -> ClassifiedError {
    with_cause(
        ErrorKind::Internal,
        "Unable to connect to resource mapping service. Please try again; Err: ",
        cause.into(),
    )
}

/// Stored bytes could not be decoded back into a mapping.
pub fn corrupt_urm(cause: impl Into<BoxError>) -> ClassifiedError {
    with_cause(
        ErrorKind::Internal,
        "Unknown internal user resource mapping data error; Err: ",
        cause.into(),
    )
}

/// A mapping could not be encoded as JSON.
pub fn unprocessable_mapping(cause: impl Into<BoxError>) -> ClassifiedError {
    with_cause(
        ErrorKind::UnprocessableEntity,
        "unable to convert mapping of user to resource into JSON; Err ",
        cause.into(),
    )
}

/// The user already holds a mapping for the resource. Classified as internal,
/// there is no dedicated conflict kind.
pub fn non_unique_mapping(user_id: PlatformId) -> ClassifiedError {
    ClassifiedError::new(
        ErrorKind::Internal,
        format!(
            "Unexpected error when assigning user to a resource: mapping for user {user_id} already exists"
        ),
    )
    .with_op(URM_OP)
}

fn with_cause(kind: ErrorKind, prefix: &str, cause: BoxError) -> ClassifiedError {
    ClassifiedError::new(kind, format!("{prefix}{cause}"))
        .with_op(URM_OP)
        .with_cause(cause)
}
