// src/domain/errors.rs
use std::{error::Error as StdError, fmt};
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

pub type DomainResult<T> = Result<T, ClassifiedError>;

/// Category callers branch on. Message text is for humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Invalid,
    NotFound,
    Internal,
    UnprocessableEntity,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Invalid => "invalid",
            ErrorKind::NotFound => "not found",
            ErrorKind::Internal => "internal error",
            ErrorKind::UnprocessableEntity => "unprocessable entity",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error carrying a [`ErrorKind`], an operator-facing message, the
/// subsystem that produced it and, optionally, the underlying cause.
///
/// Fields are private: once built the value is never mutated. The builder
/// methods consume `self` and are meant to be chained at construction time.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    kind: ErrorKind,
    message: String,
    op: Option<&'static str>,
    #[source]
    cause: Option<BoxError>,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            op: None,
            cause: None,
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Invalid, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, msg)
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, msg)
    }

    pub fn with_op(mut self, op: &'static str) -> Self {
        self.op = Some(op);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn op(&self) -> Option<&'static str> {
        self.op
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Control-flow comparison. Two errors of the same kind are interchangeable
    /// for branching even when their messages differ.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}
