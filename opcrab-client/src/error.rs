use std::fmt;

use opcrab_types::{StatusCode, ValueError};
use thiserror::Error;

/// A non-good protocol status returned by the stack.
///
/// Carries the numeric code; the machine name resolves through
/// [StatusCode::name] and both appear in the display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusError {
    pub code: StatusCode,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.0, self.code.name())
    }
}

impl std::error::Error for StatusError {}

impl StatusError {
    pub(crate) fn check(code: StatusCode) -> Result<(), StatusError> {
        if code.is_good() {
            Ok(())
        } else {
            Err(StatusError { code })
        }
    }
}

/// Error type for client operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Host-supplied arguments were malformed. Detected before any network
    /// call and never retried.
    #[error("invalid arguments: {0}")]
    InvalidArgument(&'static str),
    /// The stack reported a non-good status. Surfaced verbatim; this layer
    /// performs no retries.
    #[error(transparent)]
    Status(#[from] StatusError),
    /// The value on the wire did not match the requested kind or shape.
    #[error(transparent)]
    Value(#[from] ValueError),
}
