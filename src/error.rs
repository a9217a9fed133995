use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::PolicyValueKind;

/// Validation failures for a single policy setting declaration.
///
/// Every variant is a construction-time, non-retryable rejection of the
/// one declaration being processed. The message text is consumed
/// verbatim by existing tooling and must not drift.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum GpoError {
    #[error("Not a valid path: '{0}'")]
    NotAValidPath(String),

    #[error("Invalid value \"{0}\"")]
    InvalidScopeValue(String),

    #[error("Invalid value \"{0}\"")]
    InvalidEnsureValue(String),

    #[error("Value should be a {kind}, not '{1}'", kind = .0.expects())]
    ValueTypeMismatch(PolicyValueKind, String),
}
