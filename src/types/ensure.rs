//! Desired lifecycle state for a policy setting.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::error::GpoError;

/// The desired lifecycle state of a declared setting.
///
/// `Present` applies the value, `Absent` removes the value, `Deleted`
/// removes the value and its containing key. The external applier gives
/// these literals meaning; the engine only validates and carries them.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    ToSchema,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EnsureState {
    #[default]
    Present,
    Absent,
    Deleted,
}

impl EnsureState {
    /// Validate an ensure literal supplied by the caller.
    pub fn parse_literal(literal: &str) -> Result<Self, GpoError> {
        literal
            .parse()
            .map_err(|_| GpoError::InvalidEnsureValue(literal.to_string()))
    }
}
