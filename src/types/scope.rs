//! Policy scope: machine-level or user-level.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::error::GpoError;

/// Where a policy setting applies.
///
/// The default when neither an explicit literal nor an embedded path
/// segment selects a scope is [`Scope::Machine`].
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
pub enum Scope {
    #[default]
    Machine,
    User,
}

impl Scope {
    /// Validate an explicit scope literal supplied by the caller.
    ///
    /// Only the exact literals `machine` and `user` are accepted.
    pub fn parse_literal(literal: &str) -> Result<Self, GpoError> {
        literal
            .parse()
            .map_err(|_| GpoError::InvalidScopeValue(literal.to_string()))
    }

    /// Interpret an embedded leading path segment as a scope token.
    ///
    /// Matching is case-insensitive. The `both` token selects the user
    /// scope. Unrecognized tokens yield `None`; a four-segment path is
    /// only legal when its leading token is recognized here.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        if segment.eq_ignore_ascii_case("user") || segment.eq_ignore_ascii_case("both") {
            Some(Scope::User)
        } else if segment.eq_ignore_ascii_case("machine") {
            Some(Scope::Machine)
        } else {
            None
        }
    }
}
