use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::GpoError;
use crate::schema;
use crate::types::{CompositePath, EnsureState, Resource, ResolvedKey, Scope, SuppliedValue};

use tracing::debug;

/// A declarative policy setting block, as supplied by the caller.
///
/// Only `title` is required. Scope, value and ensure arrive as loose
/// literals and are validated into their typed forms by
/// [`Declaration::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Declaration {
    /// The composite path naming the setting.
    pub title: String,
    /// Explicit scope literal, `machine` or `user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// The value to assign: a string, or a mapping of value names to strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Desired lifecycle state: `present`, `absent` or `deleted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensure: Option<String>,
}

impl Declaration {
    /// Start a declaration for the given path.
    pub fn new(title: impl Into<String>) -> Self {
        Declaration {
            title: title.into(),
            scope: None,
            value: None,
            ensure: None,
        }
    }

    /// Set an explicit scope literal.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the value to assign.
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the desired lifecycle state.
    pub fn with_ensure(mut self, ensure: impl Into<String>) -> Self {
        self.ensure = Some(ensure.into());
        self
    }

    /// Validate the declaration into a typed [`Resource`].
    ///
    /// Fails fast on the first error; no partially resolved resource is
    /// ever produced. Validation is pure and synchronous: any number of
    /// declarations may be validated concurrently.
    pub fn validate(&self) -> Result<Resource, GpoError> {
        let path: CompositePath = self.title.parse()?;

        let explicit = match self.scope.as_deref() {
            Some(literal) => Some(Scope::parse_literal(literal)?),
            None => None,
        };
        let scope = resolve_scope(&path, explicit)?;
        let key = ResolvedKey::from_path(&path);

        debug!(
            event = "Declaration",
            phase = "Resolved",
            name = path.as_str(),
            scope = %scope,
            key = %key
        );

        let ensure = match self.ensure.as_deref() {
            Some(literal) => EnsureState::parse_literal(literal)?,
            None => EnsureState::default(),
        };

        let value = match &self.value {
            Some(raw) => Some(SuppliedValue::from_value(
                raw,
                schema::expected_kind(&key),
            )?),
            None => None,
        };

        debug!(
            event = "Declaration",
            phase = "Validated",
            name = path.as_str(),
            ensure = %ensure
        );

        Ok(Resource::new(path, scope, key, value, ensure))
    }
}

/// Decide the effective scope for a parsed path.
///
/// An embedded leading segment wins whenever the path carries one; the
/// explicit literal has already been validated by this point, so a bad
/// literal errors even alongside an embedded segment. A three-segment
/// path with no explicit literal defaults to the machine scope.
fn resolve_scope(path: &CompositePath, explicit: Option<Scope>) -> Result<Scope, GpoError> {
    if let Some(segment) = path.scope_segment() {
        return Scope::from_path_segment(segment)
            .ok_or_else(|| GpoError::NotAValidPath(path.as_str().to_string()));
    }
    Ok(explicit.unwrap_or_default())
}

#[cfg(test)]
mod tests;
