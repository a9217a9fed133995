//! The validated resource record.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ensure::EnsureState;
use super::path::{CompositePath, PATH_DELIMITER};
use super::resolved_key::ResolvedKey;
use super::scope::Scope;
use super::value::SuppliedValue;

/// A fully validated policy setting declaration.
///
/// Built by [`Declaration::validate`](crate::Declaration::validate);
/// immutable afterwards. The declared path is preserved verbatim as the
/// name, alongside the resolved, lower-cased identity keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Resource {
    name: CompositePath,
    scope: Scope,
    #[serde(flatten)]
    key: ResolvedKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<SuppliedValue>,
    ensure: EnsureState,
}

impl Resource {
    pub(crate) fn new(
        name: CompositePath,
        scope: Scope,
        key: ResolvedKey,
        value: Option<SuppliedValue>,
        ensure: EnsureState,
    ) -> Self {
        Resource {
            name,
            scope,
            key,
            value,
            ensure,
        }
    }

    /// The declared path, verbatim.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The effective scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The resolved identity keys.
    pub fn key(&self) -> &ResolvedKey {
        &self.key
    }

    /// The administrative-template file the policy lives in.
    pub fn admx_file(&self) -> &str {
        self.key.admx_file()
    }

    /// The policy identifier within the template file.
    pub fn policy_id(&self) -> &str {
        self.key.policy_id()
    }

    /// The registry value name the setting writes.
    pub fn setting_valuename(&self) -> &str {
        self.key.setting_valuename()
    }

    /// The validated value, when one was declared.
    pub fn value(&self) -> Option<&SuppliedValue> {
        self.value.as_ref()
    }

    /// The desired lifecycle state.
    pub fn ensure(&self) -> EnsureState {
        self.ensure
    }

    /// Canonical identity, scope included: `scope::admx::policy::valuename`.
    pub fn title(&self) -> String {
        format!("{}{}{}", self.scope, PATH_DELIMITER, self.key)
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.title())
    }
}
