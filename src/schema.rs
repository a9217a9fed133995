//! Expected value shapes for policy settings.
//!
//! Most administrative-template settings take a single string of
//! registry data. A small set of settings (the advanced-firewall rule
//! collections) take a mapping of value names to rule strings instead.
//! The table below registers those mapping-valued settings, keyed by the
//! `admx_file::policy_id` form; any key not present validates as a
//! string-valued setting. The table is initialized once and never
//! mutated, so concurrent lookups need no coordination.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::types::ResolvedKey;

/// The shape of value a policy setting accepts.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum PolicyValueKind {
    /// A single string of registry data.
    StringValue,
    /// A mapping of value names to string data.
    MappingValue,
}

impl PolicyValueKind {
    /// Noun used when reporting a shape mismatch.
    pub(crate) fn expects(&self) -> &'static str {
        match self {
            PolicyValueKind::StringValue => "string",
            PolicyValueKind::MappingValue => "hash",
        }
    }
}

/// Settings that take a mapping of value names to data.
static MAPPING_VALUED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "advancedfirewall::wf_firewallrules",
        "advancedfirewall::wf_consecrules",
        "advancedfirewall::wf_authsets",
    ])
});

/// Look up the value shape for a resolved policy key.
///
/// Unknown keys validate as [`PolicyValueKind::StringValue`]; the table
/// only registers the exceptions.
pub fn expected_kind(key: &ResolvedKey) -> PolicyValueKind {
    let schema_key = format!("{}::{}", key.admx_file(), key.policy_id());
    if MAPPING_VALUED.contains(schema_key.as_str()) {
        PolicyValueKind::MappingValue
    } else {
        PolicyValueKind::StringValue
    }
}
