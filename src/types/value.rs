//! Supplied values for policy settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::GpoError;
use crate::schema::PolicyValueKind;

/// A value to assign to a policy setting, after shape validation.
///
/// Validity is relative to the setting being written, not intrinsic to
/// the value: the same mapping that satisfies a rule-collection setting
/// is a mismatch for a string-valued one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SuppliedValue {
    /// A single string of registry data.
    Text(String),
    /// A mapping of value names to string data.
    Mapping(BTreeMap<String, String>),
}

impl SuppliedValue {
    /// The shape of this value.
    pub fn kind(&self) -> PolicyValueKind {
        match self {
            SuppliedValue::Text(_) => PolicyValueKind::StringValue,
            SuppliedValue::Mapping(_) => PolicyValueKind::MappingValue,
        }
    }

    /// Check a loose value against the expected shape for its setting.
    ///
    /// A string-valued setting accepts only a JSON string; a
    /// mapping-valued setting accepts only an object whose entries are
    /// all strings. Anything else is a [`GpoError::ValueTypeMismatch`]
    /// carrying the rendering of the offending value.
    pub fn from_value(raw: &Value, expected: PolicyValueKind) -> Result<Self, GpoError> {
        match expected {
            PolicyValueKind::StringValue => match raw {
                Value::String(text) => Ok(SuppliedValue::Text(text.clone())),
                other => Err(GpoError::ValueTypeMismatch(expected, repr(other))),
            },
            PolicyValueKind::MappingValue => match raw {
                Value::Object(entries) => {
                    let mut mapping = BTreeMap::new();
                    for (name, data) in entries {
                        match data {
                            Value::String(text) => {
                                mapping.insert(name.clone(), text.clone());
                            }
                            _ => return Err(GpoError::ValueTypeMismatch(expected, repr(raw))),
                        }
                    }
                    Ok(SuppliedValue::Mapping(mapping))
                }
                other => Err(GpoError::ValueTypeMismatch(expected, repr(other))),
            },
        }
    }
}

/// Render a loose value for a mismatch message. Strings render bare,
/// everything else as its compact JSON text.
fn repr(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
