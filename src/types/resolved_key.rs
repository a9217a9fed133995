//! Resolved policy identity keys.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::path::{CompositePath, PATH_DELIMITER};

/// The lower-cased identity tuple for a policy setting.
///
/// Together with the scope this identifies the setting fully: the
/// administrative-template file, the policy within it, and the value
/// name the setting writes. All three fields are non-empty whenever the
/// originating path parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct ResolvedKey {
    admx_file: String,
    policy_id: String,
    setting_valuename: String,
}

impl ResolvedKey {
    /// Resolve the identity keys from a parsed path.
    ///
    /// Identity is case-insensitive, so each segment is folded to lower
    /// case. Resolution is deterministic: the same path always yields
    /// the same key.
    pub fn from_path(path: &CompositePath) -> Self {
        let (admx_file, policy_id, setting_valuename) = path.key_segments();
        ResolvedKey {
            admx_file: admx_file.to_lowercase(),
            policy_id: policy_id.to_lowercase(),
            setting_valuename: setting_valuename.to_lowercase(),
        }
    }

    /// The administrative-template file the policy lives in.
    pub fn admx_file(&self) -> &str {
        &self.admx_file
    }

    /// The policy identifier within the template file.
    pub fn policy_id(&self) -> &str {
        &self.policy_id
    }

    /// The registry value name the setting writes.
    pub fn setting_valuename(&self) -> &str {
        &self.setting_valuename
    }
}

impl Display for ResolvedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}",
            [&self.admx_file, &self.policy_id, &self.setting_valuename]
                .iter()
                .join(PATH_DELIMITER)
        )
    }
}
