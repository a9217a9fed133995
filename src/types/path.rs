//! Composite path identifiers for policy settings.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GpoError;

/// Separator between path segments.
pub const PATH_DELIMITER: &str = "::";

/// The raw composite identifier naming a policy setting.
///
/// A well-formed path is `admx_file::policy_id::valuename`, optionally
/// prefixed with a scope segment, and every segment is non-empty.
/// Parsing preserves the original casing; resolution folds case later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct CompositePath(String);

impl CompositePath {
    /// The verbatim path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ordered path segments.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split(PATH_DELIMITER).collect()
    }

    /// The embedded scope token, when the path carries one.
    pub fn scope_segment(&self) -> Option<&str> {
        let segments = self.segments();
        (segments.len() == 4).then(|| segments[0])
    }

    /// The three identifying segments: admx file, policy id, value name.
    pub fn key_segments(&self) -> (&str, &str, &str) {
        let segments = self.segments();
        let tail = &segments[segments.len() - 3..];
        (tail[0], tail[1], tail[2])
    }
}

impl FromStr for CompositePath {
    type Err = GpoError;

    /// Accepts:
    /// - `windowsupdate::autoupdatecfg::allowmuupdateservice`
    /// - `User::WordWheel::CustomSearch::InternetExtensionName`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(PATH_DELIMITER).collect();
        if !(3..=4).contains(&segments.len()) || segments.iter().any(|segment| segment.is_empty())
        {
            return Err(GpoError::NotAValidPath(s.to_string()));
        }
        Ok(CompositePath(s.to_string()))
    }
}

impl TryFrom<String> for CompositePath {
    type Error = GpoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CompositePath> for String {
    fn from(path: CompositePath) -> Self {
        path.0
    }
}

impl Display for CompositePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
