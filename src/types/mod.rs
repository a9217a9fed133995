//! Data model types for policy setting declarations.
//!
//! Canonical string forms:
//! - Path: `admx_file::policy_id::valuename`, with an optional leading
//!   scope segment, e.g. `User::WordWheel::CustomSearch::InternetExtensionName`
//! - Scope: `machine` (the default) or `user`
//! - Ensure: `present` (the default), `absent`, or `deleted`
//!
//! Identity is case-insensitive: resolution folds segments to lower
//! case, while the declared path string is preserved verbatim as the
//! resource name.

mod ensure;
mod path;
mod resolved_key;
mod resource;
mod scope;
mod value;

pub use ensure::EnsureState;
pub use path::{CompositePath, PATH_DELIMITER};
pub use resolved_key::ResolvedKey;
pub use resource::Resource;
pub use scope::Scope;
pub use value::SuppliedValue;
