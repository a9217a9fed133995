// src/lib.rs
pub use engine::Declaration;
pub use error::GpoError;
pub use schema::{PolicyValueKind, expected_kind};
pub use types::{
    CompositePath, EnsureState, PATH_DELIMITER, Resource, ResolvedKey, Scope, SuppliedValue,
};

mod engine;
mod error;
mod schema;
mod types;
