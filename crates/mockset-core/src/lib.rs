//! Core contracts for mockset.
//!
//! This crate defines the schema types describing a data set to generate,
//! the source-data store consumed by categorical generators, and the
//! validation helpers shared between the engine and any surrounding shell.

pub mod error;
pub mod schema;
pub mod source;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use schema::{ColumnSpec, SchemaSpec};
pub use source::SourceDataStore;
pub use types::DataType;
pub use validation::validate_schema;
