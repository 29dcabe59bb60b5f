//! Schema-driven synthetic data generation engine for mockset.
//!
//! This crate consumes a `SchemaSpec` plus a `SourceDataStore` and streams
//! delimited data set files with collision-free naming and partial-failure
//! cleanup.

pub mod config;
pub mod engine;
pub mod errors;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod routines;
pub mod row;

pub use config::GeneratorProfile;
pub use engine::{DataSetFile, GenerateOptions, GenerationEngine, GenerationOutcome};
pub use errors::GenerationError;
pub use registry::{RoutineKind, SemanticType, TypeRegistry};
pub use resolver::{BoundRoutine, bind_routine};
pub use row::{CellGenerator, RowGenerator};
