use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// Any of these aborts the current job's write loop; the orchestrator
/// removes partial output and surfaces the error in the job outcome.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A column references a semantic type with no registered routine.
    #[error("unknown data type: {0}")]
    UnknownType(String),
    /// A bounded type is missing one or both of its limits.
    #[error("column '{column}': both limits (minimal and maximal) must be set")]
    MissingBounds { column: String },
    /// A source-driven type has no non-empty list for a required key.
    #[error("missing or empty source data for key '{0}'")]
    MissingSourceData(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
