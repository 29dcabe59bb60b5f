use mockset_core::SourceDataStore;

use crate::errors::GenerationError;
use crate::registry::{BoundedRoutine, PlainRoutine, RoutineKind, SemanticType, SourceRoutine};

/// A routine bound to its validated, fully resolved arguments.
///
/// Once built, no further validation occurs downstream; every invocation
/// applies the same arguments to the routine with fresh randomness.
#[derive(Debug, Clone)]
pub enum BoundRoutine {
    Plain(PlainRoutine),
    Bounded {
        routine: BoundedRoutine,
        minimal: i64,
        maximal: i64,
    },
    SourceDriven {
        routine: SourceRoutine,
        lists: Vec<Vec<String>>,
    },
}

/// Validate a column's constraints against its type's requirements and
/// assemble the routine arguments.
///
/// Bounded types need both limits; limits supplied to other types are
/// ignored. Source-driven types need a non-empty list for every declared
/// key, copied out of the store in key order. Absence of source data is a
/// generation-time error by design, not a schema-validation one.
pub fn bind_routine(
    semantic: &SemanticType,
    column_name: &str,
    minimal: Option<i64>,
    maximal: Option<i64>,
    store: &SourceDataStore,
) -> Result<BoundRoutine, GenerationError> {
    match semantic.kind() {
        RoutineKind::Plain(routine) => Ok(BoundRoutine::Plain(routine)),
        RoutineKind::Bounded(routine) => match (minimal, maximal) {
            (Some(minimal), Some(maximal)) => Ok(BoundRoutine::Bounded {
                routine,
                minimal,
                maximal,
            }),
            _ => Err(GenerationError::MissingBounds {
                column: column_name.to_string(),
            }),
        },
        RoutineKind::SourceDriven(routine) => {
            let mut lists = Vec::with_capacity(semantic.source_keys().len());
            for key in semantic.source_keys() {
                let values = store
                    .get(key)
                    .filter(|values| !values.is_empty())
                    .ok_or_else(|| GenerationError::MissingSourceData(key.clone()))?;
                lists.push(values.to_vec());
            }
            Ok(BoundRoutine::SourceDriven { routine, lists })
        }
    }
}
