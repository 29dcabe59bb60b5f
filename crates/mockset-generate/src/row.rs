use std::collections::HashMap;

use rand::RngCore;

use crate::config::GeneratorProfile;
use crate::resolver::BoundRoutine;

/// One column bound to a ready-to-call value producer.
///
/// Each invocation independently draws fresh randomness; there is no
/// memoization and no state carried between calls.
#[derive(Debug, Clone)]
pub struct CellGenerator {
    routine: BoundRoutine,
}

impl CellGenerator {
    pub fn new(routine: BoundRoutine) -> Self {
        Self { routine }
    }

    pub fn generate(&self, profile: &GeneratorProfile, rng: &mut dyn RngCore) -> String {
        match &self.routine {
            BoundRoutine::Plain(routine) => routine(profile, rng),
            BoundRoutine::Bounded {
                routine,
                minimal,
                maximal,
            } => routine(profile, *minimal, *maximal, rng),
            BoundRoutine::SourceDriven { routine, lists } => routine(profile, lists, rng),
        }
    }
}

/// Produces one row per call as a column-name-to-value mapping.
///
/// Cells are invoked in header order, each exactly once per row.
#[derive(Debug, Clone)]
pub struct RowGenerator {
    cells: Vec<(String, CellGenerator)>,
}

impl RowGenerator {
    pub fn new(cells: Vec<(String, CellGenerator)>) -> Self {
        Self { cells }
    }

    /// Column names in header order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn generate(
        &self,
        profile: &GeneratorProfile,
        rng: &mut dyn RngCore,
    ) -> HashMap<String, String> {
        self.cells
            .iter()
            .map(|(name, cell)| (name.clone(), cell.generate(profile, rng)))
            .collect()
    }
}
