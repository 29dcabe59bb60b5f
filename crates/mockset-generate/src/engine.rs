use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mockset_core::{SchemaSpec, SourceDataStore};

use crate::errors::GenerationError;
use crate::output::csv::{WriteStats, write_data_set};
use crate::registry::TypeRegistry;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where data set files are written.
    pub out_dir: PathBuf,
    /// Seed for the job's random source; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("csv_files"),
            seed: None,
        }
    }
}

/// Persisted record of a generation attempt.
///
/// `finished` is true once the attempt is over, success or not; `path` is
/// set iff generation succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSetFile {
    pub path: Option<PathBuf>,
    pub finished: bool,
}

/// Full result of a generation attempt.
///
/// The persisted record stays binary (finished flag plus nullable path);
/// the concrete failure cause is carried alongside so callers can tell the
/// error kinds apart.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub file: DataSetFile,
    pub rows_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub error: Option<GenerationError>,
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Collapse the outcome into the written path or the failure cause.
    pub fn into_result(self) -> Result<PathBuf, GenerationError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.file
            .path
            .ok_or_else(|| GenerationError::Io(std::io::Error::other("no output path recorded")))
    }
}

/// Drives row generation for a job and streams the delimited output file.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
    registry: TypeRegistry,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            registry: TypeRegistry::new(),
        }
    }

    /// Use a custom registry, e.g. one built over a non-default profile.
    pub fn with_registry(options: GenerateOptions, registry: TypeRegistry) -> Self {
        Self { options, registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Produce `rows_amount` rows for the schema against the store.
    ///
    /// Always returns an outcome whose file record has `finished = true`;
    /// on failure the partial output is removed, the path is left unset and
    /// the error is carried in the outcome.
    pub fn generate(
        &self,
        schema: &SchemaSpec,
        store: &SourceDataStore,
        rows_amount: u64,
    ) -> GenerationOutcome {
        let start = Instant::now();
        info!(
            schema = %schema.name,
            rows = rows_amount,
            "data set generation started"
        );

        let mut rng = self.job_rng();
        let result = self.try_generate(schema, store, rows_amount, rng.as_mut());
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok((path, stats)) => {
                info!(
                    schema = %schema.name,
                    path = %path.display(),
                    rows = stats.rows_written,
                    bytes = stats.bytes_written,
                    duration_ms,
                    "data set generation completed"
                );
                GenerationOutcome {
                    file: DataSetFile {
                        path: Some(path),
                        finished: true,
                    },
                    rows_written: stats.rows_written,
                    bytes_written: stats.bytes_written,
                    duration_ms,
                    error: None,
                }
            }
            Err(error) => {
                warn!(
                    schema = %schema.name,
                    error = %error,
                    duration_ms,
                    "data set generation failed"
                );
                GenerationOutcome {
                    file: DataSetFile {
                        path: None,
                        finished: true,
                    },
                    rows_written: 0,
                    bytes_written: 0,
                    duration_ms,
                    error: Some(error),
                }
            }
        }
    }

    fn try_generate(
        &self,
        schema: &SchemaSpec,
        store: &SourceDataStore,
        rows_amount: u64,
        rng: &mut dyn RngCore,
    ) -> Result<(PathBuf, WriteStats), GenerationError> {
        fs::create_dir_all(&self.options.out_dir)?;
        let (path, file) = reserve_output_path(&self.options.out_dir, &schema.name)?;

        match write_data_set(file, schema, &self.registry, store, rows_amount, rng) {
            Ok(stats) => Ok((path, stats)),
            Err(error) => {
                if let Err(cleanup) = fs::remove_file(&path) {
                    if cleanup.kind() != ErrorKind::NotFound {
                        warn!(
                            path = %path.display(),
                            error = %cleanup,
                            "failed to remove partial data set file"
                        );
                    }
                }
                Err(error)
            }
        }
    }

    fn job_rng(&self) -> Box<dyn RngCore> {
        match self.options.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(ChaCha8Rng::from_os_rng()),
        }
    }
}

/// Reserve a collision-free output path for a schema's data set.
///
/// Probes `{name}_data_set.csv`, then `{name}_data_set(n).csv` for
/// n = 1, 2, ... . Creation uses `create_new`, so a concurrent job that
/// wins a candidate name moves this one to the next instead of failing.
fn reserve_output_path(dir: &Path, display_name: &str) -> std::io::Result<(PathBuf, File)> {
    let mut attempt: u32 = 0;
    loop {
        let filename = if attempt == 0 {
            format!("{display_name}_data_set.csv")
        } else {
            format!("{display_name}_data_set({attempt}).csv")
        };
        let path = dir.join(filename);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(error) if error.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(error) => return Err(error),
        }
    }
}
