use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mockset_core::{Error as CoreError, SchemaSpec, SourceDataStore, validate_schema};
use mockset_generate::{
    GenerateOptions, GenerationEngine, GenerationError, GeneratorProfile, TypeRegistry,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Parser, Debug)]
#[command(name = "mockset", version, about = "Schema-driven fake data set generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a delimited data set file from a schema.
    Generate(GenerateArgs),
    /// Validate a schema file without generating anything.
    Validate(ValidateArgs),
    /// List the registered semantic types.
    Types,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the schema JSON file.
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
    /// Source data JSON file(s); later files merge into earlier ones.
    #[arg(long, value_name = "FILE")]
    source: Vec<PathBuf>,
    /// Number of rows to generate.
    #[arg(long)]
    rows: u64,
    /// Output directory for data set files.
    #[arg(long, default_value = "csv_files")]
    out_dir: PathBuf,
    /// Seed for the job's random source.
    #[arg(long)]
    seed: Option<u64>,
    /// Generator profile JSON overriding the built-in constants.
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,
    /// Overwrite source keys already loaded from an earlier file.
    #[arg(short, long, default_value_t = false)]
    force: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Path to the schema JSON file.
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Validate(args) => run_validate(args),
        Command::Types => run_types(),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let schema = load_schema(&args.schema)?;
    let store = load_sources(&args.source, args.force)?;

    let registry = match args.profile {
        Some(path) => {
            let profile: GeneratorProfile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            TypeRegistry::with_profile(profile)
        }
        None => TypeRegistry::new(),
    };

    let options = GenerateOptions {
        out_dir: args.out_dir,
        seed: args.seed,
    };
    let engine = GenerationEngine::with_registry(options, registry);
    let path = engine.generate(&schema, &store, args.rows).into_result()?;
    println!("{}", path.display());
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let schema = load_schema(&args.schema)?;
    println!(
        "schema '{}' is valid ({} columns)",
        schema.name,
        schema.columns.len()
    );
    Ok(())
}

fn run_types() -> Result<(), CliError> {
    let registry = TypeRegistry::new();
    for name in registry.type_names() {
        let semantic = registry.resolve(name)?;
        let requirement = if semantic.has_bounds() {
            "limits".to_string()
        } else if semantic.source_keys().is_empty() {
            "-".to_string()
        } else {
            format!("source: {}", semantic.source_keys().join(", "))
        };
        println!("{name}\t{requirement}");
    }
    Ok(())
}

fn load_schema(path: &Path) -> Result<SchemaSpec, CliError> {
    let schema: SchemaSpec = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    let schema = schema.normalized();
    validate_schema(&schema)?;
    Ok(schema)
}

fn load_sources(paths: &[PathBuf], force: bool) -> Result<SourceDataStore, CliError> {
    for path in paths {
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            return Err(CliError::InvalidInput(format!(
                "only json files are acceptable, not {}",
                path.display()
            )));
        }
    }

    let mut store = SourceDataStore::new();
    for path in paths {
        let loaded: SourceDataStore = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        loaded.validate()?;
        let skipped = store.merge(loaded, force)?;
        for key in skipped {
            info!(
                key = %key,
                file = %path.display(),
                "source data for key already loaded; use --force to overwrite"
            );
        }
    }
    Ok(store)
}
