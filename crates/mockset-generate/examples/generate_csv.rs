use std::env;
use std::path::PathBuf;

use mockset_core::{SchemaSpec, SourceDataStore, validate_schema};
use mockset_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut schema_path: Option<PathBuf> = None;
    let mut source_path: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut rows: u64 = 10;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => schema_path = args.next().map(PathBuf::from),
            "--source" => source_path = args.next().map(PathBuf::from),
            "--out" => out_dir = args.next().map(PathBuf::from),
            "--rows" => {
                rows = args
                    .next()
                    .ok_or("missing value for --rows")?
                    .parse::<u64>()?;
            }
            _ => return Err("unexpected argument".into()),
        }
    }

    let schema_path = schema_path.ok_or("missing --schema path")?;
    let schema_json = std::fs::read_to_string(&schema_path)?;
    let schema: SchemaSpec = serde_json::from_str(&schema_json)?;
    validate_schema(&schema)?;

    let store = match source_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(&path)?)?,
        None => SourceDataStore::new(),
    };

    let mut options = GenerateOptions::default();
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }

    let engine = GenerationEngine::new(options);
    let path = engine.generate(&schema, &store, rows).into_result()?;
    println!("data_set={}", path.display());
    Ok(())
}
