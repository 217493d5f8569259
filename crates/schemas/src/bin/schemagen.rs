//! Schema generator
//!
//! Writes the JSON Schema documents for the inventory records.
//!
//! ```bash
//! schemagen --output-dir jsonschemas
//! schemagen --format yaml --output-dir schemas-yaml
//! schemagen --list
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use schemas::generate::{self, OutputFormat};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(about = "Generate JSON Schema documents for the inventory records", long_about = None)]
struct Args {
    /// Directory the documents are written to
    #[arg(short, long, env = "SCHEMA_OUTPUT_DIR", default_value = "jsonschemas")]
    output_dir: PathBuf,

    /// Output serialization
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print the document names and exit without writing
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_target(false).with_env_filter(filter).init();

    let args = Args::parse();

    if args.list {
        for document in generate::catalog() {
            println!("{}", document.file_name(args.format));
        }
        return Ok(());
    }

    info!("Generating schemas into {}", args.output_dir.display());
    let written = generate::write_schemas(&args.output_dir, args.format)
        .with_context(|| format!("failed to write schemas to {}", args.output_dir.display()))?;
    info!("Wrote {} schema documents", written.len());

    Ok(())
}
