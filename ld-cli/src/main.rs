//! CSV-to-LD Converter CLI
//!
//! Command-line front end for the ld-encoder library. It owns the
//! external collaborator roles the library deliberately avoids: CSV
//! ingestion, session configuration, output-path policy and the
//! end-of-run summary. Only two conditions are fatal: the input file
//! does not exist, or the output destination cannot be prepared.
//! Skipped channels and defaulted fields still exit 0.

use anyhow::{bail, Context, Result};
use clap::Parser;
use ld_encoder::{LdFileWriter, Pipeline, PipelineConfig};
use std::path::{Path, PathBuf};

mod config;
mod ingest;

/// Output directory, created next to the working directory if absent
const OUTPUT_DIR: &str = "output";

/// Convert telemetry CSV files to LD binary artifacts
#[derive(Parser, Debug)]
#[command(name = "ld-cli")]
#[command(about = "Convert telemetry CSV files to LD binary artifacts", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the CSV file to convert
    #[arg(value_name = "FILE")]
    csv: PathBuf,

    /// Maximum number of rows to convert (default: all)
    #[arg(short = 's', long = "samples", value_name = "COUNT")]
    samples: Option<usize>,

    /// Path to a session metadata file (session.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    log::info!("CSV-to-LD converter v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using encoder library v{}", ld_encoder::VERSION);

    if !args.csv.exists() {
        bail!("CSV file not found: {:?}", args.csv);
    }

    let session = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::SessionConfig::default(),
    };

    // Fail before reading anything if the artifact has nowhere to go
    let out_path = prepare_output_path(&args.csv)?;

    if !args.quiet {
        println!("Converting {:?}", args.csv);
    }

    let (header, rows) = ingest::read_rows(&args.csv, args.samples)?;
    log::debug!("CSV header: {} columns: {:?}", header.len(), header);
    if !args.quiet {
        println!("Read {} rows", rows.len());
    }

    let specs = ld_encoder::specs::stock_channel_specs();
    let metadata = session.metadata(specs.len());

    let mut pipeline_config = PipelineConfig::new();
    if let Some(cap) = args.samples {
        pipeline_config = pipeline_config.with_max_rows(cap);
    }

    let pipeline = Pipeline::new(pipeline_config);
    let mut writer = LdFileWriter::new(&out_path);
    let summary = pipeline.run(&specs, &rows, &metadata, &mut writer)?;

    if !args.quiet {
        let size_mb = summary.bytes_written as f64 / (1024.0 * 1024.0);
        println!("\nConversion complete:");
        println!("  Sample rate:      {} Hz", summary.sample_rate);
        println!(
            "  Channels:         {} accepted, {} skipped",
            summary.channels_accepted, summary.channels_skipped
        );
        println!("  Rows converted:   {}", summary.rows_encoded);
        println!("  Fields defaulted: {}", summary.fields_defaulted);
        println!("  Output:           {:?} ({:.1} MB)", out_path, size_mb);
    }

    Ok(())
}

/// Derive the artifact path from the input filename and make sure the
/// output directory exists. Failure here is fatal - it is the only way
/// the writer can be unavailable.
fn prepare_output_path(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .context("Input path has no file name")?;

    let out_dir = PathBuf::from(OUTPUT_DIR);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let mut file_name = stem.to_os_string();
    file_name.push(".ld");
    Ok(out_dir.join(file_name))
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_uses_input_stem() {
        let path = prepare_output_path(Path::new("logs/run_42.csv")).unwrap();
        assert_eq!(path, Path::new("output/run_42.ld"));
    }

    #[test]
    fn test_output_path_rejects_bare_root() {
        assert!(prepare_output_path(Path::new("/")).is_err());
    }
}
