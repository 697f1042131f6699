//! Process command - extract data from a single statement file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardstmt_core::api::{handle_upload, parse_text, UploadRequest};
use cardstmt_core::{ParsedStatement, StatementConfig};

use super::output::{format_statement, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF statement or pre-extracted .txt)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report fields that could not be extracted
    #[arg(long)]
    show_missing: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Extracting statement...");

    let result = process_file(&args.input, &config);
    pb.finish_and_clear();
    let statement = result?;

    if args.show_missing {
        let missing = statement.missing_fields();
        if missing.is_empty() {
            eprintln!("{} All fields extracted", style("✓").green());
        } else {
            eprintln!("{}", style("Missing fields:").yellow());
            for field in &missing {
                eprintln!("  - {}", field);
            }
        }
    }

    let output = format_statement(&statement, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Extract a statement from a PDF or a pre-extracted text file.
pub fn process_file(path: &Path, config: &StatementConfig) -> anyhow::Result<ParsedStatement> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let statement = match extension.as_str() {
        "txt" => {
            let text = fs::read_to_string(path)?;
            parse_text(&text, config)?
        }
        _ => {
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            let data = fs::read(path)?;
            handle_upload(&UploadRequest::new(filename, data), config)?
        }
    };

    Ok(statement)
}
