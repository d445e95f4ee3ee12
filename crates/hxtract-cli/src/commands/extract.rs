//! Extract command - build a record from a raw OCR text dump.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use hxtract_core::{DatasheetExtractor, EquipmentRecord};

use super::StyleArg;
use crate::report;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Drawing style (overrides config)
    #[arg(short, long, value_enum)]
    style: Option<StyleArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let extractor = DatasheetExtractor::with_style(super::resolve_style(args.style, &config));

    let bytes = if args.input.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else {
        fs::read(&args.input)?
    };

    let record = extractor
        .extract_bytes(&bytes)
        .map_err(|e| anyhow::anyhow!("{}: {e}", args.input.display()))?;

    info!("extracted record from {} bytes of text", bytes.len());

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Wrote record to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    Ok(())
}

/// Render one record in the requested format.
pub fn format_record(record: &EquipmentRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => report::format_record_csv(record),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_record_text(record: &EquipmentRecord) -> String {
    EquipmentRecord::FIELD_LABELS
        .iter()
        .zip(record.values())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
