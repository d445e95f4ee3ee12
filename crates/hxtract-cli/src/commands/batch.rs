//! Batch command - process many drawings into one tabular report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use hxtract_core::{
    DatasheetExtractor, HxtractConfig, OcrProvider, Orientation, VisionOcrClient, mime_for_path,
};

use super::StyleArg;
use crate::report;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (images and/or .txt OCR dumps)
    #[arg(required = true)]
    input: String,

    /// Report output path
    #[arg(short, long, default_value = "equipment_report.csv")]
    output: PathBuf,

    /// Report orientation (overrides config)
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Also write a per-source summary CSV next to the report
    #[arg(long)]
    summary: bool,

    /// Drawing style (overrides config)
    #[arg(short, long, value_enum)]
    style: Option<StyleArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OrientationArg {
    /// One row per record
    Rows,
    /// One column per record
    Columns,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Rows => Orientation::Rows,
            OrientationArg::Columns => Orientation::Columns,
        }
    }
}

/// Outcome of fetching raw text for one source.
struct SourceText {
    source: String,
    text: Option<String>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Expand glob pattern; sorted enumeration keeps report order stable.
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            let ext = ext.to_lowercase();
            ext == "txt" || IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // A client is only needed when the batch contains images.
    let needs_ocr = files.iter().any(|p| !is_text_dump(p));
    let client = if needs_ocr {
        let api_key = std::env::var(&config.provider.api_key_env).map_err(|_| {
            anyhow::anyhow!(
                "API key not found: set the {} environment variable",
                config.provider.api_key_env
            )
        })?;
        Some(VisionOcrClient::new(&config.provider, api_key)?)
    } else {
        None
    };

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Fetch raw text per source; a failed source is skipped, not fatal.
    let mut sources = Vec::with_capacity(files.len());
    for path in &files {
        sources.push(fetch_source_text(path, client.as_ref(), &config));
        progress.inc(1);
    }
    progress.finish_with_message("Complete");

    for outcome in &sources {
        if let Some(error) = &outcome.error {
            warn!(source = %outcome.source, "skipping source: {error}");
        }
    }

    // Assemble the batch in input order.
    let extractor = DatasheetExtractor::with_style(super::resolve_style(args.style, &config));
    let batch = extractor.extract_batch(
        sources
            .iter()
            .map(|s| (s.source.clone(), s.text.as_deref())),
    );

    let orientation = args
        .orientation
        .map(Orientation::from)
        .unwrap_or(config.report.orientation);

    match orientation {
        Orientation::Rows => report::write_rows(&args.output, &batch)?,
        Orientation::Columns => report::write_columns(&args.output, &batch)?,
    }

    if args.summary {
        let summary_path = summary_path(&args.output);
        report::write_summary(&summary_path, &sources.iter().map(SourceText::status).collect::<Vec<_>>())?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let skipped: Vec<&SourceText> = sources.iter().filter(|s| s.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} sources in {:?}",
        style("✓").green(),
        sources.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted, {} skipped",
        style(batch.len()).green(),
        style(skipped.len()).red()
    );
    println!("   Report written to {}", args.output.display());

    if !skipped.is_empty() {
        println!();
        println!("{}", style("Skipped sources:").red());
        for outcome in &skipped {
            println!(
                "  - {}: {}",
                outcome.source,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn is_text_dump(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

fn source_id(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("source")
        .to_string()
}

fn fetch_source_text(
    path: &Path,
    client: Option<&VisionOcrClient>,
    config: &HxtractConfig,
) -> SourceText {
    let source = source_id(path);

    let result = if is_text_dump(path) {
        read_text_dump(path)
    } else {
        recognize_image(path, client, config)
    };

    match result {
        Ok(text) => {
            debug!(%source, text_length = text.len(), "raw text ready");
            SourceText {
                source,
                text: Some(text),
                error: None,
            }
        }
        Err(error) => SourceText {
            source,
            text: None,
            error: Some(error.to_string()),
        },
    }
}

fn read_text_dump(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| anyhow::anyhow!("file is not valid UTF-8 text"))
}

fn recognize_image(
    path: &Path,
    client: Option<&VisionOcrClient>,
    config: &HxtractConfig,
) -> anyhow::Result<String> {
    let client = client.ok_or_else(|| anyhow::anyhow!("no OCR client configured"))?;
    let image = fs::read(path)?;
    let text = client.recognize(&image, mime_for_path(path), &config.provider.prompt)?;
    Ok(text)
}

fn summary_path(report_path: &Path) -> PathBuf {
    report_path
        .parent()
        .map(|dir| dir.join("summary.csv"))
        .unwrap_or_else(|| PathBuf::from("summary.csv"))
}

impl SourceText {
    fn status(&self) -> report::SourceStatus<'_> {
        report::SourceStatus {
            source: &self.source,
            error: self.error.as_deref(),
        }
    }
}
