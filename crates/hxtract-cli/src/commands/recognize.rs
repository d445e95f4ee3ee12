//! Recognize command - OCR a single drawing image and extract its record.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use hxtract_core::{DatasheetExtractor, OcrProvider, VisionOcrClient, mime_for_path};

use super::StyleArg;
use super::extract::{OutputFormat, format_record};

const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Arguments for the recognize command.
#[derive(Args)]
pub struct RecognizeArgs {
    /// Input image file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Save the intermediate OCR text to this file
    #[arg(long)]
    save_text: Option<PathBuf>,

    /// Drawing style (overrides config)
    #[arg(short, long, value_enum)]
    style: Option<StyleArg>,
}

pub fn run(args: RecognizeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        anyhow::bail!(
            "unsupported image format '{}' (supported: {})",
            extension,
            ALLOWED_EXTENSIONS.join(", ")
        );
    }

    let api_key = std::env::var(&config.provider.api_key_env).map_err(|_| {
        anyhow::anyhow!(
            "API key not found: set the {} environment variable",
            config.provider.api_key_env
        )
    })?;

    let client = VisionOcrClient::new(&config.provider, api_key)?;
    let image = fs::read(&args.input)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Recognizing {}", args.input.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let text = client.recognize(&image, mime_for_path(&args.input), &config.provider.prompt)?;

    spinner.finish_and_clear();
    info!("provider returned {} characters of text", text.len());

    if let Some(text_path) = &args.save_text {
        fs::write(text_path, &text)?;
        println!(
            "{} Saved OCR text to {}",
            style("✓").green(),
            text_path.display()
        );
    }

    let extractor = DatasheetExtractor::with_style(super::resolve_style(args.style, &config));
    let record = extractor.extract(&text);

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
