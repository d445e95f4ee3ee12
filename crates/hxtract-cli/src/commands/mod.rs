//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod recognize;

use std::path::Path;

use hxtract_core::{DrawingStyle, HxtractConfig};

/// Drawing style selection on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StyleArg {
    /// Dual-stream technical data tables
    ProcessFlow,
    /// Single-value labeled sheets
    SimpleLabel,
}

impl From<StyleArg> for DrawingStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::ProcessFlow => DrawingStyle::ProcessFlow,
            StyleArg::SimpleLabel => DrawingStyle::SimpleLabel,
        }
    }
}

/// Load configuration from an explicit path, or fall back to defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<HxtractConfig> {
    match path {
        Some(path) => Ok(HxtractConfig::from_file(Path::new(path))?),
        None => Ok(HxtractConfig::default()),
    }
}

/// Resolve the extraction style: CLI flag wins over config.
pub fn resolve_style(flag: Option<StyleArg>, config: &HxtractConfig) -> DrawingStyle {
    flag.map(DrawingStyle::from)
        .unwrap_or(config.extraction.style)
}
