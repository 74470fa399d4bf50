//! CLI argument definitions
//!
//! Command-line options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigListingOrder};
use crate::consts::DEFAULT_OUTPUT_NAME;

/// Order of document rows in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListingOrder {
    /// Sorted by file name, reproducible across runs (default)
    #[default]
    Name,
    /// Whatever order the directory listing yields
    Listing,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "mdtokens")]
#[command(
    about = "Count cl100k_base tokens in a folder of Markdown files and estimate embedding cost",
    version
)]
pub(crate) struct Cli {
    /// Folder containing the .md documents (prompted for when omitted)
    pub(crate) folder: Option<PathBuf>,

    /// Output CSV file name (".csv" is appended when missing) [default: output]
    #[arg(short, long, value_name = "NAME")]
    pub(crate) output: Option<String>,

    /// Order of document rows [default: name]
    #[arg(long, value_enum)]
    pub(crate) order: Option<ListingOrder>,

    /// Print the summary as JSON instead of a table
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Suppress status messages and the summary table
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Enable debug output (per-document counts on stderr)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if self.order.is_none() {
            self.order = config.order.map(|order| match order {
                ConfigListingOrder::Name => ListingOrder::Name,
                ConfigListingOrder::Listing => ListingOrder::Listing,
            });
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.output.is_none() {
            self.output = config.output.clone();
        }

        self
    }

    pub(crate) fn listing_order(&self) -> ListingOrder {
        self.order.unwrap_or_default()
    }

    pub(crate) fn output_name(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_NAME)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
