//! Command-line argument parsing for the pencil binary
//!
//! Supports:
//! - Running a YAML action script against a fresh page
//! - Starting the page with existing text
//! - Overriding pencil config from the command line
//! - JSON output of the final session state

use clap::Parser;
use std::path::PathBuf;

use crate::config::PencilConfig;

/// Write, erase and edit with a pencil that wears down
#[derive(Parser, Debug)]
#[command(
    name = "pencil",
    version,
    about = "Write, erase and edit with a pencil that wears down"
)]
pub struct CliArgs {
    /// YAML action script to run
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Text already on the page (with a script), or text to write (without one)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Point durability (overrides config file)
    #[arg(short = 'p', long, value_name = "N")]
    pub point_durability: Option<u32>,

    /// Pencil length (overrides config file)
    #[arg(short = 'l', long, value_name = "N")]
    pub length: Option<u32>,

    /// Eraser durability (overrides config file)
    #[arg(short = 'e', long, value_name = "N")]
    pub eraser_durability: Option<u32>,

    /// Alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final session as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip failed actions instead of stopping
    #[arg(short = 'k', long)]
    pub keep_going: bool,
}

/// Where the actions come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Run a script file, optionally on a page with text already on it
    Script {
        path: PathBuf,
        initial_text: Option<String>,
    },
    /// Write a single piece of text on a blank page
    Write(String),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: RunMode,
    /// Pencil options given on the command line
    pub overrides: PencilConfig,
    /// Config file to read instead of the default one
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub keep_going: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let mode = match (self.script, self.text) {
            (Some(path), initial_text) => RunMode::Script { path, initial_text },
            (None, Some(text)) => RunMode::Write(text),
            (None, None) => return Err("Nothing to do: pass a SCRIPT or --text".to_string()),
        };

        Ok(RunConfig {
            mode,
            overrides: PencilConfig {
                point_durability: self.point_durability,
                length: self.length,
                eraser_durability: self.eraser_durability,
            },
            config_path: self.config,
            json: self.json,
            keep_going: self.keep_going,
        })
    }
}

impl RunMode {
    /// Text on the page before any action runs
    pub fn initial_text(&self) -> &str {
        match self {
            Self::Script { initial_text, .. } => initial_text.as_deref().unwrap_or(""),
            Self::Write(_) => "",
        }
    }
}
