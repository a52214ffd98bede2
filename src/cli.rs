//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for flashdeck using the `clap` crate.
//!
//! # Commands
//!
//! - **study**: Interactive flashcard study session (default)
//! - **list**: Print the course catalog with card counts
//! - **config**: Read or change persistent settings
//!
//! # Design Features
//!
//! - Global `--data-dir`, `--manifest` and `--layout` override the config file
//! - Global `--quiet` flag for scripting-friendly output, `-v` for debug logs
//! - Command aliases (`s` for `study`, `l` for `list`)
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use flashdeck::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["flashdeck", "study", "--course", "SC-900"]);
//! match cli.get_command() {
//!     Commands::Study { course, .. } => assert_eq!(course.as_deref(), Some("SC-900")),
//!     _ => unreachable!(),
//! }
//! ```

use crate::study::Layout;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., layout=grouped)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., data_dir)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Show all configuration values and the config file location
    Show,
}

impl ConfigCommands {
    /// Split a `KEY=VALUE` setting
    #[must_use]
    pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
        let (key, value) = setting.split_once('=')?;
        let key = key.trim();
        (!key.is_empty()).then_some((key, value.trim()))
    }
}

#[derive(Parser, Debug)]
#[command(name = "flashdeck")]
#[command(about = "Study certification flashcards in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug information to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Directory holding the manifest and flashcard files (overrides config)
    #[arg(short = 'd', long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Manifest file name inside the data directory (overrides config)
    #[arg(short = 'm', long = "manifest", value_name = "FILE", global = true)]
    pub manifest: Option<String>,

    /// Navigation layout (overrides config)
    #[arg(long = "layout", value_enum, global = true)]
    pub layout: Option<Layout>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive study session (default)
    #[command(visible_alias = "s")]
    Study {
        /// Open this course directly (by course ID)
        #[arg(short = 'c', long = "course", value_name = "ID")]
        course: Option<String>,

        /// Start the course in shuffled order (requires --course)
        #[arg(short = 'r', long = "randomize", requires = "course")]
        randomize: bool,
    },

    /// List courses with their card counts
    #[command(visible_alias = "l")]
    List {
        /// Only courses in this category
        #[arg(long = "category", value_name = "NAME")]
        category: Option<String>,

        /// Only courses for this technology
        #[arg(long = "technology", value_name = "NAME")]
        technology: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Study if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Study {
            course: None,
            randomize: false,
        })
    }
}
