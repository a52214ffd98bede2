//! Flashdeck CLI application entry point
//!
//! This is the main executable for the flashdeck flashcard trainer. It loads
//! the configuration, applies command-line overrides and dispatches to the
//! selected command.
//!
//! # Features
//!
//! - **Study Mode**: Interactive terminal UI for working through a course
//! - **List**: Print the catalog with card counts
//! - **Config**: Inspect and change persistent settings
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Study interactively (default command)
//! flashdeck
//! flashdeck study --layout grouped
//!
//! # Jump straight into a course, shuffled
//! flashdeck study --course AZ-900 --randomize
//!
//! # List courses in one category
//! flashdeck list --category Security
//!
//! # Point at another data directory for this run
//! flashdeck -d ~/cards list
//!
//! # Persist a setting
//! flashdeck config set layout=grouped
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/flashdeck/config.toml` on Linux) and created with defaults on
//! first run.

use env_logger::{Env, Target};
use flashdeck::{
    FlashdeckError,
    catalog::{Catalog, CourseFilter, DirectorySource},
    cli::{Cli, Commands},
    commands,
    config::FlashdeckConfig,
    study::StudySession,
    ui::{OutputWriter, StdoutWriter},
};
use log::{LevelFilter, debug};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, FlashdeckError>;

/// Location of the log file used while the terminal UI owns the screen
fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("flashdeck").join("flashdeck.log"))
}

/// Set up `env_logger`
///
/// `RUST_LOG` wins over the defaults (`warn`, or `debug` with `--verbose`).
/// While the TUI runs, records go to a log file instead of stderr; if the
/// file cannot be created, logging is switched off.
fn init_logging(verbose: bool, tui: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    if tui {
        let file = log_file_path().and_then(|path| {
            fs::create_dir_all(path.parent()?).ok()?;
            File::create(path).ok()
        });
        match file {
            Some(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    builder.init();
}

/// Handle the study command
///
/// # Errors
///
/// Returns `FlashdeckError` if the start course cannot be opened or the
/// terminal UI fails.
fn handle_study_command(
    settings: &FlashdeckConfig,
    course: Option<&str>,
    randomize: bool,
) -> Result<()> {
    let source = DirectorySource::new(&settings.data_dir);
    let session = StudySession::open(source, &settings.manifest, settings.layout);
    commands::study(session, course, randomize)
}

/// Handle the list command
///
/// # Errors
///
/// Returns `FlashdeckError::Catalog` if the manifest cannot be loaded.
fn handle_list_command(
    settings: &FlashdeckConfig,
    category: Option<&str>,
    technology: Option<&str>,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let source = DirectorySource::new(&settings.data_dir);
    let catalog = Catalog::load(&source, &settings.manifest)?;
    let filter = CourseFilter::new(category, technology);
    commands::list(&catalog, &filter, settings.layout, out, quiet)
}

/// Load configuration, parse arguments and dispatch to a command handler
///
/// # Errors
///
/// Returns `FlashdeckError` if configuration loading fails or any command
/// handler returns an error.
fn run(cli: &Cli, out: &dyn OutputWriter) -> Result<()> {
    let config = FlashdeckConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        let path = FlashdeckConfig::config_path()?;
        return commands::config(config, command, &path, out, quiet);
    }

    let settings = config.with_overrides(cli.data_dir.clone(), cli.manifest.clone(), cli.layout);
    debug!(
        "Using manifest {} ({} layout)",
        settings.manifest_path().display(),
        settings.layout
    );

    match &command {
        Commands::Study { course, randomize } => {
            handle_study_command(&settings, course.as_deref(), *randomize)
        }
        Commands::List {
            category,
            technology,
        } => handle_list_command(
            &settings,
            category.as_deref(),
            technology.as_deref(),
            out,
            quiet,
        ),
        Commands::Config { .. } => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let tui = matches!(cli.get_command(), Commands::Study { .. });
    init_logging(cli.verbose, tui);

    let out = StdoutWriter::new();
    match run(&cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
