//! Flashdeck - a terminal flashcard trainer for certification courses
//!
//! This library loads a course catalog (a manifest plus one flashcard file
//! per course), walks the user down to a course through category and
//! technology levels, and sequences its cards in original or shuffled order.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod study;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FlashdeckError {
    /// Catalog could not be loaded
    #[error("{0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
