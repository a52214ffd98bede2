//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the catalog or the configuration.

pub mod config;
pub mod list;
pub mod study;

pub use config::execute as config;
pub use list::execute as list;
pub use study::execute as study;
