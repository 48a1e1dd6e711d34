//! Fuldmåne CLI library.
//!
//! This library provides the presentation layer for the full-moon tracker:
//! configuration management, clock and timezone resolution, command execution,
//! and output formatting.

pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::Context;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
