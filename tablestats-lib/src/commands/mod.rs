//! Command-line interface and orchestration for tablestats
//!
//! This module implements the CLI commands on top of the snapshot model, the
//! ordering engine and the report generators. It handles argument parsing,
//! configuration management, and error reporting to the host.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **render**: Load a JSON snapshot, merge command-line flags over the
//!   configuration file, and write a text or JSON report
//! - **keys**: List the sort-key vocabulary with descriptions
//! - **init**: Generate a default configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. A failing command writes a single
//! `❌`-prefixed line to the host's error stream, asks the host to exit with
//! status 1, and returns the error.
//!
//! All output goes through the [`Host`] trait so tests can capture it.

mod common;
mod config;
mod host;
mod init;
mod keys;
mod render;
mod run;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use keys::list_keys;
pub use render::{RenderArgs, render_snapshot};
pub use run::run;
