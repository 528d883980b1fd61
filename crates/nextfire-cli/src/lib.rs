//! nextfire CLI - deploy Next.js builds to Firebase Hosting and Cloud Functions.
//!
//! This crate provides the `nextfire` binary on top of `nextfire-config` and
//! `nextfire-target`.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and the build summary
//!
//! # Example
//!
//! ```rust,no_run
//! use nextfire_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
