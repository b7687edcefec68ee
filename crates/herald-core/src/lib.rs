//! Core types, configuration, and error handling for Herald.
//!
//! This crate provides the shared foundation used by the other Herald crates:
//! - [`HeraldError`] — unified error type using `thiserror`
//! - [`HeraldConfig`] — configuration loaded from `.herald.toml`
//! - [`Logger`] — diagnostic sink, with a GitHub Actions implementation
//! - Shared types: [`TriggerContext`], [`EventKind`], [`Scanner`],
//!   [`ScanConfig`], [`PullRequestRef`], [`ExistingComment`]

mod config;
mod error;
mod log;
mod types;

pub use config::{HeraldConfig, ReportConfig, ScanConfig, ScannerToggles};
pub use error::{HeraldError, HostError};
pub use log::{ActionsLogger, Logger};
pub use types::{EventKind, ExistingComment, PullRequestRef, Scanner, TriggerContext};

/// A convenience `Result` type for Herald operations.
pub type Result<T> = std::result::Result<T, HeraldError>;
