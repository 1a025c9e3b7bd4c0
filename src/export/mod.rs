//! Export module.
//!
//! This module provides:
//! - The end-to-end export run (directory, login, listing, loop, logout)
//! - Per-torrent export
//! - Run state and summary tracking

pub mod driver;
pub mod state;

pub use driver::{export_one, run_export};
pub use state::{ExportSummary, ExportedTorrent, SkippedTorrent, Stage};
