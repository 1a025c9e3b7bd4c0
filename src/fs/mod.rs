//! Filesystem module.
//!
//! Provides:
//! - Output directory preparation
//! - Torrent filename cleaning and file writing

pub mod naming;
pub mod paths;

pub use naming::{export_file_name, sanitize_torrent_name, TORRENT_EXTENSION};
pub use paths::{ensure_output_dir, write_torrent_file, DirStatus};
