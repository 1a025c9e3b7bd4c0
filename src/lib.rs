//! qBittorrent Torrent Export
//!
//! Exports the `.torrent` file of every torrent a qBittorrent daemon manages,
//! through its Web UI API, into a local directory. Each file name is
//! prefixed with a short code for the tracker the torrent belongs to, e.g.
//! `[ATH] Some.Release.2024.torrent`.
//!
//! # Example
//!
//! ```no_run
//! use qbit_torrent_export::{run_export, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("http://127.0.0.1:8080", "admin", "adminadmin", "torrent_files")?;
//!     let summary = run_export(&config).await?;
//!     println!("{} exported, {} skipped", summary.exported_count(), summary.skipped_count());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod output;
pub mod tracker;

// Re-exports for convenience
pub use api::QbitClient;
pub use config::Config;
pub use error::{Error, Result};
pub use export::{export_one, run_export, ExportSummary};
pub use tracker::{classify, TrackerCodeTable};
