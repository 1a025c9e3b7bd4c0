//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - The export progress bar
//! - Summary reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use progress::ExportProgress;
pub use stats::{print_export_summary, print_tracker_table};
