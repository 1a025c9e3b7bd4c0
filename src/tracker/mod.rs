//! Tracker classification.
//!
//! Provides:
//! - The ordered tracker code table
//! - First-match classification of a torrent's tracker list

pub mod classify;
pub mod codes;

pub use classify::classify;
pub use codes::{parse_tracker_mapping, TrackerCode, TrackerCodeTable};
