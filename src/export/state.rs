//! Export run state tracking.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Stage of an export run.
///
/// Failures before [`Stage::PerTorrentLoop`] move the run to
/// [`Stage::Aborted`]; failures inside the loop only skip the current torrent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Init,
    DirectoryReady,
    LoggedIn,
    Listing,
    PerTorrentLoop,
    LoggedOut,
    Done,
    Aborted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Init => write!(f, "init"),
            Stage::DirectoryReady => write!(f, "directory ready"),
            Stage::LoggedIn => write!(f, "logged in"),
            Stage::Listing => write!(f, "listing"),
            Stage::PerTorrentLoop => write!(f, "exporting"),
            Stage::LoggedOut => write!(f, "logged out"),
            Stage::Done => write!(f, "done"),
            Stage::Aborted => write!(f, "aborted"),
        }
    }
}

/// A torrent whose file was written.
#[derive(Debug, Clone)]
pub struct ExportedTorrent {
    pub name: String,
    pub code: String,
    pub path: PathBuf,
}

/// A torrent that was skipped, with the reason shown to the operator.
#[derive(Debug, Clone)]
pub struct SkippedTorrent {
    pub name: String,
    pub reason: String,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub stage: Stage,
    pub total: u64,
    pub exported: Vec<ExportedTorrent>,
    pub skipped: Vec<SkippedTorrent>,
    pub logged_out: bool,
}

impl ExportSummary {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn record_exported(&mut self, torrent: ExportedTorrent) {
        self.exported.push(torrent);
    }

    pub fn record_skipped(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedTorrent {
            name: name.into(),
            reason: reason.into(),
        });
    }

    pub fn exported_count(&self) -> u64 {
        self.exported.len() as u64
    }

    pub fn skipped_count(&self) -> u64 {
        self.skipped.len() as u64
    }

    /// Number of exported files per tracker code, with the empty code as `""`.
    pub fn code_counts(&self) -> BTreeMap<&str, u64> {
        let mut counts = BTreeMap::new();
        for torrent in &self.exported {
            *counts.entry(torrent.code.trim_end()).or_insert(0) += 1;
        }
        counts
    }
}
