//! API response type definitions.

use serde::Deserialize;

use crate::error::{Error, Result};

/// One entry of `/api/v2/torrents/info`.
///
/// Fields the exporter does not use are ignored. `hash` and `name` are kept
/// optional so a single bad record does not fail the whole listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TorrentInfo {
    pub hash: Option<String>,
    pub name: Option<String>,
}

impl TorrentInfo {
    pub fn new(hash: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
            name: Some(name.into()),
        }
    }

    /// The info-hash, or an error if the daemon omitted it.
    pub fn hash(&self) -> Result<&str> {
        self.hash
            .as_deref()
            .ok_or_else(|| Error::MalformedTorrent(format!("'{}' has no hash", self.label())))
    }

    /// The display name, or an error if the daemon omitted it.
    pub fn name(&self) -> Result<&str> {
        self.name.as_deref().ok_or_else(|| {
            Error::MalformedTorrent(format!(
                "torrent {} has no name",
                self.hash.as_deref().unwrap_or("<unknown>")
            ))
        })
    }

    /// Best-effort label for diagnostics.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.hash.as_deref())
            .unwrap_or("<unnamed torrent>")
    }
}

/// One entry of `/api/v2/torrents/trackers`.
///
/// qBittorrent also reports pseudo-trackers such as `** [DHT] **`; they are
/// plain entries here and simply never match a code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerEntry {
    pub url: Option<String>,
}

impl TrackerEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}
