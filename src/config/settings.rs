//! Run configuration.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::config::validation::normalize_base_url;
use crate::error::Result;
use crate::tracker::TrackerCodeTable;

/// Default qBittorrent Web UI address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default export directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "torrent_files";

/// Everything one export run needs. Built once at startup and passed down.
#[derive(Clone)]
pub struct Config {
    /// Web UI base URL, always ending in `/`.
    pub base_url: Url,

    pub username: String,

    pub password: String,

    /// Directory the `.torrent` files are written to.
    pub output_dir: PathBuf,

    /// Ordered tracker code table.
    pub trackers: TrackerCodeTable,

    /// Whether to draw the progress bar.
    pub show_progress: bool,
}

impl Config {
    /// Create a config with the default tracker table.
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            username: username.into(),
            password: password.into(),
            output_dir: output_dir.into(),
            trackers: TrackerCodeTable::default(),
            show_progress: true,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("output_dir", &self.output_dir)
            .field("trackers", &self.trackers.len())
            .field("show_progress", &self.show_progress)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::new(DEFAULT_BASE_URL, "admin", "hunter2", "/tmp/out").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("admin"));
    }

    #[test]
    fn test_new_uses_default_table() {
        let config = Config::new(DEFAULT_BASE_URL, "", "", DEFAULT_OUTPUT_DIR).unwrap();
        assert_eq!(config.trackers, TrackerCodeTable::default());
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
    }
}
