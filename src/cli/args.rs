//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{validate_config, Config, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use crate::error::Result;
use crate::tracker::{parse_tracker_mapping, TrackerCodeTable};

/// qBittorrent torrent exporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "qbit-torrent-export",
    version,
    about = "Export .torrent files from qBittorrent, prefixed by tracker",
    long_about = "Logs into the qBittorrent Web UI, downloads the .torrent file of every \
                  managed torrent and saves it as '<CODE> <name>.torrent', where CODE \
                  identifies the torrent's tracker."
)]
pub struct Args {
    /// qBittorrent Web UI URL.
    #[arg(long, env = "QBIT_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Web UI username.
    #[arg(short, long, env = "QBIT_USERNAME", default_value = "")]
    pub username: String,

    /// Web UI password.
    #[arg(
        short,
        long,
        env = "QBIT_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Directory to save the .torrent files to.
    #[arg(short, long, env = "QBIT_EXPORT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Extra tracker mapping as KEY=CODE, e.g. "Example.org=[EX]".
    /// Checked before the built-in table. Can be repeated.
    #[arg(short = 't', long = "tracker", value_name = "KEY=CODE")]
    pub trackers: Vec<String>,

    /// Don't use the built-in tracker table.
    #[arg(long)]
    pub no_default_trackers: bool,

    /// Print the effective tracker table and exit.
    #[arg(long)]
    pub list_trackers: bool,

    /// Hide the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Build the tracker table from the defaults and any `--tracker` flags.
    pub fn tracker_table(&self) -> Result<TrackerCodeTable> {
        let base = if self.no_default_trackers {
            TrackerCodeTable::empty()
        } else {
            TrackerCodeTable::default()
        };

        let overrides = self
            .trackers
            .iter()
            .map(|m| parse_tracker_mapping(m))
            .collect::<Result<Vec<_>>>()?;

        Ok(base.with_overrides(overrides))
    }

    /// Turn the parsed arguments into a validated run configuration.
    pub fn into_config(self) -> Result<Config> {
        let trackers = self.tracker_table()?;

        let mut config = Config::new(&self.url, self.username, self.password, self.output)?;
        config.trackers = trackers;
        config.show_progress = !self.quiet;

        validate_config(&config)?;
        Ok(config)
    }
}
