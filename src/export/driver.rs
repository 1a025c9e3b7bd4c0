//! Export run orchestration.

use crate::api::{QbitClient, TorrentInfo};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::state::{ExportSummary, ExportedTorrent, Stage};
use crate::fs::{ensure_output_dir, export_file_name, write_torrent_file, DirStatus};
use crate::output::{print_error, print_info, print_success, print_warning, ExportProgress};
use crate::tracker::classify;

/// Run a full export.
///
/// Returns `Err` only for failures that abort the run: the output directory,
/// login, or the torrent listing. Per-torrent failures are recorded in the
/// returned summary.
pub async fn run_export(config: &Config) -> Result<ExportSummary> {
    let mut stage = Stage::Init;
    tracing::debug!("Stage: {}", stage);

    match run_stages(config, &mut stage).await {
        Ok(summary) => Ok(summary),
        Err(e) => {
            tracing::debug!("Run failed during stage '{}': {}", stage, e);
            advance(&mut stage, Stage::Aborted);
            Err(e)
        }
    }
}

async fn run_stages(config: &Config, stage: &mut Stage) -> Result<ExportSummary> {
    match ensure_output_dir(&config.output_dir)? {
        DirStatus::Created => print_success(&format!(
            "Created output directory at {}",
            config.output_dir.display()
        )),
        DirStatus::AlreadyExists => print_warning(&format!(
            "Output directory already exists at {}",
            config.output_dir.display()
        )),
    }
    advance(stage, Stage::DirectoryReady);

    print_info("Attempting to log into qBittorrent Web UI...");
    // No session exists if this fails, so there is nothing to log out of.
    let client = QbitClient::login(&config.base_url, &config.username, &config.password).await?;
    print_success("Login successful!");
    advance(stage, Stage::LoggedIn);

    print_info("Fetching list of all torrents...");
    advance(stage, Stage::Listing);
    let torrents = match client.get_torrents().await {
        Ok(torrents) => torrents,
        Err(e) => {
            print_error(&format!(
                "Logging out from qBittorrent Web UI due to error: failed to fetch torrents: {}",
                e
            ));
            logout(&client).await;
            return Err(e);
        }
    };
    print_success(&format!("Found {} torrents to export.", torrents.len()));

    advance(stage, Stage::PerTorrentLoop);
    let mut summary = ExportSummary::new(torrents.len() as u64);
    let progress = ExportProgress::new(summary.total, config.show_progress);

    for torrent in &torrents {
        match export_one(&client, config, torrent, &progress).await {
            Ok(exported) => {
                tracing::debug!("Wrote {}", exported.path.display());
                summary.record_exported(exported);
            }
            Err(e) => {
                progress.error(&format!(
                    "Failed to download torrent: {}\nError: {}",
                    torrent.label(),
                    e
                ));
                summary.record_skipped(torrent.label(), e.to_string());
            }
        }
        progress.advance();
    }
    progress.finish();

    summary.logged_out = logout(&client).await;
    advance(stage, Stage::LoggedOut);

    if !summary.skipped.is_empty() {
        print_warning(&format!(
            "Export finished; {} of {} torrents were skipped.",
            summary.skipped_count(),
            summary.total
        ));
    } else if summary.logged_out {
        print_success("All .torrent files exported successfully.");
    } else {
        print_success("Export finished; all torrents were exported.");
    }

    advance(stage, Stage::Done);
    summary.stage = *stage;
    Ok(summary)
}

/// Export a single torrent's `.torrent` file into the output directory.
///
/// A malformed tracker list is reported and the file is written without a
/// tracker code; any other failure is returned so the caller can skip it.
pub async fn export_one(
    client: &QbitClient,
    config: &Config,
    torrent: &TorrentInfo,
    progress: &ExportProgress,
) -> Result<ExportedTorrent> {
    let hash = torrent.hash()?;
    let name = torrent.name()?;

    let trackers = match client.get_trackers(hash).await {
        Err(e) if !matches!(e, Error::MalformedTrackers(_)) => return Err(e),
        other => other,
    };
    let code = trackers
        .and_then(|trackers| classify(&trackers, &config.trackers))
        .unwrap_or_else(|e| {
            progress.warn(&format!(
                "Error processing tracker information for {}: {}",
                name, e
            ));
            ""
        });

    let file_name = export_file_name(code, name);
    let contents = client.export_torrent(hash).await?;
    let path = write_torrent_file(&config.output_dir, &file_name, &contents).await?;

    Ok(ExportedTorrent {
        name: name.to_string(),
        code: code.to_string(),
        path,
    })
}

/// Best-effort logout. Returns whether it succeeded.
async fn logout(client: &QbitClient) -> bool {
    match client.logout().await {
        Ok(()) => true,
        Err(e) => {
            print_error(&format!("Failed to log out: {}", e));
            false
        }
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    tracing::debug!("Stage: {} -> {}", stage, next);
    *stage = next;
}
