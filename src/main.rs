//! qBittorrent Torrent Export - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use qbit_torrent_export::{
    cli::Args,
    error::{exit_codes, Result},
    export::run_export,
    output::{
        print_banner, print_config_summary, print_error, print_export_summary, print_tracker_table,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.list_trackers {
        print_tracker_table(&args.tracker_table()?);
        return Ok(());
    }

    let config = args.into_config()?;
    tracing::debug!("Config: {:?}", config);

    print_banner();
    print_config_summary(
        config.base_url.as_str(),
        &config.username,
        &config.output_dir,
        config.trackers.len(),
    );

    // Per-torrent failures don't affect the exit code.
    let summary = run_export(&config).await?;
    print_export_summary(&summary);

    Ok(())
}
