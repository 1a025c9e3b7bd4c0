//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     qBittorrent Torrent Export                        ║
║     .torrent files, tagged by tracker                 ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    base_url: &str,
    username: &str,
    output_dir: &Path,
    tracker_count: usize,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Web UI:    {}", base_url);
    println!(
        "  User:      {}",
        if username.is_empty() { "(none)" } else { username }
    );
    println!("  Directory: {}", output_dir.display());
    println!("  Trackers:  {} codes", tracker_count);
    println!();
}
