//! Summary reporting.

use console::style;

use crate::export::ExportSummary;
use crate::tracker::TrackerCodeTable;

/// Print the end-of-run summary.
pub fn print_export_summary(summary: &ExportSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Export Summary:").bold());
    println!("  Torrents: {}", summary.total);
    println!("  Exported: {}", style(summary.exported_count()).green());
    if summary.skipped_count() > 0 {
        println!("  Skipped:  {}", style(summary.skipped_count()).red());
    }

    let counts = summary.code_counts();
    if !counts.is_empty() {
        println!("  By tracker:");
        for (code, count) in counts {
            let label = if code.is_empty() { "(untagged)" } else { code };
            println!("    {:<12} {}", label, count);
        }
    }

    if !summary.skipped.is_empty() {
        println!("  Skipped torrents:");
        for skipped in &summary.skipped {
            println!("    {} - {}", skipped.name, style(&skipped.reason).dim());
        }
    }
    println!("{}", style("═".repeat(50)).dim());
}

/// Print the effective tracker table.
pub fn print_tracker_table(table: &TrackerCodeTable) {
    println!("{}", style("Tracker codes (first match wins):").bold());
    if table.is_empty() {
        println!("  (empty)");
    } else {
        print!("{}", table);
    }
}
