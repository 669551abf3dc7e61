//! Output formatter for run results
//!
//! This module renders the end-of-run summary for the console and builds the
//! progress bar shown while files are being formatted.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::runner::RunSummary;

/// Format a run summary for console output
///
/// # Arguments
///
/// * `summary` - Totals for the finished run
///
/// # Returns
///
/// Formatted string for console output
pub fn format_summary(summary: &RunSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", "Formatting Complete".bold()));
    output.push_str(&format!(
        "{} {}\n",
        "Files found:".green(),
        summary.discovered
    ));
    output.push_str(&format!(
        "{} {}\n",
        "Files formatted:".green(),
        summary.formatted
    ));

    if summary.is_clean() {
        output.push_str(&format!("{} 0\n", "Files failed:".green()));
    } else {
        output.push_str(&format!(
            "{} {}\n",
            "Files failed:".red(),
            summary.failed.len()
        ));
    }

    output.push_str(&format!(
        "{} {:.2} seconds\n",
        "Time elapsed:".green(),
        summary.elapsed.as_secs_f64()
    ));

    for error in &summary.failed {
        output.push_str(&format!("  {} {}\n", "-".red(), error));
    }

    output
}

/// Build the progress bar used while formatting `total` files
pub fn progress_bar(total: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formatter::FormatError;
    use std::path::PathBuf;

    #[test]
    fn test_summary_lists_failures() {
        colored::control::set_override(false);

        let summary = RunSummary {
            discovered: 3,
            formatted: 2,
            failed: vec![FormatError::Spawn {
                program: "clang-format".to_string(),
                path: PathBuf::from("src/vm/vm.h"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }],
            ..RunSummary::default()
        };

        let text = format_summary(&summary);
        assert!(text.contains("Files found: 3"));
        assert!(text.contains("Files formatted: 2"));
        assert!(text.contains("Files failed: 1"));
        assert!(text.contains("src/vm/vm.h"));
    }

    #[test]
    fn test_progress_bar_length() {
        let pb = progress_bar(7).expect("template should parse");
        assert_eq!(pb.length(), Some(7));
    }
}
