//! Source Formatter - runs clang-format in place over the `src` tree
//!
//! The entry point takes no inputs for the walk itself: it always formats
//! `src` relative to the working directory. The flags below only control
//! logging and terminal output.

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};

use source_formatter::core::formatter::ClangFormat;
use source_formatter::core::runner::SourceFormatter;
use source_formatter::utils::output_formatter;
use source_formatter::FormatConfig;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "format_sources",
    version,
    about = "Runs clang-format in place on every .h and .cpp file under src/"
)]
struct Args {
    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Suppress progress bar and summary
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    let config = FormatConfig::default();
    debug!("Configuration: {}", serde_json::to_string(&config)?);

    let formatter = ClangFormat::from_config(&config);
    let mut runner = SourceFormatter::new(config, formatter);

    let files = runner.discover();

    let progress_bar = if !args.quiet && !files.is_empty() {
        Some(output_formatter::progress_bar(files.len())?)
    } else {
        None
    };

    let summary = runner.format_files(&files, |outcome| {
        if let Some(pb) = &progress_bar {
            pb.set_message(outcome.path.display().to_string());
            pb.inc(1);
        }
    });

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }

    if !args.quiet {
        println!("{}", output_formatter::format_summary(&summary));
    }

    // Formatter failures are reported above but never change the exit status
    Ok(())
}

/// Set up logging to stderr
fn setup_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.init();
}
