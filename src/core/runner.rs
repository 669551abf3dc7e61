//! Walk-and-format driver
//!
//! `SourceFormatter` discovers the source files under the configured root and
//! hands each one to a `Formatter`, one at a time. A failed invocation is
//! recorded and the walk moves on.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::FormatConfig;
use crate::core::formatter::{FormatError, Formatter};
use crate::utils::file_utils::discover_source_files;

/// Result of formatting a single file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<(), FormatError>,
}

/// Totals for one walk-and-format run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of matching files found under the root
    pub discovered: usize,
    /// Number of files the formatter succeeded on
    pub formatted: usize,
    /// Invocations that could not be started or exited unsuccessfully
    pub failed: Vec<FormatError>,
    pub elapsed: Duration,
}

impl RunSummary {
    /// True when every discovered file was formatted
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, result: Result<(), FormatError>) {
        match result {
            Ok(()) => self.formatted += 1,
            Err(e) => self.failed.push(e),
        }
    }
}

/// Drives a formatter over every source file under a root directory
pub struct SourceFormatter<F: Formatter> {
    config: FormatConfig,
    formatter: F,
}

impl<F: Formatter> SourceFormatter<F> {
    pub fn new(config: FormatConfig, formatter: F) -> Self {
        Self { config, formatter }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Give back the wrapped formatter
    pub fn into_formatter(self) -> F {
        self.formatter
    }

    /// List the files a run would format
    pub fn discover(&self) -> Vec<PathBuf> {
        discover_source_files(Path::new(&self.config.root_dir), &self.config.suffixes)
    }

    /// Walk the root and format every source file
    pub fn run(&mut self) -> RunSummary {
        self.run_with(|_| {})
    }

    /// Walk the root and format every source file, reporting each outcome
    ///
    /// # Arguments
    ///
    /// * `on_file` - Called after every invocation, successful or not
    ///
    /// # Returns
    ///
    /// Totals for the run
    pub fn run_with<C>(&mut self, on_file: C) -> RunSummary
    where
        C: FnMut(&FileOutcome),
    {
        let files = self.discover();
        self.format_files(&files, on_file)
    }

    /// Format an already discovered list of files, in order
    pub fn format_files<C>(&mut self, files: &[PathBuf], mut on_file: C) -> RunSummary
    where
        C: FnMut(&FileOutcome),
    {
        let start_time = Instant::now();
        let mut summary = RunSummary {
            discovered: files.len(),
            ..RunSummary::default()
        };

        info!(
            "Found {} source files under {}",
            files.len(),
            self.config.root_dir
        );

        for path in files {
            let result = self.formatter.format(path);
            if let Err(e) = &result {
                warn!("{}", e);
            }

            let outcome = FileOutcome {
                path: path.clone(),
                result,
            };
            on_file(&outcome);
            summary.record(outcome.result);
        }

        summary.elapsed = start_time.elapsed();
        summary
    }
}
