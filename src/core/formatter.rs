//! Formatter invocation
//!
//! Wraps the external formatter binary behind the `Formatter` trait so the
//! walker can drive either the real process or a test double.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::debug;

use crate::config::FormatConfig;

/// Error raised by a single formatter invocation
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The formatter process could not be started
    #[error("failed to run {program} on {}: {source}", path.display())]
    Spawn {
        program: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The formatter ran but did not succeed
    #[error("{program} failed on {} ({status})", path.display())]
    Failed {
        program: String,
        path: PathBuf,
        status: ExitStatus,
    },
}

impl FormatError {
    /// The file the failed invocation targeted
    pub fn path(&self) -> &Path {
        match self {
            FormatError::Spawn { path, .. } | FormatError::Failed { path, .. } => path,
        }
    }
}

/// Something that rewrites one source file in place
pub trait Formatter {
    fn format(&mut self, path: &Path) -> Result<(), FormatError>;
}

/// Runs an external formatter as `<program> <in-place-flag> <path>`
#[derive(Debug, Clone)]
pub struct ClangFormat {
    program: String,
    in_place_flag: String,
}

impl ClangFormat {
    /// Create a formatter for the given program and in-place flag
    pub fn new(program: impl Into<String>, in_place_flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            in_place_flag: in_place_flag.into(),
        }
    }

    /// Create a formatter from the program settings of a config
    pub fn from_config(config: &FormatConfig) -> Self {
        Self::new(config.program.clone(), config.in_place_flag.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ClangFormat {
    fn default() -> Self {
        Self::from_config(&FormatConfig::default())
    }
}

impl Formatter for ClangFormat {
    /// Spawn the formatter and wait for it to exit.
    ///
    /// stdout and stderr are inherited so the formatter's own diagnostics
    /// reach the terminal.
    fn format(&mut self, path: &Path) -> Result<(), FormatError> {
        debug!("Formatting {}", path.display());

        let status = Command::new(&self.program)
            .arg(&self.in_place_flag)
            .arg(path)
            .status()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                path: path.to_path_buf(),
                status,
            });
        }

        debug!("{} finished on {}", self.program, path.display());
        Ok(())
    }
}
