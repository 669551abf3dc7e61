//! Source Formatter - runs clang-format in place over a C++ source tree
//!
//! This library walks a source directory, picks out header (`.h`) and
//! implementation (`.cpp`) files, and invokes an external formatter on each
//! one, sequentially.

pub mod core;
pub mod utils;

// Re-export the main types for convenience
pub use crate::config::FormatConfig;
pub use crate::core::formatter::{ClangFormat, FormatError, Formatter};
pub use crate::core::runner::{FileOutcome, RunSummary, SourceFormatter};
pub use crate::utils::file_utils::{discover_source_files, is_source_file, SOURCE_SUFFIXES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format every source file under `root` with the default formatter
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `root` - Directory to walk
///
/// # Returns
///
/// Totals for the run
pub fn format_tree<P: AsRef<std::path::Path>>(root: P) -> RunSummary {
    let config = FormatConfig {
        root_dir: root.as_ref().to_string_lossy().into_owned(),
        ..FormatConfig::default()
    };
    let formatter = ClangFormat::from_config(&config);

    SourceFormatter::new(config, formatter).run()
}

/// Library configuration
pub mod config {
    use serde::{Deserialize, Serialize};

    use crate::utils::file_utils::SOURCE_SUFFIXES;

    /// Directory walked by the binary
    pub const SOURCE_DIR: &str = "src";

    /// Formatter executable, looked up on `PATH`
    pub const CLANG_FORMAT: &str = "clang-format";

    /// Flag telling the formatter to rewrite the file in place
    pub const IN_PLACE_FLAG: &str = "-i";

    /// Settings for one walk-and-format run
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct FormatConfig {
        pub root_dir: String,
        pub program: String,
        pub in_place_flag: String,
        pub suffixes: Vec<String>,
    }

    impl Default for FormatConfig {
        fn default() -> Self {
            Self {
                root_dir: SOURCE_DIR.to_string(),
                program: CLANG_FORMAT.to_string(),
                in_place_flag: IN_PLACE_FLAG.to_string(),
                suffixes: SOURCE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

}
