//! File handling utilities
//!
//! This module provides the suffix predicate that decides which files are C++
//! sources, and the recursive directory walk that collects them.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

/// Suffix of C++ header files
pub const HEADER_SUFFIX: &str = ".h";

/// Suffix of C++ implementation files
pub const IMPLEMENTATION_SUFFIX: &str = ".cpp";

/// Suffixes the binary formats, header first
pub const SOURCE_SUFFIXES: [&str; 2] = [HEADER_SUFFIX, IMPLEMENTATION_SUFFIX];

/// Check whether a file name denotes a header or implementation file.
///
/// The test is a plain, case-sensitive suffix comparison on the name, so
/// `a.H` and `a.hpp` are not sources while a file literally named `.h` is.
pub fn is_source_file(file_name: &str) -> bool {
    matches_suffixes(file_name, &SOURCE_SUFFIXES)
}

/// Check a file name against an arbitrary suffix list.
pub fn matches_suffixes<S: AsRef<str>>(file_name: &str, suffixes: &[S]) -> bool {
    suffixes
        .iter()
        .any(|suffix| file_name.ends_with(suffix.as_ref()))
}

/// Recursively collect every regular file under `root` whose name ends with
/// one of `suffixes`.
///
/// Directory symlinks are not followed. A symlink that resolves to a regular
/// file is kept. Unreadable entries are logged and skipped, and a missing
/// root yields an empty list.
///
/// # Arguments
///
/// * `root` - Directory to walk
/// * `suffixes` - File name suffixes to accept
///
/// # Returns
///
/// Matching paths, each one `root` joined with its relative path
pub fn discover_source_files<S: AsRef<str>>(root: &Path, suffixes: &[S]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.is_dir() {
        warn!("Source directory not found: {}", root.display());
        return files;
    }

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if matches_suffixes(&file_name, suffixes) {
            files.push(entry.into_path());
        } else {
            debug!("Skipping {}: not a source file", entry.path().display());
        }
    }

    files
}
