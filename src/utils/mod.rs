//! Utility modules for the source formatter
//!
//! This module contains utility functions for file discovery and summary
//! output.

pub mod file_utils;
pub mod output_formatter;
