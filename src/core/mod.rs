//! Core module for source formatting
//!
//! This module contains the formatter invocation and the walk-and-format
//! driver that applies it to a source tree.

pub mod formatter;
pub mod runner;
