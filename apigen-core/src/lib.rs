//! Core utilities for the apigen SDK generator.
//!
//! This crate provides the string and file primitives shared by the
//! rendering engine and the language generators.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult, write_file};
// String utilities
pub use utils::{first_char_lower, first_char_upper, strip_qualifier};
