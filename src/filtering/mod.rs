// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage (built-in ignore rules,
//! extension allow-list) and by extraction (build file names, text detection).
//! They are exposed publicly to allow for their use in other contexts.

mod build_files;
mod extension;
mod file_type;
mod ignore_rules;
mod text_detection;

pub use build_files::is_build_file;
pub use extension::{file_extension, passes_extension_filter};
pub use file_type::is_regular_file;
pub use ignore_rules::{is_ignored_dir_name, is_ignored_file_name, should_ignore};
pub use text_detection::is_likely_text_from_buffer;
