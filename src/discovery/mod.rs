//! Walks the analyzed root to list extensions and find candidate files.
//!
//! Both walks share the same rules: ignored directories (see
//! [`crate::filtering::should_ignore`]) are pruned and never descended into,
//! and ignored file names are skipped.

mod catalog;
mod extensions;
mod walker;

pub use catalog::{classify_change, discover_files};
pub use extensions::list_extensions;
