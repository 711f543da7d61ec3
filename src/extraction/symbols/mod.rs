//! Regex-based symbol extraction per file kind.
//!
//! These are textual pattern matches, not parses: a `def` inside a string or
//! comment is reported like any other.

use regex::Regex;
use std::fmt;

mod python;
mod script;
mod stylesheet;

pub use python::PythonSymbols;
pub use script::ScriptSymbols;
pub use stylesheet::StylesheetSymbols;

/// Names found in one file, each list in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbols {
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub ids: Vec<String>,
}

/// Extracts symbol names from the content of one kind of file.
pub trait SymbolExtractor: Send + Sync {
    fn extract(&self, content: &str) -> Symbols;
    /// Returns a descriptive name for the extractor.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn SymbolExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SymbolExtractor").field(&self.name()).finish()
    }
}

/// First capture group of every non-overlapping match, in order.
pub(crate) fn captures(pattern: &Regex, content: &str) -> Vec<String> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
