use super::{captures, SymbolExtractor, Symbols};
use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(\w+)").unwrap());
static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+(\w+)").unwrap());

/// `def name` and `class Name` occurrences.
#[derive(Debug)]
pub struct PythonSymbols;

impl SymbolExtractor for PythonSymbols {
    fn extract(&self, content: &str) -> Symbols {
        Symbols {
            functions: captures(&FUNCTION_PATTERN, content),
            classes: captures(&CLASS_PATTERN, content),
            ids: Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "PythonSymbols"
    }
}
