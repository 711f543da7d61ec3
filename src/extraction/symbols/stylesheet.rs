use super::{captures, SymbolExtractor, Symbols};
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([\w-]+)\s*\{").unwrap());
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([\w-]+)\s*\{").unwrap());

/// Class and id selectors that directly precede a rule block.
#[derive(Debug)]
pub struct StylesheetSymbols;

impl SymbolExtractor for StylesheetSymbols {
    fn extract(&self, content: &str) -> Symbols {
        Symbols {
            functions: Vec::new(),
            classes: captures(&CLASS_PATTERN, content),
            ids: captures(&ID_PATTERN, content),
        }
    }

    fn name(&self) -> &'static str {
        "StylesheetSymbols"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_and_id_selectors() {
        let content = ".btn { color: red; }\n#main{margin:0}\n.nav-bar .item-link {\n}\n";
        let symbols = StylesheetSymbols.extract(content);
        assert_eq!(symbols.classes, vec!["btn", "item-link"]);
        assert_eq!(symbols.ids, vec!["main"]);
        assert!(symbols.functions.is_empty());
    }

    #[test]
    fn test_selectors_not_followed_by_block() {
        let symbols = StylesheetSymbols.extract(".a, .b {\n}\n#x > p {}\n");
        assert_eq!(symbols.classes, vec!["b"]);
        assert!(symbols.ids.is_empty());
    }
}
