use super::{captures, SymbolExtractor, Symbols};
use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+(\w+)\s*\(").unwrap());
static ARROW_FUNCTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const\s+(\w+)\s*=\s*(?:\([^)]*\)|[^=])\s*=>").unwrap());
static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+(\w+)\s*\{").unwrap());

/// JavaScript and TypeScript: declared functions, then `const` arrow
/// functions, then classes.
#[derive(Debug)]
pub struct ScriptSymbols;

impl SymbolExtractor for ScriptSymbols {
    fn extract(&self, content: &str) -> Symbols {
        let mut functions = captures(&FUNCTION_PATTERN, content);
        functions.extend(captures(&ARROW_FUNCTION_PATTERN, content));
        Symbols {
            functions,
            classes: captures(&CLASS_PATTERN, content),
            ids: Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "ScriptSymbols"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_then_arrow_functions() {
        let content = r#"
const add = (a, b) => a + b;
function render(node) { return node; }
const twice = x => x * 2;
class Widget {
  constructor() {}
}
"#;
        let symbols = ScriptSymbols.extract(content);
        assert_eq!(symbols.functions, vec!["render", "add", "twice"]);
        assert_eq!(symbols.classes, vec!["Widget"]);
    }

    #[test]
    fn test_class_requires_brace() {
        let symbols = ScriptSymbols.extract("class Base extends Other {}\nclass Plain {}\n");
        assert_eq!(symbols.classes, vec!["Plain"]);
    }

    #[test]
    fn test_non_arrow_const_is_ignored() {
        let symbols = ScriptSymbols.extract("const limit = 10;\nconst cmp = a >= b;\n");
        assert!(symbols.functions.is_empty());
    }
}
