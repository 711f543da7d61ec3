// src/config/parsing.rs

use crate::selection::Preset;
use std::collections::BTreeSet;

/// Normalizes one extension to lowercase with a leading dot.
///
/// `none` and the empty string select files without an extension (`""`).
pub(super) fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().to_lowercase();
    if trimmed.is_empty() || trimmed == "none" || trimmed == "." {
        String::new()
    } else if trimmed.starts_with('.') {
        trimmed
    } else {
        format!(".{}", trimmed)
    }
}

/// Combines `--ext` values and presets into one allow-list. `None` when
/// neither was given.
pub(super) fn collect_extensions(
    exts: Option<Vec<String>>,
    presets: Option<Vec<Preset>>,
) -> Option<BTreeSet<String>> {
    if exts.is_none() && presets.is_none() {
        return None;
    }
    let mut selected: BTreeSet<String> = exts
        .unwrap_or_default()
        .iter()
        .map(|e| normalize_extension(e))
        .collect();
    for preset in presets.unwrap_or_default() {
        selected.extend(preset.extensions().iter().map(|e| e.to_string()));
    }
    Some(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("py"), ".py");
        assert_eq!(normalize_extension(".PY"), ".py");
        assert_eq!(normalize_extension(" Css "), ".css");
        assert_eq!(normalize_extension("none"), "");
        assert_eq!(normalize_extension("NONE"), "");
        assert_eq!(normalize_extension(""), "");
    }

    #[test]
    fn test_collect_extensions_combines_presets() {
        let selected =
            collect_extensions(Some(vec!["rs".to_string()]), Some(vec![Preset::Docs])).unwrap();
        let expected: BTreeSet<String> = [".md", ".pdf", ".rs", ".rst", ".txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(selected, expected);
    }

    #[test]
    fn test_collect_extensions_none_given() {
        assert!(collect_extensions(None, None).is_none());
    }
}
