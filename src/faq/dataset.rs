//! FAQ dataset loading.
//!
//! The dataset is a static JSON array of authored entries, bundled into the
//! binary at build time and overridable by path. There is no runtime
//! mutation; the array is parsed once and handed to the index.

use crate::faq::types::FaqEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Dataset shipped with the binary.
pub const BUNDLED_FAQ: &str = include_str!("../../data/faq.json");

/// Parse a FAQ dataset from JSON.
pub fn parse_faq(json: &str) -> Result<Vec<FaqEntry>> {
    let entries: Vec<FaqEntry> =
        serde_json::from_str(json).context("invalid FAQ dataset JSON")?;
    tracing::debug!(entries = entries.len(), "faq dataset parsed");
    Ok(entries)
}

/// Load a FAQ dataset from a file.
pub fn load_faq(path: &Path) -> Result<Vec<FaqEntry>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading FAQ dataset from {}", path.display()))?;
    parse_faq(&json)
}

/// The dataset bundled into the binary.
pub fn bundled_faq() -> Result<Vec<FaqEntry>> {
    parse_faq(BUNDLED_FAQ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::search::FaqSearchIndex;
    use crate::faq::types::Category;

    #[test]
    fn test_bundled_dataset_parses() {
        let entries = bundled_faq().unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| !e.question.is_empty()));
        assert!(entries.iter().all(|e| !e.answer.is_empty()));
    }

    #[test]
    fn test_bundled_dataset_covers_every_category() {
        let index = FaqSearchIndex::new(bundled_faq().unwrap());
        for cat in Category::ALL {
            assert!(
                index.categories().contains(&cat),
                "bundled dataset is missing category {cat}"
            );
        }
    }

    #[test]
    fn test_bundled_ids_follow_dataset_order() {
        let index = FaqSearchIndex::new(bundled_faq().unwrap());
        for (i, record) in index.records().iter().enumerate() {
            assert_eq!(record.id as usize, i);
        }
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_faq("not json").is_err());
        assert!(parse_faq(r#"[{"question": "q"}]"#).is_err());
    }

    #[test]
    fn test_unknown_category_in_dataset_is_an_error() {
        let json = r#"[{"question": "q", "answer": "a", "category": "plumbing"}]"#;
        assert!(parse_faq(json).is_err());
    }
}
