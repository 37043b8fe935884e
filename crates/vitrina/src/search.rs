//! Free-text search over the catalog.
//!
//! A query matches a product when the lowercased query is a substring of the
//! lowercased name, description, or category, or of any one tag. Substring,
//! not token matching: "seda" finds "Seda Natural" and "sedante" alike.
//! An empty (or whitespace-only) query constrains nothing.

use crate::model::Product;
use serde::{Deserialize, Serialize};

/// A normalized search query. Construction lowercases and trims once so
/// matching against a full catalog does not re-normalize the needle per
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The original text as the user typed it, for echoing back in the UI.
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    /// The text as typed, for display ("N results for \"...\"").
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when this query constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring match across name, description, category,
    /// and tags (OR). Empty queries accept everything.
    pub fn matches(&self, product: &Product) -> bool {
        if self.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&self.needle)
            || product.description.to_lowercase().contains(&self.needle)
            || product.category.to_lowercase().contains(&self.needle)
            || product
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&self.needle))
    }
}
