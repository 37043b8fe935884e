//! Result ordering.
//!
//! Exactly one sort key is active at a time; name order is the default. All
//! sorts go through `sort_by`, which is stable, so records with equal keys
//! keep their catalog order.

use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The active sort order for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Name, ascending, case-insensitive.
    Name,
    /// Price, ascending.
    Price,
    /// Rating, descending.
    Rating,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Name
    }
}

impl SortKey {
    /// Compare two products under this key. Equal keys return
    /// `Ordering::Equal` so the stable sort preserves catalog order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }

    /// Stable in-place sort of a result list.
    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

// Case-insensitive comparison with the original spelling as tiebreaker,
// so "abaya" and "Abaya" order deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
