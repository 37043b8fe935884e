//! # The Filter/Search/Sort Pipeline
//!
//! The computational heart of the engine: catalog order in, result order out.
//!
//! ```text
//! catalog ──▶ search predicate ──▶ facet predicate ──▶ stable sort ──▶ results
//! ```
//!
//! Both predicates are pure booleans over a single record, so their relative
//! order cannot change the outcome; they are applied in one pass. The input
//! slice is never mutated and a fresh result list is produced on every call.
//! Zero matches is a valid result, not an error.

use crate::facet::FilterSelector;
use crate::model::Product;
use crate::search::SearchQuery;
use crate::sort::SortKey;

/// Run the full pipeline over a catalog slice.
///
/// `selector` absent means no facet constraint; an empty `query` means no
/// search constraint. Both constraints apply simultaneously (logical AND).
pub fn run(
    products: &[Product],
    selector: Option<&FilterSelector>,
    query: &SearchQuery,
    sort: SortKey,
) -> Vec<Product> {
    let mut results: Vec<Product> = products
        .iter()
        .filter(|p| query.matches(p))
        .filter(|p| selector.map_or(true, |s| s.matches(p)))
        .cloned()
        .collect();
    sort.sort(&mut results);
    results
}
