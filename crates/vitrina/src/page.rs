//! # Pagination
//!
//! Slicing an ordered result list into pages, and the page-number window the
//! paginator displays. Out-of-range requests clamp; they never error. A page
//! count of zero does not exist: an empty result list is one empty page, so
//! the paginator always has something coherent to show.

use crate::model::Product;
use serde::Serialize;

/// One page of results plus the metadata the paginator needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageSlice {
    /// The visible slice, at most `page_size` items.
    pub items: Vec<Product>,
    /// The page actually served after clamping the request.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl PageSlice {
    /// 1-based index of the first item on this page, for "Showing a-b of n".
    /// Zero when the page is empty.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last item on this page. Zero when empty.
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }
}

/// Navigation window: up to five contiguous page numbers centered on the
/// current page, plus the final page as a jump target when it lies beyond
/// the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    /// `Some(total_pages)` when the window does not already reach it;
    /// rendered as "… N".
    pub last: Option<usize>,
}

/// Slice `items` for the requested page.
///
/// `page_size` must be at least 1; a zero is treated as 1 rather than
/// dividing by zero. The requested page clamps into `[1, total_pages]`.
pub fn paginate(items: &[Product], page_size: usize, requested: usize) -> PageSlice {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = requested.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageSlice {
        items,
        page,
        page_size,
        total_pages,
        total_items,
    }
}

/// Compute the page-number window for the navigation controls.
pub fn window(current: usize, total_pages: usize) -> PageWindow {
    const MAX_VISIBLE: usize = 5;

    let pages: Vec<usize> = if total_pages <= MAX_VISIBLE {
        (1..=total_pages).collect()
    } else {
        let mut start = current.saturating_sub(2).max(1);
        let end = (start + MAX_VISIBLE - 1).min(total_pages);
        if end - start + 1 < MAX_VISIBLE {
            start = end.saturating_sub(MAX_VISIBLE - 1).max(1);
        }
        (start..=end).collect()
    };

    let last = match pages.last() {
        Some(&shown) if total_pages > shown => Some(total_pages),
        _ => None,
    };

    PageWindow { pages, last }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| {
                serde_json::from_str(&format!(
                    r#"{{
                        "id": "{i}", "name": "P{i}", "description": "",
                        "price": 10.0, "currency": "USD", "imageUrl": "",
                        "category": "Abayas", "tags": [], "sizes": [],
                        "colors": [], "rating": 4.0, "inStock": true
                    }}"#
                ))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn slices_a_middle_page() {
        let items = products(37);
        let slice = paginate(&items, 15, 2);
        assert_eq!(slice.page, 2);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.total_items, 37);
        assert_eq!(slice.items.len(), 15);
        assert_eq!(slice.items[0].id, "16");
        assert_eq!(slice.first_index(), 16);
        assert_eq!(slice.last_index(), 30);
    }

    #[test]
    fn last_page_may_be_short() {
        let items = products(37);
        let slice = paginate(&items, 15, 3);
        assert_eq!(slice.items.len(), 7);
        assert_eq!(slice.items[0].id, "31");
        assert_eq!(slice.first_index(), 31);
        assert_eq!(slice.last_index(), 37);
    }

    #[test]
    fn out_of_range_requests_clamp() {
        let items = products(37);
        assert_eq!(paginate(&items, 15, 99).page, 3);
        assert_eq!(paginate(&items, 15, 0).page, 1);
    }

    #[test]
    fn empty_input_is_one_empty_page() {
        let slice = paginate(&[], 15, 1);
        assert!(slice.items.is_empty());
        assert_eq!(slice.page, 1);
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.total_items, 0);
        assert_eq!(slice.first_index(), 0);
        assert_eq!(slice.last_index(), 0);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        let items = products(3);
        let slice = paginate(&items, 0, 1);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.items.len(), 1);
    }

    #[test]
    fn concatenated_pages_reconstruct_the_input() {
        for (n, size) in [(0usize, 5usize), (1, 5), (5, 5), (6, 5), (37, 15), (25, 4)] {
            let items = products(n);
            let total = paginate(&items, size, 1).total_pages;
            let mut rebuilt = Vec::new();
            for p in 1..=total {
                rebuilt.extend(paginate(&items, size, p).items);
            }
            let got: Vec<_> = rebuilt.iter().map(|p| p.id.as_str()).collect();
            let want: Vec<_> = items.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(got, want, "n={} size={}", n, size);
        }
    }

    #[test]
    fn window_shows_all_pages_when_few() {
        assert_eq!(
            window(1, 3),
            PageWindow {
                pages: vec![1, 2, 3],
                last: None
            }
        );
        assert_eq!(
            window(5, 5),
            PageWindow {
                pages: vec![1, 2, 3, 4, 5],
                last: None
            }
        );
    }

    #[test]
    fn window_centers_on_current_page() {
        assert_eq!(window(5, 9).pages, vec![3, 4, 5, 6, 7]);
        assert_eq!(window(5, 9).last, Some(9));
    }

    #[test]
    fn window_clamps_at_the_edges() {
        let w = window(1, 9);
        assert_eq!(w.pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(w.last, Some(9));

        let w = window(9, 9);
        assert_eq!(w.pages, vec![5, 6, 7, 8, 9]);
        assert_eq!(w.last, None);
    }

    #[test]
    fn window_near_the_end_keeps_five_entries() {
        let w = window(8, 9);
        assert_eq!(w.pages, vec![5, 6, 7, 8, 9]);
        assert_eq!(w.last, None);
    }
}
