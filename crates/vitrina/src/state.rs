//! # Browse State Coordinator
//!
//! The single source of truth for which facet selector is active, what the
//! visitor searched for, how results are sorted, which page is showing, and
//! the display density. Every UI surface (sidebar, banner, grid, paginator)
//! reads from here; none of them keeps its own copy.
//!
//! ## Toggle semantics
//!
//! Selecting the already-active selector clears it; selecting a different one
//! replaces it. At most one selector is ever active.
//!
//! ## Page reset
//!
//! Changing the selector, the query, or the sort key snaps the page back
//! to 1: the result set just changed shape, so the old page number is
//! meaningless. Switching view mode does not touch the page.
//!
//! ## Revisions
//!
//! Each mutation bumps a monotonically increasing revision. A client that
//! wraps mutations in a cosmetic transition delay tags the in-flight request
//! with the revision it started from and discards any completion whose tag no
//! longer matches [`BrowseState::revision`]. Last write wins; a slow earlier
//! request can never overwrite a later one. The engine itself is synchronous
//! and needs none of this.

use crate::facet::FilterSelector;
use crate::model::ViewMode;
use crate::search::SearchQuery;
use crate::sort::SortKey;
use serde::Serialize;

/// Mutable browse state. Mutations are synchronous and immediately visible
/// to the next pipeline run.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    selector: Option<FilterSelector>,
    query: SearchQuery,
    sort: SortKey,
    view_mode: ViewMode,
    page: usize,
    revision: u64,
}

/// An immutable copy of the coordinator state, for render layers that want
/// a consistent view without holding a borrow.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub selector: Option<FilterSelector>,
    pub query: String,
    pub sort: SortKey,
    pub view_mode: ViewMode,
    pub page: usize,
    pub revision: u64,
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    pub fn selector(&self) -> Option<&FilterSelector> {
        self.selector.as_ref()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The requested page, 1-based. Clamping against the live result count
    /// happens at pagination time, not here.
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Sequencing tag for stale-completion discard. Strictly increasing
    /// across mutations.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Display label for the active selector; empty when none is active.
    pub fn filter_label(&self) -> String {
        self.selector.as_ref().map(FilterSelector::label).unwrap_or_default()
    }

    /// Activate a selector, with toggle semantics: selecting the currently
    /// active selector clears it instead. Resets the page either way.
    pub fn select_filter(&mut self, selector: FilterSelector) {
        if self.selector.as_ref() == Some(&selector) {
            self.selector = None;
        } else {
            self.selector = Some(selector);
        }
        self.reset_page();
    }

    /// Drop any active selector and reset the page.
    pub fn clear_filter(&mut self) {
        self.selector = None;
        self.reset_page();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
        self.reset_page();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.reset_page();
    }

    /// Request a page. Does not reset anything; the slicer clamps.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.revision += 1;
    }

    /// Display density only. The page survives a density switch.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.revision += 1;
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            selector: self.selector.clone(),
            query: self.query.raw().to_string(),
            sort: self.sort,
            view_mode: self.view_mode,
            page: self.page(),
            revision: self.revision,
        }
    }

    fn reset_page(&mut self) {
        self.page = 1;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Feature;

    #[test]
    fn selecting_twice_toggles_off() {
        let mut state = BrowseState::new();
        let vip = FilterSelector::Feature(Feature::VipAccess);

        state.select_filter(vip.clone());
        assert_eq!(state.selector(), Some(&vip));

        state.select_filter(vip);
        assert_eq!(state.selector(), None);
    }

    #[test]
    fn selecting_a_second_filter_replaces_the_first() {
        let mut state = BrowseState::new();
        state.select_filter(FilterSelector::Discount);
        state.select_filter(FilterSelector::Category("Abayas".into()));

        assert_eq!(
            state.selector(),
            Some(&FilterSelector::Category("Abayas".into()))
        );
    }

    #[test]
    fn equal_category_selectors_toggle_structurally() {
        let mut state = BrowseState::new();
        state.select_filter(FilterSelector::Category("Abayas".into()));
        // A fresh but equal value toggles off: equality is structural,
        // not identity
        state.select_filter(FilterSelector::Category("Abayas".into()));
        assert_eq!(state.selector(), None);
    }

    #[test]
    fn mutations_reset_the_page() {
        let mut state = BrowseState::new();
        state.set_page(4);
        assert_eq!(state.page(), 4);

        state.select_filter(FilterSelector::Shipping);
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.set_query("seda");
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.set_sort(SortKey::Price);
        assert_eq!(state.page(), 1);

        state.set_page(5);
        state.clear_filter();
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn view_mode_keeps_the_page() {
        let mut state = BrowseState::new();
        state.set_page(3);
        state.set_view_mode(ViewMode::List);
        assert_eq!(state.page(), 3);
        assert_eq!(state.view_mode(), ViewMode::List);
    }

    #[test]
    fn revision_increases_on_every_mutation() {
        let mut state = BrowseState::new();
        let r0 = state.revision();
        state.select_filter(FilterSelector::Discount);
        let r1 = state.revision();
        state.set_query("oro");
        let r2 = state.revision();
        state.set_view_mode(ViewMode::List);
        let r3 = state.revision();
        assert!(r0 < r1 && r1 < r2 && r2 < r3);
    }

    #[test]
    fn label_follows_the_active_selector() {
        let mut state = BrowseState::new();
        assert_eq!(state.filter_label(), "");

        state.select_filter(FilterSelector::Discount);
        assert_eq!(state.filter_label(), "Exclusive Offers");

        state.clear_filter();
        assert_eq!(state.filter_label(), "");
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut state = BrowseState::new();
        state.set_query("seda");
        let snap = state.snapshot();

        state.set_query("lino");
        assert_eq!(snap.query, "seda");
        assert_eq!(state.query().raw(), "lino");
    }

    #[test]
    fn zero_page_request_is_floored_to_one() {
        let mut state = BrowseState::new();
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }
}
