//! # API Facade
//!
//! The single entry point for a UI client: one [`CatalogApi`] per browsing
//! session owns the catalog, the browse state, the detail-overlay selection,
//! and the configuration. Clients mutate through the facade and re-derive the
//! whole visible state from [`CatalogApi::view`] after every change.
//!
//! The facade adds no logic of its own. Filtering, searching, sorting, and
//! slicing live in their modules; this layer wires them together and converts
//! the sidebar's wire-level `(kind, value)` strings into typed selectors.
//! It never writes to stdout or assumes a terminal.

use crate::catalog::Catalog;
use crate::config::BrowseConfig;
use crate::error::{Result, VitrinaError};
use crate::facet::FilterSelector;
use crate::model::{Product, ViewMode};
use crate::page::{self, PageWindow};
use crate::pipeline;
use crate::sort::SortKey;
use crate::state::{BrowseState, StateSnapshot};
use serde::Serialize;

/// Everything a renderer needs for one frame of the browsing view,
/// re-derived from scratch on every call.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseView {
    /// The visible page of results, in display order.
    pub items: Vec<Product>,
    /// Label for the active facet; empty when none.
    pub filter_label: String,
    /// The search text as typed.
    pub query: String,
    /// Result count across all pages, after filter and search.
    pub result_count: usize,
    /// Size of the unfiltered catalog.
    pub total_items: usize,
    /// The page actually served (clamped).
    pub page: usize,
    pub total_pages: usize,
    /// 1-based range of the visible slice, zero/zero when empty.
    pub showing_from: usize,
    pub showing_to: usize,
    pub page_window: PageWindow,
    pub view_mode: ViewMode,
    pub sort: SortKey,
    /// Sequencing tag; see the state module docs.
    pub revision: u64,
}

/// Facade over one catalog browsing session.
pub struct CatalogApi {
    catalog: Catalog,
    config: BrowseConfig,
    state: BrowseState,
    selected: Option<String>,
}

impl CatalogApi {
    pub fn new(catalog: Catalog, config: BrowseConfig) -> Self {
        Self {
            catalog,
            config,
            state: BrowseState::new(),
            selected: None,
        }
    }

    /// A session over the embedded demo catalog with default settings.
    pub fn demo() -> Self {
        Self::new(Catalog::builtin().clone(), BrowseConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &BrowseConfig {
        &self.config
    }

    pub fn state(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Activate a facet from the sidebar's wire-level `(kind, value)` pair,
    /// with toggle semantics. A pair naming no known facet installs nothing
    /// and clears nothing: an unknown filter is a no-op.
    pub fn select_filter(&mut self, kind: &str, value: &str) {
        if let Some(selector) = FilterSelector::from_parts(kind, value) {
            self.state.select_filter(selector);
        }
    }

    /// Activate an already-typed selector, with toggle semantics.
    pub fn select(&mut self, selector: FilterSelector) {
        self.state.select_filter(selector);
    }

    pub fn clear_filter(&mut self) {
        self.state.clear_filter();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.set_query(text);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.set_sort(sort);
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.set_view_mode(mode);
    }

    /// Run the pipeline and slice the current page.
    pub fn view(&self) -> BrowseView {
        let results = pipeline::run(
            self.catalog.products(),
            self.state.selector(),
            self.state.query(),
            self.state.sort(),
        );
        let slice = page::paginate(&results, self.config.page_size(), self.state.page());
        let window = page::window(slice.page, slice.total_pages);

        BrowseView {
            filter_label: self.state.filter_label(),
            query: self.state.query().raw().to_string(),
            result_count: slice.total_items,
            total_items: self.catalog.len(),
            page: slice.page,
            total_pages: slice.total_pages,
            showing_from: slice.first_index(),
            showing_to: slice.last_index(),
            page_window: window,
            view_mode: self.state.view_mode(),
            sort: self.state.sort(),
            revision: self.state.revision(),
            items: slice.items,
        }
    }

    /// The home view's featured strip: the head of the selector-filtered
    /// catalog in catalog order. Search and sort do not apply here.
    pub fn featured(&self) -> Vec<Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| self.state.selector().map_or(true, |s| s.matches(p)))
            .take(self.config.featured_count)
            .cloned()
            .collect()
    }

    /// Open the detail overlay on a product.
    pub fn open_product(&mut self, id: &str) -> Result<&Product> {
        match self.catalog.get(id) {
            Some(product) => {
                self.selected = Some(product.id.clone());
                Ok(product)
            }
            None => Err(VitrinaError::ProductNotFound(id.to_string())),
        }
    }

    /// Close the detail overlay. Harmless when nothing is open.
    pub fn close_product(&mut self) {
        self.selected = None;
    }

    /// The product currently shown in the detail overlay, if any.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> CatalogApi {
        CatalogApi::demo()
    }

    #[test]
    fn fresh_session_shows_page_one_of_everything() {
        let view = api().view();
        assert_eq!(view.total_items, 25);
        assert_eq!(view.result_count, 25);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 15);
        assert_eq!(view.filter_label, "");
    }

    #[test]
    fn wire_level_filter_round_trip() {
        let mut api = api();
        api.select_filter("category", "Abayas");
        let view = api.view();
        assert_eq!(view.filter_label, "Collection Abayas");
        assert!(view.items.iter().all(|p| p.category == "Abayas"));
        assert!(view.result_count < view.total_items);
    }

    #[test]
    fn unknown_wire_filter_changes_nothing() {
        let mut api = api();
        api.select_filter("category", "Abayas");
        let before = api.view();

        api.select_filter("warehouse", "lot-9");
        let after = api.view();
        assert_eq!(after.filter_label, before.filter_label);
        assert_eq!(after.result_count, before.result_count);
    }

    #[test]
    fn selecting_the_active_filter_again_clears_it() {
        let mut api = api();
        api.select_filter("feature", "vipAccess");
        assert_eq!(api.view().filter_label, "VIP Access");

        api.select_filter("feature", "vipAccess");
        let view = api.view();
        assert_eq!(view.filter_label, "");
        assert_eq!(view.result_count, view.total_items);
    }

    #[test]
    fn search_and_filter_combine() {
        let mut api = api();
        api.select_filter("shipping", "freeShipping");
        api.set_query("seda");
        let view = api.view();
        assert!(view
            .items
            .iter()
            .all(|p| p.free_shipping));
        assert!(view.result_count <= view.total_items);
    }

    #[test]
    fn featured_follows_the_selector_in_catalog_order() {
        let mut api = api();
        let featured = api.featured();
        assert_eq!(featured.len(), 4);
        assert_eq!(featured[0].id, "1");

        api.select_filter("feature", "vipAccess");
        let featured = api.featured();
        assert!(featured.iter().all(|p| p.vip_access));
        assert!(featured.len() <= 4);
    }

    #[test]
    fn detail_overlay_opens_and_closes() {
        let mut api = api();
        assert!(api.selected().is_none());

        let product = api.open_product("5").unwrap();
        assert_eq!(product.name, "Vestido Dubai Crystal");
        assert_eq!(api.selected().unwrap().id, "5");

        api.close_product();
        assert!(api.selected().is_none());
    }

    #[test]
    fn opening_a_missing_product_is_an_error() {
        let mut api = api();
        let err = api.open_product("404").unwrap_err();
        assert!(matches!(err, VitrinaError::ProductNotFound(id) if id == "404"));
        assert!(api.selected().is_none());
    }

    #[test]
    fn page_requests_are_clamped_by_view() {
        let mut api = api();
        api.set_page(99);
        let view = api.view();
        assert_eq!(view.page, view.total_pages);
        assert_eq!(view.showing_from, 16);
        assert_eq!(view.showing_to, 25);
    }
}
