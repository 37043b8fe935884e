//! # Vitrina Architecture
//!
//! Vitrina is a **UI-agnostic catalog browsing engine**: not a web page that
//! happens to have some data logic, but the data logic itself, extracted so
//! that any UI (terminal, web, tests) can drive it.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Client (crates/vitrina-cli, or anything else)           │
//! │  - Renders BrowseView; the only place that knows terminals  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - One CatalogApi per session                               │
//! │  - Resolves wire-level (kind, value) pairs to selectors     │
//! │  - Re-derives BrowseView after every mutation               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (facet, search, sort, pipeline, page, state)        │
//! │  - Pure functions plus one mutable coordinator              │
//! │  - No I/O, no clocks, no failure modes                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Store (catalog.rs)                                 │
//! │  - Immutable ordered product list, built once               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Total Functions Over the Whole Domain
//!
//! The engine has no failure-prone I/O, so it has no error taxonomy beyond
//! its boundaries. Unknown filter pairs are accept-all, out-of-range pages
//! clamp, empty result sets are a valid state. Errors exist only where data
//! enters (catalog parsing, config loading) or where a lookup can genuinely
//! miss (opening a product by id).
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`catalog`]: The immutable product store and embedded demo data
//! - [`facet`]: Typed filter selectors and their predicates
//! - [`search`]: Free-text matching
//! - [`sort`]: Sort keys and stable ordering
//! - [`pipeline`]: The composed filter → search → sort computation
//! - [`page`]: Pagination slicing and the page-number window
//! - [`state`]: The browse-state coordinator (toggle and reset semantics)
//! - [`config`]: Layout settings (page size, grid columns, featured count)
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod facet;
pub mod model;
pub mod page;
pub mod pipeline;
pub mod search;
pub mod sort;
pub mod state;

pub use api::{BrowseView, CatalogApi};
pub use catalog::Catalog;
pub use config::BrowseConfig;
pub use error::{Result, VitrinaError};
pub use facet::FilterSelector;
pub use model::{Feature, Product, ViewMode};
pub use search::SearchQuery;
pub use sort::SortKey;
pub use state::BrowseState;
