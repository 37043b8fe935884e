//! Per-command handlers. Each one builds a browsing session over the
//! embedded catalog, applies the requested state, and prints the result.
//! No browsing decision is made here.

use super::render;
use super::setup::ListArgs;
use anyhow::{Context, Result};
use vitrina::{BrowseConfig, Catalog, CatalogApi, Feature, FilterSelector};

fn session() -> Result<CatalogApi> {
    let config = BrowseConfig::load().context("loading configuration")?;
    Ok(CatalogApi::new(Catalog::builtin().clone(), config))
}

fn selector_from_args(args: &ListArgs) -> Option<FilterSelector> {
    if args.discount {
        Some(FilterSelector::Discount)
    } else if args.free_shipping {
        Some(FilterSelector::Shipping)
    } else if args.warranty {
        Some(FilterSelector::Feature(Feature::Warranty))
    } else if args.vip {
        Some(FilterSelector::Feature(Feature::VipAccess))
    } else {
        args.category.clone().map(FilterSelector::Category)
    }
}

pub fn list(args: ListArgs) -> Result<()> {
    let mut api = session()?;

    if let Some(selector) = selector_from_args(&args) {
        api.select(selector);
    }
    if let Some(term) = &args.search {
        api.set_query(term.clone());
    }
    api.set_sort(args.sort.into());
    api.set_view_mode(args.view.into());
    // Page last: every mutation above resets it to 1
    api.set_page(args.page);

    let view = api.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_browse(&view, api.config().grid_columns.max(1));
    }
    Ok(())
}

pub fn show(id: &str) -> Result<()> {
    let mut api = session()?;
    let product = api.open_product(id)?.clone();
    render::print_product(&product);
    Ok(())
}

pub fn categories() -> Result<()> {
    let api = session()?;
    let catalog = api.catalog();
    for category in catalog.categories() {
        let count = catalog
            .products()
            .iter()
            .filter(|p| p.category == category)
            .count();
        println!("{}  ({})", category, count);
    }
    Ok(())
}
