//! # Domain Model: Product Records
//!
//! This module defines [`Product`], the single record type everything else in
//! the engine operates on, plus the two small display enums ([`ViewMode`],
//! [`Feature`]) that travel with it.
//!
//! ## The Data Feed
//!
//! Products arrive from the catalog feed as camelCase JSON, created once at
//! startup and never mutated afterwards. The serde attributes here mirror the
//! feed exactly, including the four optional feature flags that are simply
//! absent on records that do not carry them.
//!
//! ## Flags vs. Derived Facts
//!
//! A record can say `hasDiscount: true` while its prices disagree, or carry an
//! `originalPrice` without the flag. The engine trusts the flag, never the
//! price comparison. [`Product::is_discounted`] exists for display code that
//! wants the strike-through price, not for filtering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Feature flags a product can be filtered on beyond its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Warranty,
    VipAccess,
}

/// How the result list is presented. Display-only, no effect on which
/// products are selected or in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    List,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Grid
    }
}

/// One catalog entry, as supplied by the product feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub currency: String,
    pub image_url: String,
    pub category: String,
    pub tags: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub rating: f64,
    pub in_stock: bool,
    #[serde(default)]
    pub has_discount: bool,
    #[serde(default)]
    pub free_shipping: bool,
    #[serde(default)]
    pub has_warranty: bool,
    #[serde(default)]
    pub vip_access: bool,
}

impl Product {
    /// Whether this record carries a strike-through price worth showing.
    /// Well-formed data has `original_price > price`; malformed data is
    /// not repaired here, just not displayed as a discount.
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }

    /// True if the product carries the given feature flag.
    pub fn has_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::Warranty => self.has_warranty,
            Feature::VipAccess => self.vip_access,
        }
    }
}
