//! # Facet Selectors
//!
//! A facet is one filterable attribute of a product: its category, the
//! discount flag, free shipping, or a feature flag. [`FilterSelector`] is the
//! tagged variant identifying one active facet choice.
//!
//! The sidebar panel speaks in `(kind, value)` string pairs ("category" /
//! "Abayas", "feature" / "vipAccess"). [`FilterSelector::from_parts`] resolves
//! those pairs into typed selectors; pairs that name no known facet resolve to
//! `None`, and the pipeline treats an absent selector as accept-all. An
//! unknown filter is a no-op, never an error.

use crate::model::{Feature, Product};
use serde::{Deserialize, Serialize};

/// One active facet choice. At most one selector is active at a time;
/// "no filter" is modeled as `Option<FilterSelector>::None` by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterSelector {
    /// Products flagged as discounted.
    Discount,
    /// Products in exactly this category (case-sensitive, no normalization).
    Category(String),
    /// Products shipping for free.
    Shipping,
    /// Products carrying a feature flag.
    Feature(Feature),
}

impl FilterSelector {
    /// Resolve a wire-level `(kind, value)` pair into a typed selector.
    ///
    /// Returns `None` for any pair that names no known facet, including a
    /// known kind with an unknown value. Callers treat `None` as "no
    /// filter installed".
    pub fn from_parts(kind: &str, value: &str) -> Option<Self> {
        match kind {
            "discount" if value == "hasDiscount" => Some(Self::Discount),
            "category" => Some(Self::Category(value.to_string())),
            "shipping" if value == "freeShipping" => Some(Self::Shipping),
            "feature" if value == "hasWarranty" => Some(Self::Feature(Feature::Warranty)),
            "feature" if value == "vipAccess" => Some(Self::Feature(Feature::VipAccess)),
            _ => None,
        }
    }

    /// Whether the product passes this facet. Pure and total: every product
    /// gets a boolean, nothing can fail.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Discount => product.has_discount,
            Self::Category(name) => product.category == *name,
            Self::Shipping => product.free_shipping,
            Self::Feature(feature) => product.has_feature(*feature),
        }
    }

    /// Human-readable label for the active-filter banner.
    pub fn label(&self) -> String {
        match self {
            Self::Discount => "Exclusive Offers".to_string(),
            Self::Category(name) => format!("Collection {}", name),
            Self::Shipping => "Free Shipping".to_string(),
            Self::Feature(Feature::Warranty) => "With Warranty".to_string(),
            Self::Feature(Feature::VipAccess) => "VIP Access".to_string(),
        }
    }
}
