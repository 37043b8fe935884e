//! # Configuration
//!
//! Browse settings are managed by [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `VITRINA_PAGE_SIZE`, `VITRINA_GRID_COLUMNS`,
//!    `VITRINA_FEATURED_COUNT`.
//! 2. **Config file**: `vitrina.toml`, when the client passes one in.
//! 3. **Compiled defaults**: the original storefront's layout constants.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | 15 | Products per page |
//! | `grid_columns` | 5 | Products per grid row |
//! | `featured_count` | 4 | Products in the featured strip |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the browsing experience, stored in `vitrina.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Products shown per page.
    #[config(default = 15, env = "VITRINA_PAGE_SIZE")]
    pub page_size: usize,

    /// Products per row in the grid view.
    #[config(default = 5, env = "VITRINA_GRID_COLUMNS")]
    pub grid_columns: usize,

    /// Products shown in the featured strip on the home view.
    #[config(default = 4, env = "VITRINA_FEATURED_COUNT")]
    pub featured_count: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: 15,
            grid_columns: 5,
            featured_count: 4,
        }
    }
}

impl BrowseConfig {
    /// Load configuration from the environment over compiled defaults.
    pub fn load() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }

    /// Load configuration from the environment and a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(path).load()?)
    }

    /// Page size floored to 1 so the slicer never divides by zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
