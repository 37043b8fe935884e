use clap::{Args, Parser, Subcommand, ValueEnum};
use vitrina::{SortKey, ViewMode};

#[derive(Parser, Debug)]
#[command(
    name = "vitrina",
    bin_name = "vitrina",
    version,
    about = "Browse the vitrina product catalog from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog: filter, search, sort, paginate
    List(ListArgs),
    /// Show one product in full detail
    Show {
        /// Product id
        id: String,
    },
    /// List the catalog's collection facets
    Categories,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Free-text search over name, description, category, and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only products in this collection
    #[arg(short, long, group = "facet")]
    pub category: Option<String>,

    /// Only discounted products
    #[arg(long, group = "facet")]
    pub discount: bool,

    /// Only products shipping for free
    #[arg(long, group = "facet")]
    pub free_shipping: bool,

    /// Only products with a warranty
    #[arg(long, group = "facet")]
    pub warranty: bool,

    /// Only VIP-access products
    #[arg(long, group = "facet")]
    pub vip: bool,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortArg::Name)]
    pub sort: SortArg,

    /// Page to show (1-based; out-of-range values clamp)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Display density
    #[arg(long, value_enum, default_value_t = ViewArg::Grid)]
    pub view: ViewArg,

    /// Emit the view as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Price,
    Rating,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Price => SortKey::Price,
            SortArg::Rating => SortKey::Rating,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Grid,
    List,
}

impl Default for ViewArg {
    fn default() -> Self {
        Self::Grid
    }
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::List => ViewMode::List,
        }
    }
}

impl Default for SortArg {
    fn default() -> Self {
        Self::Name
    }
}
