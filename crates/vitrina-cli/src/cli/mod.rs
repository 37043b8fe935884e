//! # CLI Behavior
//!
//! This module owns everything terminal-shaped: argument parsing (`setup`),
//! dispatch (`commands`), and output formatting (`render`).
//!
//! ## Naked Execution (`vitrina`)
//!
//! Running `vitrina` with no subcommand defaults to `vitrina list`: browsing
//! the catalog is the whole point, so it is the path of least resistance.
//!
//! ## One Shot, One View
//!
//! Each invocation builds a fresh browsing session, applies the requested
//! filter/search/sort/page, and renders the resulting view. The engine's
//! toggle semantics and page-reset rules still apply within the session; the
//! CLI simply issues the same mutations a sidebar click would.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Grid/list/detail formatting, currency display, paginator

mod commands;
mod render;
mod setup;

use anyhow::Result;
use clap::Parser;
use setup::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Naked vitrina: browse the catalog
    let command = cli.command.unwrap_or(Commands::List(Default::default()));

    match command {
        Commands::List(args) => commands::list(args),
        Commands::Show { id } => commands::show(&id),
        Commands::Categories => commands::categories(),
    }
}
