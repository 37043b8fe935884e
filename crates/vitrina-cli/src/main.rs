//! # Vitrina CLI
//!
//! A terminal client for the vitrina catalog engine. The binary is
//! intentionally thin: the CLI lives in `src/cli/`, this file only invokes
//! `cli::run()` and handles process termination.
//!
//! The CLI is **one possible UI client**, the only place in the workspace
//! that knows about stdout/stderr, exit codes, and terminal widths. Every
//! browsing decision (what matches, in what order, which page) is made by
//! the `vitrina` library and merely rendered here.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
