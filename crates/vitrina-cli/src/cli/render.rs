//! # Rendering Module
//!
//! Terminal output for the browse view, the detail view, and the paginator.
//! Layout math (widths, truncation, padding) is Unicode-aware via
//! `unicode-width`; styling goes through `colored`.
//!
//! Prices are formatted in es-ES locale conventions: `.` for thousands,
//! `,` for decimals, currency symbol as a suffix ("1.299,99 US$").

use colored::Colorize;
use rust_decimal::Decimal;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;
use vitrina::{BrowseView, Product, ViewMode};

const GRID_CELL_WIDTH: usize = 26;

/// Format a price in es-ES conventions with the record's currency.
pub fn format_price(amount: Decimal, currency: &str) -> String {
    let amount = amount.round_dp(2);
    let digits = format!("{:.2}", amount);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    // Group the integer part in threes with '.'
    let mut grouped = String::new();
    let chars: Vec<char> = integer.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 && *ch != '-' && chars[i - 1] != '-' {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let symbol = match currency {
        "USD" => "US$",
        "EUR" => "€",
        "GBP" => "£",
        other => other,
    };
    format!("{},{} {}", grouped, fraction, symbol)
}

/// Truncate to a display width, appending an ellipsis when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

pub fn print_browse(view: &BrowseView, grid_columns: usize) {
    print_banner(view);

    if view.items.is_empty() {
        println!();
        println!("{}", "No products found.".dimmed());
        return;
    }

    println!();
    match view.view_mode {
        ViewMode::Grid => print_grid(&view.items, grid_columns),
        ViewMode::List => print_list(&view.items),
    }

    if view.total_pages > 1 {
        println!();
        print_paginator(view);
    }
}

fn print_banner(view: &BrowseView) {
    let mut headline = format!(
        "{} of {} products",
        view.result_count.to_string().bold(),
        view.total_items
    );
    if !view.filter_label.is_empty() {
        headline.push_str(&format!("  [{}]", view.filter_label.purple()));
    }
    println!("{}", headline);

    if !view.query.trim().is_empty() {
        println!(
            "{}",
            format!("{} results for \"{}\"", view.result_count, view.query.trim()).dimmed()
        );
    }
}

// Cells are padded as plain text before any styling: ANSI escapes have a
// display width of zero but unicode-width cannot know that.
fn print_grid(items: &[Product], columns: usize) {
    let columns = columns.max(1);
    for row in items.chunks(columns) {
        for product in row {
            let name = truncate_to_width(&product.name, GRID_CELL_WIDTH - 2);
            print!("{}", pad_to_width(&name, GRID_CELL_WIDTH).bold());
        }
        println!();
        for product in row {
            let price = format_price(product.price, &product.currency);
            let line = format!("{}  ⭐ {}", price, product.rating);
            print!("{}", pad_to_width(&line, GRID_CELL_WIDTH));
        }
        println!();
        for product in row {
            let stock = if product.in_stock { "in stock" } else { "sold out" };
            let line = format!("{}  {}", product.category, stock);
            print!("{}", pad_to_width(&line, GRID_CELL_WIDTH).dimmed());
        }
        println!();
        println!();
    }
}

fn print_list(items: &[Product]) {
    for product in items {
        let mut badges = String::new();
        if product.has_discount {
            badges.push_str(&format!(" {}", "OFFER".red().bold()));
        }
        if product.vip_access {
            badges.push_str(&format!(" {}", "VIP".purple().bold()));
        }
        println!(
            "{}  {}{}  {}",
            product.id.yellow(),
            product.name.bold(),
            badges,
            format_price(product.price, &product.currency)
        );
        println!(
            "    {}",
            truncate_to_width(&product.description, 72).dimmed()
        );
        println!(
            "    {} · ⭐ {} · {}",
            product.category,
            product.rating,
            if product.in_stock {
                "in stock".green()
            } else {
                "sold out".red()
            }
        );
    }
}

fn print_paginator(view: &BrowseView) {
    let mut parts = Vec::new();
    for &n in &view.page_window.pages {
        if n == view.page {
            parts.push(format!("[{}]", n).bold().to_string());
        } else {
            parts.push(n.to_string());
        }
    }
    if let Some(last) = view.page_window.last {
        parts.push("…".dimmed().to_string());
        parts.push(last.to_string());
    }
    println!(
        "Showing {}-{} of {}   Page {} of {}:  {}",
        view.showing_from,
        view.showing_to,
        view.result_count,
        view.page,
        view.total_pages,
        parts.join(" ")
    );
}

pub fn print_product(product: &Product) {
    println!("{}", product.name.bold());
    println!("{}", "-".repeat(product.name.width().max(8)));
    println!("{}", product.description);
    println!();

    let price = format_price(product.price, &product.currency);
    match product.original_price {
        Some(original) if product.is_discounted() => {
            println!(
                "Price:    {}  (was {})",
                price.bold(),
                format_price(original, &product.currency).dimmed()
            );
        }
        _ => println!("Price:    {}", price.bold()),
    }

    println!("Category: {}", product.category);
    println!("Rating:   ⭐ {}", product.rating);
    if !product.sizes.is_empty() {
        println!("Sizes:    {}", product.sizes.join(", "));
    }
    if !product.colors.is_empty() {
        println!("Colors:   {}", product.colors.join(", "));
    }
    if !product.tags.is_empty() {
        println!("Tags:     {}", product.tags.join(", "));
    }

    let mut flags = Vec::new();
    if product.has_discount {
        flags.push("exclusive offer");
    }
    if product.free_shipping {
        flags.push("free shipping");
    }
    if product.has_warranty {
        flags.push("with warranty");
    }
    if product.vip_access {
        flags.push("VIP access");
    }
    if !flags.is_empty() {
        println!("Perks:    {}", flags.join(", "));
    }

    println!(
        "Stock:    {}",
        if product.in_stock {
            "in stock".green()
        } else {
            "sold out".red()
        }
    );
}
