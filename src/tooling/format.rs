//! Format trees, statistics and decoder listings as text.

use crate::decode::DecodeSummary;
use crate::decoder::DecoderRegistry;
use crate::views::{CategoryRow, CategoryView};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a decoded tree as an indented outline.
pub fn format_tree_text(view: &CategoryView, summary: &DecodeSummary) -> String {
    let mut out = String::new();
    write_category(&mut out, view, 0);
    out.push('\n');
    out.push_str(&format_summary_line(summary));
    out
}

fn write_category(out: &mut String, view: &CategoryView, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{}{}/", indent, view.id.bold()));
    if view.index != 0.0 {
        out.push_str(&format!(" (index {})", view.index));
    }
    if let Some(title) = view.meta.get("title") {
        out.push_str(&format!(" {}", title.dimmed()));
    }
    out.push('\n');
    for component in &view.components {
        out.push_str(&format!("{}  - {} [{}]", indent, component.id, component.kind));
        if let Some(order) = component.order {
            out.push_str(&format!(" order {}", order));
        }
        out.push('\n');
    }
    for sub in &view.sub {
        write_category(out, sub, depth + 1);
    }
}

/// One-line decode summary.
pub fn format_summary_line(summary: &DecodeSummary) -> String {
    format!(
        "{} items: {} categories merged, {} components, {} skipped.\n",
        summary.items, summary.categories, summary.components, summary.skipped
    )
}

/// Format per-category statistics as a table.
pub fn format_stats_text(rows: &[CategoryRow], summary: &DecodeSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Categories")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Index", "Subcategories", "Components"]);
    for row in rows {
        let path = if row.path.is_empty() {
            "/".to_string()
        } else {
            row.path.clone()
        };
        table.add_row(vec![
            path,
            row.index.to_string(),
            row.subcategories.to_string(),
            row.components.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format_summary_line(summary));
    out
}

/// Format the registered decoders as a table.
pub fn format_decoders_text(registry: &DecoderRegistry) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Decoders")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Prefix", "Extensions", "Identifier"]);
    for (decoder, format) in registry.iter() {
        let prefix = if format.prefix.is_empty() {
            "-".to_string()
        } else {
            format.prefix.clone()
        };
        let identifier = if format.extensions.len() == 1 {
            "name without extension"
        } else {
            "name with extension"
        };
        table.add_row(vec![
            decoder.kind().to_string(),
            prefix,
            format.extensions.join(" "),
            identifier.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} decoders.\n", registry.len()));
    out
}
