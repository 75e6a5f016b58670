//! Terminal rendering of column tables and summaries

use bookshelf_model::{BookSummary, ColumnTable, format_rating};
use colored::Colorize;

/// Longest cell text shown before truncation
const MAX_CELL_WIDTH: usize = 40;

/// Shorten a cell to the maximum width, marking the cut
fn fit(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let mut cut: String = cell.chars().take(MAX_CELL_WIDTH - 1).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Render a table as aligned plain-text lines, identifiers first
///
/// The first line is the header row.
pub fn render_table(table: &ColumnTable) -> Vec<String> {
    let mut headers = vec!["ID".to_string()];
    headers.extend(table.columns.iter().map(|c| c.header.to_string()));

    let rows: Vec<Vec<String>> = (0..table.row_count())
        .map(|i| {
            let mut row = vec![table.ids[i].to_string()];
            row.extend(
                table
                    .columns
                    .iter()
                    .map(|c| fit(c.cells.get(i).map(String::as_str).unwrap_or(""))),
            );
            row
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|j| {
            rows.iter()
                .map(|r| r[j].chars().count())
                .chain(std::iter::once(headers[j].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![line(&headers)];
    lines.extend(rows.iter().map(|r| line(r)));
    lines
}

/// Print a table with a highlighted header
pub fn print_table(table: &ColumnTable) {
    if table.is_empty() {
        println!(
            "{}",
            format!("No {} found.", table.collection.display_name().to_lowercase()).dimmed()
        );
        return;
    }

    let mut lines = render_table(table).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{line}");
    }
}

/// One line per summary figure
pub fn render_summary(summary: &BookSummary) -> Vec<String> {
    vec![
        format!("Books:           {}", summary.count),
        format!("Average rating:  {}", format_rating(summary.mean_rating)),
        format!("Average reviews: {}", format_rating(summary.mean_reviews)),
    ]
}

pub fn print_summary(summary: &BookSummary) {
    println!();
    println!("{}", "Summary".bold());
    for line in render_summary(summary) {
        println!("  {line}");
    }
}
