//! # Column Table
//!
//! Renders a [`ColumnTable`] as an HTML table with one delete button per
//! row, plus an edit button when the host passes `on_edit`. The book view
//! also shows a [`SummaryPanel`] while a filter is applied.

use bookshelf_core::RecordId;
use bookshelf_model::{BookSummary, ColumnTable, format_rating};
use dioxus::prelude::*;

// ============================================================================
// Table
// ============================================================================

/// Row action requested from the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub id: RecordId,
    pub label: String,
}

/// Cell text for row `index`, in column order
pub fn row_cells(table: &ColumnTable, index: usize) -> Vec<&str> {
    table
        .columns
        .iter()
        .map(|column| column.cells.get(index).map(String::as_str).unwrap_or(""))
        .collect()
}

/// Collection table with row actions
#[component]
pub fn ColumnTableView(
    table: ColumnTable,
    on_delete: EventHandler<RowAction>,
    #[props(default)] on_edit: Option<EventHandler<RowAction>>,
) -> Element {
    if table.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                "No {table.collection.display_name().to_lowercase()} to show"
            }
        };
    }

    let rows: Vec<(RecordId, String, Vec<String>)> = (0..table.row_count())
        .map(|i| {
            (
                table.ids[i],
                table.labels[i].clone(),
                row_cells(&table, i).into_iter().map(str::to_string).collect(),
            )
        })
        .collect();

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    for column in table.columns.iter() {
                        th { key: "{column.header}", "{column.header}" }
                    }
                    th { class: "actions-column", "" }
                }
            }
            tbody {
                for (id, label, cells) in rows {
                    tr {
                        key: "{id}",
                        for (j, cell) in cells.iter().enumerate() {
                            td { key: "{j}", "{cell}" }
                        }
                        td {
                            class: "row-actions",
                            if let Some(on_edit) = on_edit {
                                button {
                                    class: "btn btn-small",
                                    onclick: {
                                        let label = label.clone();
                                        move |_| {
                                            on_edit.call(RowAction { id, label: label.clone() })
                                        }
                                    },
                                    "Edit"
                                }
                            }
                            button {
                                class: "btn btn-small btn-danger",
                                onclick: {
                                    let label = label.clone();
                                    move |_| on_delete.call(RowAction { id, label: label.clone() })
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Count and means over the books currently listed
#[component]
pub fn SummaryPanel(summary: BookSummary) -> Element {
    let mean_rating = format_rating(summary.mean_rating);
    let mean_reviews = format_rating(summary.mean_reviews);

    rsx! {
        section {
            class: "summary-panel",
            SummaryStat { label: "Books", value: summary.count.to_string() }
            SummaryStat { label: "Average rating", value: mean_rating }
            SummaryStat { label: "Average reviews", value: mean_reviews }
        }
    }
}

#[component]
fn SummaryStat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "summary-stat",
            span { class: "summary-value", "{value}" }
            span { class: "summary-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_model::{Catalog, CollectionSnapshot, Genre};

    #[test]
    fn test_row_cells_follow_column_order() {
        let mut catalog = Catalog::new();
        catalog.replace(CollectionSnapshot::Genres(vec![
            Genre {
                id: 1,
                name: "Fantasy".into(),
            },
            Genre {
                id: 2,
                name: "Horror".into(),
            },
        ]));

        let table = catalog.table(bookshelf_core::Collection::Genres);
        assert_eq!(row_cells(&table, 1), vec!["Horror"]);
        assert_eq!(row_cells(&table, 5), vec![""]);
    }
}
