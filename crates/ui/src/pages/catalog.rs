//! Catalog Page Component
//!
//! Shows the active collection as a column table. The book view adds the
//! filter controls and, while a filter is applied, the summary panel.
//! Deleting a row acts immediately; there is no confirmation step.

use bookshelf_core::Collection;
use dioxus::prelude::*;

use crate::components::{ColumnTableView, RowAction, SummaryPanel};
use crate::hooks::{CatalogAction, use_catalog_actions};
use crate::state::{APP_STATE, Dialog, RecordDialogMode};

/// Host page for the active collection
#[component]
pub fn CatalogPage() -> Element {
    let actions = use_catalog_actions();

    let state = APP_STATE.read();
    let collection = state.ui.active_collection;
    let table = state.catalog.table(collection);
    let summary = match collection {
        Collection::Books => state.catalog.summary(),
        _ => None,
    };
    let filtered = state.catalog.active_filter.is_some();
    drop(state);

    let on_edit = (collection == Collection::Users).then(|| {
        EventHandler::new(move |row: RowAction| {
            APP_STATE
                .write()
                .ui
                .show_dialog(Dialog::Record(RecordDialogMode::EditUser(row.id)));
        })
    });

    rsx! {
        div {
            class: "catalog-page",

            header {
                class: "page-header",
                h1 { "{collection.display_name()}" }
                span { class: "page-count", "{table.row_count()} shown" }

                div { class: "flex-1" }

                if collection == Collection::Books {
                    button {
                        class: "btn",
                        onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::Filter),
                        "Filter"
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        APP_STATE
                            .write()
                            .ui
                            .show_dialog(Dialog::Record(RecordDialogMode::add(collection)));
                    },
                    "Add {collection.record_name()}"
                }
            }

            if collection == Collection::Books && filtered {
                div {
                    class: "filter-banner",
                    span { "Showing filtered books" }
                    button {
                        class: "btn btn-link",
                        onclick: move |_| actions.dispatch(CatalogAction::ResetFilter),
                        "Reset filter"
                    }
                }
            }

            if let Some(summary) = summary {
                SummaryPanel { summary }
            }

            ColumnTableView {
                table,
                on_edit,
                on_delete: move |row: RowAction| actions.delete(collection, row.id, row.label),
            }
        }
    }
}
