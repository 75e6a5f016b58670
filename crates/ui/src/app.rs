//! Main Application Component for Bookshelf
//!
//! This module contains the root Dioxus component that renders the entire
//! application: toolbar, collection sidebar, the catalog page, the status bar
//! and the dialog overlay.

use bookshelf_core::Collection;
use dioxus::prelude::*;

use crate::components::{FilterDialog, RecordDialog};
use crate::hooks::{CatalogAction, use_catalog_actions, use_initial_load};
use crate::pages::CatalogPage;
use crate::state::{APP_STATE, Dialog, RecordDialogMode, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // Host page loads every collection once on mount
    use_initial_load();

    rsx! {
        div {
            class: "app-container",

            Toolbar {}

            div {
                class: "app-body",
                Sidebar {}
                main {
                    class: "main-content",
                    CatalogPage {}
                }
            }

            StatusBar {}

            DialogOverlay {}
        }
    }
}

// ============================================================================
// Toolbar Component
// ============================================================================

/// Top toolbar with catalog-wide actions
#[component]
fn Toolbar() -> Element {
    let actions = use_catalog_actions();

    let state = APP_STATE.read();
    let collection = state.ui.active_collection;
    let busy = state.ui.is_busy();
    drop(state);

    rsx! {
        header {
            class: "toolbar",

            div {
                class: "toolbar-brand",
                span { class: "toolbar-logo", "📚" }
                span { "{crate::NAME}" }
            }

            ToolbarButton {
                icon: "⟳",
                label: "Refresh",
                shortcut: "F5",
                disabled: busy,
                onclick: move |_| actions.dispatch(CatalogAction::LoadAll),
            }

            ToolbarButton {
                icon: "＋",
                label: "Add {collection.record_name()}",
                onclick: move |_| {
                    APP_STATE
                        .write()
                        .ui
                        .show_dialog(Dialog::Record(RecordDialogMode::add(collection)));
                },
            }

            ToolbarButton {
                icon: "⚲",
                label: "Filter Books",
                onclick: move |_| {
                    let mut state = APP_STATE.write();
                    state.ui.show_collection(Collection::Books);
                    state.ui.show_dialog(Dialog::Filter);
                },
            }

            div { class: "flex-1" }

            if busy {
                span { class: "toolbar-busy", "Working…" }
            }
        }
    }
}

/// Toolbar button component
#[component]
fn ToolbarButton(
    icon: &'static str,
    label: String,
    #[props(default)] shortcut: &'static str,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let title = if shortcut.is_empty() {
        label.clone()
    } else {
        format!("{label} ({shortcut})")
    };

    rsx! {
        button {
            class: "toolbar-button",
            disabled,
            title: "{title}",
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            span { "{icon}" }
            span { class: "toolbar-label", "{label}" }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left sidebar listing the collections
#[component]
fn Sidebar() -> Element {
    let state = APP_STATE.read();
    let collapsed = state.ui.sidebar_collapsed;
    let current = state.ui.active_collection;
    let counts: Vec<(Collection, usize)> = Collection::ALL
        .iter()
        .map(|c| (*c, state.catalog.len(*c)))
        .collect();
    drop(state);

    rsx! {
        aside {
            class: "sidebar",
            class: if collapsed { "sidebar-collapsed" } else { "" },

            div {
                class: "sidebar-header",
                if !collapsed {
                    span { "Collections" }
                }
                button {
                    class: "sidebar-toggle",
                    title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| APP_STATE.write().ui.toggle_sidebar(),
                    if collapsed { "☰" } else { "✕" }
                }
            }

            nav {
                for (collection, count) in counts {
                    SidebarItem {
                        key: "{collection}",
                        collection,
                        current,
                        count,
                        collapsed,
                    }
                }
            }
        }
    }
}

/// Icon for a collection
fn collection_icon(collection: Collection) -> &'static str {
    match collection {
        Collection::Users => "👤",
        Collection::Books => "📖",
        Collection::Genres => "🏷",
        Collection::Authors => "✒",
        Collection::Reviews => "⭐",
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(
    collection: Collection,
    current: Collection,
    count: usize,
    collapsed: bool,
) -> Element {
    let is_active = collection == current;
    let icon = collection_icon(collection);
    let name = collection.display_name();

    rsx! {
        button {
            class: "sidebar-item",
            class: if is_active { "sidebar-item-active" } else { "" },
            title: "{name}",
            onclick: move |_| APP_STATE.write().ui.show_collection(collection),
            span { class: "sidebar-icon", "{icon}" }
            if !collapsed {
                span { class: "sidebar-name", "{name}" }
                span { class: "sidebar-count", "{count}" }
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// CSS class for a status level
fn status_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Success => "status-success",
        StatusLevel::Warning => "status-warning",
        StatusLevel::Error => "status-error",
    }
}

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let book_count = state.catalog.books.len();
    let review_count = state.catalog.reviews.len();
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span {
                    class: status_class(msg.level),
                    "{msg.text}"
                }
                button {
                    class: "status-dismiss",
                    title: "Dismiss",
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "✕"
                }
            } else {
                span { "Ready" }
            }

            div { class: "flex-1" }

            span { "Books: {book_count}" }
            span { "Reviews: {review_count}" }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Modal dialog overlay
///
/// Holds keyboard focus while a dialog is open so Escape reaches it. The
/// listener goes away with the overlay when the dialog closes.
#[component]
fn DialogOverlay() -> Element {
    let state = APP_STATE.read();
    let dialog = state.ui.active_dialog.clone();
    drop(state);

    let Some(dialog) = dialog else {
        return rsx! {};
    };
    let width = dialog.width_class();

    rsx! {
        div {
            class: "dialog-overlay",
            tabindex: 0,
            onmounted: move |e| async move {
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!("Could not focus dialog: {err:?}");
                }
            },
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    APP_STATE.write().ui.dismiss_dialog();
                }
            },

            // Backdrop
            div {
                class: "dialog-backdrop",
                onclick: move |_| {
                    APP_STATE.write().ui.dismiss_dialog();
                }
            }

            // Dialog content
            div {
                class: "dialog {width}",
                onclick: move |e| e.stop_propagation(),

                match dialog {
                    Dialog::Record(mode) => rsx! { RecordDialog { mode } },
                    Dialog::Filter => rsx! { FilterDialog {} },
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
