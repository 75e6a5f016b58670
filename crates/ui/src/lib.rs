//! # Bookshelf UI
//!
//! Dioxus Desktop UI for the Bookshelf catalog.
//!
//! ## Features
//!
//! - Column tables for users, books, genres, authors and reviews
//! - Add popups for every record kind and an edit popup for users
//! - Book filter panel with a summary of the filtered list
//! - Status bar reporting the outcome of every backend call
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use bookshelf_core;
pub use bookshelf_model;

pub use app::App;
pub use pages::CatalogPage;
pub use state::{
    APP_STATE, AppState, Dialog, RecordDialogMode, SharedSync, StatusLevel, StatusMessage,
    UiState, init_app_state, install_gateway,
};

pub use components::{
    Checkbox, ColumnTableView, FilterDialog, RecordDialog, Select, SelectOption, SummaryPanel,
    TextArea, TextInput,
};

pub use hooks::{CatalogAction, CatalogActions, use_catalog_actions, use_initial_load};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Bookshelf";

/// Application display title
pub const TITLE: &str = "Bookshelf - Book Catalog";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Bookshelf desktop application
///
/// Connects the gateway to the configured backend and starts the UI. The
/// catalog itself is fetched by the first render.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     bookshelf_ui::launch(&CatalogConfig::load()?)?;
///     Ok(())
/// }
/// ```
pub fn launch(
    config: &bookshelf_core::CatalogConfig,
) -> Result<(), bookshelf_gateway::ClientError> {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    init_app_state(config)?;

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 820.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None) // The toolbar replaces the native menu
                .with_custom_head(custom_head),
        )
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
