//! # UI Hooks
//!
//! Custom Dioxus hooks for the Bookshelf UI.
//!
//! - Catalog actions: load, submit, delete, filter and reset, each followed
//!   by the refetch its mutation calls for

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_catalog;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_catalog::{CatalogAction, CatalogActions, use_catalog_actions, use_initial_load};
