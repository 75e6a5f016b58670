//! # Bookshelf Core
//!
//! Core types, traits, configuration and error handling for Bookshelf.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Types**: the five server collections, record identifiers and the
//!   mutation → invalidated-collections table
//! - **Traits**: `Validatable` for popup drafts, `Record` for fetched rows
//! - **Config**: `CatalogConfig` (defaults, `bookshelf.toml`, environment)
//! - **Errors**: unified error handling with `CatalogError` and `CatalogResult`
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use traits::{Record, Validatable};
pub use types::{Collection, CollectionSet, MutationKind, RecordId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
