//! Error types for Bookshelf
//!
//! This module provides unified error handling for the catalog crates,
//! covering draft validation, wire-row decoding and configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Collection;

/// The main error type for Bookshelf
#[derive(Debug, Error)]
pub enum CatalogError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field validation failed
    #[error("Field validation failed for '{record}.{field}': {message}")]
    FieldValidation {
        record: String,
        field: String,
        message: String,
    },

    // ========================================================================
    // Decode Errors
    // ========================================================================
    /// A row was not a JSON array
    #[error("Row {index} of '{collection}' is not a positional array")]
    RowShape { collection: Collection, index: usize },

    /// A row had fewer columns than the schema declares
    #[error("Row of '{collection}' has {found} columns, schema expects {expected}")]
    RowTooShort {
        collection: Collection,
        expected: usize,
        found: usize,
    },

    /// A column held a value of the wrong type
    #[error("Column '{field}' of '{collection}' has unexpected value: {found}")]
    ColumnType {
        collection: Collection,
        field: &'static str,
        found: String,
    },

    /// The schema has no column with this name
    #[error("Schema for '{collection}' has no column '{field}'")]
    UnknownColumn {
        collection: Collection,
        field: &'static str,
    },

    /// Unknown collection name
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },
}

impl CatalogError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        CatalogError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(
        record: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        CatalogError::FieldValidation {
            record: record.into(),
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation(_) | CatalogError::FieldValidation { .. }
        )
    }

    /// Check if this error came from decoding a wire row
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            CatalogError::RowShape { .. }
                | CatalogError::RowTooShort { .. }
                | CatalogError::ColumnType { .. }
                | CatalogError::UnknownColumn { .. }
        )
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Tests
// ============================================================================
