//! Core traits for Bookshelf
//!
//! This module defines the behaviours shared by records and popup drafts:
//! validation before submit, and identification of a fetched record.

use crate::error::CatalogResult;
use crate::types::{Collection, RecordId};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Popup drafts implement this to decide whether their submit control is
/// enabled.
///
/// # Example
///
/// ```rust,ignore
/// use bookshelf_core::{CatalogError, CatalogResult, Validatable};
///
/// struct GenreDraft {
///     name: String,
/// }
///
/// impl Validatable for GenreDraft {
///     fn validate(&self) -> CatalogResult<()> {
///         if self.name.is_empty() {
///             return Err(CatalogError::validation("Genre name is required"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `CatalogError` describing the problem.
    fn validate(&self) -> CatalogResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Record Trait
// ============================================================================

/// A record fetched from one of the server collections
pub trait Record {
    /// Collection this record belongs to
    const COLLECTION: Collection;

    /// Server-assigned identifier
    fn id(&self) -> RecordId;

    /// Short label used in delete confirmations and status lines
    fn label(&self) -> String;

    /// Check if this matches another identifier
    fn matches_id(&self, id: RecordId) -> bool {
        self.id() == id
    }
}

// ============================================================================
// Tests
// ============================================================================
