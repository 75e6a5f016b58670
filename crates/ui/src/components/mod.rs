//! # UI Components
//!
//! Reusable Dioxus components for the Bookshelf catalog.
//!
//! - **Inputs**: form input components (text, select, checkbox)
//! - **Column Table**: a collection rendered as columns with row actions,
//!   and the book summary panel
//! - **Dialogs**: record popups and the filter panel
//!
//! ## Component Hierarchy
//!
//! ```text
//! CatalogPage
//! ├── SummaryPanel (books, while filtered)
//! └── ColumnTableView
//!
//! DialogOverlay
//! ├── RecordDialog
//! │   ├── AddUserForm / AddBookForm / ... (DialogFrame + inputs)
//! │   └── EditUserForm
//! └── FilterDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod column_table;
pub mod dialogs;
pub mod inputs;

// ============================================================================
// Re-exports
// ============================================================================

pub use column_table::{ColumnTableView, RowAction, SummaryPanel};
pub use dialogs::{FilterDialog, RecordDialog};
pub use inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};
