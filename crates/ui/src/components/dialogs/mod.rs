//! # Dialog Components
//!
//! Popups opened over the catalog page.
//!
//! ## Dialogs
//!
//! - **RecordDialog**: add a user, book, genre, author or review, or edit a
//!   user
//! - **FilterDialog**: book filter criteria
//!
//! ## Usage
//!
//! ```rust,ignore
//! rsx! {
//!     RecordDialog { mode: RecordDialogMode::AddGenre }
//!     FilterDialog {}
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod edit_user_dialog;
pub mod filter_dialog;
pub mod frame;
pub mod record_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use edit_user_dialog::EditUserForm;
pub use filter_dialog::FilterDialog;
pub use frame::DialogFrame;
pub use record_dialog::RecordDialog;
