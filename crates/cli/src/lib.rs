//! # Bookshelf CLI
//!
//! Command-line interface for the Bookshelf catalog.
//!
//! Talks to the same backend as the desktop app, through the same gateway,
//! so listings, filters and mutations behave identically.
//!
//! ## Commands
//!
//! - `list` - Print one collection as a table
//! - `books` - List books matching a filter, followed by the summary
//! - `add` - Add a user, book, genre, author or review
//! - `edit-user` - Replace a user's fields
//! - `delete` - Delete a record by identifier
//!

pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{AddCommand, BookArgs, Cli, Commands, EditUserArgs};
pub use commands::run;

// Re-export dependencies for use in main.rs
pub use bookshelf_core;
pub use bookshelf_gateway;
pub use bookshelf_model;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "bookshelf_cli");
    }
}
