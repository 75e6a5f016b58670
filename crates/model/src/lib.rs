//! # Bookshelf Model
//!
//! The client-side data model for Bookshelf.
//!
//! ## Features
//!
//! - **Schema**: versioned column order for the backend's positional rows
//! - **Records**: users, books, genres, authors and reviews
//! - **Payloads**: keyed request bodies for creates and the user update
//! - **Drafts**: popup form state, with the add-user submit gate
//! - **Filter**: book filter criteria and their query encoding
//! - **Catalog**: the last fetched snapshot of every collection, plus views
//! - **Phase**: the popup lifecycle

pub mod catalog;
pub mod draft;
pub mod filter;
pub mod payload;
pub mod phase;
pub mod records;
pub mod schema;
pub mod summary;

pub use catalog::{Catalog, Column, ColumnTable, CollectionSnapshot, Tabular, format_rating};
pub use draft::{
    AuthorDraft, BookDraft, GenreDraft, RATING_CHOICES, RecordDraft, ReviewDraft, UserDraft,
    UserEditDraft, is_valid_email,
};
pub use filter::BookFilter;
pub use payload::RecordPayload;
pub use phase::{DialogEvent, DialogPhase, InvalidTransition};
pub use records::{Author, Book, Genre, Review, User};
pub use schema::{FromRow, SCHEMA_VERSION, WireSchema, decode_rows};
pub use summary::BookSummary;
