//! Records as the backend returns them
//!
//! Each record is decoded from a positional row through the wire schema and
//! carries its server-assigned identifier. Author and genre names on books
//! and reviews are denormalized text, not references.

use bookshelf_core::{CatalogResult, Collection, Record, RecordId};
use serde::{Deserialize, Serialize};

use crate::schema::{FromRow, RowReader};

// ============================================================================
// User
// ============================================================================

/// A registered reader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    /// Free-form date text, shown as returned
    pub join_date: String,
    pub bio: String,
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        self.username.clone()
    }
}

impl FromRow for User {
    const SOURCE: Collection = Collection::Users;

    fn from_row(row: &RowReader<'_>) -> CatalogResult<Self> {
        Ok(Self {
            id: row.id("userID")?,
            username: row.text("username")?,
            email: row.text("email")?,
            join_date: row.text("join_date")?,
            bio: row.text("bio")?,
        })
    }
}

// ============================================================================
// Book
// ============================================================================

/// A catalogued book with its aggregate review data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    pub author_name: String,
    pub genre_name: String,
    pub synopsis: String,
    /// Mean review rating; 0 when the book has no reviews
    pub avg_rating: f64,
    /// Number of reviews
    pub num_rating: u64,
}

impl Record for Book {
    const COLLECTION: Collection = Collection::Books;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl FromRow for Book {
    const SOURCE: Collection = Collection::Books;

    fn from_row(row: &RowReader<'_>) -> CatalogResult<Self> {
        Ok(Self {
            id: row.id("bookID")?,
            title: row.text("book_name")?,
            author_name: row.text("author_name")?,
            genre_name: row.text("genre_name")?,
            synopsis: row.text("synopsis")?,
            avg_rating: row.number_or_zero("avg_rating")?,
            num_rating: row.count_or_zero("num_rating")?,
        })
    }
}

// ============================================================================
// Genre / Author
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: RecordId,
    pub name: String,
}

impl Record for Genre {
    const COLLECTION: Collection = Collection::Genres;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl FromRow for Genre {
    const SOURCE: Collection = Collection::Genres;

    fn from_row(row: &RowReader<'_>) -> CatalogResult<Self> {
        Ok(Self {
            id: row.id("genreID")?,
            name: row.text("genre_name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: RecordId,
    pub name: String,
}

impl Record for Author {
    const COLLECTION: Collection = Collection::Authors;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl FromRow for Author {
    const SOURCE: Collection = Collection::Authors;

    fn from_row(row: &RowReader<'_>) -> CatalogResult<Self> {
        Ok(Self {
            id: row.id("authorID")?,
            name: row.text("author_name")?,
        })
    }
}

// ============================================================================
// Review
// ============================================================================

/// A user's review of a book, joined to names by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: RecordId,
    pub username: String,
    pub book_title: String,
    /// As stored by the backend, which keeps whatever text was posted
    pub rating: String,
    pub body: String,
    pub review_date: String,
}

impl Record for Review {
    const COLLECTION: Collection = Collection::Reviews;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        format!("{} on {}", self.username, self.book_title)
    }
}

impl FromRow for Review {
    const SOURCE: Collection = Collection::Reviews;

    fn from_row(row: &RowReader<'_>) -> CatalogResult<Self> {
        Ok(Self {
            id: row.id("reviewID")?,
            username: row.text("username")?,
            book_title: row.text("book_name")?,
            rating: row.text("rating")?,
            body: row.text("review")?,
            review_date: row.text("review_date")?,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
