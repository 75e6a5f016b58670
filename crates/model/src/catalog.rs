//! Client-side catalog snapshot
//!
//! The [`Catalog`] holds the last successfully fetched list for each of the
//! five collections plus the active book filter. Lists are only ever
//! replaced wholesale by a fresh fetch; the client never patches a list
//! locally after a mutation.
//!
//! It also derives the views the front ends render: column tables, author
//! and genre choices, and the book summary.

use bookshelf_core::{Collection, Record, RecordId};
use serde::Serialize;
use tracing::debug;

use crate::filter::BookFilter;
use crate::records::{Author, Book, Genre, Review, User};
use crate::summary::BookSummary;

// ============================================================================
// Snapshots
// ============================================================================

/// A freshly decoded list for one collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "collection", content = "records", rename_all = "lowercase")]
pub enum CollectionSnapshot {
    Users(Vec<User>),
    Books(Vec<Book>),
    Genres(Vec<Genre>),
    Authors(Vec<Author>),
    Reviews(Vec<Review>),
}

impl CollectionSnapshot {
    pub fn collection(&self) -> Collection {
        match self {
            CollectionSnapshot::Users(_) => Collection::Users,
            CollectionSnapshot::Books(_) => Collection::Books,
            CollectionSnapshot::Genres(_) => Collection::Genres,
            CollectionSnapshot::Authors(_) => Collection::Authors,
            CollectionSnapshot::Reviews(_) => Collection::Reviews,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CollectionSnapshot::Users(v) => v.len(),
            CollectionSnapshot::Books(v) => v.len(),
            CollectionSnapshot::Genres(v) => v.len(),
            CollectionSnapshot::Authors(v) => v.len(),
            CollectionSnapshot::Reviews(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Column Tables
// ============================================================================

/// Records that can be shown as columns of text
pub trait Tabular: Record {
    /// Column headings, in display order
    const HEADERS: &'static [&'static str];

    /// Cell text for each heading
    fn cells(&self) -> Vec<String>;
}

impl Tabular for User {
    const HEADERS: &'static [&'static str] = &["Username", "Email", "Join Date", "Bio"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.email.clone(),
            self.join_date.clone(),
            self.bio.clone(),
        ]
    }
}

impl Tabular for Book {
    const HEADERS: &'static [&'static str] = &[
        "Title",
        "Author",
        "Genre",
        "Synopsis",
        "Average Rating",
        "Reviews",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author_name.clone(),
            self.genre_name.clone(),
            self.synopsis.clone(),
            format_rating(self.avg_rating),
            self.num_rating.to_string(),
        ]
    }
}

impl Tabular for Genre {
    const HEADERS: &'static [&'static str] = &["Genre"];

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl Tabular for Author {
    const HEADERS: &'static [&'static str] = &["Author"];

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl Tabular for Review {
    const HEADERS: &'static [&'static str] = &["User", "Book", "Rating", "Review", "Date"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.book_title.clone(),
            self.rating.clone(),
            self.body.clone(),
            self.review_date.clone(),
        ]
    }
}

/// Format a rating with at most two decimals and no trailing zeros
pub fn format_rating(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

/// One column of a collection view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub cells: Vec<String>,
}

/// Column-oriented view of a collection
///
/// Each field is a column, each record a row index across columns. `ids`
/// lines up with the cells so row actions know which record they target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    pub collection: Collection,
    pub ids: Vec<RecordId>,
    pub labels: Vec<String>,
    pub columns: Vec<Column>,
}

impl ColumnTable {
    pub fn from_records<T: Tabular>(records: &[T]) -> Self {
        let mut columns: Vec<Column> = T::HEADERS
            .iter()
            .map(|header| Column {
                header: *header,
                cells: Vec::with_capacity(records.len()),
            })
            .collect();

        for record in records {
            for (column, cell) in columns.iter_mut().zip(record.cells()) {
                column.cells.push(cell);
            }
        }

        Self {
            collection: T::COLLECTION,
            ids: records.iter().map(Record::id).collect(),
            labels: records.iter().map(Record::label).collect(),
            columns,
        }
    }

    pub fn row_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The last known state of every collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub books: Vec<Book>,
    pub genres: Vec<Genre>,
    pub authors: Vec<Author>,
    pub reviews: Vec<Review>,

    /// Criteria the book list was last fetched with
    pub active_filter: Option<BookFilter>,

    /// Show the book summary panel
    pub show_summary: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one collection wholesale
    pub fn replace(&mut self, snapshot: CollectionSnapshot) {
        debug!(
            "Replacing {} with {} records",
            snapshot.collection(),
            snapshot.len()
        );
        match snapshot {
            CollectionSnapshot::Users(v) => self.users = v,
            CollectionSnapshot::Books(v) => self.books = v,
            CollectionSnapshot::Genres(v) => self.genres = v,
            CollectionSnapshot::Authors(v) => self.authors = v,
            CollectionSnapshot::Reviews(v) => self.reviews = v,
        }
    }

    /// Number of records held for a collection
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Users => self.users.len(),
            Collection::Books => self.books.len(),
            Collection::Genres => self.genres.len(),
            Collection::Authors => self.authors.len(),
            Collection::Reviews => self.reviews.len(),
        }
    }

    /// Column view of a collection
    pub fn table(&self, collection: Collection) -> ColumnTable {
        match collection {
            Collection::Users => ColumnTable::from_records(&self.users),
            Collection::Books => ColumnTable::from_records(&self.books),
            Collection::Genres => ColumnTable::from_records(&self.genres),
            Collection::Authors => ColumnTable::from_records(&self.authors),
            Collection::Reviews => ColumnTable::from_records(&self.reviews),
        }
    }

    pub fn user(&self, id: RecordId) -> Option<&User> {
        self.users.iter().find(|u| u.matches_id(id))
    }

    /// Label of any held record, for confirmations
    pub fn label_of(&self, collection: Collection, id: RecordId) -> Option<String> {
        fn find<T: Record>(records: &[T], id: RecordId) -> Option<String> {
            records.iter().find(|r| r.matches_id(id)).map(Record::label)
        }

        match collection {
            Collection::Users => find(&self.users, id),
            Collection::Books => find(&self.books, id),
            Collection::Genres => find(&self.genres, id),
            Collection::Authors => find(&self.authors, id),
            Collection::Reviews => find(&self.reviews, id),
        }
    }

    // ------------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------------

    /// Record the criteria about to be fetched and reveal the summary
    pub fn apply_filter(&mut self, filter: BookFilter) {
        self.active_filter = Some(filter);
        self.show_summary = true;
    }

    /// Forget the criteria and hide the summary
    pub fn reset_filter(&mut self) {
        self.active_filter = None;
        self.show_summary = false;
    }

    /// Criteria to use when refetching books
    pub fn book_query(&self) -> Option<&BookFilter> {
        self.active_filter.as_ref()
    }

    /// Summary over the current book list, if visible
    pub fn summary(&self) -> Option<BookSummary> {
        self.show_summary.then(|| BookSummary::from_books(&self.books))
    }

    // ------------------------------------------------------------------------
    // Choices
    // ------------------------------------------------------------------------

    /// Author names offered by the filter popup
    ///
    /// Distinct non-blank names, first from the book list and then from the
    /// authors collection, in first-seen order.
    pub fn author_choices(&self) -> Vec<String> {
        let names = self
            .books
            .iter()
            .map(|b| b.author_name.as_str())
            .chain(self.authors.iter().map(|a| a.name.as_str()));
        distinct_non_blank(names)
    }

    /// Genre names offered by the filter popup
    pub fn genre_choices(&self) -> Vec<String> {
        distinct_non_blank(self.genres.iter().map(|g| g.name.as_str()))
    }

    /// Usernames offered by the review popup
    pub fn username_choices(&self) -> Vec<String> {
        distinct_non_blank(self.users.iter().map(|u| u.username.as_str()))
    }

    /// Book titles offered by the review popup
    pub fn book_choices(&self) -> Vec<String> {
        distinct_non_blank(self.books.iter().map(|b| b.title.as_str()))
    }
}

fn distinct_non_blank<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        if !name.trim().is_empty() && !seen.iter().any(|s| s == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

// ============================================================================
// Tests
// ============================================================================
