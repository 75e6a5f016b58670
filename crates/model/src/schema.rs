//! Wire schema for positional rows
//!
//! The backend answers every `GET` with an array of rows, and every row is a
//! positional JSON array rather than an object. The column order per
//! collection is the de facto wire format; it lives in one table here so a
//! backend field-order change is a one-place edit.
//!
//! ## Version 1 column order
//!
//! ```text
//! users    userID, username, email, join_date, bio
//! books    bookID, book_name, author_name, genre_name, synopsis, avg_rating, num_rating
//! genres   genreID, genre_name
//! authors  authorID, author_name
//! reviews  reviewID, username, book_name, rating, review, review_date
//! ```

use bookshelf_core::{CatalogError, CatalogResult, Collection, RecordId};
use serde_json::Value;

// ============================================================================
// Schema Tables
// ============================================================================

/// Current wire schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Column order for a single collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSchema {
    pub collection: Collection,
    pub fields: &'static [&'static str],
}

impl CollectionSchema {
    /// Position of a named column
    pub fn index_of(&self, field: &'static str) -> CatalogResult<usize> {
        self.fields
            .iter()
            .position(|f| *f == field)
            .ok_or(CatalogError::UnknownColumn {
                collection: self.collection,
                field,
            })
    }

    /// Number of columns a row must carry
    pub fn width(&self) -> usize {
        self.fields.len()
    }
}

/// Column orders for all five collections at one schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireSchema {
    pub version: u32,
    users: CollectionSchema,
    books: CollectionSchema,
    genres: CollectionSchema,
    authors: CollectionSchema,
    reviews: CollectionSchema,
}

impl WireSchema {
    /// Schema version 1, matching the Flask backend
    pub const V1: WireSchema = WireSchema {
        version: 1,
        users: CollectionSchema {
            collection: Collection::Users,
            fields: &["userID", "username", "email", "join_date", "bio"],
        },
        books: CollectionSchema {
            collection: Collection::Books,
            fields: &[
                "bookID",
                "book_name",
                "author_name",
                "genre_name",
                "synopsis",
                "avg_rating",
                "num_rating",
            ],
        },
        genres: CollectionSchema {
            collection: Collection::Genres,
            fields: &["genreID", "genre_name"],
        },
        authors: CollectionSchema {
            collection: Collection::Authors,
            fields: &["authorID", "author_name"],
        },
        reviews: CollectionSchema {
            collection: Collection::Reviews,
            fields: &[
                "reviewID",
                "username",
                "book_name",
                "rating",
                "review",
                "review_date",
            ],
        },
    };

    /// The schema the client currently speaks
    pub const fn current() -> WireSchema {
        Self::V1
    }

    /// Column order for a collection
    pub fn for_collection(&self, collection: Collection) -> &CollectionSchema {
        match collection {
            Collection::Users => &self.users,
            Collection::Books => &self.books,
            Collection::Genres => &self.genres,
            Collection::Authors => &self.authors,
            Collection::Reviews => &self.reviews,
        }
    }
}

impl Default for WireSchema {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// Row Reader
// ============================================================================

/// Named access to the columns of one positional row
#[derive(Debug)]
pub struct RowReader<'a> {
    schema: &'a CollectionSchema,
    row: &'a [Value],
}

impl<'a> RowReader<'a> {
    /// Wrap a raw row, checking its shape against the schema
    pub fn new(schema: &'a CollectionSchema, row: &'a Value, index: usize) -> CatalogResult<Self> {
        let Value::Array(columns) = row else {
            return Err(CatalogError::RowShape {
                collection: schema.collection,
                index,
            });
        };

        if columns.len() < schema.width() {
            return Err(CatalogError::RowTooShort {
                collection: schema.collection,
                expected: schema.width(),
                found: columns.len(),
            });
        }

        Ok(Self {
            schema,
            row: columns.as_slice(),
        })
    }

    fn column(&self, field: &'static str) -> CatalogResult<&'a Value> {
        let index = self.schema.index_of(field)?;
        Ok(&self.row[index])
    }

    fn type_error(&self, field: &'static str, found: &Value) -> CatalogError {
        CatalogError::ColumnType {
            collection: self.schema.collection,
            field,
            found: found.to_string(),
        }
    }

    /// A required integer identifier
    pub fn id(&self, field: &'static str) -> CatalogResult<RecordId> {
        let value = self.column(field)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| self.type_error(field, value))
    }

    /// A text column; `null` becomes the empty string
    pub fn text(&self, field: &'static str) -> CatalogResult<String> {
        match self.column(field)? {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(self.type_error(field, other)),
        }
    }

    /// A numeric column; `null` becomes zero
    pub fn number_or_zero(&self, field: &'static str) -> CatalogResult<f64> {
        match self.column(field)? {
            Value::Null => Ok(0.0),
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| self.type_error(field, &Value::Number(n.clone()))),
            Value::String(s) if s.trim().is_empty() => Ok(0.0),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.type_error(field, &Value::String(s.clone()))),
            other => Err(self.type_error(field, other)),
        }
    }

    /// A whole-number column; `null` becomes zero, fractions truncate
    pub fn count_or_zero(&self, field: &'static str) -> CatalogResult<u64> {
        let value = self.number_or_zero(field)?;
        if value < 0.0 {
            let raw = self.column(field)?;
            return Err(self.type_error(field, raw));
        }
        Ok(value.trunc() as u64)
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Types that can be built from a positional row
pub trait FromRow: Sized {
    /// Collection whose schema describes the row
    const SOURCE: Collection;

    /// Build the record from named columns
    fn from_row(row: &RowReader<'_>) -> CatalogResult<Self>;
}

/// Decode a full GET response body into records
///
/// The body must be a JSON array of rows. Any malformed row fails the whole
/// decode so a half-mapped list is never shown.
pub fn decode_rows<T: FromRow>(schema: &WireSchema, body: &Value) -> CatalogResult<Vec<T>> {
    let table = schema.for_collection(T::SOURCE);
    let Value::Array(rows) = body else {
        return Err(CatalogError::RowShape {
            collection: T::SOURCE,
            index: 0,
        });
    };

    rows.iter()
        .enumerate()
        .map(|(index, row)| T::from_row(&RowReader::new(table, row, index)?))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_schema_version() {
        assert_eq!(SCHEMA_VERSION, 1);
        assert_eq!(WireSchema::current().version, SCHEMA_VERSION);
    }

    #[test]
    fn test_book_column_order() {
        let schema = WireSchema::current();
        let books = schema.for_collection(Collection::Books);
        assert_eq!(books.width(), 7);
        assert_eq!(books.index_of("bookID").unwrap(), 0);
        assert_eq!(books.index_of("avg_rating").unwrap(), 5);
        assert_eq!(books.index_of("num_rating").unwrap(), 6);
        assert!(books.index_of("isbn").is_err());
    }

    #[test]
    fn test_every_collection_starts_with_its_id() {
        let schema = WireSchema::current();
        for collection in Collection::ALL {
            let first = schema.for_collection(collection).fields[0];
            assert!(first.ends_with("ID"), "{collection}: {first}");
        }
    }

    #[test]
    fn test_reader_rejects_objects() {
        let schema = WireSchema::current();
        let row = json!({"userID": 1});
        let err = RowReader::new(schema.for_collection(Collection::Users), &row, 3).unwrap_err();
        assert!(matches!(err, CatalogError::RowShape { index: 3, .. }));
    }

    #[test]
    fn test_reader_rejects_short_rows() {
        let schema = WireSchema::current();
        let row = json!([1, "Dune"]);
        let err = RowReader::new(schema.for_collection(Collection::Books), &row, 0).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RowTooShort {
                expected: 7,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_reader_null_handling() {
        let schema = WireSchema::current();
        let row = json!([7, "Dune", null, "Sci-Fi", "Spice", null, 0]);
        let reader = RowReader::new(schema.for_collection(Collection::Books), &row, 0).unwrap();

        assert_eq!(reader.id("bookID").unwrap(), 7);
        assert_eq!(reader.text("author_name").unwrap(), "");
        assert_eq!(reader.number_or_zero("avg_rating").unwrap(), 0.0);
        assert_eq!(reader.count_or_zero("num_rating").unwrap(), 0);
    }

    #[test]
    fn test_reader_numeric_strings() {
        let schema = WireSchema::current();
        let row = json!([3, "ana", "Dune", "4", "Great", "2024-01-01"]);
        let reader = RowReader::new(schema.for_collection(Collection::Reviews), &row, 0).unwrap();
        assert_eq!(reader.number_or_zero("rating").unwrap(), 4.0);
    }

    #[test]
    fn test_reader_type_errors() {
        let schema = WireSchema::current();
        let row = json!(["abc", "ana", [1], "x", "y", "z"]);
        let reader = RowReader::new(schema.for_collection(Collection::Reviews), &row, 0).unwrap();
        assert!(reader.id("reviewID").unwrap_err().is_decode());
        assert!(reader.text("book_name").unwrap_err().is_decode());
        assert!(reader.number_or_zero("rating").unwrap_err().is_decode());
    }
}
