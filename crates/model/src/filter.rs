//! Book filter criteria
//!
//! The filter popup edits a [`BookFilter`]; applying it sends the criteria
//! to `GET /books` as query parameters. Values are sent verbatim, empty ones
//! included, and the backend ignores empty criteria.
//!
//! ## Features
//!
//! - Title and author text criteria
//! - Genre checkboxes with set semantics (no duplicates, insertion order)
//! - Minimum average rating and minimum review count; a negative minimum is
//!   replaced with `"0"` as soon as it is entered

use serde::{Deserialize, Serialize};

/// Query key for a repeated genre criterion
pub const GENRES_KEY: &str = "genres[]";

/// Filter criteria for the book list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFilter {
    pub book_name: String,
    pub author_name: String,
    pub genres: Vec<String>,
    pub avg_rating: String,
    pub num_rating: String,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_book_name(&mut self, value: impl Into<String>) {
        self.book_name = value.into();
    }

    pub fn set_author_name(&mut self, value: impl Into<String>) {
        self.author_name = value.into();
    }

    /// Set the minimum average rating, kept as given
    pub fn set_avg_rating(&mut self, value: impl Into<String>) {
        self.avg_rating = value.into();
    }

    /// Set the minimum review count, clamping negatives to `"0"`
    pub fn set_num_rating(&mut self, value: impl Into<String>) {
        self.num_rating = clamp_non_negative(value.into());
    }

    /// Check or uncheck a genre
    pub fn toggle_genre(&mut self, genre: &str, checked: bool) {
        if checked {
            if !self.has_genre(genre) {
                self.genres.push(genre.to_string());
            }
        } else {
            self.genres.retain(|g| g != genre);
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Check if no criterion is set
    pub fn is_empty(&self) -> bool {
        self.book_name.is_empty()
            && self.author_name.is_empty()
            && self.genres.is_empty()
            && self.avg_rating.is_empty()
            && self.num_rating.is_empty()
    }

    /// Query parameters for `GET /books`
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("bookName".to_string(), self.book_name.clone()),
            ("authorName".to_string(), self.author_name.clone()),
            ("avg_rating".to_string(), self.avg_rating.clone()),
            ("num_rating".to_string(), self.num_rating.clone()),
        ];
        query.extend(
            self.genres
                .iter()
                .map(|genre| (GENRES_KEY.to_string(), genre.clone())),
        );
        query
    }
}

/// Replace a value whose leading integer is negative with `"0"`
///
/// Anything else (empty, non-numeric, non-negative) is kept as typed.
pub fn clamp_non_negative(value: String) -> String {
    match leading_integer(&value) {
        Some(n) if n < 0 => "0".to_string(),
        _ => value,
    }
}

/// Parse the integer prefix of a string: optional whitespace, optional sign,
/// then digits. Trailing text is ignored.
fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    // Overflowing magnitudes still carry their sign
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negative_review_count_clamps_to_zero() {
        let mut filter = BookFilter::new();
        filter.set_num_rating("-5");
        assert_eq!(filter.num_rating, "0");
        filter.set_num_rating("-1.5");
        assert_eq!(filter.num_rating, "0");
    }

    #[test]
    fn test_rating_threshold_is_not_clamped() {
        let mut filter = BookFilter::new();
        filter.set_avg_rating("-3");
        assert_eq!(filter.avg_rating, "-3");
    }

    #[test]
    fn test_other_minimums_kept_verbatim() {
        let mut filter = BookFilter::new();
        filter.set_avg_rating("3.5");
        filter.set_num_rating("");
        assert_eq!(filter.avg_rating, "3.5");
        assert_eq!(filter.num_rating, "");

        // A fractional negative has a zero integer prefix
        filter.set_num_rating("-0.5");
        assert_eq!(filter.num_rating, "-0.5");

        filter.set_num_rating("abc");
        assert_eq!(filter.num_rating, "abc");
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("  42abc"), Some(42));
        assert_eq!(leading_integer("-7"), Some(-7));
        assert_eq!(leading_integer("+3"), Some(3));
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(".5"), None);
        assert_eq!(leading_integer("-99999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn test_genres_have_set_semantics() {
        let mut filter = BookFilter::new();
        filter.toggle_genre("Fantasy", true);
        filter.toggle_genre("Horror", true);
        filter.toggle_genre("Fantasy", true);
        assert_eq!(filter.genres, vec!["Fantasy", "Horror"]);

        filter.toggle_genre("Fantasy", false);
        assert_eq!(filter.genres, vec!["Horror"]);
        assert!(!filter.has_genre("Fantasy"));

        filter.toggle_genre("Poetry", false);
        assert_eq!(filter.genres, vec!["Horror"]);
    }

    #[test]
    fn test_query_includes_empty_values() {
        let mut filter = BookFilter::new();
        filter.set_author_name("Tolkien");
        filter.toggle_genre("Fantasy", true);
        filter.toggle_genre("Adventure", true);

        assert_eq!(
            filter.to_query(),
            vec![
                ("bookName".to_string(), String::new()),
                ("authorName".to_string(), "Tolkien".to_string()),
                ("avg_rating".to_string(), String::new()),
                ("num_rating".to_string(), String::new()),
                ("genres[]".to_string(), "Fantasy".to_string()),
                ("genres[]".to_string(), "Adventure".to_string()),
            ]
        );
        assert!(!filter.is_empty());
        assert!(BookFilter::new().is_empty());
    }
}
