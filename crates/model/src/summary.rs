//! Aggregate statistics over the current book list

use serde::Serialize;

use crate::records::Book;

/// Means over the books currently shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookSummary {
    pub count: usize,
    /// Mean of the per-book average ratings
    pub mean_rating: f64,
    /// Mean number of reviews per book
    pub mean_reviews: f64,
}

impl BookSummary {
    /// Compute over a book list; both means are 0 for an empty list
    pub fn from_books(books: &[Book]) -> Self {
        let count = books.len();
        if count == 0 {
            return Self {
                count,
                mean_rating: 0.0,
                mean_reviews: 0.0,
            };
        }

        let rating_sum: f64 = books.iter().map(|b| b.avg_rating).sum();
        let review_sum: f64 = books.iter().map(|b| b.num_rating as f64).sum();

        Self {
            count,
            mean_rating: rating_sum / count as f64,
            mean_reviews: review_sum / count as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn book(id: i64, avg_rating: f64, num_rating: u64) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            author_name: "J.R.R. Tolkien".into(),
            genre_name: "Fantasy".into(),
            synopsis: String::new(),
            avg_rating,
            num_rating,
        }
    }

    #[test]
    fn test_empty_list() {
        let summary = BookSummary::from_books(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_rating, 0.0);
        assert_eq!(summary.mean_reviews, 0.0);
    }

    #[test]
    fn test_unreviewed_books_count_as_zero() {
        let summary = BookSummary::from_books(&[book(1, 4.0, 3), book(2, 0.0, 0)]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean_rating, 2.0);
        assert_eq!(summary.mean_reviews, 1.5);
    }
}
