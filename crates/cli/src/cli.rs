//! Command-line arguments

use bookshelf_core::{Collection, RecordId};
use bookshelf_model::{BookFilter, RATING_CHOICES};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "bookshelf-cli",
    about = "Browse and edit the Bookshelf catalog from the terminal",
    version
)]
pub struct Cli {
    /// Base URL of the catalog API (overrides bookshelf.toml)
    #[arg(long, global = true, env = "BOOKSHELF_API_URL")]
    pub api_url: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one collection as a table.
    List {
        /// users, books, genres, authors or reviews
        collection: Collection,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List books matching a filter, followed by their summary.
    Books(BookArgs),

    /// Add a record.
    #[command(subcommand)]
    Add(AddCommand),

    /// Replace a user's fields; omitted fields keep their current value.
    #[command(name = "edit-user")]
    EditUser(EditUserArgs),

    /// Delete a record.
    Delete {
        collection: Collection,
        id: RecordId,
    },
}

#[derive(Debug, Args)]
pub struct BookArgs {
    /// Exact title
    #[arg(long)]
    pub title: Option<String>,

    /// Exact author name
    #[arg(long)]
    pub author: Option<String>,

    /// Genre to include; repeat for several
    #[arg(long = "genre")]
    pub genres: Vec<String>,

    /// Books rated above this average
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(RATING_CHOICES))]
    pub min_rating: Option<String>,

    /// Books with more reviews than this
    #[arg(long, allow_hyphen_values = true)]
    pub min_reviews: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl BookArgs {
    /// Build the filter the desktop panel would send
    pub fn to_filter(&self) -> BookFilter {
        let mut filter = BookFilter::new();
        if let Some(title) = &self.title {
            filter.set_book_name(title.clone());
        }
        if let Some(author) = &self.author {
            filter.set_author_name(author.clone());
        }
        for genre in &self.genres {
            filter.toggle_genre(genre, true);
        }
        if let Some(rating) = &self.min_rating {
            filter.set_avg_rating(rating.clone());
        }
        if let Some(reviews) = &self.min_reviews {
            filter.set_num_rating(reviews.clone());
        }
        filter
    }
}

#[derive(Debug, Subcommand)]
pub enum AddCommand {
    /// Add a user; every field is required and the email must look valid.
    User {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        join_date: String,
        #[arg(long)]
        bio: String,
    },

    /// Add a book.
    Book {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long, default_value = "")]
        synopsis: String,
    },

    /// Add a genre.
    Genre { name: String },

    /// Add an author.
    Author { name: String },

    /// Add a review.
    Review {
        #[arg(long)]
        user: String,
        #[arg(long)]
        book: String,
        #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(RATING_CHOICES))]
        rating: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long, default_value = "")]
        date: String,
    },
}

#[derive(Debug, Args)]
pub struct EditUserArgs {
    pub id: RecordId,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub join_date: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_book_args_build_filter() {
        let cli = Cli::parse_from([
            "bookshelf-cli",
            "books",
            "--author",
            "Frank Herbert",
            "--genre",
            "Sci-Fi",
            "--genre",
            "Horror",
            "--genre",
            "Sci-Fi",
            "--min-reviews",
            "-3",
        ]);
        let Commands::Books(args) = cli.command else {
            panic!("expected books");
        };

        let filter = args.to_filter();
        assert_eq!(filter.author_name, "Frank Herbert");
        assert_eq!(filter.genres, vec!["Sci-Fi", "Horror"]);
        assert_eq!(filter.num_rating, "0");
        assert_eq!(filter.avg_rating, "");
    }

    #[test]
    fn test_collection_argument() {
        let cli = Cli::parse_from(["bookshelf-cli", "delete", "review", "4"]);
        match cli.command {
            Commands::Delete { collection, id } => {
                assert_eq!(collection, Collection::Reviews);
                assert_eq!(id, 4);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_rating_must_be_a_choice() {
        let result = Cli::try_parse_from([
            "bookshelf-cli", "add", "review", "--user", "ana", "--book", "Dune", "--rating", "7",
        ]);
        assert!(result.is_err());
    }
}
