//! Core types used throughout Bookshelf
//!
//! This module contains the vocabulary shared by the model, gateway and UI
//! crates: the five server collections, record identifiers and the table that
//! maps each mutation to the collections it invalidates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned integer identifier. The client never generates one.
pub type RecordId = i64;

// ============================================================================
// Collections
// ============================================================================

/// One of the five server-side record sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Books,
    Genres,
    Authors,
    Reviews,
}

impl Collection {
    /// All collections, in the order the host page loads them
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Books,
        Collection::Genres,
        Collection::Authors,
        Collection::Reviews,
    ];

    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Books => "books",
            Collection::Genres => "genres",
            Collection::Authors => "authors",
            Collection::Reviews => "reviews",
        }
    }

    /// Human-readable name for headings
    pub fn display_name(&self) -> &'static str {
        match self {
            Collection::Users => "Users",
            Collection::Books => "Books",
            Collection::Genres => "Genres",
            Collection::Authors => "Authors",
            Collection::Reviews => "Reviews",
        }
    }

    /// Singular name for a single record of this collection
    pub fn record_name(&self) -> &'static str {
        match self {
            Collection::Users => "User",
            Collection::Books => "Book",
            Collection::Genres => "Genre",
            Collection::Authors => "Author",
            Collection::Reviews => "Review",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Collection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "users" | "user" => Ok(Collection::Users),
            "books" | "book" => Ok(Collection::Books),
            "genres" | "genre" => Ok(Collection::Genres),
            "authors" | "author" => Ok(Collection::Authors),
            "reviews" | "review" => Ok(Collection::Reviews),
            other => Err(CatalogError::UnknownCollection(other.to_string())),
        }
    }
}

/// A set of collections, kept in [`Collection::ALL`] order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CollectionSet(u8);

impl CollectionSet {
    /// The empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a slice of collections
    pub const fn of(collections: &[Collection]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < collections.len() {
            bits |= Self::bit(collections[i]);
            i += 1;
        }
        Self(bits)
    }

    const fn bit(collection: Collection) -> u8 {
        match collection {
            Collection::Users => 1,
            Collection::Books => 1 << 1,
            Collection::Genres => 1 << 2,
            Collection::Authors => 1 << 3,
            Collection::Reviews => 1 << 4,
        }
    }

    /// Check membership
    pub fn contains(&self, collection: Collection) -> bool {
        self.0 & Self::bit(collection) != 0
    }

    /// Add a collection
    pub fn insert(&mut self, collection: Collection) {
        self.0 |= Self::bit(collection);
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of collections in the set
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate members in load order
    pub fn iter(&self) -> impl Iterator<Item = Collection> + '_ {
        Collection::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Collection> for CollectionSet {
    fn from_iter<I: IntoIterator<Item = Collection>>(iter: I) -> Self {
        let mut set = CollectionSet::empty();
        for collection in iter {
            set.insert(collection);
        }
        set
    }
}

// ============================================================================
// Mutations
// ============================================================================

/// Every write the front end can issue against the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    CreateUser,
    UpdateUser,
    DeleteUser,
    CreateBook,
    DeleteBook,
    CreateGenre,
    DeleteGenre,
    CreateAuthor,
    DeleteAuthor,
    CreateReview,
    DeleteReview,
}

/// Books, genres and authors are denormalized into each other and into reviews.
const CATALOG_GROUP: CollectionSet = CollectionSet::of(&[
    Collection::Books,
    Collection::Genres,
    Collection::Authors,
    Collection::Reviews,
]);

/// Mutation kind → collections to refetch afterwards
const INVALIDATION_TABLE: [(MutationKind, CollectionSet); 11] = [
    (MutationKind::CreateUser, CollectionSet::of(&[Collection::Users])),
    (
        MutationKind::UpdateUser,
        CollectionSet::of(&[Collection::Users, Collection::Reviews]),
    ),
    (
        MutationKind::DeleteUser,
        CollectionSet::of(&[Collection::Users, Collection::Reviews]),
    ),
    (MutationKind::CreateBook, CATALOG_GROUP),
    (MutationKind::DeleteBook, CATALOG_GROUP),
    (MutationKind::CreateGenre, CATALOG_GROUP),
    (MutationKind::DeleteGenre, CATALOG_GROUP),
    (MutationKind::CreateAuthor, CATALOG_GROUP),
    (MutationKind::DeleteAuthor, CATALOG_GROUP),
    (
        MutationKind::CreateReview,
        CollectionSet::of(&[Collection::Reviews, Collection::Books]),
    ),
    (
        MutationKind::DeleteReview,
        CollectionSet::of(&[Collection::Reviews, Collection::Books]),
    ),
];

impl MutationKind {
    /// Collections whose snapshot is stale after this mutation
    pub fn affected_collections(&self) -> CollectionSet {
        INVALIDATION_TABLE
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, set)| *set)
            .unwrap_or_default()
    }

    /// Collection the mutation is sent to
    pub fn target(&self) -> Collection {
        match self {
            MutationKind::CreateUser | MutationKind::UpdateUser | MutationKind::DeleteUser => {
                Collection::Users
            }
            MutationKind::CreateBook | MutationKind::DeleteBook => Collection::Books,
            MutationKind::CreateGenre | MutationKind::DeleteGenre => Collection::Genres,
            MutationKind::CreateAuthor | MutationKind::DeleteAuthor => Collection::Authors,
            MutationKind::CreateReview | MutationKind::DeleteReview => Collection::Reviews,
        }
    }

    /// The delete mutation for a collection
    pub fn delete_of(collection: Collection) -> Self {
        match collection {
            Collection::Users => MutationKind::DeleteUser,
            Collection::Books => MutationKind::DeleteBook,
            Collection::Genres => MutationKind::DeleteGenre,
            Collection::Authors => MutationKind::DeleteAuthor,
            Collection::Reviews => MutationKind::DeleteReview,
        }
    }

    /// Past-tense verb for status lines
    pub fn verb(&self) -> &'static str {
        match self {
            MutationKind::CreateUser
            | MutationKind::CreateBook
            | MutationKind::CreateGenre
            | MutationKind::CreateAuthor
            | MutationKind::CreateReview => "added",
            MutationKind::UpdateUser => "updated",
            MutationKind::DeleteUser
            | MutationKind::DeleteBook
            | MutationKind::DeleteGenre
            | MutationKind::DeleteAuthor
            | MutationKind::DeleteReview => "deleted",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collection_paths() {
        assert_eq!(Collection::Users.path(), "users");
        assert_eq!(Collection::Reviews.to_string(), "reviews");
        assert_eq!("Books".parse::<Collection>().unwrap(), Collection::Books);
        assert_eq!("genre".parse::<Collection>().unwrap(), Collection::Genres);
        assert!("shelves".parse::<Collection>().is_err());
    }

    #[test]
    fn test_collection_set() {
        let mut set = CollectionSet::empty();
        assert!(set.is_empty());
        set.insert(Collection::Reviews);
        set.insert(Collection::Users);
        set.insert(Collection::Users);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Collection::Users, Collection::Reviews]
        );
    }

    #[test]
    fn test_catalog_mutations_refresh_catalog_group() {
        for kind in [
            MutationKind::CreateBook,
            MutationKind::DeleteBook,
            MutationKind::CreateGenre,
            MutationKind::DeleteGenre,
            MutationKind::CreateAuthor,
            MutationKind::DeleteAuthor,
        ] {
            let affected = kind.affected_collections();
            assert_eq!(
                affected.iter().collect::<Vec<_>>(),
                vec![
                    Collection::Books,
                    Collection::Genres,
                    Collection::Authors,
                    Collection::Reviews
                ],
                "{kind:?}"
            );
            assert!(!affected.contains(Collection::Users));
        }
    }

    #[test]
    fn test_user_and_review_mutations() {
        assert_eq!(
            MutationKind::CreateUser
                .affected_collections()
                .iter()
                .collect::<Vec<_>>(),
            vec![Collection::Users]
        );
        assert!(MutationKind::UpdateUser
            .affected_collections()
            .contains(Collection::Reviews));
        let review = MutationKind::CreateReview.affected_collections();
        assert!(review.contains(Collection::Books));
        assert!(review.contains(Collection::Reviews));
        assert_eq!(review.len(), 2);
    }

    #[test]
    fn test_every_mutation_refreshes_its_target() {
        for (kind, set) in INVALIDATION_TABLE {
            assert!(set.contains(kind.target()), "{kind:?}");
        }
    }

    #[test]
    fn test_delete_of() {
        for collection in Collection::ALL {
            assert_eq!(MutationKind::delete_of(collection).target(), collection);
        }
    }
}
