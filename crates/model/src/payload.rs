//! Request bodies for create and update calls
//!
//! Unlike the positional rows coming back, outgoing bodies are keyed JSON
//! objects, and the key spelling differs per collection (`bookName` for
//! books, `genre_name` for genres, `userName` for reviews). The serde
//! attributes here are the single source of those spellings.

use bookshelf_core::{Collection, MutationKind, RecordId};
use serde::Serialize;

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub join_date: String,
    pub bio: String,
}

/// Body of `PUT /users/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(rename = "userID")]
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub join_date: String,
    pub bio: String,
}

/// Body of `POST /books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub book_name: String,
    pub author_name: String,
    pub genre_name: String,
    pub synopsis: String,
}

/// Body of `POST /genres`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGenre {
    pub genre_name: String,
}

/// Body of `POST /authors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAuthor {
    pub author_name: String,
}

/// Body of `POST /reviews`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "bookName")]
    pub book_name: String,
    /// Sent as the selected choice text ("1".."5")
    pub rating: String,
    pub review: String,
    pub review_date: String,
}

// ============================================================================
// Payload
// ============================================================================

/// Any create or update body the client sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordPayload {
    CreateUser(NewUser),
    UpdateUser(UserUpdate),
    CreateBook(NewBook),
    CreateGenre(NewGenre),
    CreateAuthor(NewAuthor),
    CreateReview(NewReview),
}

impl RecordPayload {
    /// Mutation this payload performs
    pub fn kind(&self) -> MutationKind {
        match self {
            RecordPayload::CreateUser(_) => MutationKind::CreateUser,
            RecordPayload::UpdateUser(_) => MutationKind::UpdateUser,
            RecordPayload::CreateBook(_) => MutationKind::CreateBook,
            RecordPayload::CreateGenre(_) => MutationKind::CreateGenre,
            RecordPayload::CreateAuthor(_) => MutationKind::CreateAuthor,
            RecordPayload::CreateReview(_) => MutationKind::CreateReview,
        }
    }

    /// Collection the payload is sent to
    pub fn collection(&self) -> Collection {
        self.kind().target()
    }

    /// Check if this is an update rather than a create
    pub fn is_update(&self) -> bool {
        matches!(self, RecordPayload::UpdateUser(_))
    }

    /// Short description for status lines
    pub fn summary(&self) -> String {
        match self {
            RecordPayload::CreateUser(u) => u.username.clone(),
            RecordPayload::UpdateUser(u) => u.username.clone(),
            RecordPayload::CreateBook(b) => b.book_name.clone(),
            RecordPayload::CreateGenre(g) => g.genre_name.clone(),
            RecordPayload::CreateAuthor(a) => a.author_name.clone(),
            RecordPayload::CreateReview(r) => format!("{} on {}", r.user_name, r.book_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_book_keys_are_camel_case() {
        let payload = RecordPayload::CreateBook(NewBook {
            book_name: "Dune".into(),
            author_name: "Frank Herbert".into(),
            genre_name: "Sci-Fi".into(),
            synopsis: "Spice".into(),
        });
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "bookName": "Dune",
                "authorName": "Frank Herbert",
                "genreName": "Sci-Fi",
                "synopsis": "Spice"
            })
        );
        assert_eq!(payload.collection(), Collection::Books);
    }

    #[test]
    fn test_user_update_carries_id() {
        let payload = RecordPayload::UpdateUser(UserUpdate {
            id: 12,
            username: "ana".into(),
            email: "ana@x.io".into(),
            join_date: "2024-01-01".into(),
            bio: String::new(),
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["userID"], json!(12));
        assert!(payload.is_update());
        assert_eq!(payload.kind(), MutationKind::UpdateUser);
    }

    #[test]
    fn test_review_keys() {
        let payload = RecordPayload::CreateReview(NewReview {
            user_name: "ana".into(),
            book_name: "Dune".into(),
            rating: "5".into(),
            review: "Loved it".into(),
            review_date: "2024-02-02".into(),
        });
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "userName": "ana",
                "bookName": "Dune",
                "rating": "5",
                "review": "Loved it",
                "review_date": "2024-02-02"
            })
        );
        assert_eq!(payload.summary(), "ana on Dune");
    }

    #[test]
    fn test_snake_case_collections() {
        let genre = serde_json::to_value(RecordPayload::CreateGenre(NewGenre {
            genre_name: "Poetry".into(),
        }))
        .unwrap();
        let author = serde_json::to_value(RecordPayload::CreateAuthor(NewAuthor {
            author_name: "Le Guin".into(),
        }))
        .unwrap();
        assert_eq!(genre, json!({"genre_name": "Poetry"}));
        assert_eq!(author, json!({"author_name": "Le Guin"}));
    }
}
