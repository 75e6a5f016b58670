//! Popup drafts
//!
//! A draft is the local, uncommitted state of a popup form. Drafts start
//! empty (or seeded from an existing record for edits), are edited field by
//! field, and turn into a [`RecordPayload`] on submit.
//!
//! ## Gating
//!
//! Only the add-user draft gates its submit control: all four fields must be
//! non-empty and the email must look like `something@something.something`.
//! The other drafts submit whatever they hold and let the backend decide.

use bookshelf_core::{CatalogError, CatalogResult, RecordId, Validatable};
use regex::Regex;
use std::sync::LazyLock;

use crate::payload::{NewAuthor, NewBook, NewGenre, NewReview, NewUser, RecordPayload, UserUpdate};
use crate::records::User;

/// Unanchored: one non-space run, `@`, a non-space run, `.`, a non-space run
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// Check an email address against the loose shape rule
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Rating choices offered by the review popup and the filter popup
pub const RATING_CHOICES: [&str; 5] = ["1", "2", "3", "4", "5"];

// ============================================================================
// User Drafts
// ============================================================================

/// Add-user form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub join_date: String,
    pub bio: String,
}

impl UserDraft {
    pub fn into_payload(self) -> RecordPayload {
        RecordPayload::CreateUser(NewUser {
            username: self.username,
            email: self.email,
            join_date: self.join_date,
            bio: self.bio,
        })
    }
}

impl Validatable for UserDraft {
    fn validate(&self) -> CatalogResult<()> {
        match self.validation_errors().into_iter().next() {
            Some(message) => Err(CatalogError::validation(message)),
            None => Ok(()),
        }
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // Whitespace counts as content; only truly empty fields block submit
        if self.username.is_empty() {
            errors.push("Username is required".to_string());
        }
        if self.email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.push("Email must look like name@domain.tld".to_string());
        }
        if self.join_date.is_empty() {
            errors.push("Join date is required".to_string());
        }
        if self.bio.is_empty() {
            errors.push("Bio is required".to_string());
        }

        errors
    }
}

/// Edit-user form, seeded from the record being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEditDraft {
    pub id: RecordId,
    pub fields: UserDraft,
}

impl UserEditDraft {
    /// Seed the form from the current record
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            fields: UserDraft {
                username: user.username.clone(),
                email: user.email.clone(),
                join_date: user.join_date.clone(),
                bio: user.bio.clone(),
            },
        }
    }

    pub fn into_payload(self) -> RecordPayload {
        RecordPayload::UpdateUser(UserUpdate {
            id: self.id,
            username: self.fields.username,
            email: self.fields.email,
            join_date: self.fields.join_date,
            bio: self.fields.bio,
        })
    }
}

// ============================================================================
// Catalog Drafts
// ============================================================================

/// Add-book form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author_name: String,
    pub genre_name: String,
    pub synopsis: String,
}

impl BookDraft {
    pub fn into_payload(self) -> RecordPayload {
        RecordPayload::CreateBook(NewBook {
            book_name: self.title,
            author_name: self.author_name,
            genre_name: self.genre_name,
            synopsis: self.synopsis,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreDraft {
    pub name: String,
}

impl GenreDraft {
    pub fn into_payload(self) -> RecordPayload {
        RecordPayload::CreateGenre(NewGenre {
            genre_name: self.name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorDraft {
    pub name: String,
}

impl AuthorDraft {
    pub fn into_payload(self) -> RecordPayload {
        RecordPayload::CreateAuthor(NewAuthor {
            author_name: self.name,
        })
    }
}

/// Add-review form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub username: String,
    pub book_title: String,
    /// One of [`RATING_CHOICES`], or empty before a choice is made
    pub rating: String,
    pub body: String,
    pub review_date: String,
}

impl ReviewDraft {
    pub fn into_payload(self) -> RecordPayload {
        RecordPayload::CreateReview(NewReview {
            user_name: self.username,
            book_name: self.book_title,
            rating: self.rating,
            review: self.body,
            review_date: self.review_date,
        })
    }
}

// ============================================================================
// Record Draft
// ============================================================================

/// The draft behind whichever record popup is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDraft {
    AddUser(UserDraft),
    EditUser(UserEditDraft),
    AddBook(BookDraft),
    AddGenre(GenreDraft),
    AddAuthor(AuthorDraft),
    AddReview(ReviewDraft),
}

impl RecordDraft {
    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        match self {
            RecordDraft::AddUser(draft) => draft.is_valid(),
            _ => true,
        }
    }

    /// Messages to show under the form
    pub fn problems(&self) -> Vec<String> {
        match self {
            RecordDraft::AddUser(draft) => draft.validation_errors(),
            _ => Vec::new(),
        }
    }

    /// Convert to the request body, refusing a gated draft
    pub fn into_payload(self) -> CatalogResult<RecordPayload> {
        if let Some(problem) = self.problems().into_iter().next() {
            return Err(CatalogError::field_validation("user", "form", problem));
        }

        Ok(match self {
            RecordDraft::AddUser(d) => d.into_payload(),
            RecordDraft::EditUser(d) => d.into_payload(),
            RecordDraft::AddBook(d) => d.into_payload(),
            RecordDraft::AddGenre(d) => d.into_payload(),
            RecordDraft::AddAuthor(d) => d.into_payload(),
            RecordDraft::AddReview(d) => d.into_payload(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
