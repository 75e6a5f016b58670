//! # Record Dialog
//!
//! One popup per record kind, selected by [`RecordDialogMode`]. Each form
//! owns its draft in a local signal, so closing the popup discards it.
//!
//! ## Features
//!
//! - Add user, gated on every field being filled and a plausible email
//! - Add book, genre, author and review; always submittable
//! - Edit user (see [`EditUserForm`])
//!
//! Submitting closes the popup at once and hands the payload to the catalog
//! actions; the popup never waits for the response.

use bookshelf_model::{
    AuthorDraft, BookDraft, GenreDraft, RATING_CHOICES, RecordDraft, ReviewDraft, UserDraft,
    is_valid_email,
};
use dioxus::prelude::*;

use crate::components::dialogs::edit_user_dialog::EditUserForm;
use crate::components::dialogs::frame::DialogFrame;
use crate::components::inputs::{Select, SelectOption, TextArea, TextInput};
use crate::hooks::{CatalogActions, use_catalog_actions};
use crate::state::{APP_STATE, RecordDialogMode};

// ============================================================================
// Main Component
// ============================================================================

/// Create or edit popup for one record kind
#[component]
pub fn RecordDialog(mode: RecordDialogMode) -> Element {
    match mode {
        RecordDialogMode::AddUser => rsx! { AddUserForm {} },
        RecordDialogMode::AddBook => rsx! { AddBookForm {} },
        RecordDialogMode::AddGenre => rsx! { AddGenreForm {} },
        RecordDialogMode::AddAuthor => rsx! { AddAuthorForm {} },
        RecordDialogMode::AddReview => rsx! { AddReviewForm {} },
        RecordDialogMode::EditUser(id) => rsx! { EditUserForm { key: "{id}", id } },
    }
}

/// Close the popup and send the draft
pub(crate) fn submit_draft(draft: RecordDraft, actions: CatalogActions) {
    match draft.into_payload() {
        Ok(payload) => {
            APP_STATE.write().ui.submit_dialog();
            actions.submit(payload);
        }
        Err(e) => tracing::warn!("Refusing to submit: {e}"),
    }
}

/// Reasons the add-user form cannot be sent yet; none before the first edit
pub(crate) fn visible_problems(draft: &UserDraft) -> Vec<String> {
    if *draft == UserDraft::default() {
        return Vec::new();
    }
    RecordDraft::AddUser(draft.clone()).problems()
}

/// Inline hint for a filled-in but malformed email
pub(crate) fn email_hint(email: &str) -> Option<String> {
    (!email.is_empty() && !is_valid_email(email))
        .then(|| "Enter an address like name@example.com".to_string())
}

// ============================================================================
// Users
// ============================================================================

#[component]
fn AddUserForm() -> Element {
    let actions = use_catalog_actions();
    let draft = use_signal(UserDraft::default);
    let can_submit = RecordDraft::AddUser(draft.read().clone()).can_submit();
    let problems = visible_problems(&draft.read());

    rsx! {
        DialogFrame {
            title: RecordDialogMode::AddUser.title(),
            submit_label: "Add User",
            can_submit,
            problems,
            on_submit: move |_| submit_draft(RecordDraft::AddUser(draft.read().clone()), actions),
            UserFields { draft }
        }
    }
}

/// Username, email, join date and bio inputs
#[component]
pub(crate) fn UserFields(draft: Signal<UserDraft>) -> Element {
    let mut draft = draft;
    let current = draft.read().clone();

    rsx! {
        TextInput {
            value: current.username,
            label: "Username",
            required: true,
            on_change: move |v| draft.write().username = v,
        }
        TextInput {
            value: current.email.clone(),
            label: "Email",
            input_type: "email",
            required: true,
            error: email_hint(&current.email),
            on_change: move |v| draft.write().email = v,
        }
        TextInput {
            value: current.join_date,
            label: "Join Date",
            input_type: "date",
            required: true,
            on_change: move |v| draft.write().join_date = v,
        }
        TextArea {
            value: current.bio,
            label: "Bio",
            required: true,
            rows: 4,
            show_count: true,
            on_change: move |v| draft.write().bio = v,
        }
    }
}

// ============================================================================
// Books, genres and authors
// ============================================================================

#[component]
fn AddBookForm() -> Element {
    let actions = use_catalog_actions();
    let mut draft = use_signal(BookDraft::default);
    let current = draft.read().clone();

    rsx! {
        DialogFrame {
            title: RecordDialogMode::AddBook.title(),
            submit_label: "Add Book",
            on_submit: move |_| submit_draft(RecordDraft::AddBook(draft.read().clone()), actions),

            TextInput {
                value: current.title,
                label: "Title",
                on_change: move |v| draft.write().title = v,
            }
            TextInput {
                value: current.author_name,
                label: "Author",
                on_change: move |v| draft.write().author_name = v,
            }
            TextInput {
                value: current.genre_name,
                label: "Genre",
                on_change: move |v| draft.write().genre_name = v,
            }
            TextArea {
                value: current.synopsis,
                label: "Synopsis",
                rows: 5,
                on_change: move |v| draft.write().synopsis = v,
            }
        }
    }
}

#[component]
fn AddGenreForm() -> Element {
    let actions = use_catalog_actions();
    let mut draft = use_signal(GenreDraft::default);
    let name = draft.read().name.clone();

    rsx! {
        DialogFrame {
            title: RecordDialogMode::AddGenre.title(),
            submit_label: "Add Genre",
            on_submit: move |_| submit_draft(RecordDraft::AddGenre(draft.read().clone()), actions),
            TextInput {
                value: name,
                label: "Genre Name",
                on_change: move |v| draft.write().name = v,
            }
        }
    }
}

#[component]
fn AddAuthorForm() -> Element {
    let actions = use_catalog_actions();
    let mut draft = use_signal(AuthorDraft::default);
    let name = draft.read().name.clone();

    rsx! {
        DialogFrame {
            title: RecordDialogMode::AddAuthor.title(),
            submit_label: "Add Author",
            on_submit: move |_| submit_draft(RecordDraft::AddAuthor(draft.read().clone()), actions),
            TextInput {
                value: name,
                label: "Author Name",
                on_change: move |v| draft.write().name = v,
            }
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

#[component]
fn AddReviewForm() -> Element {
    let actions = use_catalog_actions();
    let mut draft = use_signal(ReviewDraft::default);
    let current = draft.read().clone();

    let state = APP_STATE.read();
    let usernames = SelectOption::from_names(&state.catalog.username_choices());
    let titles = SelectOption::from_names(&state.catalog.book_choices());
    drop(state);

    rsx! {
        DialogFrame {
            title: RecordDialogMode::AddReview.title(),
            submit_label: "Add Review",
            on_submit: move |_| submit_draft(RecordDraft::AddReview(draft.read().clone()), actions),

            Select {
                value: current.username,
                options: usernames,
                label: "User",
                placeholder: "Choose a user",
                on_change: move |v| draft.write().username = v,
            }
            Select {
                value: current.book_title,
                options: titles,
                label: "Book",
                placeholder: "Choose a book",
                on_change: move |v| draft.write().book_title = v,
            }
            Select {
                value: current.rating,
                options: SelectOption::from_names(&RATING_CHOICES),
                label: "Rating",
                placeholder: "Choose a rating",
                on_change: move |v| draft.write().rating = v,
            }
            TextArea {
                value: current.body,
                label: "Review",
                rows: 5,
                on_change: move |v| draft.write().body = v,
            }
            TextInput {
                value: current.review_date,
                label: "Review Date",
                input_type: "date",
                on_change: move |v| draft.write().review_date = v,
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_hint_waits_for_input() {
        assert_eq!(email_hint(""), None);
    }

    #[test]
    fn test_email_hint_flags_malformed_address() {
        assert!(email_hint("ana@books").is_some());
        assert_eq!(email_hint("ana@books.io"), None);
    }

    #[test]
    fn test_untouched_user_form_lists_no_problems() {
        assert!(visible_problems(&UserDraft::default()).is_empty());
    }

    #[test]
    fn test_partial_user_form_lists_what_blocks_submit() {
        let draft = UserDraft {
            username: "ana".into(),
            email: "ana@books".into(),
            ..UserDraft::default()
        };
        assert_eq!(
            visible_problems(&draft),
            vec![
                "Email must look like name@domain.tld".to_string(),
                "Join date is required".to_string(),
                "Bio is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_complete_user_form_lists_no_problems() {
        let draft = UserDraft {
            username: "ana".into(),
            email: "ana@books.io".into(),
            join_date: "2024-01-01".into(),
            bio: "Reader".into(),
        };
        assert!(visible_problems(&draft).is_empty());
    }

    #[test]
    fn test_review_rating_options() {
        let options = SelectOption::from_names(&RATING_CHOICES);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3", "4", "5"]);
    }
}
