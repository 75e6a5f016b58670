//! # Edit User Dialog
//!
//! Pre-filled from the user being edited. When a refetch replaces that
//! user's record while the popup is open, the form is reseeded from the new
//! record. Submission always sends every field.

use bookshelf_core::RecordId;
use bookshelf_model::{RecordDraft, User, UserDraft, UserEditDraft};
use dioxus::prelude::*;

use crate::components::dialogs::frame::DialogFrame;
use crate::components::dialogs::record_dialog::{UserFields, submit_draft};
use crate::hooks::use_catalog_actions;
use crate::state::{APP_STATE, RecordDialogMode};

/// Form fields for a user record
fn seed(user: Option<&User>) -> UserDraft {
    user.map(|u| UserEditDraft::from_user(u).fields)
        .unwrap_or_default()
}

/// Edit popup for one user
#[component]
pub fn EditUserForm(id: RecordId) -> Element {
    let actions = use_catalog_actions();

    let user = use_memo(move || APP_STATE.read().catalog.user(id).cloned());
    let mut fields = use_signal(|| seed(user.peek().as_ref()));

    // Reseed whenever the record itself changes
    use_effect(move || {
        let current = user.read().clone();
        fields.set(seed(current.as_ref()));
    });

    if user.read().is_none() {
        return rsx! {
            DialogFrame {
                title: RecordDialogMode::EditUser(id).title(),
                submit_label: "Save",
                can_submit: false,
                on_submit: move |_| {},
                p { class: "dialog-message", "This user no longer exists." }
            }
        };
    }

    rsx! {
        DialogFrame {
            title: RecordDialogMode::EditUser(id).title(),
            submit_label: "Save",
            on_submit: move |_| {
                let draft = UserEditDraft { id, fields: fields.read().clone() };
                submit_draft(RecordDraft::EditUser(draft), actions);
            },
            UserFields { draft: fields }
        }
    }
}
