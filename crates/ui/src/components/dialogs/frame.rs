//! Shared chrome for every popup: heading, form element, error list and the
//! Cancel / submit buttons.

use dioxus::prelude::*;

use crate::state::APP_STATE;

/// Popup frame around a form body
#[component]
pub fn DialogFrame(
    title: String,
    submit_label: &'static str,
    #[props(default = true)] can_submit: bool,
    #[props(default)] problems: Vec<String>,
    on_submit: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        form {
            class: "dialog-form",
            onsubmit: move |e| {
                e.prevent_default();
                if can_submit {
                    on_submit.call(());
                }
            },

            header {
                class: "dialog-header",
                h2 { "{title}" }
                button {
                    r#type: "button",
                    class: "dialog-close",
                    title: "Close",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "✕"
                }
            }

            div {
                class: "dialog-body",
                {children}
            }

            if !problems.is_empty() {
                ul {
                    class: "dialog-problems",
                    for problem in problems.iter() {
                        li { key: "{problem}", "{problem}" }
                    }
                }
            }

            footer {
                class: "dialog-actions",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !can_submit,
                    "{submit_label}"
                }
            }
        }
    }
}
