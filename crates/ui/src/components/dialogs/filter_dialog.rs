//! # Filter Dialog
//!
//! Edits a [`bookshelf_model::BookFilter`] and hands it to the host, which
//! refetches the book list with it and shows the summary panel. The panel
//! closes as soon as it is applied and shows nothing of the fetch that
//! follows.
//!
//! The draft starts from the filter currently applied, if any.

use bookshelf_model::RATING_CHOICES;
use dioxus::prelude::*;

use crate::components::dialogs::frame::DialogFrame;
use crate::components::inputs::{Checkbox, Select, SelectOption, TextInput};
use crate::hooks::{CatalogAction, use_catalog_actions};
use crate::state::APP_STATE;

/// Options for a select whose empty value means "no constraint"
fn optional_choices<S: AsRef<str>>(any_label: &str, names: &[S]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", any_label)];
    options.extend(SelectOption::from_names(names));
    options
}

/// Book filter panel
#[component]
pub fn FilterDialog() -> Element {
    let actions = use_catalog_actions();

    let state = APP_STATE.read();
    let initial = state.catalog.active_filter.clone().unwrap_or_default();
    let authors = optional_choices("Any author", &state.catalog.author_choices());
    let genres = state.catalog.genre_choices();
    drop(state);

    let mut draft = use_signal(move || initial);
    let current = draft.read().clone();
    let genre_rows: Vec<(String, bool)> = genres
        .iter()
        .map(|g| (g.clone(), current.has_genre(g)))
        .collect();

    rsx! {
        DialogFrame {
            title: "Filter Books".to_string(),
            submit_label: "Apply",
            on_submit: move |_| {
                let filter = draft.read().clone();
                APP_STATE.write().ui.submit_dialog();
                actions.dispatch(CatalogAction::ApplyFilter(filter));
            },

            TextInput {
                value: current.book_name.clone(),
                label: "Title",
                placeholder: "Exact title",
                on_change: move |v| draft.write().set_book_name(v),
            }

            Select {
                value: current.author_name.clone(),
                options: authors,
                label: "Author",
                on_change: move |v| draft.write().set_author_name(v),
            }

            fieldset {
                class: "genre-choices",
                legend { "Genres" }
                if genre_rows.is_empty() {
                    p { class: "input-hint", "No genres yet" }
                }
                for (genre, checked) in genre_rows {
                    Checkbox {
                        key: "{genre}",
                        checked,
                        label: genre.clone(),
                        on_change: {
                            let genre = genre.clone();
                            move |checked| draft.write().toggle_genre(&genre, checked)
                        },
                    }
                }
            }

            div {
                class: "filter-thresholds",
                Select {
                    value: current.avg_rating.clone(),
                    options: optional_choices("Any rating", &RATING_CHOICES),
                    label: "Minimum rating",
                    on_change: move |v| draft.write().set_avg_rating(v),
                }
                TextInput {
                    value: current.num_rating.clone(),
                    label: "Minimum reviews",
                    input_type: "number",
                    min: "0",
                    on_change: move |v| draft.write().set_num_rating(v),
                }
            }

            button {
                r#type: "button",
                class: "btn btn-link",
                onclick: move |_| {
                    APP_STATE.write().ui.close_dialog();
                    actions.dispatch(CatalogAction::ResetFilter);
                },
                "Reset filter"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_choices_lead_with_any() {
        let options = optional_choices("Any author", &["Frank Herbert"]);
        assert_eq!(options[0], SelectOption::new("", "Any author"));
        assert_eq!(options[1].value, "Frank Herbert");
    }

    #[test]
    fn test_rating_choices_cover_one_to_five() {
        let options = optional_choices("Any rating", &RATING_CHOICES);
        assert_eq!(options.len(), 6);
        assert_eq!(options[5].label, "5");
    }
}
