//! # Input Components
//!
//! Form inputs shared by the record popups and the filter panel.
//!
//! - **TextInput**: single-line text, email, date or number input
//! - **TextArea**: multi-line text input
//! - **Select**: dropdown with a disabled placeholder entry
//! - **Checkbox**: labelled boolean checkbox
//!
//! Every input is controlled: it renders `value` and reports edits through
//! `on_change` without keeping state of its own.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, date, number)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Lower bound for number inputs
    #[props(default)]
    pub min: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                min: props.min.clone(),
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(props.value.clone());
                    }
                },
            }

            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether to show character count
    #[props(default = false)]
    pub show_count: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_textarea_class(props.error.is_some());
    let char_count = props.value.chars().count();

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }

            div {
                class: "input-footer",
                if let Some(error) = &props.error {
                    p { class: "input-error", "{error}" }
                } else {
                    span {}
                }
                if props.show_count {
                    span { class: "input-count", "{char_count}" }
                }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Options whose value and label are the same text
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        names
            .iter()
            .map(|name| Self::new(name.as_ref(), name.as_ref()))
            .collect()
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
///
/// The placeholder entry is selected while `value` is empty and cannot be
/// picked again once a real option is chosen.
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            select {
                class: "select",
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: "checkbox",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |_| props.on_change.call(!props.checked),
            }
            if let Some(label) = &props.label {
                span { "{label}" }
            }
        }
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

#[component]
fn FieldLabel(text: String, required: bool) -> Element {
    rsx! {
        label {
            class: "input-label",
            "{text}"
            if required {
                span { class: "input-required", "*" }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["input"];
    if has_error {
        classes.push("input-invalid");
    }
    if disabled {
        classes.push("input-disabled");
    }
    classes.join(" ")
}

/// Build textarea class string
fn build_textarea_class(has_error: bool) -> String {
    let mut class = build_input_class(has_error, false);
    class.push_str(" textarea");
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        assert_eq!(build_input_class(false, false), "input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false);
        assert!(class.contains("input-invalid"));
        assert!(!class.contains("input-disabled"));
    }

    #[test]
    fn test_build_input_class_disabled() {
        assert!(build_input_class(false, true).contains("input-disabled"));
    }

    #[test]
    fn test_build_textarea_class() {
        assert_eq!(build_textarea_class(true), "input input-invalid textarea");
    }

    #[test]
    fn test_select_options_from_names() {
        let options = SelectOption::from_names(&["Fantasy", "Horror"]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[1], SelectOption::new("Horror", "Horror"));
    }
}
