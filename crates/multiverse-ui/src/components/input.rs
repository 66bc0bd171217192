//! Input Field Components
//!
//! Labelled text inputs with a leading icon and an optional trailing
//! control (the password visibility toggle).

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    pub label: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// ID for label association
    pub id: String,
    /// Icon rendered before the field
    #[props(default)]
    pub icon: Option<Element>,
    /// Control rendered after the field
    #[props(default)]
    pub trailing: Option<Element>,
}

/// Text input with label, icon and optional trailing control
///
/// # Example
///
/// ```rust,ignore
/// let mut user = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "login-user".to_string(),
///         label: "Usuario".to_string(),
///         value: user(),
///         oninput: move |s| user.set(s),
///         placeholder: "Escribe tu usuario".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            div { class: "input-shell",
                if let Some(icon) = props.icon.clone() {
                    span { class: "input-icon", {icon} }
                }
                input {
                    id: "{props.id}",
                    class: "input-field",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    oninput: move |e| props.oninput.call(e.value()),
                }
                if let Some(trailing) = props.trailing.clone() {
                    {trailing}
                }
            }
        }
    }
}
