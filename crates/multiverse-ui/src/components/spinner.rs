//! Indeterminate loading indicator.

use dioxus::prelude::*;

/// Spinning tri-colour ring with a pinging core.
#[component]
pub fn PortalSpinner() -> Element {
    rsx! {
        div {
            class: "portal-spinner",
            role: "progressbar",
            "aria-busy": "true",
            div { class: "spinner-ring" }
            div { class: "spinner-core" }
            div { class: "spinner-ping" }
        }
    }
}
