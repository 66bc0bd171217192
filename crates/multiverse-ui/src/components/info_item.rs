//! Label/value tile used in the detail overlay.

use dioxus::prelude::*;

/// One attribute of a character, with an emoji icon.
///
/// `delay_ms` staggers the entrance animation.
#[component]
pub fn InfoItem(
    label: String,
    value: String,
    icon: String,
    #[props(default = 0)] delay_ms: u32,
) -> Element {
    rsx! {
        div {
            class: "info-item",
            style: "animation-delay: {400 + delay_ms}ms",
            div { class: "info-icon", "{icon}" }
            div { class: "info-text",
                p { class: "info-label", "{label}" }
                p { class: "info-value", "{value}" }
            }
            div { class: "info-sheen" }
        }
    }
}
