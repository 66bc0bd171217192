//! Character Card Component
//!
//! Summary card with blurred portrait backdrop, status tint, name, species
//! and a "Ver más" action.

use std::time::Duration;

use dioxus::prelude::*;
use multiverse_core::{Character, StatusTone};
use multiverse_ui::{Button, ButtonVariant};

/// Scale-down half of the click pulse.
const PRESS_DOWN: Duration = Duration::from_millis(100);
/// Scale-back half of the click pulse.
const PRESS_UP: Duration = Duration::from_millis(200);

/// Character Card
///
/// The action plays a short press pulse, then hands the record to
/// `on_info_click`. Hover raise is pure CSS.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CharacterCard {
///         character: rick.clone(),
///         on_info_click: move |c| overlay.write().open(c),
///     }
/// }
/// ```
#[component]
pub fn CharacterCard(
    /// Record shown on the card
    character: Character,
    /// Called with the record once the press pulse has played
    on_info_click: EventHandler<Character>,
) -> Element {
    let mut pressed = use_signal(|| false);

    let record = character.clone();
    let view_more = move |evt: MouseEvent| {
        evt.stop_propagation();
        let record = record.clone();
        spawn(async move {
            pressed.set(true);
            tokio::time::sleep(PRESS_DOWN).await;
            pressed.set(false);
            tokio::time::sleep(PRESS_UP).await;
            on_info_click.call(record);
        });
    };

    let tone = StatusTone::for_card(&character.status);
    let press_class = if pressed() { "pressed" } else { "" };

    rsx! {
        div { class: "character-card {press_class}",
            // Blurred backdrop tinted by status
            div { class: "card-backdrop",
                div {
                    class: "card-backdrop-image",
                    style: "background-image: url('{character.image}')",
                }
                div { class: "card-tint {tone.class()}" }
                div { class: "card-shade" }
            }

            div { class: "card-body",
                div { class: "card-portrait",
                    img { src: "{character.image}", alt: "{character.name}" }
                }

                div { class: "card-text",
                    h3 { class: "card-name", "{character.name}" }
                    p { class: "card-species", "{character.species}" }
                }

                div { class: "card-actions",
                    Button {
                        variant: ButtonVariant::Portal,
                        onclick: view_more,
                        "Ver más"
                    }
                }
            }
        }
    }
}
