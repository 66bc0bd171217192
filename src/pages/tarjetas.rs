//! Tarjetas page - the character card grid.
//!
//! Fetches one batch on mount, renders a card per record and opens the
//! detail overlay for the chosen one.

use dioxus::prelude::*;
use multiverse_core::grid::EMPTY_MESSAGE;
use multiverse_core::{grid_view, load_characters, CharacterFeed, DetailOverlay, GridView};
use multiverse_ui::PortalSpinner;

use crate::components::{CharacterCard, CharacterModal, Navbar, NavLocation};
use crate::context::use_services;
use crate::scroll_lock::BodyScrollLock;

/// Card grid page component.
///
/// The fetch runs in a task owned by this page; if the page unmounts first
/// the task is dropped with it and the late response never lands.
#[component]
pub fn Tarjetas() -> Element {
    let services = use_services();
    let mut feed = use_signal(CharacterFeed::new);
    let mut overlay = use_signal(|| DetailOverlay::new(BodyScrollLock::new()));

    // Load characters on mount
    let source = services.characters.clone();
    use_effect(move || {
        let source = source.clone();
        feed.write().begin();
        spawn(async move {
            let characters = load_characters(source.as_ref()).await;
            feed.write().finish(characters);
        });
    });

    let selected = overlay.read().selected().cloned();
    let feed_state = feed.read();

    let content = match grid_view(feed_state.is_loading(), feed_state.characters()) {
        GridView::Loading => rsx! {
            div { class: "grid-status",
                PortalSpinner {}
            }
        },
        GridView::Empty => rsx! {
            p { class: "empty-state", "{EMPTY_MESSAGE}" }
        },
        GridView::Cards(characters) => rsx! {
            div { class: "card-grid",
                for character in characters.iter().cloned() {
                    CharacterCard {
                        key: "{character.id}",
                        character: character.clone(),
                        on_info_click: move |picked| overlay.write().open(picked),
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "tarjetas-page",
            Navbar { current: NavLocation::Tarjetas }

            main { class: "tarjetas-main",
                h2 { class: "multiverse-title", "Explora el Multiverso" }
                {content}
            }

            if let Some(character) = selected {
                CharacterModal {
                    character: character.clone(),
                    on_close: move |trigger| {
                        overlay.write().close(trigger);
                    },
                }
            }
        }
    }
}
