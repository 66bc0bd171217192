//! Character Modal Component
//!
//! Full-screen detail view of one character over an animated portal.

use std::str::FromStr;

use dioxus::prelude::*;
use multiverse_core::present::{created_label, episode_label};
use multiverse_core::{Character, CloseTrigger, StatusTone};
use multiverse_ui::{Button, ButtonVariant, CloseButton, InfoItem, PortalRings, Sparkles};

/// Window-level keydown listener; forwards `event.key` to the modal.
const KEY_LISTENER_JS: &str = r#"
    if (window.__overlayKeyListener) {
        window.removeEventListener('keydown', window.__overlayKeyListener);
    }
    window.__overlayKeyListener = (event) => dioxus.send(event.key);
    window.addEventListener('keydown', window.__overlayKeyListener);
"#;

const KEY_LISTENER_REMOVE_JS: &str = r#"
    if (window.__overlayKeyListener) {
        window.removeEventListener('keydown', window.__overlayKeyListener);
        window.__overlayKeyListener = null;
    }
"#;

/// Close trigger bound to a key, if any.
pub fn close_trigger_for(key: &Key) -> Option<CloseTrigger> {
    match key {
        Key::Escape => Some(CloseTrigger::Escape),
        _ => None,
    }
}

/// Close trigger for a DOM `KeyboardEvent.key` name.
fn close_trigger_for_name(name: &str) -> Option<CloseTrigger> {
    Key::from_str(name).ok().as_ref().and_then(close_trigger_for)
}

/// Character Modal
///
/// Reports every dismissal through `on_close` with the trigger that caused
/// it. Clicks on the content panel stop at the panel and never reach the
/// backdrop handler. Escape is caught on the whole window for as long as the
/// modal is mounted, wherever focus is.
#[component]
pub fn CharacterModal(
    /// Record to show
    character: Character,
    /// Called on close button, footer button, backdrop click or Escape
    on_close: EventHandler<CloseTrigger>,
) -> Element {
    let badge_tone = StatusTone::for_badge(&character.status);
    let episodes = episode_label(character.episode_count());
    let created = created_label(&character);

    use_future(move || async move {
        let mut listener = document::eval(KEY_LISTENER_JS);
        loop {
            match listener.recv::<String>().await {
                Ok(name) => {
                    if let Some(trigger) = close_trigger_for_name(&name) {
                        on_close.call(trigger);
                    }
                }
                Err(err) => {
                    tracing::warn!(?err, "Overlay key listener stopped");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        document::eval(KEY_LISTENER_REMOVE_JS);
    });

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onmounted: move |evt| async move {
                if let Err(err) = evt.set_focus(true).await {
                    tracing::debug!(?err, "Could not focus detail overlay");
                }
            },
            onclick: move |_| on_close.call(CloseTrigger::Backdrop),

            div { class: "modal-backdrop" }

            PortalRings {}

            div {
                class: "character-modal",
                onclick: move |evt| evt.stop_propagation(),

                // Portrait with sparkles, status badge and close button
                div { class: "modal-hero",
                    img { class: "modal-image", src: "{character.image}", alt: "{character.name}" }
                    div { class: "modal-hero-fade" }
                    Sparkles {}

                    div { class: "modal-status",
                        div { class: "status-badge {badge_tone.class()}",
                            span { class: "status-dot" }
                            "{character.status}"
                        }
                    }

                    div { class: "modal-close",
                        CloseButton { onclick: move |_| on_close.call(CloseTrigger::HeaderButton) }
                    }
                }

                div { class: "modal-info",
                    h2 { class: "modal-name", "{character.name}" }

                    div { class: "modal-columns",
                        div { class: "modal-column from-left",
                            InfoItem { label: "Especie".to_string(), value: character.species.clone(), icon: "🧬".to_string(), delay_ms: 100 }
                            InfoItem { label: "Género".to_string(), value: character.gender.clone(), icon: "⚥".to_string(), delay_ms: 200 }
                            if let Some(kind) = character.sub_type() {
                                InfoItem { label: "Tipo".to_string(), value: kind.to_string(), icon: "🔬".to_string(), delay_ms: 300 }
                            }
                        }
                        div { class: "modal-column from-right",
                            InfoItem { label: "Origen".to_string(), value: character.origin.name.clone(), icon: "🌍".to_string(), delay_ms: 100 }
                            InfoItem { label: "Ubicación".to_string(), value: character.location.name.clone(), icon: "📍".to_string(), delay_ms: 200 }
                            InfoItem { label: "Apariciones".to_string(), value: episodes, icon: "📺".to_string(), delay_ms: 300 }
                        }
                    }

                    p { class: "modal-created", "{created}" }

                    div { class: "modal-footer",
                        Button {
                            variant: ButtonVariant::Portal,
                            class: "btn-round".to_string(),
                            onclick: move |_| on_close.call(CloseTrigger::FooterButton),
                            "Cerrar portal"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_key_closes() {
        assert_eq!(close_trigger_for(&Key::Escape), Some(CloseTrigger::Escape));
    }

    #[test]
    fn other_keys_do_not_close() {
        assert_eq!(close_trigger_for(&Key::Enter), None);
        assert_eq!(close_trigger_for(&Key::Tab), None);
        assert_eq!(close_trigger_for(&Key::Character("a".to_string())), None);
    }

    #[test]
    fn window_key_names_map_to_triggers() {
        assert_eq!(close_trigger_for_name("Escape"), Some(CloseTrigger::Escape));
        assert_eq!(close_trigger_for_name("Tab"), None);
        assert_eq!(close_trigger_for_name("x"), None);
        assert_eq!(close_trigger_for_name(""), None);
    }
}
