//! Login page - demo credential gate in front of the card grid.

use dioxus::prelude::*;
use multiverse_core::{LoginForm, LoginOutcome};
use multiverse_ui::{Button, ButtonVariant, IconButton, Input};

use crate::app::Route;
use crate::context::use_services;

/// Login page component.
///
/// On success the session flag is written and the user is pushed to
/// `/tarjetas`; on failure the inline error shows and the fields keep
/// their values.
#[component]
pub fn Login() -> Element {
    let services = use_services();
    let navigator = use_navigator();
    let mut form = use_signal(LoginForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = form
            .write()
            .submit(services.verifier.as_ref(), services.session.as_ref());
        if outcome == LoginOutcome::Authenticated {
            navigator.push(Route::Tarjetas {});
        }
    };

    let current = form();

    rsx! {
        main { class: "login-page",
            div { class: "login-panel",
                div { class: "login-shield", {shield_icon()} }

                h1 { class: "login-title", "Panel Seguro" }
                p { class: "login-subtitle", "Ingresa con tus credenciales para continuar" }

                form { class: "login-form", onsubmit: on_submit,
                    Input {
                        id: "login-user".to_string(),
                        label: "Usuario".to_string(),
                        value: current.username.clone(),
                        oninput: move |value: String| form.write().set_username(value),
                        placeholder: "Escribe tu usuario".to_string(),
                        icon: user_icon(),
                    }

                    Input {
                        id: "login-pass".to_string(),
                        label: "Contraseña".to_string(),
                        value: current.password.clone(),
                        oninput: move |value: String| form.write().set_password(value),
                        placeholder: "••••••••".to_string(),
                        input_type: current.input_type().to_string(),
                        icon: lock_icon(),
                        trailing: rsx! {
                            IconButton {
                                aria_label: if current.password_visible() { "Ocultar contraseña".to_string() } else { "Mostrar contraseña".to_string() },
                                class: "visibility-toggle".to_string(),
                                onclick: move |_| form.write().toggle_visibility(),
                                {eye_icon(current.password_visible())}
                            }
                        },
                    }

                    if let Some(err) = current.error() {
                        div { class: "login-error", "{err}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        class: "login-submit".to_string(),
                        "Ingresar"
                    }
                }
            }
        }
    }
}

fn shield_icon() -> Element {
    rsx! {
        svg {
            width: "48",
            height: "48",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M12 2 4 5v6c0 5.55 3.84 10.74 8 12 4.16-1.26 8-6.45 8-12V5l-8-3Zm-1.2 14.2-3.5-3.5 1.4-1.4 2.1 2.1 4.8-4.8 1.4 1.4-6.2 6.2Z" }
        }
    }
}

fn user_icon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "8", r: "4" }
            path { d: "M4 21a8 8 0 0 1 16 0" }
        }
    }
}

fn lock_icon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "5", y: "11", width: "14", height: "10", rx: "2" }
            path { d: "M8 11V7a4 4 0 0 1 8 0v4" }
        }
    }
}

/// Open eye while masked, struck-through eye while visible.
fn eye_icon(visible: bool) -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12Z" }
            circle { cx: "12", cy: "12", r: "3" }
            if visible {
                path { d: "M3 3l18 18" }
            }
        }
    }
}
