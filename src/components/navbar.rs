//! Navigation Bar Component
//!
//! Branding on the left, section links and the logout button on the right.

use dioxus::prelude::*;
use multiverse_core::logout;
use multiverse_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_services;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Characters,
    Episodes,
    Tarjetas,
    /// Pages that are not a navbar destination
    Elsewhere,
}

impl NavLocation {
    /// Locations with a navbar link, in display order
    pub const LINKED: [NavLocation; 3] = [
        NavLocation::Home,
        NavLocation::Characters,
        NavLocation::Episodes,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Inicio",
            NavLocation::Characters => "Personajes",
            NavLocation::Episodes => "Episodios",
            NavLocation::Tarjetas => "Tarjetas",
            NavLocation::Elsewhere => "",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home | NavLocation::Elsewhere => Route::Home {},
            NavLocation::Characters => Route::Characters {},
            NavLocation::Episodes => Route::Episodes {},
            NavLocation::Tarjetas => Route::Tarjetas {},
        }
    }
}

/// Navigation bar component
///
/// `logout` clears the session flag and goes straight to `/login`, no
/// confirmation.
#[component]
pub fn Navbar(current: NavLocation) -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let on_logout = move |_| {
        logout(services.session.as_ref());
        navigator.push(Route::Login {});
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                // Branding
                div { class: "navbar-brand",
                    div { class: "brand-logo", span { "IS" } }
                    h1 { class: "brand-title",
                        "Examen Isaac Serrano"
                        span { class: "brand-subtitle", "Front-end developer" }
                        span { class: "brand-online" }
                    }
                }

                div { class: "navbar-actions",
                    div { class: "navbar-links",
                        for location in NavLocation::LINKED {
                            Link {
                                key: "{location.display_name()}",
                                to: location.route(),
                                class: if location == current { "navbar-link active" } else { "navbar-link" },
                                "{location.display_name()}"
                                span { class: "navbar-link-underline" }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: on_logout,
                        "Cerrar sesión"
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
    fn linked_locations_route_to_their_paths() {
        let paths: Vec<String> = NavLocation::LINKED
            .iter()
            .map(|l| l.route().to_string())
            .collect();
        assert_eq!(paths, vec!["/", "/characters", "/episodes"]);
    }

    #[test]
    fn display_names() {
        assert_eq!(NavLocation::Home.display_name(), "Inicio");
        assert_eq!(NavLocation::Characters.display_name(), "Personajes");
        assert_eq!(NavLocation::Episodes.display_name(), "Episodios");
        assert_eq!(NavLocation::Tarjetas.route().to_string(), "/tarjetas");
    }
}
