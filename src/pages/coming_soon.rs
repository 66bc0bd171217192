//! Navbar destinations that have no content of their own yet.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Navbar, NavLocation};

#[component]
fn ComingSoon(current: NavLocation, title: String) -> Element {
    rsx! {
        div { class: "tarjetas-page",
            Navbar { current: current }
            main { class: "coming-soon",
                h2 { class: "multiverse-title", "{title}" }
                p { class: "empty-state", "Esta dimensión todavía no ha sido explorada." }
                Link { class: "coming-soon-link", to: Route::Tarjetas {}, "Ir a las tarjetas" }
            }
        }
    }
}

/// `/` - Inicio
#[component]
pub fn Home() -> Element {
    rsx! { ComingSoon { current: NavLocation::Home, title: "Inicio".to_string() } }
}

/// `/characters` - Personajes
#[component]
pub fn Characters() -> Element {
    rsx! { ComingSoon { current: NavLocation::Characters, title: "Personajes".to_string() } }
}

/// `/episodes` - Episodios
#[component]
pub fn Episodes() -> Element {
    rsx! { ComingSoon { current: NavLocation::Episodes, title: "Episodios".to_string() } }
}

/// Any other path.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "Unknown route");

    rsx! {
        ComingSoon { current: NavLocation::Elsewhere, title: format!("{path} no existe en esta dimensión") }
    }
}
