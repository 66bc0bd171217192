use dioxus::prelude::*;
use multiverse_core::{check_navigation, GuardDecision};

use crate::context::use_services;
use crate::pages::{Characters, Episodes, Home, Login, NotFound, Tarjetas};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/login` - Public login form
/// - `/tarjetas` - Character card grid
/// - `/`, `/characters`, `/episodes` - Navbar destinations
///
/// Every route sits under [`SessionGate`], which sends signed-out users to
/// `/login`.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SessionGate)]
        #[route("/")]
        Home {},
        #[route("/characters")]
        Characters {},
        #[route("/episodes")]
        Episodes {},
        #[route("/tarjetas")]
        Tarjetas {},
        #[route("/login")]
        Login {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, service context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(crate::get_services);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout that checks the session flag on every navigation.
///
/// Signed-out visits to anything but `/login` replace the history entry with
/// `/login`, so Back does not land on the gated page again. The gated page is
/// not rendered while the redirect is pending.
#[component]
fn SessionGate() -> Element {
    let services = use_services();
    let navigator = use_navigator();
    let path = use_route::<Route>().to_string();

    let decision = check_navigation(&path, services.session.as_ref());

    let session = services.session.clone();
    use_effect(use_reactive((&path,), move |(path,)| {
        if check_navigation(&path, session.as_ref()) == GuardDecision::RedirectToLogin {
            tracing::info!(%path, "No session, redirecting to login");
            navigator.replace(Route::Login {});
        }
    }));

    match decision {
        GuardDecision::Proceed => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectToLogin => rsx! {},
    }
}
