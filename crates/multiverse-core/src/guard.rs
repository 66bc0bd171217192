//! Route gating on the session flag.

use crate::session::SessionStore;

/// The only route reachable without a session.
pub const LOGIN_PATH: &str = "/login";

/// Route the login form sends an authenticated user to.
pub const CARD_GRID_PATH: &str = "/tarjetas";

/// Outcome of checking a navigation against the session flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation through unchanged.
    Proceed,
    /// Replace the current history entry with the login route.
    RedirectToLogin,
}

/// Whether `path` is the login route. Query strings and trailing slashes are ignored.
pub fn is_login_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    trimmed == LOGIN_PATH
}

/// Decide whether a navigation to `path` may proceed.
pub fn check_navigation(path: &str, store: &dyn SessionStore) -> GuardDecision {
    if is_login_path(path) || store.is_authenticated() {
        GuardDecision::Proceed
    } else {
        GuardDecision::RedirectToLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{DisabledSessionStore, MemorySessionStore, SESSION_MARKER};

    #[test]
    fn login_path_variants() {
        assert!(is_login_path("/login"));
        assert!(is_login_path("/login/"));
        assert!(is_login_path("/login?next=/tarjetas"));
        assert!(!is_login_path("/"));
        assert!(!is_login_path("/tarjetas"));
        assert!(!is_login_path("/login-help"));
    }

    #[test]
    fn unauthenticated_gated_route_redirects() {
        let store = MemorySessionStore::new();
        assert_eq!(
            check_navigation(CARD_GRID_PATH, &store),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(check_navigation("/", &store), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn login_route_never_redirects() {
        let store = MemorySessionStore::new();
        assert_eq!(check_navigation(LOGIN_PATH, &store), GuardDecision::Proceed);
    }

    #[test]
    fn authenticated_route_proceeds() {
        let store = MemorySessionStore::new();
        store.write(SESSION_MARKER).unwrap();
        assert_eq!(check_navigation(CARD_GRID_PATH, &store), GuardDecision::Proceed);
        assert_eq!(check_navigation("/episodes", &store), GuardDecision::Proceed);
    }

    #[test]
    fn unavailable_store_counts_as_signed_out() {
        let store = DisabledSessionStore::new("no storage");
        assert_eq!(
            check_navigation(CARD_GRID_PATH, &store),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(check_navigation(LOGIN_PATH, &store), GuardDecision::Proceed);
    }
}
