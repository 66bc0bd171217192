//! Console logging setup.
//!
//! `RUST_LOG` controls the filter; without it the given default applies.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init("debug");
        init("info");
        tracing::info!("logging initialised");
    }
}
