//! Multiverse Explorer Core Library
//!
//! Everything behind the character explorer UI that can run without a
//! renderer: the session flag, route gating, the login form, character
//! fetching, the card grid states and the detail overlay.
//!
//! ## Overview
//!
//! ```text
//! SessionGate ──▶ Login ──▶ Tarjetas (fetch ──▶ grid ──▶ overlay)
//!      ▲                          │
//!      └──────── logout ──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use multiverse_core::{load_characters, HttpCharacterSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = HttpCharacterSource::default();
//!     for character in load_characters(&source).await {
//!         println!("{} ({})", character.name, character.species);
//!     }
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod guard;
pub mod logging;
pub mod overlay;
pub mod present;
pub mod session;
pub mod types;

// Re-exports
pub use auth::{logout, CredentialVerifier, DemoCredentials, LoginForm, LoginOutcome};
pub use config::AppConfig;
pub use error::{ExplorerError, ExplorerResult};
pub use fetch::{load_characters, CharacterFeed, CharacterSource, HttpCharacterSource};
pub use grid::{grid_view, GridView};
pub use guard::{check_navigation, GuardDecision};
pub use overlay::{CloseTrigger, DetailOverlay, ScrollFlag, ScrollLock, ScrollLockGuard};
pub use present::StatusTone;
pub use session::{open_session_store, MemorySessionStore, RedbSessionStore, SessionStore};
pub use types::*;
