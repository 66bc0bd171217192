//! Multiverse Explorer UI Components
//!
//! Dioxus building blocks for the character explorer. Styling lives in the
//! application's global stylesheet; components here only emit class names.
//!
//! ## Design Language
//!
//! Dark zinc surfaces lit by portal green:
//! - **Portal green (#4ade80)**: glows, rings, particles, primary accents
//! - **Dimension blue (#3b82f6)**: second stop of every action gradient
//! - **Zinc (#18181b)**: cards and panels

pub mod components;

pub use components::*;
