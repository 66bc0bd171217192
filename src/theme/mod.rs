//! Theme for Multiverse Explorer.

mod styles;

pub use styles::GLOBAL_STYLES;
