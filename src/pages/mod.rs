//! Page components for Multiverse Explorer.

mod coming_soon;
mod login;
mod tarjetas;

pub use coming_soon::{Characters, Episodes, Home, NotFound};
pub use login::Login;
pub use tarjetas::Tarjetas;
