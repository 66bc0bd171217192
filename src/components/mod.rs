//! UI Components for Multiverse Explorer.

mod character_card;
mod character_modal;
mod navbar;

pub use character_card::CharacterCard;
pub use character_modal::CharacterModal;
pub use navbar::{NavLocation, Navbar};
