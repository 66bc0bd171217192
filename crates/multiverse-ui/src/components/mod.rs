//! Reusable UI components for the character explorer.

mod button;
mod info_item;
mod input;
mod portal;
mod spinner;

pub use button::*;
pub use info_item::*;
pub use input::*;
pub use portal::*;
pub use spinner::*;
