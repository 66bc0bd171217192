//! What the card grid shows for a given feed state.

use crate::types::Character;

/// Shown when the fetch settled with no records.
pub const EMPTY_MESSAGE: &str = "No se encontraron personajes en esta dimensión.";

/// The three mutually exclusive grid states.
#[derive(Debug, PartialEq, Eq)]
pub enum GridView<'a> {
    /// Fetch in flight: spinner only.
    Loading,
    /// Fetch settled without records (including fetch failures).
    Empty,
    /// One card per record, in response order.
    Cards(&'a [Character]),
}

impl GridView<'_> {
    /// Number of cards rendered for this state.
    pub fn card_count(&self) -> usize {
        match self {
            GridView::Cards(characters) => characters.len(),
            GridView::Loading | GridView::Empty => 0,
        }
    }
}

pub fn grid_view(loading: bool, characters: &[Character]) -> GridView<'_> {
    if loading {
        GridView::Loading
    } else if characters.is_empty() {
        GridView::Empty
    } else {
        GridView::Cards(characters)
    }
}
