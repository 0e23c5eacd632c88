//! Slide decks: the ordered content each carousel cycles through.

mod catalog;
mod loader;
mod slide;

pub use catalog::builtin;
pub use loader::DeckError;
pub use slide::{Deck, Reel, ReelStyle, Slide, MAX_RATING};
