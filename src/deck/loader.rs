use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::deck::slide::Deck;

/// Errors that can occur when loading a deck file.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read deck file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Reel #{position} has an empty name")]
    EmptyReelName { position: usize },

    #[error("Reel '{reel}' contains slide id '{id}' more than once")]
    DuplicateSlideId { reel: String, id: String },
}

impl Deck {
    /// Loads and validates a deck from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path).map_err(|e| DeckError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a deck from TOML text.
    ///
    /// ```toml
    /// [[reel]]
    /// name = "stories"
    /// heading = "Stories"
    ///
    /// [[reel.slides]]
    /// id = "buddy"
    /// media = "dog.jpeg"
    /// title = "Buddy's Second Chance"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, DeckError> {
        let deck: Deck =
            toml::from_str(content).map_err(|e| DeckError::ParseError { source: e })?;
        deck.validate()?;
        Ok(deck)
    }

    /// Checks that every reel is named and that slide ids are unique per reel.
    ///
    /// Empty reels are valid; they render nothing.
    pub fn validate(&self) -> Result<(), DeckError> {
        for (position, reel) in self.reels.iter().enumerate() {
            if reel.name.trim().is_empty() {
                return Err(DeckError::EmptyReelName { position });
            }
            let mut seen = HashSet::new();
            for slide in &reel.slides {
                if !seen.insert(slide.id.as_str()) {
                    return Err(DeckError::DuplicateSlideId {
                        reel: reel.name.clone(),
                        id: slide.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
