//! Slide media probing.
//!
//! Each distinct media path is inspected once, by reading the image header.
//! A failure is logged and remembered; the renderer then shows a
//! placeholder for that slide instead of failing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::deck::Deck;

pub const MISSING_PLACEHOLDER: &str = "Image missing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatus {
    Ready { width: u32, height: u32 },
    Missing,
}

#[derive(Debug, Default)]
pub struct MediaLibrary {
    assets_dir: PathBuf,
    entries: HashMap<String, MediaStatus>,
}

impl MediaLibrary {
    pub fn scan(deck: &Deck, assets_dir: &Path) -> Self {
        let mut entries = HashMap::new();
        for slide in deck.reels.iter().flat_map(|reel| reel.slides.iter()) {
            if entries.contains_key(&slide.media) {
                continue;
            }
            let status = inspect(&resolve(assets_dir, &slide.media));
            entries.insert(slide.media.clone(), status);
        }
        Self {
            assets_dir: assets_dir.to_path_buf(),
            entries,
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Unknown paths count as missing.
    pub fn status(&self, media: &str) -> MediaStatus {
        self.entries
            .get(media)
            .copied()
            .unwrap_or(MediaStatus::Missing)
    }

    pub fn missing_count(&self) -> usize {
        self.entries
            .values()
            .filter(|status| **status == MediaStatus::Missing)
            .count()
    }
}

/// Media paths are relative to the assets directory; a leading `/` is
/// treated as the assets root, the way the web page served them.
pub fn resolve(assets_dir: &Path, media: &str) -> PathBuf {
    assets_dir.join(media.trim_start_matches('/'))
}

fn inspect(path: &Path) -> MediaStatus {
    match image::image_dimensions(path) {
        Ok((width, height)) => MediaStatus::Ready { width, height },
        Err(err) => {
            tracing::error!(media = %path.display(), error = %err, "failed to load image");
            MediaStatus::Missing
        }
    }
}
