use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::ui::carousel::{
    CarouselSettings, DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_VISIBILITY_THRESHOLD,
};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub deck: DeckConfig,
}

/// Carousel timing and gesture tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds (default: 5000).
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    /// Visible fraction needed to count as in view (default: 0.3).
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
    /// Columns a drag must travel to count as a swipe (default: 40).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u16,
}

/// Presentation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Suppress autoplay and scroll-linked motion.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Terminals narrower than this are treated as small screens (default: 80).
    #[serde(default = "default_small_screen_cols")]
    pub small_screen_cols: u16,
    /// Base directory for slide media paths (default: ".").
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

/// Where slide content comes from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Deck file; the built-in catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_autoplay_interval_ms() -> u64 {
    DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64
}

fn default_visibility_threshold() -> f32 {
    DEFAULT_VISIBILITY_THRESHOLD
}

fn default_swipe_threshold() -> u16 {
    DEFAULT_SWIPE_THRESHOLD
}

fn default_small_screen_cols() -> u16 {
    80
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            visibility_threshold: default_visibility_threshold(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            small_screen_cols: default_small_screen_cols(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl CarouselConfig {
    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            autoplay_interval: Duration::from_millis(self.autoplay_interval_ms),
            visibility_threshold: self.visibility_threshold,
            swipe_threshold: self.swipe_threshold,
        }
    }
}
