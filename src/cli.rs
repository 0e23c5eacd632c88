use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Rotating pet reunion stories in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "petreels", version, about)]
pub struct Cli {
    /// Config file (defaults to ~/.config/petreels/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Deck file to show instead of the built-in stories.
    #[arg(long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Directory slide media paths are resolved against.
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Disable autoplay and scroll-linked motion.
    #[arg(long)]
    pub reduced_motion: bool,

    /// Autoplay period in milliseconds.
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Validate config and deck, print a summary, and exit.
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Layer command-line overrides on top of file values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(deck) = &self.deck {
            config.deck.path = Some(deck.clone());
        }
        if let Some(assets) = &self.assets {
            config.display.assets_dir = assets.clone();
        }
        if self.reduced_motion {
            config.display.reduced_motion = true;
        }
        if let Some(interval) = self.interval_ms {
            config.carousel.autoplay_interval_ms = interval;
        }
    }
}
