mod loader;
mod store;
mod types;
mod watcher;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{CarouselConfig, Config, DeckConfig, DisplayConfig};
pub use watcher::{ConfigWatcher, WatcherError, DEFAULT_DEBOUNCE_MS};
