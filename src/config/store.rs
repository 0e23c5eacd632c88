//! Shared configuration storage.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

type Overrides = Arc<dyn Fn(&mut Config) + Send + Sync>;

/// Config container shared between the UI loop and the file watcher.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: Option<Overrides>,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides: None,
        }
    }

    /// Layer `apply` over every reloaded file, so command-line flags keep
    /// winning after a hot reload.
    pub fn with_overrides<F>(mut self, apply: F) -> Self
    where
        F: Fn(&mut Config) + Send + Sync + 'static,
    {
        self.overrides = Some(Arc::new(apply));
        self
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On failure the current config is kept and the error returned.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let mut config = Config::load_from(&self.path)?;
        if let Some(apply) = &self.overrides {
            apply(&mut config);
            config.validate()?;
        }
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
