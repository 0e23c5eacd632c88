use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Shutdown flag shared by the UI loop and the input thread.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag on SIGTERM and SIGINT.
    ///
    /// Raw mode turns Ctrl+C into a key press, so SIGINT here only comes
    /// from another process.
    pub fn register_signals(&self) -> io::Result<()> {
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.flag))?;
        signal_hook::flag::register(SIGINT, Arc::clone(&self.flag))?;
        Ok(())
    }

    pub fn signal(&self) {
        if !self.flag.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
