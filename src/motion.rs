//! Reduced-motion preference shared by every mounted carousel.
//!
//! One process-wide signal, lazily initialized from the environment on first
//! use and republished whenever configuration changes. Consumers hold a
//! [`MotionSubscription`]; dropping it unsubscribes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::sync::watch;

/// Environment variable that forces reduced motion on.
pub const REDUCED_MOTION_ENV: &str = "PETREELS_REDUCED_MOTION";

static GLOBAL: OnceLock<MotionSignal> = OnceLock::new();

#[derive(Clone)]
pub struct MotionSignal {
    inner: Arc<MotionInner>,
}

struct MotionInner {
    tx: watch::Sender<bool>,
    subscribers: Arc<AtomicUsize>,
}

impl MotionSignal {
    pub fn new(reduced: bool) -> Self {
        let (tx, _rx) = watch::channel(reduced);
        Self {
            inner: Arc::new(MotionInner {
                tx,
                subscribers: Arc::new(AtomicUsize::new(0)),
            }),
        }
    }

    /// The process-wide signal.
    pub fn global() -> &'static MotionSignal {
        GLOBAL.get_or_init(|| {
            let reduced = env_prefers_reduced_motion();
            tracing::debug!(reduced, "reduced-motion signal initialized");
            MotionSignal::new(reduced)
        })
    }

    pub fn current(&self) -> bool {
        *self.inner.tx.borrow()
    }

    /// Store a new preference. Returns whether the value changed; subscribers
    /// are only woken on a change.
    pub fn publish(&self, reduced: bool) -> bool {
        let changed = self.inner.tx.send_if_modified(|value| {
            if *value == reduced {
                return false;
            }
            *value = reduced;
            true
        });
        if changed {
            tracing::info!(reduced, "reduced-motion preference changed");
        }
        changed
    }

    pub fn subscribe(&self) -> MotionSubscription {
        self.inner.subscribers.fetch_add(1, Ordering::SeqCst);
        MotionSubscription {
            rx: self.inner.tx.subscribe(),
            subscribers: Arc::clone(&self.inner.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.load(Ordering::SeqCst)
    }
}

/// One consumer's view of the signal.
pub struct MotionSubscription {
    rx: watch::Receiver<bool>,
    subscribers: Arc<AtomicUsize>,
}

impl MotionSubscription {
    pub fn current(&self) -> bool {
        *self.rx.borrow()
    }

    /// The latest value if it changed since the last call.
    pub fn changed(&mut self) -> Option<bool> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }
}

impl Drop for MotionSubscription {
    fn drop(&mut self) {
        self.subscribers.fetch_sub(1, Ordering::SeqCst);
    }
}

pub fn env_prefers_reduced_motion() -> bool {
    std::env::var(REDUCED_MOTION_ENV)
        .map(|value| parse_flag(&value))
        .unwrap_or(false)
}

/// Accepts `1`, `true`, `yes` and `on`, case-insensitively.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("reduce-ish"));
    }

    #[test]
    fn subscription_sees_only_changes() {
        let signal = MotionSignal::new(false);
        let mut sub = signal.subscribe();
        assert!(!sub.current());
        assert_eq!(sub.changed(), None);

        assert!(signal.publish(true));
        assert_eq!(sub.changed(), Some(true));
        assert_eq!(sub.changed(), None);

        assert!(!signal.publish(true));
        assert_eq!(sub.changed(), None);
    }

    #[test]
    fn publish_without_subscribers_is_kept() {
        let signal = MotionSignal::new(false);
        signal.publish(true);
        assert!(signal.current());
        assert!(signal.subscribe().current());
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let signal = MotionSignal::new(false);
        let a = signal.subscribe();
        let b = signal.clone().subscribe();
        assert_eq!(signal.subscriber_count(), 2);
        drop(a);
        assert_eq!(signal.subscriber_count(), 1);
        drop(b);
        assert_eq!(signal.subscriber_count(), 0);
    }
}
