//! Rotating carousel engine.
//!
//! [`Carousel`] is one mounted instance. Its index and pause flags move
//! through [`CarouselReducer`]; the autoplay timer, visibility observer and
//! reduced-motion subscription are resources owned next to that state and
//! released together by a single teardown path.
//!
//! Time is always passed in. The UI loop hands over `Instant::now()`, tests
//! hand over simulated instants.

mod autoplay;
mod gestures;
mod intent;
mod reducer;
mod scroll;
mod state;
mod visibility;

pub use autoplay::{Autoplay, AutoplayPhase};
pub use gestures::{key_intent, HoverTracker, SwipeTracker};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use scroll::{scroll_linked, scroll_progress, scroll_target};
pub use state::CarouselState;
pub use visibility::{visible_fraction, VisibilityObserver};

use std::time::{Duration, Instant};

use crate::motion::{MotionSignal, MotionSubscription};
use crate::ui::mvi::Reducer;

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.3;
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 40;

/// Construction-time tuning for a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub autoplay_interval: Duration,
    /// Visible fraction of the section required to count as in view.
    pub visibility_threshold: f32,
    /// Horizontal travel, in columns, a swipe must exceed.
    pub swipe_threshold: u16,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

pub struct Carousel {
    state: CarouselState,
    autoplay: Autoplay,
    visibility: VisibilityObserver,
    motion: Option<MotionSubscription>,
}

impl Carousel {
    /// Mount a carousel over `slide_count` slides, starting at the first.
    ///
    /// It starts out of view, so autoplay stays stopped until the first
    /// visibility observation says otherwise.
    pub fn mount(
        slide_count: usize,
        settings: &CarouselSettings,
        motion: &MotionSignal,
        now: Instant,
    ) -> Self {
        let subscription = motion.subscribe();
        let reduced = subscription.current();
        let mut carousel = Self {
            state: CarouselState::new(slide_count),
            autoplay: Autoplay::new(settings.autoplay_interval),
            visibility: VisibilityObserver::new(settings.visibility_threshold),
            motion: Some(subscription),
        };
        carousel.dispatch(CarouselIntent::ReducedMotionChanged { reduced }, now);
        carousel
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    pub fn autoplay_phase(&self) -> AutoplayPhase {
        self.autoplay.phase()
    }

    pub fn timers_started(&self) -> u64 {
        self.autoplay.timers_started()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.autoplay.next_due()
    }

    /// Run an intent through the reducer, then re-evaluate autoplay.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, intent: CarouselIntent, now: Instant) -> bool {
        let before = self.state.clone();
        self.state = CarouselReducer::reduce(std::mem::take(&mut self.state), intent);
        self.reconcile(now);
        self.state != before
    }

    pub fn go_to(&mut self, index: i64, now: Instant) -> bool {
        self.dispatch(CarouselIntent::GoTo { index }, now)
    }

    pub fn go_next(&mut self, now: Instant) -> bool {
        self.dispatch(CarouselIntent::Next, now)
    }

    pub fn go_prev(&mut self, now: Instant) -> bool {
        self.dispatch(CarouselIntent::Prev, now)
    }

    /// Feed a visible fraction to the observer; dispatches only when the
    /// in-view answer flips.
    pub fn observe_visibility(&mut self, fraction: f32, now: Instant) -> bool {
        match self.visibility.observe(fraction) {
            Some(in_view) => self.dispatch(CarouselIntent::VisibilityChanged { in_view }, now),
            None => false,
        }
    }

    /// Deliver pending host callbacks: a reduced-motion change first, then
    /// any autoplay ticks due by `now`.
    ///
    /// Returns whether the state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(reduced) = self.motion.as_mut().and_then(MotionSubscription::changed) {
            changed |= self.dispatch(CarouselIntent::ReducedMotionChanged { reduced }, now);
        }
        let ticks = self.autoplay.due_ticks(now);
        for _ in 0..ticks {
            self.state =
                CarouselReducer::reduce(std::mem::take(&mut self.state), CarouselIntent::Tick);
            tracing::trace!(index = ?self.state.active_index(), "autoplay tick");
            changed = true;
        }
        changed
    }

    /// Release the timer, the observer and the motion subscription.
    pub fn unmount(self) {}

    fn reconcile(&mut self, now: Instant) {
        self.autoplay.sync(self.state.autoplay_eligible(), now);
    }

    fn teardown(&mut self) {
        self.autoplay.cancel();
        self.visibility.disconnect();
        self.motion = None;
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.teardown();
    }
}
