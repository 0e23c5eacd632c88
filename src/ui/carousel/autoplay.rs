//! Autoplay scheduling.
//!
//! The timer is a single deadline. It exists only while the phase is
//! `Running`; entering `Running` arms it one full interval ahead, leaving
//! drops it. Re-entering never resumes a partial countdown.

use std::time::{Duration, Instant};

/// Floor for the interval so a zero value cannot spin the poll loop.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    Running,
    Stopped,
}

#[derive(Debug)]
struct AutoplayTimer {
    next_due: Instant,
}

#[derive(Debug)]
pub struct Autoplay {
    interval: Duration,
    timer: Option<AutoplayTimer>,
    timers_started: u64,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            timer: None,
            timers_started: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn phase(&self) -> AutoplayPhase {
        if self.timer.is_some() {
            AutoplayPhase::Running
        } else {
            AutoplayPhase::Stopped
        }
    }

    /// Number of timers armed since construction.
    pub fn timers_started(&self) -> u64 {
        self.timers_started
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timer.as_ref().map(|t| t.next_due)
    }

    /// Bring the phase in line with `eligible`.
    ///
    /// Returns the new phase only when a transition happened, so calling
    /// this repeatedly with the same input never arms a second timer.
    pub fn sync(&mut self, eligible: bool, now: Instant) -> Option<AutoplayPhase> {
        match (eligible, self.timer.is_some()) {
            (true, false) => {
                self.timer = Some(AutoplayTimer {
                    next_due: now + self.interval,
                });
                self.timers_started += 1;
                tracing::debug!(
                    interval_ms = self.interval.as_millis() as u64,
                    generation = self.timers_started,
                    "autoplay running"
                );
                Some(AutoplayPhase::Running)
            }
            (false, true) => {
                self.cancel();
                Some(AutoplayPhase::Stopped)
            }
            _ => None,
        }
    }

    /// Count the periods that elapsed by `now` and move the deadline past
    /// them. Each period is measured from the previous deadline.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let mut fired = 0;
        while timer.next_due <= now {
            timer.next_due += self.interval;
            fired += 1;
        }
        fired
    }

    pub fn cancel(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!(generation = self.timers_started, "autoplay stopped");
        }
    }
}
