//! Input adapters. Each turns a raw host event into a carousel intent and
//! never touches the autoplay timer itself.

use crossterm::event::KeyCode;

use crate::ui::carousel::intent::CarouselIntent;

/// Arrow keys on a focused carousel.
///
/// A `Some` result means the key is consumed and must not fall through to
/// page handling.
pub fn key_intent(code: KeyCode) -> Option<CarouselIntent> {
    match code {
        KeyCode::Right => Some(CarouselIntent::Next),
        KeyCode::Left => Some(CarouselIntent::Prev),
        _ => None,
    }
}

/// Horizontal swipe detection over a press/release pair.
#[derive(Debug)]
pub struct SwipeTracker {
    threshold: u16,
    start_x: Option<u16>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn begin(&mut self, x: u16) {
        self.start_x = Some(x);
    }

    /// Finish a gesture. Travel beyond the threshold to the left advances,
    /// to the right goes back. A release without a press is ignored.
    pub fn end(&mut self, x: u16) -> Option<CarouselIntent> {
        let start = self.start_x.take()?;
        let delta = i32::from(x) - i32::from(start);
        if delta.unsigned_abs() <= u32::from(self.threshold) {
            return None;
        }
        if delta > 0 {
            Some(CarouselIntent::Prev)
        } else {
            Some(CarouselIntent::Next)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Turns pointer positions into enter/leave edges.
#[derive(Debug, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn update(&mut self, inside: bool) -> Option<CarouselIntent> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            CarouselIntent::PointerEnter
        } else {
            CarouselIntent::PointerLeave
        })
    }
}
