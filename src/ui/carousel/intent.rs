use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Jump to a slide. Any integer is accepted and wrapped with floored
    /// modulo. Pauses autoplay for the rest of the mount.
    GoTo { index: i64 },
    Next,
    Prev,
    /// Autoplay advance. Only the autoplay timer sends this.
    Tick,
    PointerEnter,
    PointerLeave,
    VisibilityChanged { in_view: bool },
    ReducedMotionChanged { reduced: bool },
    /// Index derived from page scroll. Clamped, does not pause.
    ScrollSync { index: usize },
}

impl Intent for CarouselIntent {}
