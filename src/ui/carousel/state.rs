use crate::ui::mvi::UiState;

/// Runtime state of one mounted carousel.
///
/// `active_index` is `Some` exactly when the reel has slides, and then it
/// is always inside `0..slide_count`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub(super) slide_count: usize,
    pub(super) active_index: Option<usize>,
    /// Pointer is over the carousel region.
    pub(super) hover_paused: bool,
    /// Set by any explicit navigation; never cleared for this mount.
    pub(super) manually_paused: bool,
    pub(super) in_view: bool,
    pub(super) prefers_reduced_motion: bool,
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            active_index: (slide_count > 0).then_some(0),
            ..Self::default()
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// True when either pause source is active.
    pub fn is_paused(&self) -> bool {
        self.hover_paused || self.manually_paused
    }

    pub fn is_hover_paused(&self) -> bool {
        self.hover_paused
    }

    pub fn is_manually_paused(&self) -> bool {
        self.manually_paused
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.prefers_reduced_motion
    }

    /// Conjunction that gates the autoplay timer.
    pub fn autoplay_eligible(&self) -> bool {
        self.in_view && !self.is_paused() && !self.prefers_reduced_motion && self.slide_count > 0
    }
}
