//! Scroll-linked slide selection.
//!
//! While linked, the active slide tracks how far the section has travelled
//! through the viewport: entering at the bottom edge is progress 0, leaving
//! at the top edge is progress 1.

/// Linking is only active while the section is in view, motion is allowed
/// and the terminal is wide enough.
pub fn scroll_linked(in_view: bool, reduced_motion: bool, small_screen: bool) -> bool {
    in_view && !reduced_motion && !small_screen
}

/// Progress of a section through the viewport, clamped to `0.0..=1.0`.
pub fn scroll_progress(top: i32, height: u16, viewport_height: u16) -> Option<f32> {
    let viewport = i32::from(viewport_height.max(1));
    let total = i32::from(height) + viewport;
    if total <= 0 {
        return None;
    }
    let raw = (viewport - top) as f32 / total as f32;
    Some(raw.clamp(0.0, 1.0))
}

pub fn scroll_target(progress: f32, slide_count: usize) -> Option<usize> {
    if slide_count == 0 {
        return None;
    }
    let index = (progress * slide_count as f32).floor() as usize;
    Some(index.min(slide_count - 1))
}
