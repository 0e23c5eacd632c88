//! Viewport intersection for carousel sections.

/// Fraction of a section's rows that fall inside the viewport.
///
/// `top` is the section's first row relative to the viewport's first row
/// and may be negative once the section scrolls past the top edge.
pub fn visible_fraction(top: i32, height: u16, viewport_height: u16) -> f32 {
    if height == 0 || viewport_height == 0 {
        return 0.0;
    }
    let start = top.max(0);
    let end = (top + i32::from(height)).min(i32::from(viewport_height));
    if end <= start {
        return 0.0;
    }
    (end - start) as f32 / f32::from(height)
}

/// Turns raw visibility fractions into in-view transitions.
///
/// Like an intersection observer, it reports only when the answer changes;
/// the first observation always reports. After `disconnect` nothing is
/// reported again.
#[derive(Debug)]
pub struct VisibilityObserver {
    threshold: f32,
    last: Option<bool>,
    connected: bool,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            last: None,
            connected: true,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// A zero threshold means any intersecting row counts.
    pub fn observe(&mut self, fraction: f32) -> Option<bool> {
        if !self.connected {
            return None;
        }
        let in_view = if self.threshold <= 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.threshold
        };
        if self.last == Some(in_view) {
            return None;
        }
        self.last = Some(in_view);
        Some(in_view)
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_partially_visible_section() {
        assert_eq!(visible_fraction(0, 10, 20), 1.0);
        assert_eq!(visible_fraction(15, 10, 20), 0.5);
        assert_eq!(visible_fraction(-8, 10, 20), 0.2);
        assert_eq!(visible_fraction(25, 10, 20), 0.0);
        assert_eq!(visible_fraction(-10, 10, 20), 0.0);
    }

    #[test]
    fn fraction_of_section_taller_than_viewport() {
        assert_eq!(visible_fraction(-5, 40, 20), 0.5);
    }

    #[test]
    fn empty_section_is_never_visible() {
        assert_eq!(visible_fraction(0, 0, 20), 0.0);
    }

    #[test]
    fn observer_reports_only_changes() {
        let mut observer = VisibilityObserver::new(0.3);
        assert_eq!(observer.observe(0.0), Some(false));
        assert_eq!(observer.observe(0.1), None);
        assert_eq!(observer.observe(0.3), Some(true));
        assert_eq!(observer.observe(0.9), None);
        assert_eq!(observer.observe(0.29), Some(false));
    }

    #[test]
    fn disconnected_observer_is_silent() {
        let mut observer = VisibilityObserver::new(0.3);
        observer.disconnect();
        assert!(!observer.is_connected());
        assert_eq!(observer.observe(1.0), None);
    }

    #[test]
    fn zero_threshold_needs_some_intersection() {
        let mut observer = VisibilityObserver::new(0.0);
        assert_eq!(observer.observe(0.0), Some(false));
        assert_eq!(observer.observe(0.01), Some(true));
    }
}
