use ratatui::layout::{Position, Rect};
use std::time::Instant;

use crate::config::Config;
use crate::deck::{Deck, Reel, ReelStyle};
use crate::motion::MotionSignal;
use crate::ui::carousel::{
    scroll_linked, scroll_progress, scroll_target, visible_fraction, Carousel, CarouselIntent,
    HoverTracker, SwipeTracker,
};
use crate::ui::layout::{body_rect, ControlAction, PageLayout, SectionLayout};
use crate::ui::media::MediaLibrary;

/// A mounted carousel together with its input adapters.
struct ReelSlot {
    carousel: Carousel,
    swipe: SwipeTracker,
    hover: HoverTracker,
    /// Whether scroll linking was active at the last viewport refresh.
    scroll_linked: bool,
}

#[derive(Debug, Clone, Copy)]
struct Viewport {
    scroll: u16,
    height: u16,
    small_screen: bool,
}

impl ReelSlot {
    /// Follow page scroll while linked. The index is applied when linking
    /// activates and on every scroll after that, never on plain ticks, so a
    /// manual choice sticks until the page moves again.
    fn sync_scroll_link(
        &mut self,
        section: &SectionLayout,
        viewport: Viewport,
        scrolled: bool,
        now: Instant,
    ) -> bool {
        if section.style != ReelStyle::Visual {
            return false;
        }
        let state = self.carousel.state();
        let linked = scroll_linked(
            state.is_in_view(),
            state.prefers_reduced_motion(),
            viewport.small_screen,
        );
        let activated = linked && !self.scroll_linked;
        self.scroll_linked = linked;
        if !linked || !(activated || scrolled) {
            return false;
        }

        let top = i32::from(section.area.y) - i32::from(viewport.scroll);
        let Some(progress) = scroll_progress(top, section.area.height, viewport.height) else {
            return false;
        };
        let Some(target) = scroll_target(progress, state.slide_count()) else {
            return false;
        };
        if state.active_index() == Some(target) {
            return false;
        }
        self.carousel
            .dispatch(CarouselIntent::ScrollSync { index: target }, now)
    }
}

pub struct App {
    should_quit: bool,
    deck: Deck,
    slots: Vec<ReelSlot>,
    layout: PageLayout,
    media: MediaLibrary,
    motion: MotionSignal,
    focus: Option<usize>,
    scroll: u16,
    size: (u16, u16),
    small_screen_cols: u16,
    hint: Option<String>,
    /// Last terminal cell the mouse reported.
    pointer: Option<(u16, u16)>,
    status_message: Option<String>,
}

impl App {
    /// Mount one carousel per reel. Nothing is in view until the first
    /// `on_resize` gives the page a viewport.
    pub fn new(deck: Deck, config: &Config, motion: MotionSignal, now: Instant) -> Self {
        let settings = config.carousel.settings();
        let media = MediaLibrary::scan(&deck, &config.display.assets_dir);
        let slots = deck
            .reels
            .iter()
            .map(|reel| ReelSlot {
                carousel: Carousel::mount(reel.len(), &settings, &motion, now),
                swipe: SwipeTracker::new(settings.swipe_threshold),
                hover: HoverTracker::default(),
                scroll_linked: false,
            })
            .collect();
        let focus = deck.reels.iter().position(|reel| !reel.is_empty());

        tracing::info!(
            reels = deck.reels.len(),
            slides = deck.total_slides(),
            missing_media = media.missing_count(),
            "page mounted"
        );

        Self {
            should_quit: false,
            deck,
            slots,
            layout: PageLayout::default(),
            media,
            motion,
            focus,
            scroll: 0,
            size: (0, 0),
            small_screen_cols: config.display.small_screen_cols,
            hint: None,
            pointer: None,
            status_message: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn media(&self) -> &MediaLibrary {
        &self.media
    }

    pub fn carousel(&self, reel: usize) -> Option<&Carousel> {
        self.slots.get(reel).map(|slot| &slot.carousel)
    }

    pub fn carousels(&self) -> impl Iterator<Item = &Carousel> {
        self.slots.iter().map(|slot| &slot.carousel)
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.motion.current()
    }

    pub fn is_small_screen(&self) -> bool {
        self.size.0 < self.small_screen_cols
    }

    /// Focused reel name and "position/count".
    pub fn focused_summary(&self) -> Option<(String, String)> {
        let reel = self.focus?;
        let name = self.deck.reels.get(reel)?.name.clone();
        let carousel = self.carousel(reel)?;
        let index = carousel.active_index()?;
        Some((
            name,
            format!("{}/{}", index + 1, carousel.state().slide_count()),
        ))
    }

    pub fn body(&self) -> Rect {
        body_rect(Rect::new(0, 0, self.size.0, self.size.1))
    }

    pub fn viewport_height(&self) -> u16 {
        self.body().height
    }

    /// Terminal cell to page coordinates; `None` outside the body.
    pub fn page_point(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let body = self.body();
        if !body.contains(Position::new(column, row)) {
            return None;
        }
        Some((column - body.x, row - body.y + self.scroll))
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16, now: Instant) {
        self.size = (cols, rows);
        self.layout = PageLayout::compute(&self.deck, self.body().width);
        self.scroll = self.scroll.min(self.layout.max_scroll(self.viewport_height()));
        self.refresh_viewport(now, false);
        self.sync_hover(now);
    }

    /// Deliver timer and observer callbacks due by `now`.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for slot in &mut self.slots {
            changed |= slot.carousel.poll(now);
        }
        changed | self.refresh_viewport(now, false)
    }

    pub fn scroll_by(&mut self, delta: i32, now: Instant) {
        let target = (i32::from(self.scroll) + delta).max(0);
        self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX), now);
    }

    pub fn scroll_to(&mut self, y: u16, now: Instant) {
        let target = y.min(self.layout.max_scroll(self.viewport_height()));
        if target == self.scroll {
            return;
        }
        self.scroll = target;
        self.refresh_viewport(now, true);
    }

    pub fn focus_next(&mut self, now: Instant) {
        self.cycle_focus(1, now);
    }

    pub fn focus_prev(&mut self, now: Instant) {
        self.cycle_focus(-1, now);
    }

    fn cycle_focus(&mut self, step: isize, now: Instant) {
        let order: Vec<usize> = self
            .deck
            .reels
            .iter()
            .enumerate()
            .filter(|(_, reel)| !reel.is_empty())
            .map(|(index, _)| index)
            .collect();
        if order.is_empty() {
            return;
        }
        let next = match self
            .focus
            .and_then(|current| order.iter().position(|&index| index == current))
        {
            Some(position) => {
                let len = order.len() as isize;
                order[(position as isize + step).rem_euclid(len) as usize]
            }
            None => order[0],
        };
        self.focus = Some(next);
        self.scroll_into_view(next, now);
    }

    fn scroll_into_view(&mut self, reel: usize, now: Instant) {
        let Some(area) = self.layout.sections.get(reel).map(|section| section.area) else {
            return;
        };
        let viewport = self.viewport_height();
        if area.y < self.scroll || area.bottom() > self.scroll.saturating_add(viewport) {
            self.scroll_to(area.y, now);
        }
    }

    /// Route an intent to one reel's carousel.
    pub fn dispatch(&mut self, reel: usize, intent: CarouselIntent, now: Instant) -> bool {
        match self.slots.get_mut(reel) {
            Some(slot) => slot.carousel.dispatch(intent, now),
            None => false,
        }
    }

    pub fn on_control(&mut self, reel: usize, action: ControlAction, now: Instant) -> bool {
        let intent = match action {
            ControlAction::Prev => CarouselIntent::Prev,
            ControlAction::Next | ControlAction::Cta => CarouselIntent::Next,
            ControlAction::Dot(index) => CarouselIntent::GoTo {
                index: index as i64,
            },
        };
        self.dispatch(reel, intent, now)
    }

    /// Mouse reported at a terminal cell.
    pub fn on_pointer(&mut self, column: u16, row: u16, now: Instant) -> bool {
        self.pointer = Some((column, row));
        self.sync_hover(now)
    }

    /// Re-derive hover and the control hint from the last pointer cell.
    /// The page can move under a still pointer, so this also runs after
    /// scrolling and resizing.
    fn sync_hover(&mut self, now: Instant) -> bool {
        let point = self
            .pointer
            .and_then(|(column, row)| self.page_point(column, row));
        let mut changed = false;
        let mut hint = None;
        for (section, slot) in self.layout.sections.iter().zip(self.slots.iter_mut()) {
            let inside = point.is_some_and(|(x, y)| section.hover.contains(Position::new(x, y)));
            if let Some(intent) = slot.hover.update(inside) {
                changed |= slot.carousel.dispatch(intent, now);
            }
            let action = point.and_then(|(x, y)| section.control_at(x, y));
            if let (Some(action), Some(reel)) = (action, self.deck.reels.get(section.reel)) {
                hint = Some(control_hint(action, reel));
            }
        }
        self.hint = hint;
        changed
    }

    /// Primary button pressed at a page point: focus, then either a control
    /// or the start of a swipe, never both.
    pub fn on_press(&mut self, x: u16, y: u16, now: Instant) -> bool {
        let Some(section) = self.layout.section_at(x, y) else {
            return false;
        };
        let reel = section.reel;
        let action = section.control_at(x, y);
        let starts_swipe = section
            .swipe
            .is_some_and(|panel| panel.contains(Position::new(x, y)));

        self.focus = Some(reel);
        if let Some(action) = action {
            return self.on_control(reel, action, now);
        }
        if starts_swipe {
            if let Some(slot) = self.slots.get_mut(reel) {
                slot.swipe.begin(x);
            }
        }
        false
    }

    /// Primary button released. A release outside the body cancels any
    /// swipe in progress.
    pub fn on_release(&mut self, x: Option<u16>, now: Instant) -> bool {
        let mut changed = false;
        for slot in &mut self.slots {
            if !slot.swipe.is_tracking() {
                continue;
            }
            match x {
                Some(x) => {
                    if let Some(intent) = slot.swipe.end(x) {
                        changed |= slot.carousel.dispatch(intent, now);
                    }
                }
                None => slot.swipe.cancel(),
            }
        }
        changed
    }

    pub fn toggle_reduced_motion(&mut self, now: Instant) {
        let reduced = !self.motion.current();
        self.motion.publish(reduced);
        self.on_tick(now);
    }

    /// Republish the reduced-motion preference after a config reload.
    pub fn apply_config(&mut self, config: &Config, now: Instant) {
        self.motion.publish(config.prefers_reduced_motion());
        self.status_message = Some("config reloaded".to_string());
        self.on_tick(now);
    }

    /// Unmount every carousel: timers, observers and subscriptions go with
    /// them.
    pub fn close(&mut self) {
        let count = self.slots.len();
        for slot in self.slots.drain(..) {
            slot.carousel.unmount();
        }
        tracing::debug!(count, "carousels unmounted");
    }

    fn refresh_viewport(&mut self, now: Instant, scrolled: bool) -> bool {
        let viewport = Viewport {
            scroll: self.scroll,
            height: self.viewport_height(),
            small_screen: self.is_small_screen(),
        };
        let mut changed = false;
        for (section, slot) in self.layout.sections.iter().zip(self.slots.iter_mut()) {
            let top = i32::from(section.area.y) - i32::from(viewport.scroll);
            let fraction = visible_fraction(top, section.area.height, viewport.height);
            changed |= slot.carousel.observe_visibility(fraction, now);
            changed |= slot.sync_scroll_link(section, viewport, scrolled, now);
        }
        if scrolled {
            changed |= self.sync_hover(now);
        }
        changed
    }
}

fn control_hint(action: ControlAction, reel: &Reel) -> String {
    match action {
        ControlAction::Prev => "Previous story".to_string(),
        ControlAction::Next => "Next story".to_string(),
        ControlAction::Dot(index) => {
            let title = reel
                .slide(index)
                .map(|slide| slide.title.as_str())
                .unwrap_or_default();
            format!("Go to story {}: {}", index + 1, title)
        }
        ControlAction::Cta => "Start your search on PetReunite".to_string(),
    }
}
