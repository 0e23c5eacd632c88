//! Screen regions and the scrollable page geometry.
//!
//! Page coordinates: `x` is the body column, `y` is the row from the top
//! of the page, independent of the current scroll offset.

use ratatui::layout::{Position, Rect};

use crate::deck::{Deck, Reel, ReelStyle};

pub const HERO_HEIGHT: u16 = 6;
pub const SECTION_GAP: u16 = 1;

pub const STORIES_HEIGHT: u16 = 16;
pub const VISUAL_HEIGHT: u16 = 14;

/// Rows inside a section, relative to its top.
pub const HEADING_ROW: u16 = 0;
pub const INTRO_ROW: u16 = 1;
const CONTENT_TOP: u16 = 3;
const STORIES_CARD_HEIGHT: u16 = 10;
const STORIES_CONTROLS_ROW: u16 = 13;
pub const STORIES_CAPTION_ROW: u16 = 14;
const VISUAL_SLIDES_HEIGHT: u16 = 8;
const VISUAL_CONTROLS_ROW: u16 = 11;

const CONTROL_X: u16 = 2;
const ARROW_WIDTH: u16 = 3;
const DOTS_X: u16 = 11;
const DOT_STRIDE: u16 = 3;
const DOT_WIDTH: u16 = 2;

pub const CTA_LABEL: &str = "[ Start Your Search ]";

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Prev,
    Next,
    Dot(usize),
    /// Call-to-action button; advances like `Next`.
    Cta,
}

/// Clickable control in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub area: Rect,
    pub action: ControlAction,
}

/// One reel section placed on the page.
///
/// Empty reels keep a zero-height entry so indices line up with the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub reel: usize,
    pub style: ReelStyle,
    pub area: Rect,
    /// Region whose hover pauses autoplay.
    pub hover: Rect,
    /// Card viewport or slide panel; drawn with the focus border.
    pub frame: Rect,
    /// Panel that accepts swipe gestures, where the style has one.
    pub swipe: Option<Rect>,
    pub controls_row: u16,
    pub controls: Vec<Hitbox>,
}

impl SectionLayout {
    fn place(reel_index: usize, reel: &Reel, top: u16, width: u16) -> Self {
        if reel.is_empty() {
            let area = Rect::new(0, top, width, 0);
            return Self {
                reel: reel_index,
                style: reel.style,
                area,
                hover: area,
                frame: area,
                swipe: None,
                controls_row: top,
                controls: Vec::new(),
            };
        }

        let (height, frame_height, controls_offset) = match reel.style {
            ReelStyle::Stories => (STORIES_HEIGHT, STORIES_CARD_HEIGHT, STORIES_CONTROLS_ROW),
            ReelStyle::Visual => (VISUAL_HEIGHT, VISUAL_SLIDES_HEIGHT, VISUAL_CONTROLS_ROW),
        };
        let area = Rect::new(0, top, width, height);
        let frame = Rect::new(0, top + CONTENT_TOP, width, frame_height);
        // The controls row belongs to the viewport/panel, as in the page.
        let panel = Rect::new(0, frame.y, width, frame_height + 1);
        let controls_row = top + controls_offset;

        let mut controls = Vec::new();
        push_control(&mut controls, CONTROL_X, controls_row, ARROW_WIDTH, width, ControlAction::Prev);
        push_control(
            &mut controls,
            CONTROL_X + ARROW_WIDTH + 1,
            controls_row,
            ARROW_WIDTH,
            width,
            ControlAction::Next,
        );
        for index in 0..reel.len() {
            let x = DOTS_X + (index as u16).saturating_mul(DOT_STRIDE);
            push_control(&mut controls, x, controls_row, DOT_WIDTH, width, ControlAction::Dot(index));
        }

        let (hover, swipe) = match reel.style {
            ReelStyle::Stories => (panel, None),
            ReelStyle::Visual => {
                let cta_row = frame.y + frame.height.saturating_sub(2);
                let cta_width = CTA_LABEL.chars().count() as u16;
                push_control(&mut controls, CONTROL_X, cta_row, cta_width, width, ControlAction::Cta);
                (area, Some(panel))
            }
        };

        Self {
            reel: reel_index,
            style: reel.style,
            area,
            hover,
            frame,
            swipe,
            controls_row,
            controls,
        }
    }

    /// The same rect moved into section-local coordinates.
    pub fn local(&self, rect: Rect) -> Rect {
        Rect {
            y: rect.y.saturating_sub(self.area.y),
            ..rect
        }
    }

    pub fn control_at(&self, x: u16, y: u16) -> Option<ControlAction> {
        self.controls
            .iter()
            .find(|hitbox| hitbox.area.contains(Position::new(x, y)))
            .map(|hitbox| hitbox.action)
    }
}

fn push_control(
    controls: &mut Vec<Hitbox>,
    x: u16,
    y: u16,
    width: u16,
    limit: u16,
    action: ControlAction,
) {
    if x.saturating_add(width) > limit {
        return;
    }
    controls.push(Hitbox {
        area: Rect::new(x, y, width, 1),
        action,
    });
}

/// Vertical arrangement of the hero and every reel section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub sections: Vec<SectionLayout>,
}

impl PageLayout {
    pub fn compute(deck: &Deck, width: u16) -> Self {
        let mut top = HERO_HEIGHT + SECTION_GAP;
        let mut sections = Vec::with_capacity(deck.reels.len());
        for (index, reel) in deck.reels.iter().enumerate() {
            let section = SectionLayout::place(index, reel, top, width);
            if section.area.height > 0 {
                top = top.saturating_add(section.area.height + SECTION_GAP);
            }
            sections.push(section);
        }
        Self {
            width,
            height: top,
            sections,
        }
    }

    pub fn section_at(&self, x: u16, y: u16) -> Option<&SectionLayout> {
        self.sections
            .iter()
            .find(|section| section.area.contains(Position::new(x, y)))
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }
}
