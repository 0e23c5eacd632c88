//! Rendering of one reel section. A pure function of the reel, its layout
//! and the carousel state.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::deck::{Reel, ReelStyle, Slide, MAX_RATING};
use crate::ui::carousel::CarouselState;
use crate::ui::layout::{
    ControlAction, SectionLayout, CTA_LABEL, HEADING_ROW, INTRO_ROW, STORIES_CAPTION_ROW,
};
use crate::ui::media::{MediaLibrary, MediaStatus, MISSING_PLACEHOLDER};
use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, REUNITE_ORANGE, STAR, STAR_DIM,
    STATUS_ERROR,
};

pub struct SectionView<'a> {
    reel: &'a Reel,
    section: &'a SectionLayout,
    state: &'a CarouselState,
    media: &'a MediaLibrary,
    focused: bool,
}

impl<'a> SectionView<'a> {
    pub fn new(
        reel: &'a Reel,
        section: &'a SectionLayout,
        state: &'a CarouselState,
        media: &'a MediaLibrary,
        focused: bool,
    ) -> Self {
        Self {
            reel,
            section,
            state,
            media,
            focused,
        }
    }

    /// Section rect translated into the render area.
    fn place(&self, area: Rect, rect: Rect) -> Rect {
        let local = self.section.local(rect);
        Rect {
            x: area.x + local.x,
            y: area.y + local.y,
            ..local
        }
        .intersection(area)
    }

    fn row(area: Rect, offset: u16) -> Rect {
        Rect::new(area.x, area.y + offset, area.width, 1).intersection(area)
    }

    fn frame_block(&self, title: String) -> Block<'static> {
        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
    }

    fn render_card(&self, area: Rect, buf: &mut Buffer, slide: &Slide, index: usize) {
        let frame = self.place(area, self.section.frame);
        let block = self.frame_block(format!(" {} / {} ", index + 1, self.reel.len()));
        let inner = block.inner(frame);
        block.render(frame, buf);

        let mut label_spans = Vec::new();
        if let Some(label) = &slide.label {
            label_spans.push(Span::styled(
                label.clone(),
                Style::default().fg(REUNITE_ORANGE).add_modifier(Modifier::BOLD),
            ));
            label_spans.push(Span::raw("  "));
        }
        label_spans.extend(rating_spans(slide));

        let head = vec![
            media_line(self.media.status(&slide.media), slide),
            Line::from(label_spans),
            Line::from(Span::styled(
                slide.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
        ];
        let head_height = (head.len() as u16).min(inner.height);
        Paragraph::new(head).render(Rect { height: head_height, ..inner }, buf);

        let tail_height = 2.min(inner.height.saturating_sub(head_height));
        let body_area = Rect {
            y: inner.y + head_height,
            height: inner.height.saturating_sub(head_height + tail_height),
            ..inner
        };
        Paragraph::new(slide.body.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .render(body_area, buf);

        let tail = vec![
            Line::from(slide.attribution.clone().unwrap_or_default()),
            Line::from(Span::styled(
                slide.meta.clone().unwrap_or_default(),
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        let tail_area = Rect {
            y: body_area.bottom(),
            height: tail_height,
            ..inner
        };
        Paragraph::new(tail).render(tail_area, buf);
    }

    fn render_panel(&self, area: Rect, buf: &mut Buffer, slide: &Slide, index: usize) {
        let frame = self.place(area, self.section.frame);
        let block = self.frame_block(format!(" {} / {} ", index + 1, self.reel.len()));
        let inner = block.inner(frame);
        block.render(frame, buf);

        let head = vec![
            media_line(self.media.status(&slide.media), slide),
            Line::from(Span::styled(
                slide.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
        ];
        let head_height = (head.len() as u16).min(inner.height);
        Paragraph::new(head).render(Rect { height: head_height, ..inner }, buf);

        // Leave the last inner row to the call-to-action.
        let body_area = Rect {
            y: inner.y + head_height,
            height: inner.height.saturating_sub(head_height + 1),
            ..inner
        };
        Paragraph::new(slide.body.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .render(body_area, buf);

        let cta = self
            .section
            .controls
            .iter()
            .find(|hitbox| hitbox.action == ControlAction::Cta);
        if let Some(hitbox) = cta {
            Paragraph::new(Span::styled(
                CTA_LABEL,
                Style::default().fg(REUNITE_ORANGE).add_modifier(Modifier::BOLD),
            ))
            .render(self.place(area, hitbox.area), buf);
        }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer, index: usize) {
        let mut status_x = 0;
        for hitbox in &self.section.controls {
            let text = match hitbox.action {
                ControlAction::Prev => " ‹ ",
                ControlAction::Next => " › ",
                ControlAction::Dot(dot) if dot == index => "● ",
                ControlAction::Dot(_) => "○ ",
                ControlAction::Cta => continue,
            };
            let style = match hitbox.action {
                ControlAction::Dot(dot) if dot == index => Style::default().fg(REUNITE_ORANGE),
                ControlAction::Dot(_) => Style::default().fg(MUTED_TEXT),
                _ => Style::default().fg(HEADER_TEXT).add_modifier(Modifier::REVERSED),
            };
            let rect = self.place(area, hitbox.area);
            Paragraph::new(Span::styled(text, style)).render(rect, buf);
            status_x = status_x.max(rect.right());
        }

        let row = self.place(
            area,
            Rect::new(0, self.section.controls_row, self.section.area.width, 1),
        );
        let status_area = Rect {
            x: status_x + 2,
            width: row.right().saturating_sub(status_x + 2),
            ..row
        };
        if status_area.width > 0 {
            Paragraph::new(Span::styled(
                autoplay_label(self.state),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ))
            .render(status_area, buf);
        }
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(index) = self.state.active_index() else {
            return;
        };
        let Some(slide) = self.reel.slide(index) else {
            return;
        };

        Paragraph::new(Span::styled(
            self.reel.heading.clone(),
            Style::default().fg(REUNITE_ORANGE).add_modifier(Modifier::BOLD),
        ))
        .render(Self::row(area, HEADING_ROW), buf);
        Paragraph::new(Span::styled(
            self.reel.intro.clone(),
            Style::default().fg(MUTED_TEXT),
        ))
        .render(Self::row(area, INTRO_ROW), buf);

        match self.reel.style {
            ReelStyle::Stories => {
                self.render_card(area, buf, slide, index);
                Paragraph::new(Span::styled(
                    caption_summary(slide),
                    Style::default().fg(MUTED_TEXT),
                ))
                .render(Self::row(area, STORIES_CAPTION_ROW), buf);
            }
            ReelStyle::Visual => self.render_panel(area, buf, slide, index),
        }
        self.render_controls(area, buf, index);
    }
}

fn media_line(status: MediaStatus, slide: &Slide) -> Line<'static> {
    let lead = match status {
        MediaStatus::Ready { width, height } => Span::styled(
            format!("▣ {} · {}×{}", slide.media, width, height),
            Style::default().fg(MUTED_TEXT),
        ),
        MediaStatus::Missing => Span::styled(
            format!("▨ {}", MISSING_PLACEHOLDER),
            Style::default().fg(STATUS_ERROR),
        ),
    };
    Line::from(vec![
        lead,
        Span::raw("  "),
        Span::styled(
            slide.alt.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ),
    ])
}

fn rating_spans(slide: &Slide) -> Vec<Span<'static>> {
    let Some(stars) = slide.stars() else {
        return Vec::new();
    };
    vec![
        Span::styled("★".repeat(stars as usize), Style::default().fg(STAR)),
        Span::styled(
            "★".repeat((MAX_RATING - stars) as usize),
            Style::default().fg(STAR_DIM),
        ),
    ]
}

/// Single-line summary of the active story.
pub fn caption_summary(slide: &Slide) -> String {
    let mut parts = vec![slide.title.clone()];
    if let Some(label) = &slide.label {
        parts.push(label.clone());
    }
    let mut summary = format!("{}. {}", parts.join(". "), slide.body);
    if let Some(author) = &slide.attribution {
        summary.push_str(&format!(" By {}.", author));
    }
    if let Some(meta) = &slide.meta {
        summary.push_str(&format!(" {}.", meta));
    }
    summary
}

pub fn autoplay_label(state: &CarouselState) -> &'static str {
    if state.prefers_reduced_motion() {
        "motion reduced"
    } else if state.is_manually_paused() {
        "paused"
    } else if state.is_hover_paused() {
        "paused (hover)"
    } else if state.is_in_view() {
        "autoplay"
    } else {
        "idle"
    }
}
