use crate::ui::app::App;
use crate::ui::carousel::AutoplayPhase;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, REUNITE_ORANGE, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "PetReunite",
                Style::default().fg(REUNITE_ORANGE).add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some((name, position)) = app.focused_summary() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("{} {}", name, position), text_style));
        }

        let running = app
            .carousels()
            .filter(|c| c.autoplay_phase() == AutoplayPhase::Running)
            .count();
        spans.push(Span::styled("  │  ", separator_style));
        if app.prefers_reduced_motion() {
            spans.push(Span::styled("motion reduced", text_style));
        } else {
            spans.push(Span::styled("●", Style::default().fg(STATUS_OK)));
            spans.push(Span::styled(format!(" {} playing", running), text_style));
        }

        if let Some(message) = app.status_message() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(message.to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
