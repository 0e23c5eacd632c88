use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KEY_HINTS: &str =
    " Tab: Focus │ ←/→: Slide │ 1-9: Jump │ ↑/↓ PgUp/PgDn: Scroll │ m: Motion │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left; the hovered control's label, or the version,
    /// on the right.
    pub fn widget(&self, area: Rect, hover_hint: Option<&str>) -> Paragraph<'static> {
        let right = match hover_hint {
            Some(hint) => format!("{} ", hint),
            None => format!("v{} ", VERSION),
        };

        // Pad by char count, not byte count.
        let hints_width = KEY_HINTS.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(KEY_HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
