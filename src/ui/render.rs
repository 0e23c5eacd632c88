use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, HERO_HEIGHT};
use crate::ui::reel_view::SectionView;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, REUNITE_ORANGE};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let page = render_page(app);
    blit(&page, app.scroll(), body, frame.buffer_mut());

    frame.render_widget(Footer::new().widget(footer, app.hint()), footer);
}

/// Render the whole page, hero included, into a buffer as tall as the page.
pub fn render_page(app: &App) -> Buffer {
    let layout = app.layout();
    let mut page = Buffer::empty(Rect::new(0, 0, layout.width, layout.height));
    hero().render(
        Rect::new(0, 0, layout.width, HERO_HEIGHT.min(layout.height)),
        &mut page,
    );

    for section in &layout.sections {
        if section.area.height == 0 {
            continue;
        }
        let (Some(reel), Some(carousel)) =
            (app.deck().reels.get(section.reel), app.carousel(section.reel))
        else {
            continue;
        };
        let focused = app.focus() == Some(section.reel);
        SectionView::new(reel, section, carousel.state(), app.media(), focused)
            .render(section.area.intersection(page.area), &mut page);
    }
    page
}

fn hero() -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "Bringing lost pets home",
            Style::default().fg(REUNITE_ORANGE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Report a lost or found pet, browse sightings, and follow reunions as they happen.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Scroll down for stories from the community.",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )),
    ];
    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Copy the rows of `page` starting at `scroll` into `body`.
fn blit(page: &Buffer, scroll: u16, body: Rect, target: &mut Buffer) {
    for row in 0..body.height {
        let page_y = scroll.saturating_add(row);
        if page_y >= page.area.height {
            break;
        }
        for column in 0..body.width.min(page.area.width) {
            let (Some(source), Some(cell)) = (
                page.cell((column, page_y)),
                target.cell_mut((body.x + column, body.y + row)),
            ) else {
                continue;
            };
            *cell = source.clone();
        }
    }
}
