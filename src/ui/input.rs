use crate::ui::app::App;
use crate::ui::carousel::{key_intent, CarouselIntent};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

const WHEEL_STEP: i32 = 3;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    // Arrow keys act on the focused reel only.
    if let Some(intent) = key_intent(key.code) {
        if let Some(reel) = app.focus() {
            app.dispatch(reel, intent, now);
        }
        return;
    }

    let page = i32::from(app.viewport_height().max(1));
    match key.code {
        KeyCode::Tab => app.focus_next(now),
        KeyCode::BackTab => app.focus_prev(now),
        KeyCode::Up => app.scroll_by(-1, now),
        KeyCode::Down => app.scroll_by(1, now),
        KeyCode::PageUp => app.scroll_by(-page, now),
        KeyCode::PageDown => app.scroll_by(page, now),
        KeyCode::Home => app.scroll_to(0, now),
        KeyCode::End => app.scroll_to(u16::MAX, now),
        KeyCode::Char('m') => app.toggle_reduced_motion(now),
        KeyCode::Char(ch @ '1'..='9') => {
            if let (Some(reel), Some(digit)) = (app.focus(), ch.to_digit(10)) {
                let index = i64::from(digit) - 1;
                app.dispatch(reel, CarouselIntent::GoTo { index }, now);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    // Every mouse report carries a position, wheel events included.
    app.on_pointer(mouse.column, mouse.row, now);
    let point = app.page_point(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((x, y)) = point {
                app.on_press(x, y, now);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.on_release(point.map(|(x, _)| x), now);
        }
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP, now),
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP, now),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
