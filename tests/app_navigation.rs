mod common;

use common::{key, left_down, left_up, make_app, mouse, ms, test_config, INTERVAL};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use petreels::deck::builtin;
use petreels::motion::MotionSignal;
use petreels::ui::app::App;
use petreels::ui::carousel::AutoplayPhase;
use petreels::ui::input::{handle_key, handle_mouse};
use petreels::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::time::Instant;

// On a 100x40 terminal the body starts at screen row 3. The stories section
// occupies page rows 7..23 with its controls on row 20; the visual section
// occupies 24..38 with its panel on 27..36.
const BODY_TOP: u16 = 3;
const STORIES: usize = 0;
const VISUAL: usize = 1;

fn index(app: &App, reel: usize) -> Option<usize> {
    app.carousel(reel).and_then(|c| c.active_index())
}

fn phase(app: &App, reel: usize) -> AutoplayPhase {
    app.carousel(reel).map(|c| c.autoplay_phase()).unwrap()
}

fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn both_reels_autoplay_when_page_opens() {
    let t0 = Instant::now();
    let (app, _motion, _dir) = make_app(t0);

    assert_eq!(app.focus(), Some(STORIES));
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Running);
    assert_eq!(phase(&app, VISUAL), AutoplayPhase::Running);
    assert_eq!(index(&app, VISUAL), Some(0));
}

#[test]
fn ticks_advance_every_running_reel() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    assert!(app.on_tick(t0 + INTERVAL));
    assert_eq!(index(&app, STORIES), Some(1));
    assert_eq!(index(&app, VISUAL), Some(1));
}

#[test]
fn arrow_keys_drive_the_focused_reel_only() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    app.scroll_to(3, t0);
    let visual = index(&app, VISUAL);

    handle_key(&mut app, key(KeyCode::Right), t0);
    assert_eq!(index(&app, STORIES), Some(1));
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Stopped);

    handle_key(&mut app, key(KeyCode::Left), t0);
    handle_key(&mut app, key(KeyCode::Left), t0);
    assert_eq!(index(&app, STORIES), Some(3));

    // Horizontal arrows never move the page.
    assert_eq!(app.scroll(), 3);
    assert_eq!(index(&app, VISUAL), visual);
    assert_eq!(phase(&app, VISUAL), AutoplayPhase::Running);
}

#[test]
fn digit_keys_jump_to_a_slide() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_key(&mut app, key(KeyCode::Char('3')), t0);
    assert_eq!(index(&app, STORIES), Some(2));
    assert!(app.carousel(STORIES).unwrap().state().is_manually_paused());

    // Out of range wraps like any other jump.
    handle_key(&mut app, key(KeyCode::Char('6')), t0);
    assert_eq!(index(&app, STORIES), Some(1));
}

#[test]
fn tab_moves_focus_and_scrolls_section_into_view() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_key(&mut app, key(KeyCode::Tab), t0);
    assert_eq!(app.focus(), Some(VISUAL));
    assert_eq!(app.scroll(), 5);

    handle_key(&mut app, key(KeyCode::BackTab), t0);
    assert_eq!(app.focus(), Some(STORIES));
}

#[test]
fn scrolling_links_the_visual_reel_without_pausing() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_key(&mut app, key(KeyCode::End), t0);
    assert_eq!(app.scroll(), 5);
    assert_eq!(index(&app, VISUAL), Some(1));
    assert!(!app.carousel(VISUAL).unwrap().state().is_paused());
    assert_eq!(index(&app, STORIES), Some(0));
}

#[test]
fn manual_choice_sticks_until_the_page_scrolls() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    app.focus_next(t0);
    handle_key(&mut app, key(KeyCode::Right), t0);
    handle_key(&mut app, key(KeyCode::Right), t0);
    assert_eq!(index(&app, VISUAL), Some(3));

    app.on_tick(t0 + ms(100));
    assert_eq!(index(&app, VISUAL), Some(3));

    handle_key(&mut app, key(KeyCode::Up), t0 + ms(200));
    assert_eq!(index(&app, VISUAL), Some(1));
}

#[test]
fn small_screens_do_not_link_scroll() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    app.on_resize(60, 40, t0);
    assert!(app.is_small_screen());

    handle_key(&mut app, key(KeyCode::End), t0);
    assert_eq!(app.scroll(), 5);
    assert_eq!(index(&app, VISUAL), Some(0));
}

#[test]
fn hover_pauses_and_leaving_resumes() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 30, BODY_TOP + 12), t0);
    assert!(app.carousel(STORIES).unwrap().state().is_hover_paused());
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Stopped);
    assert_eq!(phase(&app, VISUAL), AutoplayPhase::Running);

    let t1 = t0 + ms(3000);
    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 30, 0), t1);
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Running);
    assert_eq!(app.carousel(STORIES).unwrap().next_due(), Some(t1 + INTERVAL));
}

#[test]
fn wheel_scroll_moves_section_out_from_under_pointer() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    // Body of 18 rows.
    app.on_resize(100, 24, t0);

    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 20, 15), t0);
    assert!(app.carousel(STORIES).unwrap().state().is_hover_paused());

    for _ in 0..3 {
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 20, 15), t0);
    }
    assert_eq!(app.scroll(), 9);
    assert!(!app.carousel(STORIES).unwrap().state().is_hover_paused());
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Running);
}

#[test]
fn wheel_scroll_brings_section_under_pointer() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    app.on_resize(100, 24, t0);

    // Top body row sits over the hero until the page moves.
    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 60, BODY_TOP), t0);
    assert!(!app.carousel(STORIES).unwrap().state().is_hover_paused());

    for _ in 0..4 {
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 60, BODY_TOP), t0);
    }
    assert_eq!(app.scroll(), 12);
    assert!(app.carousel(STORIES).unwrap().state().is_hover_paused());
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Stopped);
}

#[test]
fn resize_rechecks_hover_at_last_pointer() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 30, BODY_TOP + 12), t0);
    assert!(app.carousel(STORIES).unwrap().state().is_hover_paused());

    // The pointer cell now falls in the footer, outside the body.
    app.on_resize(100, 16, t0);
    assert!(!app.carousel(STORIES).unwrap().state().is_hover_paused());
}

#[test]
fn hovering_a_control_shows_its_label() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 7, BODY_TOP + 20), t0);
    assert_eq!(app.hint(), Some("Next story"));

    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 14, BODY_TOP + 20), t0);
    assert_eq!(app.hint(), Some("Go to story 2: Roxy's Reunion"));

    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 60, BODY_TOP + 12), t0);
    assert_eq!(app.hint(), None);
}

#[test]
fn clicking_a_dot_selects_that_slide() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, left_down(20, BODY_TOP + 20), t0);
    handle_mouse(&mut app, left_up(20, BODY_TOP + 20), t0);
    assert_eq!(index(&app, STORIES), Some(3));
    assert!(app.carousel(STORIES).unwrap().state().is_manually_paused());
}

#[test]
fn clicking_prev_wraps_to_last() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, left_down(3, BODY_TOP + 20), t0);
    assert_eq!(index(&app, STORIES), Some(3));
}

#[test]
fn pressing_a_control_does_not_start_a_swipe() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    handle_key(&mut app, key(KeyCode::End), t0);
    assert_eq!(app.scroll(), 5);

    // Dot 3 of the visual reel sits on page row 35, inside the swipe panel.
    let row = 35 - 5 + BODY_TOP;
    handle_mouse(&mut app, left_down(17, row), t0);
    assert_eq!(index(&app, VISUAL), Some(2));

    handle_mouse(&mut app, left_up(80, row), t0);
    assert_eq!(index(&app, VISUAL), Some(2));
}

#[test]
fn clicking_a_section_focuses_it() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, left_down(60, BODY_TOP + 30), t0);
    assert_eq!(app.focus(), Some(VISUAL));
    assert_eq!(index(&app, VISUAL), Some(0));
}

#[test]
fn swipe_on_visual_panel_navigates() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, left_down(80, BODY_TOP + 30), t0);
    handle_mouse(&mut app, left_up(20, BODY_TOP + 30), t0);
    assert_eq!(index(&app, VISUAL), Some(1));
    assert!(app.carousel(VISUAL).unwrap().state().is_manually_paused());

    handle_mouse(&mut app, left_down(10, BODY_TOP + 30), t0);
    handle_mouse(&mut app, left_up(70, BODY_TOP + 30), t0);
    assert_eq!(index(&app, VISUAL), Some(0));
}

#[test]
fn short_drag_is_not_a_swipe() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, left_down(80, BODY_TOP + 30), t0);
    handle_mouse(&mut app, left_up(45, BODY_TOP + 30), t0);
    assert_eq!(index(&app, VISUAL), Some(0));
}

#[test]
fn stories_cards_ignore_swipes() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);

    handle_mouse(&mut app, left_down(90, BODY_TOP + 12), t0);
    handle_mouse(&mut app, left_up(10, BODY_TOP + 12), t0);
    assert_eq!(index(&app, STORIES), Some(0));
}

#[test]
fn motion_key_stops_and_restarts_autoplay() {
    let t0 = Instant::now();
    let (mut app, motion, _dir) = make_app(t0);

    handle_key(&mut app, key(KeyCode::Char('m')), t0);
    assert!(motion.current());
    assert!(app.prefers_reduced_motion());
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Stopped);
    assert_eq!(phase(&app, VISUAL), AutoplayPhase::Stopped);

    app.on_tick(t0 + INTERVAL * 2);
    assert_eq!(index(&app, STORIES), Some(0));

    // Reduced motion also turns scroll linking off.
    handle_key(&mut app, key(KeyCode::End), t0 + INTERVAL * 2);
    assert_eq!(index(&app, VISUAL), Some(0));

    handle_key(&mut app, key(KeyCode::Char('m')), t0 + INTERVAL * 3);
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Running);
}

#[test]
fn section_scrolled_out_of_view_stops() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    // Body of 6 rows shows only the hero.
    app.on_resize(100, 12, t0);
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Stopped);
    assert_eq!(phase(&app, VISUAL), AutoplayPhase::Stopped);

    app.scroll_to(7, t0);
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Running);
}

#[test]
fn quit_keys_request_exit() {
    let t0 = Instant::now();
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let (mut app, _motion, _dir) = make_app(t0);
        handle_key(&mut app, event, t0);
        assert!(app.should_quit());
    }
}

#[test]
fn empty_reel_renders_nothing_and_skips_focus() {
    let t0 = Instant::now();
    let (_dir, config) = test_config();
    let mut deck = builtin();
    deck.reels[0].slides.clear();
    let mut app = App::new(deck, &config, MotionSignal::new(false), t0);
    app.on_resize(100, 40, t0);

    assert_eq!(app.focus(), Some(VISUAL));
    assert_eq!(index(&app, STORIES), None);
    assert_eq!(phase(&app, STORIES), AutoplayPhase::Stopped);

    handle_key(&mut app, key(KeyCode::Tab), t0);
    assert_eq!(app.focus(), Some(VISUAL));
}

#[test]
fn close_unmounts_every_carousel() {
    let t0 = Instant::now();
    let (mut app, motion, _dir) = make_app(t0);
    assert_eq!(motion.subscriber_count(), 2);

    app.close();
    assert_eq!(motion.subscriber_count(), 0);
    assert!(app.carousels().next().is_none());
    assert!(!app.on_tick(t0 + INTERVAL));
}

#[test]
fn draw_shows_active_story_and_placeholder() {
    let t0 = Instant::now();
    let (app, _motion, _dir) = make_app(t0);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let text = screen_text(terminal.backend().buffer());

    assert!(text.contains("PetReunite"));
    assert!(text.contains("Stories from the PetReunite community"));
    assert!(text.contains("Buddy's Second Chance"));
    assert!(text.contains("Image missing"));
    assert!(text.contains(" 1 / 4 "));
    assert!(text.contains("q: Quit"));
}

#[test]
fn draw_follows_navigation() {
    let t0 = Instant::now();
    let (mut app, _motion, _dir) = make_app(t0);
    handle_key(&mut app, key(KeyCode::Right), t0);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let text = screen_text(terminal.backend().buffer());

    assert!(text.contains("Roxy's Reunion"));
    assert!(text.contains(" 2 / 4 "));
    assert!(text.contains("paused"));
}
