//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use petreels::config::Config;
use petreels::deck::builtin;
use petreels::motion::MotionSignal;
use petreels::ui::app::App;
use petreels::ui::carousel::{Carousel, CarouselSettings};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub const INTERVAL: Duration = Duration::from_millis(5000);

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Mount with default settings against a private motion signal.
pub fn mount(slides: usize, motion: &MotionSignal, now: Instant) -> Carousel {
    Carousel::mount(slides, &CarouselSettings::default(), motion, now)
}

/// Mount and report the section fully visible.
pub fn mount_in_view(slides: usize, motion: &MotionSignal, now: Instant) -> Carousel {
    let mut carousel = mount(slides, motion, now);
    carousel.observe_visibility(1.0, now);
    carousel
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn left_up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

/// Config whose assets directory is an empty temp dir.
pub fn test_config() -> (TempDir, Config) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.display.assets_dir = temp_dir.path().to_path_buf();
    (temp_dir, config)
}

/// Built-in deck on a 100x40 terminal with its own motion signal.
pub fn make_app(now: Instant) -> (App, MotionSignal, TempDir) {
    let (temp_dir, config) = test_config();
    let motion = MotionSignal::new(false);
    let mut app = App::new(builtin(), &config, motion.clone(), now);
    app.on_resize(100, 40, now);
    (app, motion, temp_dir)
}
