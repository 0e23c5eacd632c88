use crate::config::{ConfigStore, ConfigWatcher, DEFAULT_DEBOUNCE_MS};
use crate::deck::Deck;
use crate::motion::MotionSignal;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::{Duration, Instant};

/// Frame period; autoplay deadlines are checked at this granularity.
const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run(store: ConfigStore, deck: Deck) -> io::Result<()> {
    let shutdown = ShutdownHandle::new();
    if let Err(err) = shutdown.register_signals() {
        tracing::warn!(error = %err, "signal handlers unavailable");
    }

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    let _watcher = match ConfigWatcher::start(store.clone(), events.sender(), DEFAULT_DEBOUNCE_MS)
    {
        Ok(watcher) => Some(watcher),
        Err(err) => {
            tracing::warn!(error = %err, "config hot-reload disabled");
            None
        }
    };

    let motion = MotionSignal::global().clone();
    let mut app = App::new(deck, &store.get(), motion, Instant::now());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows, Instant::now());
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let event = events.next(TICK_RATE);
        let now = Instant::now();
        match event {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, now),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, now),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows, now),
            Ok(AppEvent::Tick) => {
                app.on_tick(now);
            }
            Ok(AppEvent::ConfigReload) => app.apply_config(&store.get(), now),
            Ok(AppEvent::ConfigError(message)) => {
                app.set_status_message(format!("config error: {}", message));
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                app.on_tick(now);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.close();
    drop(guard);
    Ok(())
}
