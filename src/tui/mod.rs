//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and turns keyboard input into [`navigator::AppEvent`]s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns the [`Navigator`] and processes events strictly in the
//! order they arrive. Key presses and finished fetches share one channel:
//!
//! ```text
//! crossterm ──▶ Input ──┐
//!                       ├──▶ mpsc ──▶ navigator.dispatch() ──▶ Effect
//! tokio task ─▶ Completed┘                                     │
//!      ▲                                                       │
//!      └──────────────────────── Spawn(Task) ◀─────────────────┘
//! ```
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
pub mod navigator;
pub mod screens;
mod tasks;
mod ui;

use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::CourseApi;
use crate::core::logging::Logger;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::navigator::{AppEvent, Effect, Navigator};

/// How long to wait for input before checking for finished fetches.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct CursorStyleGuard;

impl CursorStyleGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        Ok(Self)
    }
}

impl Drop for CursorStyleGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

/// Takes over the terminal until the user quits.
///
/// Fails if the terminal cannot be initialized or drawn to; the terminal is
/// restored either way.
pub fn run(api: Arc<dyn CourseApi>, log: &Logger) -> io::Result<()> {
    let log = log.with("tui");
    let mut terminal = ratatui::try_init()?;
    log.info("Terminal initialized");

    let result = CursorStyleGuard::new().and_then(|_guard| event_loop(&mut terminal, api, &log));

    ratatui::restore();
    match &result {
        Ok(()) => log.info("Terminal restored"),
        Err(e) => log.error(format_args!("Event loop failed: {e}")),
    }
    result
}

fn event_loop(terminal: &mut DefaultTerminal, api: Arc<dyn CourseApi>, log: &Logger) -> io::Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut navigator = Navigator::new(today, log);
    let (tx, rx) = mpsc::channel::<AppEvent>();

    loop {
        terminal.draw(|f| navigator.render(f))?;

        // Queue every pending key behind whatever already arrived
        let first = poll_event_timeout(POLL_INTERVAL)?;
        for event in first.into_iter().map(Ok).chain(std::iter::from_fn(|| {
            poll_event_immediate().transpose()
        })) {
            // Our own receiver is alive, so this cannot fail
            let _ = tx.send(AppEvent::Input(event?));
        }

        for event in rx.try_iter() {
            match navigator.dispatch(event) {
                Effect::None => {}
                Effect::Spawn(task) => tasks::spawn_task(task, api.clone(), tx.clone(), log),
                Effect::Quit => {
                    log.info("Shutting down");
                    return Ok(());
                }
            }
        }
    }
}
