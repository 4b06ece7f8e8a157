//! # Navigator
//!
//! Owns the single active screen and feeds it events one at a time.
//!
//! ```text
//! AppEvent ──▶ dispatch() ──▶ screen.handle_event() ──▶ Option<Command>
//!                  │                                        │
//!                  │◀──────── Navigate: build + init ◀──────┤
//!                  ▼                                        │
//!               Effect  ◀──────── Request: tag with ScreenId┘
//! ```
//!
//! Every screen built gets a fresh [`ScreenId`]. Requests are tagged with the
//! id of the screen that made them and completions carrying any other id are
//! dropped, so a slow fetch can never write into a screen it was not meant for.

use chrono::NaiveDate;
use ratatui::Frame;

use crate::core::action::{Command, Intent, Outcome, ScreenId, Task};
use crate::core::logging::Logger;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{ActiveScreen, Screen, ScreenEvent};

/// Everything the run loop feeds into the navigator, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Input(TuiEvent),
    Navigate(Intent),
    Completed { screen: ScreenId, outcome: Outcome },
}

/// What the driver has to do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Spawn(Task),
    Quit,
}

pub struct Navigator {
    active: ActiveScreen,
    active_id: ScreenId,
    next_id: u64,
    today: NaiveDate,
    log: Logger,
}

impl Navigator {
    /// Starts on the home screen. `today` pre-fills the due date field.
    pub fn new(today: NaiveDate, log: &Logger) -> Self {
        let log = log.with("navigator");
        let mut active = ActiveScreen::open(Intent::Home, today, &log);
        // Home never asks for anything on entry
        let _ = active.init();
        Self {
            active,
            active_id: ScreenId(0),
            next_id: 1,
            today,
            log,
        }
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn active_id(&self) -> ScreenId {
        self.active_id
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Effect {
        match event {
            AppEvent::Input(TuiEvent::Interrupt) => {
                self.log.info("Interrupt received, quitting");
                Effect::Quit
            }
            AppEvent::Input(TuiEvent::Char('q')) if !self.active.is_text_entry() => {
                self.log.info("Quit requested");
                Effect::Quit
            }
            AppEvent::Input(TuiEvent::Resize) => Effect::None,
            AppEvent::Input(key) => {
                let command = self.active.handle_event(ScreenEvent::Key(key));
                self.apply(command)
            }
            AppEvent::Navigate(intent) => self.navigate(intent),
            AppEvent::Completed { screen, outcome } => {
                if screen != self.active_id {
                    self.log.debug(format_args!(
                        "Dropping stale completion: screen={} active={}",
                        screen.0, self.active_id.0
                    ));
                    return Effect::None;
                }
                let command = self.active.handle_event(ScreenEvent::Completed(outcome));
                self.apply(command)
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.active.render(frame, area);
    }

    fn apply(&mut self, command: Option<Command>) -> Effect {
        match command {
            None => Effect::None,
            Some(Command::Navigate(intent)) => self.navigate(intent),
            Some(Command::Request(request)) => Effect::Spawn(Task {
                screen: self.active_id,
                request,
            }),
            Some(Command::Quit) => {
                self.log.info("Quit selected");
                Effect::Quit
            }
        }
    }

    fn navigate(&mut self, intent: Intent) -> Effect {
        self.log.info(format_args!("Switching to {}", describe(&intent)));
        self.active = ActiveScreen::open(intent, self.today, &self.log);
        self.active_id = ScreenId(self.next_id);
        self.next_id += 1;
        let command = self.active.init();
        self.apply(command)
    }
}

fn describe(intent: &Intent) -> String {
    match intent {
        Intent::Home => "home".to_string(),
        Intent::ModuleList => "module list".to_string(),
        Intent::ModuleDetail(module) => format!("module detail (module_id={})", module.id),
        Intent::LessonDetail { lesson, module } => format!(
            "lesson detail (lesson_id={} module_id={})",
            lesson.item.id, module.id
        ),
        Intent::EnrollmentList => "enrollment list".to_string(),
    }
}
