//! # Screens
//!
//! One full-terminal view each. A screen owns its own data, cursor and
//! error, turns events into at most one [`Command`], and draws itself.
//!
//! ```text
//! Home ──▶ ModuleList ──▶ ModuleDetail ──▶ LessonDetail
//!   │          ▲ esc           ▲ esc            │ esc / action done
//!   │          └───────────────┴────────────────┘
//!   └────▶ EnrollmentList (esc → Home)
//! ```
//!
//! The navigator holds exactly one [`ActiveScreen`]. Replacing it drops the
//! old screen together with everything it fetched.

mod enrollment_list;
mod home;
mod lesson_detail;
mod list;
mod module_detail;
mod module_list;

pub use enrollment_list::EnrollmentListScreen;
pub use home::{HomeScreen, MenuEntry};
pub use lesson_detail::{LessonDetailScreen, LessonMenuEntry};
pub use list::{FetchedList, LoadStatus};
pub use module_detail::ModuleDetailScreen;
pub use module_list::ModuleListScreen;

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::{Command, Intent, Outcome};
use crate::core::logging::Logger;
use crate::tui::event::TuiEvent;

/// What a screen can be asked to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Key(TuiEvent),
    /// A request this screen issued has finished.
    Completed(Outcome),
}

pub trait Screen {
    /// Runs once, right after construction. May ask for a fetch.
    fn init(&mut self) -> Option<Command> {
        None
    }

    fn handle_event(&mut self, event: ScreenEvent) -> Option<Command>;

    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// While true, plain characters (including `q`) are text, not commands.
    fn is_text_entry(&self) -> bool {
        false
    }

    /// Name used in log lines.
    fn name(&self) -> &'static str;
}

pub enum ActiveScreen {
    Home(HomeScreen),
    ModuleList(ModuleListScreen),
    ModuleDetail(ModuleDetailScreen),
    LessonDetail(LessonDetailScreen),
    EnrollmentList(EnrollmentListScreen),
}

impl ActiveScreen {
    /// Builds the screen an intent points at. `today` pre-fills date fields.
    pub fn open(intent: Intent, today: NaiveDate, log: &Logger) -> Self {
        match intent {
            Intent::Home => ActiveScreen::Home(HomeScreen::new(log)),
            Intent::ModuleList => ActiveScreen::ModuleList(ModuleListScreen::new(log)),
            Intent::ModuleDetail(module) => {
                ActiveScreen::ModuleDetail(ModuleDetailScreen::new(module, log))
            }
            Intent::LessonDetail { lesson, module } => {
                ActiveScreen::LessonDetail(LessonDetailScreen::new(lesson, module, today, log))
            }
            Intent::EnrollmentList => {
                ActiveScreen::EnrollmentList(EnrollmentListScreen::new(log))
            }
        }
    }

    fn inner(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Home(s) => s,
            ActiveScreen::ModuleList(s) => s,
            ActiveScreen::ModuleDetail(s) => s,
            ActiveScreen::LessonDetail(s) => s,
            ActiveScreen::EnrollmentList(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Home(s) => s,
            ActiveScreen::ModuleList(s) => s,
            ActiveScreen::ModuleDetail(s) => s,
            ActiveScreen::LessonDetail(s) => s,
            ActiveScreen::EnrollmentList(s) => s,
        }
    }
}

impl Screen for ActiveScreen {
    fn init(&mut self) -> Option<Command> {
        self.inner_mut().init()
    }

    fn handle_event(&mut self, event: ScreenEvent) -> Option<Command> {
        self.inner_mut().handle_event(event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.inner_mut().render(frame, area);
    }

    fn is_text_entry(&self) -> bool {
        self.inner().is_text_entry()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
