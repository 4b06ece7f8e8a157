//! # Commands
//!
//! Screens never do I/O. When a screen wants something to happen outside
//! itself it returns a [`Command`]: switch to another screen, ask the
//! backend for data, or quit.
//!
//! ```text
//! key / completed fetch  →  screen.handle_event()  →  Option<Command>
//! ```
//!
//! Backend work is described by a [`Request`]. The navigator tags it with the
//! [`ScreenId`] of the screen that asked, the driver runs it, and the result
//! comes back as an [`Outcome`] addressed to that same id. If the screen has
//! been replaced in the meantime the outcome is dropped.

use crate::api::{ApiError, Enrollment, LessonAction, Module, ModuleNode};

/// "Replace the active screen with this one."
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Home,
    ModuleList,
    ModuleDetail(Module),
    LessonDetail { lesson: ModuleNode, module: Module },
    EnrollmentList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(Intent),
    Request(Request),
    Quit,
}

/// Backend work a screen wants done.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Modules,
    ModuleItems(u64),
    Enrollments,
    UpdateLesson {
        module_id: u64,
        lesson_id: u64,
        action: LessonAction,
    },
}

/// Result of a [`Request`], delivered back to the screen that made it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Modules(Result<Vec<Module>, ApiError>),
    ModuleItems {
        module_id: u64,
        result: Result<Vec<ModuleNode>, ApiError>,
    },
    Enrollments(Result<Vec<Enrollment>, ApiError>),
    LessonUpdated(Result<(), ApiError>),
}

/// Generation number of a constructed screen. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScreenId(pub u64);

/// A request tagged with the screen waiting for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub screen: ScreenId,
    pub request: Request,
}
