//! Runs a screen's [`Request`] against the backend off the UI thread.

use std::sync::{Arc, mpsc};

use crate::api::{CourseApi, UpdateLessonRequest};
use crate::core::action::{Outcome, Request, Task};
use crate::core::logging::Logger;
use crate::tui::navigator::AppEvent;

pub async fn perform(api: &dyn CourseApi, request: Request) -> Outcome {
    match request {
        Request::Modules => Outcome::Modules(api.modules().await),
        Request::ModuleItems(module_id) => Outcome::ModuleItems {
            module_id,
            result: api.module_items(module_id).await,
        },
        Request::Enrollments => Outcome::Enrollments(api.enrollments().await),
        Request::UpdateLesson {
            module_id,
            lesson_id,
            action,
        } => {
            let body = UpdateLessonRequest::new(lesson_id, &action);
            Outcome::LessonUpdated(api.update_lesson(module_id, body).await)
        }
    }
}

/// Spawns `task` on the tokio runtime. The outcome comes back on `tx`
/// addressed to the screen that asked for it.
pub fn spawn_task(task: Task, api: Arc<dyn CourseApi>, tx: mpsc::Sender<AppEvent>, log: &Logger) {
    log.debug(format_args!(
        "Spawning request: screen={} request={:?}",
        task.screen.0, task.request
    ));
    let log = log.clone();
    tokio::spawn(async move {
        let outcome = perform(api.as_ref(), task.request).await;
        if tx
            .send(AppEvent::Completed {
                screen: task.screen,
                outcome,
            })
            .is_err()
        {
            log.warn("Failed to deliver request outcome: receiver dropped");
        }
    });
}
