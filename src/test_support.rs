//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use log::{Log, Metadata, Record};

use crate::api::{
    ApiError, CourseApi, Enrollment, EnrollmentState, Grades, Lesson, Module, ModuleNode,
    UpdateLessonRequest, User,
};

/// A log sink that keeps every record as `"LEVEL target: message"`.
#[derive(Default)]
pub struct CaptureLog {
    lines: Mutex<Vec<String>>,
}

impl CaptureLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Log for CaptureLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines.lock().unwrap().push(format!(
            "{} {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {}
}

/// Canned backend. Anything not set up answers with a 404.
#[derive(Default)]
pub struct FakeApi {
    pub modules: Option<Result<Vec<Module>, ApiError>>,
    pub items: HashMap<u64, Vec<ModuleNode>>,
    pub enrollments: Option<Result<Vec<Enrollment>, ApiError>>,
    pub update_result: Option<Result<(), ApiError>>,
    /// Every update received, as `(module_id, body)`.
    pub updates: Mutex<Vec<(u64, UpdateLessonRequest)>>,
}

#[async_trait]
impl CourseApi for FakeApi {
    async fn modules(&self) -> Result<Vec<Module>, ApiError> {
        self.modules.clone().unwrap_or(Err(ApiError::Status(404)))
    }

    async fn module_items(&self, module_id: u64) -> Result<Vec<ModuleNode>, ApiError> {
        self.items
            .get(&module_id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.enrollments.clone().unwrap_or(Err(ApiError::Status(404)))
    }

    async fn update_lesson(
        &self,
        module_id: u64,
        request: UpdateLessonRequest,
    ) -> Result<(), ApiError> {
        self.updates.lock().unwrap().push((module_id, request));
        self.update_result.clone().unwrap_or(Ok(()))
    }
}

pub fn module(id: u64, name: &str) -> Module {
    Module {
        id,
        name: name.to_string(),
    }
}

pub fn lesson(id: u64, title: &str, kind: &str) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
        kind: kind.to_string(),
    }
}

pub fn node(item: Lesson, children: Vec<Lesson>) -> ModuleNode {
    ModuleNode { item, children }
}

/// An active student enrollment.
pub fn enrollment(id: u64, name: &str, score: Option<f64>) -> Enrollment {
    Enrollment {
        id,
        kind: Enrollment::STUDENT.to_string(),
        state: EnrollmentState::Active,
        grades: Grades {
            html_url: None,
            current_score: score,
        },
        user: User {
            id: id + 1000,
            name: name.to_string(),
        },
    }
}
