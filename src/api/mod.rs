//! # Course Backend
//!
//! Typed access to the course backend. The TUI only ever talks to the
//! [`CourseApi`] trait, so tests can swap in a fake and the real
//! [`CanvasClient`] stays a thin reqwest wrapper.

pub mod client;
pub mod types;

use std::fmt;

use async_trait::async_trait;

pub use client::CanvasClient;
pub use types::{
    Enrollment, EnrollmentState, Grades, Lesson, LessonAction, Module, ModuleNode,
    UpdateLessonRequest, User,
};

/// Errors that can occur while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, timeout). Shown verbatim.
    Network(String),
    /// The backend answered with something other than 200.
    Status(u16),
    /// The body was not the JSON envelope we expected.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "{msg}"),
            ApiError::Status(status) => write!(f, "unexpected status code: {status}"),
            ApiError::Decode(msg) => write!(f, "failed to decode response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn modules(&self) -> Result<Vec<Module>, ApiError>;

    async fn module_items(&self, module_id: u64) -> Result<Vec<ModuleNode>, ApiError>;

    async fn enrollments(&self) -> Result<Vec<Enrollment>, ApiError>;

    async fn update_lesson(&self, module_id: u64, request: UpdateLessonRequest)
    -> Result<(), ApiError>;
}
