//! reqwest implementation of [`CourseApi`] against the course backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{Enrollment, Envelope, Module, ModuleNode, UpdateLessonRequest};
use super::{ApiError, CourseApi};
use crate::core::logging::Logger;

pub struct CanvasClient {
    base_url: String,
    course_id: String,
    client: reqwest::Client,
    log: Logger,
}

impl CanvasClient {
    pub fn new(base_url: &str, course_id: &str, log: &Logger) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let log = log.with("api_client");
        log.info(format_args!("Creating API client: base_url={base_url}"));
        Self {
            base_url,
            course_id: course_id.to_string(),
            client: reqwest::Client::new(),
            log,
        }
    }

    fn course_url(&self, path: &str) -> String {
        format!("{}/course/{}{}", self.base_url, self.course_id, path)
    }

    /// GET `url` and unwrap the `data` field of the response envelope.
    async fn get_data<T: DeserializeOwned>(&self, action: &str, url: String) -> Result<T, ApiError> {
        self.log.info(format_args!("{action}: GET {url}"));

        let response = self.client.get(&url).send().await.map_err(|e| {
            self.log.error(format_args!("{action}: request failed: {e}"));
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            self.log.error(format_args!("{action}: unexpected status {status}"));
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            self.log.error(format_args!("{action}: failed to decode response: {e}"));
            ApiError::Decode(e.to_string())
        })?;

        self.log.debug(format_args!("{action}: envelope status={}", envelope.status));
        Ok(envelope.data)
    }
}

#[async_trait]
impl CourseApi for CanvasClient {
    async fn modules(&self) -> Result<Vec<Module>, ApiError> {
        let modules: Vec<Module> = self.get_data("get_modules", self.course_url("/modules")).await?;
        self.log.info(format_args!("Fetched modules: count={}", modules.len()));
        Ok(modules)
    }

    async fn module_items(&self, module_id: u64) -> Result<Vec<ModuleNode>, ApiError> {
        let url = self.course_url(&format!("/modules/{module_id}"));
        let items: Vec<ModuleNode> = self.get_data("get_module_items", url).await?;
        self.log.info(format_args!(
            "Fetched module items: module_id={module_id} count={}",
            items.len()
        ));
        Ok(items)
    }

    async fn enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        let enrollments: Vec<Enrollment> = self
            .get_data("get_enrollments", self.course_url("/enrollments"))
            .await?;
        self.log.info(format_args!("Fetched enrollments: count={}", enrollments.len()));
        Ok(enrollments)
    }

    async fn update_lesson(
        &self,
        module_id: u64,
        request: UpdateLessonRequest,
    ) -> Result<(), ApiError> {
        let url = self.course_url(&format!("/modules/{module_id}/lesson"));
        self.log.info(format_args!(
            "update_lesson: POST {url} lesson_id={} action={}",
            request.lesson_id, request.action
        ));

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                self.log.error(format_args!("update_lesson: request failed: {e}"));
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            self.log.error(format_args!("update_lesson: unexpected status {status}"));
            return Err(ApiError::Status(status.as_u16()));
        }

        self.log.info(format_args!("Updated lesson {}", request.lesson_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_url_strips_trailing_slash() {
        let client = CanvasClient::new("http://localhost:3000/", "1234", &Logger::discard());
        assert_eq!(
            client.course_url("/modules"),
            "http://localhost:3000/course/1234/modules"
        );
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        // Port 9 (discard) is essentially never listening on loopback.
        let client = CanvasClient::new("http://127.0.0.1:9", "1", &Logger::discard());
        let result = tokio_test::block_on(client.modules());
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
