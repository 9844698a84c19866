#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::config::Config;
use crate::error::Result;
use crate::model::dtos::{CourseUpdateParams, EnrollParams, GradeUpdateParams};
use crate::model::{Course, Enrollment, User};
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance bound to the configured backend
    async fn new(config: &Config) -> Result<Self>
    where
        Self: Sized;
}

/// Every backend endpoint the client talks to.
///
/// Non-2xx replies surface as `ErrorKind::Status` so callers can tell a
/// rejected mutation apart from a transport failure.
pub trait RequestApi {
    /// `GET /users`
    async fn get_users(&self) -> Result<Vec<User>>;

    /// `GET /users/{id}/courses`
    async fn get_user_courses(&self, user_id: u64) -> Result<Vec<Course>>;

    /// `GET /courses`
    async fn get_courses(&self) -> Result<Vec<Course>>;

    /// `PUT /courses/{id}`
    async fn update_course(&self, course_id: u64, params: CourseUpdateParams) -> Result<Value>;

    /// `GET /enrollments`
    async fn get_enrollments(&self) -> Result<Vec<Enrollment>>;

    /// `PUT /enrollments/{id}`
    async fn update_enrollment(
        &self,
        enrollment_id: u64,
        params: GradeUpdateParams<'_>,
    ) -> Result<Value>;

    /// `POST /enroll/{userId}/{courseId}`
    async fn enroll(&self, user_id: u64, course_id: u64, params: EnrollParams) -> Result<Value>;

    /// `DELETE /enroll/{userId}/{courseId}`
    async fn unenroll(&self, user_id: u64, course_id: u64) -> Result<Value>;
}

/// Key-value persistence for the logged-in session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}
