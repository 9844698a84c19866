//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::mutation_reply;
use crate::config::Config;
use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::{CourseUpdateParams, EnrollParams, GradeUpdateParams};
use crate::model::{Course, Enrollment, User};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    config: Config,
}

impl HttpClient for NoWasmClient {
    async fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

impl NoWasmClient {
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// Read the body, turning a non-2xx status into `ErrorKind::Status`
    async fn checked_body(resp: Response) -> Result<String> {
        let status = resp.status();
        let text = resp.text().await?;

        log::debug!("Response status: {status}, length: {}", text.len());

        if !status.is_success() {
            return Err(ErrorKind::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        Ok(text)
    }

    /// Check the status, then decode the body
    async fn handle_json_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let text = Self::checked_body(resp).await?;
        Ok(serde_json::from_str::<T>(&text)?)
    }

    /// Check the status; the body is informational only
    async fn handle_mutation_response(resp: Response) -> Result<Value> {
        let text = Self::checked_body(resp).await?;
        Ok(mutation_reply(&text))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        log::debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        Self::handle_json_response(resp).await
    }
}

impl RequestApi for NoWasmClient {
    async fn get_users(&self) -> Result<Vec<User>> {
        let rows: Vec<Value> = self.get_json("/users").await?;
        Ok(User::from_rows(rows))
    }

    async fn get_user_courses(&self, user_id: u64) -> Result<Vec<Course>> {
        self.get_json(&format!("/users/{user_id}/courses")).await
    }

    async fn get_courses(&self) -> Result<Vec<Course>> {
        self.get_json("/courses").await
    }

    async fn update_course(&self, course_id: u64, params: CourseUpdateParams) -> Result<Value> {
        let url = self.config.url(&format!("/courses/{course_id}"));
        log::debug!("PUT {url} {params:?}");
        let resp = self.client.put(&url).json(&params).send().await?;
        Self::handle_mutation_response(resp).await
    }

    async fn get_enrollments(&self) -> Result<Vec<Enrollment>> {
        self.get_json("/enrollments").await
    }

    async fn update_enrollment(
        &self,
        enrollment_id: u64,
        params: GradeUpdateParams<'_>,
    ) -> Result<Value> {
        let url = self.config.url(&format!("/enrollments/{enrollment_id}"));
        log::debug!("PUT {url} {params:?}");
        let resp = self.client.put(&url).json(&params).send().await?;
        Self::handle_mutation_response(resp).await
    }

    async fn enroll(&self, user_id: u64, course_id: u64, params: EnrollParams) -> Result<Value> {
        let url = self.config.url(&format!("/enroll/{user_id}/{course_id}"));
        log::debug!("POST {url} {params:?}");
        let resp = self.client.post(&url).json(&params).send().await?;
        Self::handle_mutation_response(resp).await
    }

    async fn unenroll(&self, user_id: u64, course_id: u64) -> Result<Value> {
        let url = self.config.url(&format!("/enroll/{user_id}/{course_id}"));
        log::debug!("DELETE {url}");
        let resp = self.client.delete(&url).send().await?;
        Self::handle_mutation_response(resp).await
    }
}

pub async fn create_client(config: &Config) -> Result<NoWasmClient> {
    NoWasmClient::new(config).await
}
