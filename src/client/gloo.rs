//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

use super::mutation_reply;
use crate::config::Config;
use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::{CourseUpdateParams, EnrollParams, GradeUpdateParams};
use crate::model::{Course, Enrollment, User};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    config: Config,
}

impl HttpClient for WasmClient {
    async fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
        })
    }
}

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(method: &str, url: &str) -> RequestBuilder {
        let builder = match method {
            "POST" => Request::post(url),
            "PUT" => Request::put(url),
            "DELETE" => Request::delete(url),
            _ => Request::get(url),
        };

        builder
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
    }

    /// Read the body, turning a non-2xx status into `ErrorKind::Status`
    async fn checked_body(resp: Response) -> Result<String> {
        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await?;

        log::debug!("Response status: {status}, length: {}", text.len());

        if !ok {
            return Err(ErrorKind::Status { status, body: text }.into());
        }

        Ok(text)
    }

    /// Handle JSON response with error checking
    async fn handle_json_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let text = Self::checked_body(resp).await?;
        Ok(serde_json::from_str::<T>(&text)?)
    }

    async fn handle_mutation_response(resp: Response) -> Result<Value> {
        let text = Self::checked_body(resp).await?;
        Ok(mutation_reply(&text))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        log::debug!("GET {url}");
        let resp = Self::build_request("GET", &url).send().await?;
        Self::handle_json_response(resp).await
    }
}

impl RequestApi for WasmClient {
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
        let resp = Self::build_request("PUT", &url).json(&params)?.send().await?;
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
        let resp = Self::build_request("PUT", &url).json(&params)?.send().await?;
        Self::handle_mutation_response(resp).await
    }

    async fn enroll(&self, user_id: u64, course_id: u64, params: EnrollParams) -> Result<Value> {
        let url = self.config.url(&format!("/enroll/{user_id}/{course_id}"));
        log::debug!("POST {url} {params:?}");
        let resp = Self::build_request("POST", &url).json(&params)?.send().await?;
        Self::handle_mutation_response(resp).await
    }

    async fn unenroll(&self, user_id: u64, course_id: u64) -> Result<Value> {
        let url = self.config.url(&format!("/enroll/{user_id}/{course_id}"));
        log::debug!("DELETE {url}");
        let resp = Self::build_request("DELETE", &url).send().await?;
        Self::handle_mutation_response(resp).await
    }
}

pub async fn create_client(config: &Config) -> Result<WasmClient> {
    WasmClient::new(config).await
}
