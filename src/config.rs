//! Client configuration.
//!
//! Defaults point at the development backend on `127.0.0.1:5000`. A TOML
//! file may override any field and `ENROLL_BASE_URL` overrides the base URL.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ErrorKind, Result};

pub const BASE_URL_ENV: &str = "ENROLL_BASE_URL";

#[derive(Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    admin_path: Option<String>,
    session_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub admin_path: String,
    /// Session storage key holding the logged-in user's id.
    pub session_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_owned(),
            admin_path: "/admin".to_owned(),
            session_key: "userId".to_owned(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cf: ConfigFile = toml::from_str(text)?;
        let mut c = Self::default();

        if let Some(s) = cf.base_url {
            c.base_url = s;
        }
        if let Some(s) = cf.admin_path {
            c.admin_path = s;
        }
        if let Some(s) = cf.session_key {
            c.session_key = s;
        }

        c.validate()?;
        Ok(c)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` when given, then applies the environment override.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut c = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            log::debug!("base url overridden from {BASE_URL_ENV}: {url}");
            c.base_url = url;
            c.validate()?;
        }
        Ok(c)
    }

    fn validate(&mut self) -> Result<()> {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ErrorKind::ConfigError(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            ))
            .into());
        }
        if !self.admin_path.starts_with('/') {
            self.admin_path.insert(0, '/');
        }
        if self.session_key.is_empty() {
            return Err(ErrorKind::ConfigError("session_key must not be empty".to_string()).into());
        }
        Ok(())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn admin_url(&self) -> String {
        self.url(&self.admin_path)
    }
}
