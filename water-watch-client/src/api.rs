//! Water Watch HTTP API client
//!
//! Thin wrapper over `reqwest` for the three endpoints the dashboard uses:
//! the per-user environments list and the login/register operations. One
//! request per call, no retries; every response body is read as text first
//! so that transport failures and shape failures stay distinguishable.

use crate::{ClientConfig, Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use water_watch_core::environment::{Environment, UserId};
use water_watch_core::error::SourceError;
use water_watch_core::view::EnvironmentSource;

#[derive(Debug, Deserialize)]
struct EnvironmentsEnvelope {
    environments: Vec<Environment>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: String,
}

/// Successful registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

/// Client for the Water Watch service API
#[derive(Debug, Clone)]
pub struct WaterWatchApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl WaterWatchApi {
    /// Create a client from the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("water-watch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Create a client pointing at the hosted service
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Fetch the full environment list for a user
    ///
    /// The server wraps the list in an `{ "environments": [...] }` envelope;
    /// a missing or malformed envelope is a decode failure, not a fetch
    /// failure.
    pub async fn fetch_environments(&self, user_id: &UserId) -> Result<Vec<Environment>> {
        let url = self.url(&format!("/api/environment/getEnvironments/{user_id}"));
        debug!(%url, "fetching environments");

        let response = self.http.get(&url).send().await?;
        let body = Self::expect_success(response).await?;
        let envelope: EnvironmentsEnvelope =
            serde_json::from_str(&body).map_err(Error::decode)?;

        debug!(count = envelope.environments.len(), "environments fetched");
        Ok(envelope.environments)
    }

    /// Log in with email and password, returning the credential token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.url("/api/user/login");
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body = Self::expect_success(response).await?;
        serde_json::from_str(&body).map_err(Error::decode)
    }

    /// Register a new account
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<RegisterResponse> {
        let url = self.url("/api/user/register");
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "name": name, "email": email, "password": password }))
            .send()
            .await?;
        let body = Self::expect_success(response).await?;
        serde_json::from_str(&body).map_err(Error::decode)
    }

    async fn expect_success(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl EnvironmentSource for WaterWatchApi {
    async fn fetch_environments(
        &self,
        user_id: &UserId,
    ) -> std::result::Result<Vec<Environment>, SourceError> {
        WaterWatchApi::fetch_environments(self, user_id)
            .await
            .map_err(SourceError::from)
    }
}
