//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chat_api::{create_app, create_app_state};
use chat_common::AppConfig;
use chat_service::PresenceReaper;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Name of the identity header
pub const USER_HEADER: &str = "User";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
    _reaper: Option<(watch::Sender<bool>, JoinHandle<()>)>,
}

impl TestServer {
    /// Start a test server on the memory backend, without the reaper
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?, false).await
    }

    /// Start a test server whose reaper runs on a short cycle
    pub async fn start_with_reaper(stale_after_secs: u64, reap_interval_secs: u64) -> Result<Self> {
        let stale = stale_after_secs.to_string();
        let interval = reap_interval_secs.to_string();
        let config = test_config(&[
            ("PRESENCE_STALE_AFTER_SECS", stale.as_str()),
            ("PRESENCE_REAP_INTERVAL_SECS", interval.as_str()),
        ])?;
        Self::start_with_config(config, true).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig, with_reaper: bool) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        let reaper = with_reaper.then(|| {
            let (tx, rx) = watch::channel(false);
            let handle = PresenceReaper::new(state.shared_context()).spawn(rx);
            (tx, handle)
        });

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
            _reaper: reaper,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request as `user`
    pub async fn get_as(&self, path: &str, user: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header(USER_HEADER, user)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with JSON body as `user`
    pub async fn post_as<T: Serialize>(&self, path: &str, user: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(USER_HEADER, user)
            .json(body)
            .send()
            .await?)
    }

    /// Make a bodyless POST request as `user`
    pub async fn post_empty_as(&self, path: &str, user: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(USER_HEADER, user)
            .send()
            .await?)
    }
}

/// Memory-backed configuration with `overrides` applied
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("STORAGE_BACKEND".to_string(), "memory".to_string()),
        ("APP_ENV".to_string(), "development".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status only
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
