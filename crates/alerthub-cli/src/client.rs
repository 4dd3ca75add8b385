//! Thin HTTP client over the AlertHub API.

use anyhow::{Context, bail};
use serde_json::Value;

/// Authenticated-capable API client.
///
/// Wraps `reqwest` with the base URL, the bearer token once logged in,
/// and unwrapping of the standard `{success, data}` response envelope.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against the given API origin.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Log in and keep the session token for subsequent requests.
    pub async fn login(&mut self, username: &str, password: &str) -> anyhow::Result<()> {
        let data = self
            .post(
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
            )
            .await?;

        let token = data
            .get("token")
            .and_then(Value::as_str)
            .context("Login response carried no session token")?;
        self.token = Some(token.to_string());
        Ok(())
    }

    /// GET a path, returning the unwrapped `data` payload.
    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        let request = self.http.get(format!("{}{}", self.base_url, path));
        self.execute(request).await
    }

    /// POST a path with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<Value>) -> anyhow::Result<Value> {
        let mut request = self.http.post(format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        self.execute(request).await
    }

    /// DELETE a path.
    pub async fn delete(&self, path: &str) -> anyhow::Result<Value> {
        let request = self.http.delete(format!("{}{}", self.base_url, path));
        self.execute(request).await
    }

    async fn execute(&self, mut request: reqwest::RequestBuilder) -> anyhow::Result<Value> {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Could not reach the AlertHub API")?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .context("API response was not valid JSON")?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed");
            bail!("API error ({}): {}", status, message);
        }

        Ok(body.get("data").cloned().unwrap_or(Value::Null))
    }
}
