//! The interpretation collaborator boundary.
//!
//! The orchestrator hands a finished prompt to an [`Interpreter`] and
//! gets narrative text back. The production implementation talks to a
//! generative-language HTTP API; tests substitute stubs.

use async_trait::async_trait;
use serde_json::json;

/// External text-generation collaborator.
///
/// One outstanding call at a time, no internal retry or timeout policy;
/// the caller observes success or a single failure.
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Turn a prompt into narrative text.
    async fn interpret(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Client for a generative-language `generateContent` endpoint.
pub struct GenerativeClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenerativeClient {
    /// Create a client for the given endpoint, model, and API key.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Interpreter for GenerativeClient {
    async fn interpret(&self, prompt: &str) -> anyhow::Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("interpretation service returned {status}");
        }

        let payload: serde_json::Value = response.json().await?;
        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("interpretation service returned no text"))
    }
}
