//! Gemini API client for narrative grading
//!
//! Thin wrapper over the generateContent endpoint. Model, base URL and
//! API key come from the environment; the client is built once at startup
//! and injected wherever text generation is needed.

use crate::error::{DugoutError, Result};
use crate::grading::TextGenerator;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Gemini API client configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the generative language API
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout
    pub timeout_secs: u64,
    /// Model to use
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 60,
            model: "gemini-2.0-flash-001".to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            timeout_secs: 60,
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-001".to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// generateContent wire shapes

#[derive(Debug, Clone, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Content,
}

/// Gemini API client
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DugoutError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env())
    }

    /// Check if client is properly configured
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if !self.is_configured() {
            return Err(DugoutError::Internal(
                "GEMINI_API_KEY not configured".to_string(),
            ));
        }

        debug!("Sending request to Gemini model {}", self.config.model);

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(DugoutError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API error: {} - {}", status, body);
            return Err(DugoutError::Upstream(format!(
                "Gemini API error {status}: {body}"
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DugoutError::Upstream(format!("Failed to parse Gemini response: {e}")))?;

        let text = generated
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        debug!("Gemini response received: {} chars", text.len());
        Ok(text)
    }
}
