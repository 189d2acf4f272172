//! GeminiClient -- concrete [`ReplyGenerator`] implementation for the
//! Gemini generative-language API.
//!
//! Sends single-turn requests to `models/{model}:generateContent` with the
//! API key in the `x-goog-api-key` header.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use colloquy_core::generator::ReplyGenerator;
use colloquy_types::error::GeneratorError;

use super::types::{ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, Part};

/// Gemini reply generator.
///
/// Implements [`ReplyGenerator`] for the Gemini `generateContent` API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing HTTP request headers. It never appears in Debug output,
/// Display output, or tracing logs.
///
/// A client may be constructed without a key; every `generate` call then
/// fails with an authentication error, keeping the failure visible per
/// request instead of at startup.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString, if configured
    /// * `model` - Model identifier (e.g., "gemini-1.5-flash")
    /// * `timeout` - Upper bound on one HTTP round trip
    pub fn new(api_key: Option<SecretString>, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The model this client generates with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full generateContent URL for the configured model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

// GeminiClient intentionally does NOT derive Debug to prevent accidental
// exposure of internal state alongside the SecretString field.

impl ReplyGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, message: &str) -> Result<String, GeneratorError> {
        let Some(api_key) = &self.api_key else {
            return Err(GeneratorError::Authentication);
        };

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_api_error(status, &error_body));
        }

        let content_resp: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Deserialization(format!("failed to parse response: {e}")))?;

        // Concatenate the text parts of the first candidate.
        let text = content_resp
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeneratorError::EmptyReply);
        }

        Ok(text)
    }
}

/// Classify a non-2xx API response.
///
/// The error message is sniffed before the status code: Gemini reports an
/// invalid key as HTTP 400 with "API key not valid" in the message, and an
/// overloaded model as HTTP 503 with "model" in the message, so the message
/// carries more signal than the status for those cases.
fn map_api_error(status: reqwest::StatusCode, body: &str) -> GeneratorError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|resp| resp.error.message)
        .unwrap_or_else(|_| body.to_string());

    if message.contains("API key") {
        return GeneratorError::Authentication;
    }
    if message.contains("quota") {
        return GeneratorError::QuotaExceeded;
    }
    if message.contains("model") {
        return GeneratorError::ModelUnavailable(message);
    }

    match status.as_u16() {
        401 | 403 => GeneratorError::Authentication,
        429 => GeneratorError::QuotaExceeded,
        404 => GeneratorError::ModelUnavailable(message),
        _ => GeneratorError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}
