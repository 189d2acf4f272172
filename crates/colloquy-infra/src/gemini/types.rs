//! Gemini generateContent API types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the generative-language API. They are NOT the domain
//! types from colloquy-types -- those are backend-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for the Gemini `generateContent` API.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One conversation turn: a role plus its content parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a turn. Text-only; Gemini also accepts inline binary parts,
/// which this backend never sends. On deserialize, a part without text
/// (e.g. a function call) contributes an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Response body for a successful `generateContent` call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single generated candidate.
///
/// `content` defaults to empty when the API withholds it (e.g., a candidate
/// stopped for safety reasons carries only a finish reason).
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// The error object inside an [`ApiErrorResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
