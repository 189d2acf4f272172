//! Request extractors for the HTTP layer.

pub mod json;

pub use json::AppJson;
