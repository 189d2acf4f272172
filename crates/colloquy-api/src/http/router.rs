//! Axum router configuration with middleware.
//!
//! Chat routes live under `/chat`; `/` and `/health` report service status
//! and unknown paths answer 404 with a JSON body.
//! Middleware: CORS (any origin), request tracing.

use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_info))
        .route("/health", get(health_check))
        .route("/chat", post(handlers::chat::send_message))
        .route(
            "/chat/history/{session_id}",
            get(handlers::session::get_history),
        )
        .route("/chat/sessions", get(handlers::session::list_sessions))
        .route(
            "/chat/session/{session_id}",
            delete(handlers::session::delete_session),
        )
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Liveness banner for quick manual checks.
async fn root_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Colloquy API is running" }))
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unknown paths.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use secrecy::SecretString;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use colloquy_core::chat::service::ChatService;
    use colloquy_infra::gemini::GeminiClient;
    use colloquy_infra::sqlite::exchange::SqliteExchangeRepository;
    use colloquy_infra::sqlite::pool::DatabasePool;
    use colloquy_types::config::{AppConfig, Environment};

    /// Router wired to a fresh on-disk SQLite store and a stub Gemini server.
    async fn test_router(generator_url: &str, environment: Environment) -> Router {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let data_dir = dir.path().to_path_buf();
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        let db_pool = DatabasePool::new(&url).await.unwrap();

        let generator = GeminiClient::new(
            Some(SecretString::from("test-key")),
            "gemini-1.5-flash".to_string(),
            Duration::from_secs(5),
        )
        .with_base_url(generator_url.to_string());

        let chat_service =
            ChatService::new(SqliteExchangeRepository::new(db_pool.clone()), generator);

        let state = AppState {
            chat_service: Arc::new(chat_service),
            config: AppConfig {
                environment,
                ..AppConfig::default()
            },
            data_dir,
        };

        build_router(state)
    }

    /// Stub Gemini server answering every generateContent call with `reply`.
    async fn stub_gemini(reply: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": reply}]}
                }]
            })))
            .mount(&server)
            .await;
        server
    }

    fn post_chat(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_round_trip_lands_in_history() {
        let server = stub_gemini("hello").await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router
            .clone()
            .oneshot(post_chat(json!({"message": "hi", "sessionId": "s1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body, json!({"reply": "hello", "sessionId": "s1"}));

        let response = router.oneshot(get("/chat/history/s1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let history = read_json(response).await;
        let records = history.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["sessionId"], "s1");
        assert_eq!(records[0]["user"], "hi");
        assert_eq!(records[0]["bot"], "hello");
        assert!(records[0]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_missing_or_blank_message_rejected() {
        let server = MockServer::start().await;
        let router = test_router(&server.uri(), Environment::Development).await;

        for body in [json!({"sessionId": "s1"}), json!({"message": "  ", "sessionId": "s1"})] {
            let response = router.clone().oneshot(post_chat(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = read_json(response).await;
            assert_eq!(
                body["error"],
                "Message is required and must be a non-empty string"
            );
        }

        // Nothing reached the store on either rejection.
        let response = router.oneshot(get("/chat/history/s1")).await.unwrap();
        assert_eq!(read_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_missing_session_id_rejected() {
        let server = MockServer::start().await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router
            .oneshot(post_chat(json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(
            body["error"],
            "Session ID is required and must be a non-empty string"
        );
    }

    #[tokio::test]
    async fn test_wrong_field_type_rejected() {
        let server = MockServer::start().await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router
            .oneshot(post_chat(json!({"message": 42, "sessionId": "s1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_sessions_lists_newest_first() {
        let server = stub_gemini("a reply").await;
        let router = test_router(&server.uri(), Environment::Development).await;

        for session in ["first", "second"] {
            let response = router
                .clone()
                .oneshot(post_chat(json!({"message": "hi there", "sessionId": session})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = router.oneshot(get("/chat/sessions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let sessions = read_json(response).await;
        let entries = sessions.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "second");
        assert_eq!(entries[0]["title"], "hi there");
        assert_eq!(entries[0]["preview"], "a reply");
        assert_eq!(entries[0]["messageCount"], 1);
        assert_eq!(entries[1]["id"], "first");
    }

    #[tokio::test]
    async fn test_delete_session_empties_history() {
        let server = stub_gemini("gone soon").await;
        let router = test_router(&server.uri(), Environment::Development).await;

        router
            .clone()
            .oneshot(post_chat(json!({"message": "hi", "sessionId": "doomed"})))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/chat/session/doomed")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body, json!({"message": "Chat session deleted successfully"}));

        let response = router.oneshot(get("/chat/history/doomed")).await.unwrap();
        assert_eq!(read_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_delete_unknown_session_still_confirms() {
        let server = MockServer::start().await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/chat/session/never-existed")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_and_health_respond() {
        let server = MockServer::start().await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body, json!({"message": "Colloquy API is running"}));

        let response = router.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_path_answers_json_404() {
        let server = MockServer::start().await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router.oneshot(get("/definitely/not/here")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await, json!({"error": "Not Found"}));
    }

    #[tokio::test]
    async fn test_rejected_key_surfaces_configuration_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router
            .oneshot(post_chat(json!({"message": "hi", "sessionId": "s1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Configuration error");
        assert_eq!(body["message"], "API key is missing or invalid");
    }

    #[tokio::test]
    async fn test_production_mode_withholds_failure_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {"code": 500, "message": "backend exploded", "status": "INTERNAL"}
            })))
            .mount(&server)
            .await;
        let router = test_router(&server.uri(), Environment::Production).await;

        let response = router
            .oneshot(post_chat(json!({"message": "hi", "sessionId": "s1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Failed to process message");
        assert_eq!(body["message"], "An error occurred while processing your message");
    }

    #[tokio::test]
    async fn test_development_mode_exposes_failure_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {"code": 500, "message": "backend exploded", "status": "INTERNAL"}
            })))
            .mount(&server)
            .await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router
            .oneshot(post_chat(json!({"message": "hi", "sessionId": "s1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Failed to process message");
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("backend exploded"), "got: {message}");
    }

    #[tokio::test]
    async fn test_failed_generation_persists_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {"code": 500, "message": "backend exploded", "status": "INTERNAL"}
            })))
            .mount(&server)
            .await;
        let router = test_router(&server.uri(), Environment::Development).await;

        let response = router
            .clone()
            .oneshot(post_chat(json!({"message": "hi", "sessionId": "s1"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = router.oneshot(get("/chat/history/s1")).await.unwrap();
        assert_eq!(read_json(response).await, json!([]));
    }
}
