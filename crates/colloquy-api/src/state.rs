//! Application state wiring all services together.
//!
//! AppState holds the concrete service instance used by the REST API.
//! ChatService is generic over repository/generator traits, but AppState
//! pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use colloquy_core::chat::service::ChatService;
use colloquy_infra::config::{gemini_api_key, load_app_config};
use colloquy_infra::gemini::GeminiClient;
use colloquy_infra::sqlite::exchange::SqliteExchangeRepository;
use colloquy_infra::sqlite::pool::{DatabasePool, database_url};
use colloquy_types::config::AppConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteExchangeRepository, GeminiClient>;

/// Shared application state holding the chat service and configuration.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: AppConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init(data_dir: PathBuf) -> anyhow::Result<Self> {
        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_app_config(&data_dir).await;

        // Initialize database
        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;

        // The generator works without a key but fails every call; warn once
        // at startup so the operator sees the gap before the first request.
        let api_key = gemini_api_key();
        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; chat requests will fail until it is provided");
        }

        let generator = GeminiClient::new(
            api_key,
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        );

        // Wire chat service with its repository and generator
        let exchange_repo = SqliteExchangeRepository::new(db_pool.clone());
        let chat_service = ChatService::new(exchange_repo, generator);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            config,
            data_dir,
        })
    }
}
