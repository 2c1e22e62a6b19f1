//! Transtar Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transtar_engine::api::http;
use transtar_engine::infrastructure::{
    clock::SystemClock,
    config::EngineConfig,
    mysql::{self, MySqlRepositories},
    openai::OpenAiClient,
    ports::{ClockPort, LlmPort},
};
use transtar_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transtar_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Transtar Engine");

    let config = EngineConfig::from_env();

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new(config.store_offset));

    let pool = mysql::connect(&config.database_url, config.database_max_connections)?;
    let repos = MySqlRepositories::new(pool);

    let llm: Option<Arc<dyn LlmPort>> = match &config.completion {
        Some(completion) => {
            tracing::info!(
                base_url = %completion.base_url,
                model = %completion.model,
                "Generative fallback enabled"
            );
            Some(Arc::new(OpenAiClient::new(completion)))
        }
        None => {
            tracing::info!("No completion API key configured, using canned fallback only");
            None
        }
    };

    tracing::info!(
        timeout_secs = config.handler_timeout.as_secs(),
        "Handler timeout configured"
    );
    let app = Arc::new(App::from_repositories(repos, llm, clock, &config));

    let mut router = http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        tracing::info!("CORS enabled via CORS_ALLOWED_ORIGINS");
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.map(str::trim).filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
