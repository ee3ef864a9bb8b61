use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vocab_web::{build_router, AppState, ServerConfig};
use vocab_wordgen::{GeminiClient, ProviderConfig, WordGenerator};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // No credentials, no service: refuse to start instead of failing per request.
    let provider_config = match ProviderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load provider configuration");
            std::process::exit(1);
        }
    };

    let client = match GeminiClient::new(&provider_config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to create provider client");
            std::process::exit(1);
        }
    };

    tracing::info!(model = %provider_config.model, "provider client ready");

    let server_config = ServerConfig::from_env();

    let app_state = AppState {
        generator: Arc::new(WordGenerator::new(Arc::new(client), &provider_config)),
    };

    let app = build_router(app_state, &server_config.static_dir);

    let addr = server_config.bind_addr;
    tracing::info!(static_dir = %server_config.static_dir.display(), "listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to bind on {addr}");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
