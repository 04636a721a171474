use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use docuflow::api;
use docuflow::config::AppConfig;
use docuflow::state::AppState;
use docuflow::store::memory::InMemoryDocumentStore;
use docuflow::store::DocumentStore;
use docuflow::workflow::engine::WorkflowEngine;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docuflow=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting DocuFlow server...");

    let config = AppConfig::from_env();

    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    let engine = Arc::new(WorkflowEngine::new(store));
    let state = AppState { engine };

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .allowed_origin
                .parse::<HeaderValue>()
                .expect("Invalid DOCUFLOW_ALLOWED_ORIGIN"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!("Listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
