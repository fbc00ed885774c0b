//! Bookshelf Server - in-memory book catalog REST service

use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_server::{api, config::AppConfig, registry::BookRegistry, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookshelf_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookshelf Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Seed the registry with the fixed sample catalog
    let registry = BookRegistry::seeded();
    tracing::info!("Registry seeded with {} books", registry.list_all().await.len());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        registry: Arc::new(registry),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Route shapes mirror the original service verbatim, trailing slash
    // included: "/books" lists everything, "/books/" filters by rating.
    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Books
        .route("/books", get(api::books::read_all_books))
        .route("/books/", get(api::books::read_books_by_rating))
        .route("/book/:id", get(api::books::read_book))
        .route("/books/update_book", put(api::books::update_book))
        .route("/create-book", post(api::books::create_book))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
