//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "In-memory book catalog REST API"
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::read_all_books,
        books::read_book,
        books::read_books_by_rating,
        books::update_book,
        books::create_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookRequest,
            books::BookLookup,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
