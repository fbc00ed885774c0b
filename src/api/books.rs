//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookRequest},
    AppError, AppState,
};

/// Response for a lookup by id.
///
/// A miss is reported as a 200 with an error payload rather than a 404.
/// That matches the historical behavior of this endpoint and is relied on
/// by existing clients.
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum BookLookup {
    Found(Book),
    Missing {
        /// Always "book not found"
        error: String,
    },
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RatingQuery {
    /// Rating to match exactly
    pub book_rating: i32,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn read_all_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.registry.list_all().await)
}

/// Get a single book by id
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "The book, or an error payload if absent", body = BookLookup)
    )
)]
pub async fn read_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<BookLookup> {
    match state.registry.get_by_id(id).await {
        Some(book) => Json(BookLookup::Found(book)),
        None => Json(BookLookup::Missing {
            error: "book not found".to_string(),
        }),
    }
}

/// List books with a given rating
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    params(RatingQuery),
    responses(
        (status = 200, description = "Books with the given rating, possibly empty", body = Vec<Book>)
    )
)]
pub async fn read_books_by_rating(
    State(state): State<AppState>,
    Query(query): Query<RatingQuery>,
) -> Json<Vec<Book>> {
    Json(state.registry.filter_by_rating(query.book_rating).await)
}

/// Update an existing book in place
#[utoipa::path(
    put,
    path = "/books/update_book",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "No book with the given id", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Json(payload): Json<BookRequest>,
) -> AppResult<StatusCode> {
    payload.validate()?;

    state.registry.update(payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a new book with a registry-assigned id
#[utoipa::path(
    post,
    path = "/create-book",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Supplied id already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookRequest>,
) -> AppResult<(StatusCode, Json<Book>)> {
    payload.validate()?;

    // Redundant with the field constraint above; kept as a second guard at
    // the handler layer.
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5.".to_string(),
        ));
    }

    let created = state.registry.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
