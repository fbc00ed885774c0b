//! Book record and request models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A book record held by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned by the registry
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Rating from 1 to 5
    pub rating: i32,
}

/// Request body for creating or updating a book
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "A new book",
    "author": "codingwithroby",
    "description": "This is a description of the new book.",
    "rating": 5
}))]
pub struct BookRequest {
    /// ID is not needed on create; the registry assigns its own
    pub id: Option<i32>,
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Description must be between 1 and 100 characters"
    ))]
    pub description: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}

impl BookRequest {
    /// Build the stored record once the registry has picked an id
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
        }
    }
}
