//! In-memory book registry
//!
//! The registry owns the process-wide catalog: an ordered list of records
//! plus an explicit monotonic id counter, both behind a single RwLock.
//! Callers never see the raw list; every operation is one atomic step
//! under one lock acquisition.
//!
//! The counter is deliberately decoupled from the list contents (rather
//! than deriving the next id from the last element) so that id reuse
//! cannot appear if deletion support is ever added.

use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::book::{Book, BookRequest};

struct RegistryInner {
    books: Vec<Book>,
    next_id: i32,
}

pub struct BookRegistry {
    inner: RwLock<RegistryInner>,
}

impl BookRegistry {
    /// Create an empty registry; the first created book gets id 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a registry seeded with the six fixed sample records
    pub fn seeded() -> Self {
        let sample = |id: i32, title: &str, description: &str, rating: i32| Book {
            id,
            title: title.to_string(),
            author: "Codingwithruby".to_string(),
            description: description.to_string(),
            rating,
        };

        let books = vec![
            sample(1, "Computer Science Pro", "A very nice book", 5),
            sample(2, "Be Fast with FastAPI", "A great book", 5),
            sample(3, "Master Endpoints", "Awesome book", 5),
            sample(4, "HP1", "A very nice book", 2),
            sample(5, "HP2", "A very nice book", 3),
            sample(6, "HP3", "A very nice book", 1),
        ];
        let next_id = books.len() as i32 + 1;

        Self {
            inner: RwLock::new(RegistryInner { books, next_id }),
        }
    }

    /// Create a new book with a registry-assigned id and append it.
    ///
    /// A caller-supplied id is never used for assignment, but a supplied id
    /// that collides with an existing record is rejected up front so the
    /// client learns its id was meaningless rather than silently ignored.
    pub async fn create(&self, request: BookRequest) -> AppResult<Book> {
        let mut inner = self.inner.write().await;

        if let Some(requested_id) = request.id {
            if inner.books.iter().any(|b| b.id == requested_id) {
                return Err(AppError::Conflict("Book ID already exists.".to_string()));
            }
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let book = request.into_book(id);
        inner.books.push(book.clone());

        tracing::debug!(id = book.id, title = %book.title, "created book");
        Ok(book)
    }

    /// All records, insertion order
    pub async fn list_all(&self) -> Vec<Book> {
        self.inner.read().await.books.clone()
    }

    /// First record with a matching id, if any
    pub async fn get_by_id(&self, id: i32) -> Option<Book> {
        self.inner
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// All records with the given rating, insertion order. An unmatched
    /// rating yields an empty list, never an error.
    pub async fn filter_by_rating(&self, rating: i32) -> Vec<Book> {
        self.inner
            .read()
            .await
            .books
            .iter()
            .filter(|b| b.rating == rating)
            .cloned()
            .collect()
    }

    /// Replace the record matching `request.id` in place, preserving its
    /// position. Reports NotFound when no record matches.
    pub async fn update(&self, request: BookRequest) -> AppResult<Book> {
        let id = request
            .id
            .ok_or_else(|| AppError::BadRequest("Book id is required for update".to_string()))?;

        let mut inner = self.inner.write().await;
        match inner.books.iter_mut().find(|b| b.id == id) {
            Some(slot) => {
                let book = request.into_book(id);
                *slot = book.clone();
                tracing::debug!(id, "updated book");
                Ok(book)
            }
            None => Err(AppError::NotFound("book not found".to_string())),
        }
    }
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: Option<i32>, title: &str, rating: i32) -> BookRequest {
        BookRequest {
            id,
            title: title.to_string(),
            author: "A".to_string(),
            description: "D".to_string(),
            rating,
        }
    }

    #[tokio::test]
    async fn ids_increase_by_one_from_one() {
        let registry = BookRegistry::new();
        for expected in 1..=5 {
            let book = registry
                .create(request(None, "Some title", 3))
                .await
                .unwrap();
            assert_eq!(book.id, expected);
        }
    }

    #[tokio::test]
    async fn create_on_seeded_registry_assigns_next_id() {
        let registry = BookRegistry::seeded();
        let book = registry.create(request(None, "New", 4)).await.unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.rating, 4);
        assert_eq!(registry.list_all().await.len(), 7);
    }

    #[tokio::test]
    async fn supplied_id_is_ignored_for_assignment() {
        let registry = BookRegistry::seeded();
        let book = registry.create(request(Some(42), "New", 4)).await.unwrap();
        assert_eq!(book.id, 7);
    }

    #[tokio::test]
    async fn colliding_supplied_id_is_a_conflict() {
        let registry = BookRegistry::seeded();
        let before = registry.list_all().await;

        let err = registry
            .create(request(Some(3), "New", 4))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(registry.list_all().await, before);
    }

    #[tokio::test]
    async fn get_by_id_returns_created_record() {
        let registry = BookRegistry::seeded();
        let created = registry.create(request(None, "New", 4)).await.unwrap();
        assert_eq!(registry.get_by_id(created.id).await, Some(created));
    }

    #[tokio::test]
    async fn get_by_id_miss_leaves_registry_unchanged() {
        let registry = BookRegistry::seeded();
        let before = registry.list_all().await;
        assert_eq!(registry.get_by_id(99).await, None);
        assert_eq!(registry.list_all().await, before);
    }

    #[tokio::test]
    async fn filter_by_rating_returns_matches_in_order() {
        let registry = BookRegistry::seeded();
        let fives = registry.filter_by_rating(5).await;
        assert_eq!(
            fives.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn filter_by_rating_without_matches_is_empty() {
        let registry = BookRegistry::seeded();
        assert!(registry.filter_by_rating(4).await.is_empty());
        assert!(registry.filter_by_rating(99).await.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_record_in_place() {
        let registry = BookRegistry::seeded();
        let updated = registry
            .update(request(Some(4), "HP1 revised", 4))
            .await
            .unwrap();
        assert_eq!(updated.title, "HP1 revised");

        let books = registry.list_all().await;
        assert_eq!(books.len(), 6);
        // Position preserved, neighbors untouched
        assert_eq!(books[3].id, 4);
        assert_eq!(books[3].title, "HP1 revised");
        assert_eq!(books[3].rating, 4);
        assert_eq!(books[2].title, "Master Endpoints");
        assert_eq!(books[4].title, "HP2");
    }

    #[tokio::test]
    async fn update_miss_reports_not_found_and_changes_nothing() {
        let registry = BookRegistry::seeded();
        let before = registry.list_all().await;

        let err = registry
            .update(request(Some(99), "Ghost", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(registry.list_all().await, before);
    }

    #[tokio::test]
    async fn update_without_id_is_a_bad_request() {
        let registry = BookRegistry::seeded();
        let err = registry.update(request(None, "New", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
