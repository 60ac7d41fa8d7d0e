//! Book HTTP Routes
//!
//! Five handlers, one per operation. Each decodes the request, makes one
//! gateway call and encodes the result.
//!
//! Bodies are decoded as JSON whatever the `Content-Type` header says.
//!
//! Update and delete report success when the id matched nothing, so a
//! repeated DELETE keeps answering 204.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

use super::errors::{ApiError, ApiResult};
use crate::model::{Book, BookId, InsertedBook};
use crate::store::{BookFields, BookStore};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub store: Arc<dyn BookStore>,
}

impl BookState {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn decode_book(body: &[u8]) -> ApiResult<Book> {
    Ok(serde_json::from_slice(body)?)
}

// ==================
// Handlers
// ==================

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    body: Bytes,
) -> ApiResult<Json<InsertedBook>> {
    let book = decode_book(&body)?;

    let id = state.store.insert(book.into_new_document()).await?;
    info!(%id, "created book");

    Ok(Json(InsertedBook::from(id)))
}

async fn list_books_handler(State(state): State<Arc<BookState>>) -> ApiResult<Json<Vec<Book>>> {
    let books = state.store.find_all().await?;
    Ok(Json(books.into_iter().map(Book::from).collect()))
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Book>> {
    let id = BookId::parse(&id)?;
    let book = state.store.find_by_id(id).await?;
    Ok(Json(Book::from(book)))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Book>> {
    let id = BookId::parse(&id)?;
    let book = decode_book(&body)?;

    match state.store.update_fields(id, BookFields::from(&book)).await {
        Ok(()) => info!(%id, "updated book"),
        Err(e) if e.is_not_found() => debug!(%id, "update matched no book"),
        Err(e) => return Err(ApiError::from(e)),
    }

    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = BookId::parse(&id)?;

    match state.store.delete_by_id(id).await {
        Ok(()) => info!(%id, "deleted book"),
        Err(e) if e.is_not_found() => debug!(%id, "delete matched no book"),
        Err(e) => return Err(ApiError::from(e)),
    }

    Ok(StatusCode::NO_CONTENT)
}
