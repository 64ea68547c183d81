//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook},
};

/// Search query parameters. Both filters are optional; an empty string is
/// treated the same as an absent parameter.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Case-insensitive substring to match against the author field
    pub author: Option<String>,
    /// Case-insensitive substring to match against the title field
    pub title: Option<String>,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list().await;
    Ok(Json(books))
}

/// Add a new book
///
/// The payload id is honored when supplied; otherwise the service generates
/// one. The stored book is echoed back.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book stored and echoed back", body = Book),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateBook>, AppError>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let stored = state.services.catalog.add(Book::from(payload)).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Matching books removed; also returned when nothing matched")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete(&id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Search books by author and/or title
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Books matching every supplied filter", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .catalog
        .search(query.author.as_deref(), query.title.as_deref())
        .await;
    Ok(Json(books))
}
