//! Book (catalog entry) model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single catalog entry.
///
/// The identifier is an opaque string: the service generates a UUID v4 at
/// creation time and never reassigns it afterwards. Callers creating a book
/// over the API may supply their own `id`, which is stored verbatim. The
/// catalog does not enforce uniqueness for caller-chosen ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
}

impl Book {
    /// Create a book with a fresh generated identifier.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
        }
    }
}

impl Default for Book {
    /// A book with a generated id and unset descriptive fields.
    fn default() -> Self {
        Self::new("", "", 0, "")
    }
}

/// Create payload for `POST /books`.
///
/// `id` is honored verbatim when supplied (including empty or duplicate
/// values); absent or JSON `null` means the service generates one. Missing
/// descriptive fields deserialize to their empty values. The API performs
/// no validation beyond type coercion.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publication_year: i32,
    #[serde(default)]
    pub genre: String,
}

impl From<CreateBook> for Book {
    fn from(payload: CreateBook) -> Self {
        Self {
            id: payload.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: payload.title,
            author: payload.author,
            publication_year: payload.publication_year,
            genre: payload.genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_assigns_generated_id() {
        let book = Book::new("The Hobbit", "J.R.R. Tolkien", 1937, "Fantasy");
        assert!(Uuid::parse_str(&book.id).is_ok());
        assert_eq!(book.title, "The Hobbit");
        assert_eq!(book.author, "J.R.R. Tolkien");
        assert_eq!(book.publication_year, 1937);
        assert_eq!(book.genre, "Fantasy");
    }

    #[test]
    fn test_default_generates_id_and_leaves_fields_unset() {
        let book = Book::default();
        assert!(!book.id.is_empty());
        assert!(book.title.is_empty());
        assert!(book.author.is_empty());
        assert_eq!(book.publication_year, 0);
        assert!(book.genre.is_empty());
    }

    #[test]
    fn test_generated_ids_do_not_collide() {
        let ids: HashSet<String> = (0..100_000).map(|_| Book::default().id).collect();
        assert_eq!(ids.len(), 100_000);
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let book = Book::new("Dune", "Frank Herbert", 1965, "Science Fiction");
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["publicationYear"], 1965);
        assert!(value.get("publication_year").is_none());
        assert_eq!(value["title"], "Dune");
    }

    #[test]
    fn test_create_payload_without_id_gets_generated_one() {
        let payload: CreateBook = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "publicationYear": 1965,
            "genre": "Science Fiction"
        }))
        .unwrap();
        let book = Book::from(payload);
        assert!(Uuid::parse_str(&book.id).is_ok());
    }

    #[test]
    fn test_create_payload_honors_supplied_id() {
        let payload: CreateBook = serde_json::from_value(json!({
            "id": "custom-id",
            "title": "Dune"
        }))
        .unwrap();
        let book = Book::from(payload);
        assert_eq!(book.id, "custom-id");
        assert!(book.author.is_empty());
        assert_eq!(book.publication_year, 0);
    }

    #[test]
    fn test_create_payload_honors_empty_id() {
        let payload: CreateBook = serde_json::from_value(json!({
            "id": "",
            "title": "Dune"
        }))
        .unwrap();
        let book = Book::from(payload);
        assert_eq!(book.id, "");
    }

    #[test]
    fn test_create_payload_null_id_gets_generated_one() {
        let payload: CreateBook = serde_json::from_value(json!({
            "id": null,
            "title": "Dune"
        }))
        .unwrap();
        let book = Book::from(payload);
        assert!(Uuid::parse_str(&book.id).is_ok());
    }
}
