//! Catalog management service

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Book;

/// Owns the in-memory catalog: an insertion-ordered collection of books
/// living for the lifetime of the process.
///
/// A single `RwLock` serializes access so concurrent handlers observe
/// well-defined state. There is no other synchronization and no background
/// activity; the collection changes only through `add` and `delete`.
#[derive(Clone, Default)]
pub struct CatalogService {
    books: Arc<RwLock<Vec<Book>>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// All books, in insertion order.
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Append a book exactly as provided (whatever id it carries) and echo
    /// it back. No uniqueness check: duplicate ids are representable.
    pub async fn add(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());
        book
    }

    /// Remove every book whose id equals `id` exactly. Zero matches is a
    /// silent no-op, not an error.
    pub async fn delete(&self, id: &str) {
        self.books.write().await.retain(|book| book.id != id);
    }

    /// Filter the catalog by author and/or title.
    ///
    /// Filters are case-insensitive substring matches, conjunctive, and
    /// applied author-first. An absent or empty filter matches everything,
    /// so calling with neither is equivalent to `list`. Survivors keep
    /// their insertion order.
    pub async fn search(&self, author: Option<&str>, title: Option<&str>) -> Vec<Book> {
        let mut filtered = self.books.read().await.clone();

        if let Some(author) = author.filter(|a| !a.is_empty()) {
            let needle = author.to_lowercase();
            filtered.retain(|book| book.author.to_lowercase().contains(&needle));
        }

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            let needle = title.to_lowercase();
            filtered.retain(|book| book.title.to_lowercase().contains(&needle));
        }

        filtered
    }
}
