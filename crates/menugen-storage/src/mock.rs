//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::sync::RwLock;

use crate::storage::{Document, MenuMeta, Storage, StorageError, StorageErrorKind};

/// Mock storage for testing.
///
/// Stores documents in memory. Use the builder methods to configure the
/// mock with test data.
///
/// # Example
///
/// ```ignore
/// use menugen_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_page("index.md", "/", "Home", Some("__root"))
///     .with_page("about.md", "/about.html", "About", Some("__root"));
///
/// let docs = storage.scan().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: RwLock<Vec<Document>>,
    fail: RwLock<bool>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with a title and optional menu parent.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(
        self,
        path: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        parent: Option<&str>,
    ) -> Self {
        let mut doc = Document::new(path, url);
        doc.title = Some(title.into());
        doc.menu = MenuMeta {
            parent: parent.map(str::to_owned),
            ..MenuMeta::default()
        };
        self.documents.write().unwrap().push(doc);
        self
    }

    /// Add a fully constructed document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, document: Document) -> Self {
        self.documents.write().unwrap().push(document);
        self
    }

    /// Make subsequent scans fail.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn failing(self) -> Self {
        *self.fail.write().unwrap() = true;
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        if *self.fail.read().unwrap() {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend("Mock"));
        }
        Ok(self.documents.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_returns_pages_in_insertion_order() {
        let storage = MockStorage::new()
            .with_page("b.md", "/b.html", "B", Some("__root"))
            .with_page("a.md", "/a.html", "A", None);

        let docs = storage.scan().unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].path, "b.md");
        assert_eq!(docs[0].menu.parent.as_deref(), Some("__root"));
        assert_eq!(docs[1].title.as_deref(), Some("A"));
        assert!(docs[1].menu.parent.is_none());
    }

    #[test]
    fn test_failing_scan() {
        let storage = MockStorage::new().failing();

        let err = storage.scan().unwrap_err();

        assert_eq!(err.backend, Some("Mock"));
    }
}
