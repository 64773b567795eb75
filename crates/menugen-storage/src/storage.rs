//! Storage trait, content record, and error types.
//!
//! Provides the core [`Storage`] trait for abstracting page discovery,
//! the [`Document`] record it yields, and [`StorageError`] for unified
//! error handling across backends.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Menu metadata declared by a page (the `menu:` front matter block).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuMeta {
    /// Identity key of the parent page, or a menu root key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Display name. Falls back to the page title when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Manual sort position among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// A content page as loaded from storage.
///
/// Carries the fields menu generation reads directly (`path`, `url`,
/// `title`, `menu`) plus every other front matter entry in `data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source path relative to the storage root (e.g., "docs/setup.md").
    pub path: String,
    /// Published URL (e.g., "/docs/setup.html").
    pub url: String,
    /// Page title from front matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw page body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Menu metadata.
    #[serde(default)]
    pub menu: MenuMeta,
    /// Remaining front matter entries.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

impl Document {
    /// Create a document with a source path and URL.
    #[must_use]
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Look up a string field by name.
    ///
    /// `path`, `url` and `title` map to the typed fields; any other name is
    /// looked up in `data` and only matches string values.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "path" => Some(&self.path),
            "url" => Some(&self.url),
            "title" => self.title.as_deref(),
            other => self.data.get(other).and_then(Value::as_str),
        }
    }

    /// Convert to a plain key/value record.
    ///
    /// When `strip_content` is set the raw `content` entry is omitted.
    #[must_use]
    pub fn to_plain_record(&self, strip_content: bool) -> Map<String, Value> {
        let mut record = self.data.clone();
        record.insert("path".to_owned(), Value::String(self.path.clone()));
        record.insert("url".to_owned(), Value::String(self.url.clone()));
        if let Some(title) = &self.title {
            record.insert("title".to_owned(), Value::String(title.clone()));
        }
        if !strip_content && let Some(content) = &self.content {
            record.insert("content".to_owned(), Value::String(content.clone()));
        }
        if let Ok(menu) = serde_json::to_value(&self.menu) {
            record.insert("menu".to_owned(), menu);
        }
        record
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> &StorageErrorKind {
        &self.kind
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for page discovery.
///
/// Backends return the full, unordered page collection in one call. Menu
/// generation rebuilds from scratch on every scan.
pub trait Storage: Send + Sync {
    /// Scan and return all pages.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if scanning fails (e.g., source directory
    /// missing, permission denied).
    fn scan(&self) -> Result<Vec<Document>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Document {
        let mut doc = Document::new("docs/setup.md", "/docs/setup.html");
        doc.title = Some("Setup".to_owned());
        doc.content = Some("# Setup".to_owned());
        doc.menu.parent = Some("docs/index.md".to_owned());
        doc.menu.position = Some(3);
        doc.data.insert("layout".to_owned(), json!("page"));
        doc.data.insert("weight".to_owned(), json!(10));
        doc
    }

    #[test]
    fn test_field_typed_entries() {
        let doc = sample();

        assert_eq!(doc.field("path"), Some("docs/setup.md"));
        assert_eq!(doc.field("url"), Some("/docs/setup.html"));
        assert_eq!(doc.field("title"), Some("Setup"));
    }

    #[test]
    fn test_field_from_data() {
        let doc = sample();

        assert_eq!(doc.field("layout"), Some("page"));
        assert_eq!(doc.field("weight"), None);
        assert_eq!(doc.field("missing"), None);
    }

    #[test]
    fn test_field_title_absent() {
        let doc = Document::new("a.md", "/a.html");
        assert_eq!(doc.field("title"), None);
    }

    #[test]
    fn test_to_plain_record_keeps_content() {
        let record = sample().to_plain_record(false);

        assert_eq!(
            Value::Object(record),
            json!({
                "path": "docs/setup.md",
                "url": "/docs/setup.html",
                "title": "Setup",
                "content": "# Setup",
                "layout": "page",
                "weight": 10,
                "menu": { "parent": "docs/index.md", "position": 3 }
            })
        );
    }

    #[test]
    fn test_to_plain_record_strips_content() {
        let record = sample().to_plain_record(true);

        assert!(!record.contains_key("content"));
        assert_eq!(record.get("title"), Some(&json!("Setup")));
    }

    #[test]
    fn test_typed_fields_win_over_data() {
        let mut doc = Document::new("a.md", "/a.html");
        doc.data.insert("url".to_owned(), json!("/elsewhere"));

        let record = doc.to_plain_record(false);

        assert_eq!(record.get("url"), Some(&json!("/a.html")));
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::not_found("/docs").with_backend("Fs");
        assert_eq!(err.to_string(), "[Fs] Not found (path: /docs)");
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::io(io, Some(PathBuf::from("/secret")));

        assert_eq!(err.kind(), &StorageErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "Permission denied: denied (path: /secret)");
    }
}
