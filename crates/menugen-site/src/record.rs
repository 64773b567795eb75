//! Accessor over content records.
//!
//! Menu generation reads records only through [`Record`], so any page type
//! can be fed to the resolver. [`Document`] from `menugen-storage` is the
//! built-in implementation.

use menugen_storage::Document;
use serde_json::{Map, Value};

/// Menu-relevant view of a content record.
pub trait Record {
    /// Value of the identity field named `field` (e.g., "path").
    fn identity_key(&self, field: &str) -> Option<&str>;
    /// Declared parent key, or `None` if the record is not in any menu.
    fn parent_key(&self) -> Option<&str>;
    /// Explicit display name.
    fn menu_name(&self) -> Option<&str>;
    /// Record title, the display name fallback.
    fn title(&self) -> Option<&str>;
    /// Manual sort position.
    fn position(&self) -> Option<i64>;
    /// Published URL.
    fn url(&self) -> &str;
    /// Plain key/value form carried through to rendering.
    fn to_plain_record(&self, strip_content: bool) -> Map<String, Value>;
}

impl Record for Document {
    fn identity_key(&self, field: &str) -> Option<&str> {
        self.field(field)
    }

    fn parent_key(&self) -> Option<&str> {
        self.menu.parent.as_deref()
    }

    fn menu_name(&self) -> Option<&str> {
        self.menu.name.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn position(&self) -> Option<i64> {
        self.menu.position
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn to_plain_record(&self, strip_content: bool) -> Map<String, Value> {
        Document::to_plain_record(self, strip_content)
    }
}
