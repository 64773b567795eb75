//! Filesystem storage backend for menugen.
//!
//! Walks a source directory, reads pages that begin with a YAML front
//! matter block, and turns each into a [`Document`]:
//!
//! - `path` is the `/`-separated path relative to the source directory
//! - `url` is derived from the path (or taken from `permalink`)
//! - `title` and `menu` are read from front matter, everything else lands in `data`
//! - `content` is the body after the front matter
//!
//! Files without front matter are static files, not pages, and are skipped.
//! Pages with malformed front matter or non-UTF-8 content are skipped with
//! a warning.

mod front_matter;
mod scanner;

use std::path::{Path, PathBuf};

use menugen_storage::{Document, Storage, StorageError};
use tracing::{debug, warn};

use crate::scanner::{PageRef, Scanner, page_url};

const BACKEND: &str = "Fs";

/// Filesystem-backed page storage.
#[derive(Debug)]
pub struct FsStorage {
    source_dir: PathBuf,
}

impl FsStorage {
    /// Create storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory pages are loaded from.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Read one candidate file. `Ok(None)` means "not a page".
    fn load_page(page_ref: &PageRef) -> Result<Option<Document>, StorageError> {
        let source = match std::fs::read_to_string(&page_ref.abs_path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!(path = %page_ref.rel_path, error = %e, "skipping page");
                return Ok(None);
            }
            Err(e) => return Err(StorageError::io(e, Some(page_ref.abs_path.clone()))),
        };

        let (yaml, body) = match front_matter::split(&source) {
            Ok(Some(parts)) => parts,
            Ok(None) => {
                debug!(path = %page_ref.rel_path, "no front matter, skipping");
                return Ok(None);
            }
            Err(e) => {
                warn!(path = %page_ref.rel_path, error = %e, "skipping page");
                return Ok(None);
            }
        };

        let fm = match front_matter::parse(yaml, &page_ref.rel_path) {
            Ok(fm) => fm,
            Err(e) => {
                warn!(path = %page_ref.rel_path, error = %e, "skipping page");
                return Ok(None);
            }
        };

        let url = fm
            .permalink
            .unwrap_or_else(|| page_url(&page_ref.rel_path));

        Ok(Some(Document {
            path: page_ref.rel_path.clone(),
            url,
            title: fm.title,
            content: Some(body.to_owned()),
            menu: fm.menu,
            data: fm.data,
        }))
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        if !self.source_dir.is_dir() {
            return Err(StorageError::not_found(&self.source_dir).with_backend(BACKEND));
        }

        let refs = Scanner::new(self.source_dir.clone()).scan();
        let mut documents = Vec::with_capacity(refs.len());
        for page_ref in &refs {
            if let Some(doc) = Self::load_page(page_ref).map_err(|e| e.with_backend(BACKEND))? {
                documents.push(doc);
            }
        }

        debug!(
            source_dir = %self.source_dir.display(),
            candidates = refs.len(),
            pages = documents.len(),
            "scanned pages"
        );
        Ok(documents)
    }
}
