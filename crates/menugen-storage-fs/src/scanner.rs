//! Page discovery by filesystem walking.
//!
//! The Scanner only identifies files that could be pages, returning
//! lightweight references. `FsStorage` reads and parses them.

use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as pages.
const PAGE_EXTENSIONS: &[&str] = &["md", "markdown", "html"];

/// Reference to a candidate page file.
#[derive(Debug, Clone)]
pub(crate) struct PageRef {
    /// Source path relative to the scan root, `/`-separated.
    pub rel_path: String,
    /// Absolute path to the file.
    pub abs_path: PathBuf,
}

/// Discovers candidate pages by walking the filesystem.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan filesystem and return page references sorted by relative path.
    ///
    /// Returns an empty Vec if the source directory doesn't exist.
    pub fn scan(&self) -> Vec<PageRef> {
        let mut refs = Vec::new();
        if self.source_dir.exists() {
            self.scan_directory(&self.source_dir, "", &mut refs);
        }
        refs.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        refs
    }

    /// Collect page files in `dir_path`, recursing into subdirectories.
    ///
    /// Hidden entries and `_`-prefixed entries (layouts, includes, drafts)
    /// are skipped.
    fn scan_directory(&self, dir_path: &Path, rel_prefix: &str, refs: &mut Vec<PageRef>) {
        let Ok(entries) = fs::read_dir(dir_path) else {
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let path = entry.path();
            let rel_path = if rel_prefix.is_empty() {
                name
            } else {
                format!("{rel_prefix}/{name}")
            };

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.scan_directory(&path, &rel_path, refs);
            } else if is_page_file(&path) {
                refs.push(PageRef {
                    rel_path,
                    abs_path: path,
                });
            }
        }
    }
}

fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| PAGE_EXTENSIONS.contains(&e))
}

/// Derive the published URL for a page from its relative source path.
///
/// Examples:
/// - `index.md` -> `/`
/// - `docs/index.html` -> `/docs/`
/// - `about.md` -> `/about.html`
/// - `docs/setup.markdown` -> `/docs/setup.html`
/// - `legal/terms.html` -> `/legal/terms.html`
pub(crate) fn page_url(rel_path: &str) -> String {
    let (dir, file) = rel_path.rsplit_once('/').unwrap_or(("", rel_path));
    let (stem, ext) = file.rsplit_once('.').unwrap_or((file, ""));

    if stem == "index" {
        return if dir.is_empty() {
            "/".to_owned()
        } else {
            format!("/{dir}/")
        };
    }

    let file_name = if ext == "html" {
        file.to_owned()
    } else {
        format!("{stem}.html")
    };

    if dir.is_empty() {
        format!("/{file_name}")
    } else {
        format!("/{dir}/{file_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("index.md"), "/");
        assert_eq!(page_url("index.html"), "/");
        assert_eq!(page_url("docs/index.md"), "/docs/");
        assert_eq!(page_url("a/b/index.markdown"), "/a/b/");
        assert_eq!(page_url("about.md"), "/about.html");
        assert_eq!(page_url("docs/setup.markdown"), "/docs/setup.html");
        assert_eq!(page_url("legal/terms.html"), "/legal/terms.html");
    }

    #[test]
    fn test_scan_finds_page_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("index.md"), "---\n---\n").unwrap();
        fs::write(temp_dir.path().join("about.html"), "---\n---\n").unwrap();
        fs::write(temp_dir.path().join("style.css"), "body {}").unwrap();

        let docs = temp_dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("setup.markdown"), "---\n---\n").unwrap();

        let refs = Scanner::new(temp_dir.path().to_path_buf()).scan();
        let paths: Vec<_> = refs.iter().map(|r| r.rel_path.as_str()).collect();

        assert_eq!(paths, vec!["about.html", "docs/setup.markdown", "index.md"]);
        assert!(refs[1].abs_path.ends_with("docs/setup.markdown"));
    }

    #[test]
    fn test_scan_skips_hidden_and_underscore_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(".hidden.md"), "---\n---\n").unwrap();
        fs::write(temp_dir.path().join("_draft.md"), "---\n---\n").unwrap();
        fs::create_dir(temp_dir.path().join("_layouts")).unwrap();
        fs::write(temp_dir.path().join("_layouts/default.html"), "---\n---\n").unwrap();
        fs::write(temp_dir.path().join("visible.md"), "---\n---\n").unwrap();

        let refs = Scanner::new(temp_dir.path().to_path_buf()).scan();

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].rel_path, "visible.md");
    }

    #[test]
    fn test_scan_missing_dir() {
        let refs = Scanner::new(PathBuf::from("/nonexistent")).scan();
        assert!(refs.is_empty());
    }
}
