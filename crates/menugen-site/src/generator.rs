//! Menu generation pipeline.
//!
//! [`MenuGenerator::generate`] rebuilds everything from the full record
//! collection on each call: resolve, sort siblings, propagate suburls,
//! publish. Nothing is cached between runs.

use serde_json::{Map, Value};
use tracing::debug;

use crate::publish::{PublishedMenu, publish};
use crate::record::Record;
use crate::resolver::{ResolveOptions, ResolveStats, TreeResolver};
use crate::sort::sort_siblings;
use crate::suburls::propagate_suburls;
use crate::tree::RootKeys;

/// Configuration for [`MenuGenerator`].
#[derive(Clone, Debug)]
pub struct MenuGeneratorConfig {
    /// Record field used as identity key.
    pub parent_match_hash: String,
    /// Base root key.
    pub menu_root: String,
    /// Publish one menu per root key suffix.
    pub multi_menu: bool,
    /// Strip raw content from published records.
    pub delete_content_hash: bool,
}

impl Default for MenuGeneratorConfig {
    fn default() -> Self {
        Self {
            parent_match_hash: "path".to_owned(),
            menu_root: "__root".to_owned(),
            multi_menu: false,
            delete_content_hash: false,
        }
    }
}

/// Output of one generation run.
#[derive(Clone, Debug)]
pub struct GeneratedMenu {
    /// The published menu.
    pub menu: PublishedMenu,
    /// Resolution summary.
    pub stats: ResolveStats,
}

impl GeneratedMenu {
    /// Wrap the menu in an object keyed by `hash_name`, the shape exposed to
    /// site templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be converted to JSON.
    pub fn to_site_json(&self, hash_name: &str) -> Result<Value, serde_json::Error> {
        let mut site = Map::new();
        site.insert(hash_name.to_owned(), serde_json::to_value(&self.menu)?);
        Ok(Value::Object(site))
    }
}

/// Builds published menus from content records.
#[derive(Debug)]
pub struct MenuGenerator {
    options: ResolveOptions,
}

impl MenuGenerator {
    /// Create a generator.
    #[must_use]
    pub fn new(config: MenuGeneratorConfig) -> Self {
        Self {
            options: ResolveOptions {
                identity_field: config.parent_match_hash,
                root_keys: RootKeys::new(config.menu_root, config.multi_menu),
                strip_content: config.delete_content_hash,
            },
        }
    }

    /// Run the full pipeline over `records`.
    #[must_use]
    pub fn generate<R: Record>(&self, records: &[R]) -> GeneratedMenu {
        let resolution = TreeResolver::new(records, &self.options).resolve();
        let mut tree = resolution.tree;

        sort_siblings(&mut tree);
        propagate_suburls(&mut tree);
        let menu = publish(&tree, self.options.root_keys.is_multi_menu());

        debug!(records = records.len(), empty = menu.is_empty(), "generated menu");
        GeneratedMenu {
            menu,
            stats: resolution.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::MenuItem;
    use menugen_storage::{Document, MockStorage, Storage};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(path: &str, parent: Option<&str>, position: Option<i64>) -> Document {
        let mut doc = Document::new(path, format!("/{}.html", path.to_lowercase()));
        doc.title = Some(path.to_owned());
        doc.content = Some(format!("{path} body"));
        doc.menu.parent = parent.map(str::to_owned);
        doc.menu.position = position;
        doc
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_end_to_end_single_menu() {
        let records = vec![
            page("A", Some("__root"), Some(2)),
            page("B", Some("A"), None),
            page("C", Some("__root"), Some(1)),
        ];

        let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&records);
        let items = generated.menu.menu("").unwrap();

        assert_eq!(names(items), vec!["C", "A"]);
        assert_eq!(names(&items[1].children), vec!["B"]);
        assert_eq!(items[1].suburls, vec!["/b.html".to_owned()]);
        assert!(items[0].suburls.is_empty());
    }

    #[test]
    fn test_nested_lists_are_sorted() {
        let records = vec![
            page("Root", Some("__root"), None),
            page("Zed", Some("Root"), None),
            page("Alpha", Some("Root"), None),
            page("Mid", Some("Root"), Some(5)),
        ];

        let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&records);
        let items = generated.menu.menu("").unwrap();

        assert_eq!(names(&items[0].children), vec!["Mid", "Alpha", "Zed"]);
    }

    #[test]
    fn test_multi_menu() {
        let config = MenuGeneratorConfig {
            multi_menu: true,
            ..MenuGeneratorConfig::default()
        };
        let records = vec![
            page("Home", Some("__root_main"), Some(1)),
            page("Docs", Some("__root_main"), Some(2)),
            page("Legal", Some("__root_footer"), None),
            page("Contact", Some("__root_footer"), None),
        ];

        let generated = MenuGenerator::new(config).generate(&records);

        let PublishedMenu::Multi(menus) = &generated.menu else {
            panic!("expected multi menu");
        };
        assert_eq!(menus.keys().collect::<Vec<_>>(), vec!["footer", "main"]);
        assert_eq!(names(&menus["main"]), vec!["Home", "Docs"]);
        assert_eq!(names(&menus["footer"]), vec!["Contact", "Legal"]);
    }

    #[test]
    fn test_no_roots_publishes_empty_menu() {
        let records = vec![page("A", None, None), page("B", Some("A"), None)];

        let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&records);

        assert_eq!(generated.menu, PublishedMenu::Single(Vec::new()));
        assert_eq!(generated.stats.unreachable, vec!["B".to_owned()]);
    }

    #[test]
    fn test_unreachable_records_pinned_out_of_menu() {
        let records = vec![
            page("A", Some("__root"), None),
            page("Lost", Some("Nowhere"), None),
        ];

        let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&records);

        let json = serde_json::to_string(&generated.menu).unwrap();
        assert!(!json.contains("Lost"));
        assert_eq!(generated.stats.unreachable, vec!["Lost".to_owned()]);
    }

    #[test]
    fn test_delete_content_hash() {
        let config = MenuGeneratorConfig {
            delete_content_hash: true,
            ..MenuGeneratorConfig::default()
        };
        let records = vec![page("A", Some("__root"), None)];

        let kept = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&records);
        let stripped = MenuGenerator::new(config).generate(&records);

        assert_eq!(
            kept.menu.menu("").unwrap()[0].page.get("content"),
            Some(&json!("A body"))
        );
        assert!(!stripped.menu.menu("").unwrap()[0].page.contains_key("content"));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let records = vec![
            page("B", Some("A"), None),
            page("A", Some("__root"), None),
            page("C", Some("A"), Some(1)),
            page("D", Some("__root"), None),
        ];
        let generator = MenuGenerator::new(MenuGeneratorConfig::default());

        let first = generator.generate(&records);
        let second = generator.generate(&records);

        assert_eq!(first.menu, second.menu);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_to_site_json_uses_hash_name() {
        let records = vec![page("A", Some("__root"), None)];
        let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&records);

        let site = generated.to_site_json("navigation").unwrap();

        assert_eq!(site["navigation"][0]["name"], json!("A"));
    }

    #[test]
    fn test_generate_from_storage() {
        let mut careers = page("careers.md", Some("about.md"), Some(1));
        careers.url = "/careers.html".to_owned();
        careers.menu.name = Some("Jobs".to_owned());

        let storage = MockStorage::new()
            .with_page("index.md", "/", "Home", Some("__root"))
            .with_page("about.md", "/about.html", "About", Some("__root"))
            .with_page("team.md", "/team.html", "Team", Some("about.md"))
            .with_page("404.md", "/404.html", "Not Found", None)
            .with_document(careers);
        let docs = storage.scan().unwrap();

        let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&docs);
        let items = generated.menu.menu("").unwrap();

        assert_eq!(names(items), vec!["About", "Home"]);
        assert_eq!(names(&items[0].children), vec!["Jobs", "Team"]);
        assert_eq!(
            items[0].suburls,
            vec!["/careers.html".to_owned(), "/team.html".to_owned()]
        );
        assert_eq!(generated.stats.skipped, 1);
    }
}
