//! Nested list rendering with current-page highlighting.

use std::fmt::Write;

use menugen_site::{MenuItem, PublishedMenu};
use tracing::{debug, warn};

use crate::html::escape_html;
use crate::tag::MenuTag;

/// CSS class names applied to rendered markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssClasses {
    /// Class of the item whose URL is the current page.
    pub current: String,
    /// Class of items with the current page among their descendants.
    pub current_ancestor: String,
    /// Extra class for highlighted items. Empty for none.
    pub li: String,
    /// Extra class for every list. Empty for none.
    pub ul: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            current: "current".to_owned(),
            current_ancestor: "current-ancestor".to_owned(),
            li: String::new(),
            ul: String::new(),
        }
    }
}

/// Renders published menus as nested `<ul>` lists.
///
/// Each list carries a `menu-level-N` class (N starting at 0). The item
/// matching the current URL gets the `current` class; items holding it in
/// their suburls get `current-ancestor`. Other items get a bare `<li>`.
///
/// # Example
///
/// ```
/// use menugen_renderer::{MenuRenderer, MenuTag};
/// use menugen_site::{MenuGenerator, MenuGeneratorConfig};
/// use menugen_storage::Document;
///
/// let mut home = Document::new("index.md", "/");
/// home.title = Some("Home".to_owned());
/// home.menu.parent = Some("__root".to_owned());
///
/// let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&[home]);
/// let html = MenuRenderer::default().render(&generated.menu, &MenuTag::default(), "/");
///
/// assert_eq!(
///     html,
///     r#"<ul class="menu-level-0"><li class="current"><a href="/">Home</a></li></ul>"#
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct MenuRenderer {
    css: CssClasses,
}

impl MenuRenderer {
    /// Create a renderer with the given class names.
    #[must_use]
    pub fn new(css: CssClasses) -> Self {
        Self { css }
    }

    /// Render a published menu for the page at `current_url`.
    ///
    /// In multi-menu mode `tag.menu` selects one menu; without it every menu
    /// is rendered in name order. An unknown menu name renders nothing.
    #[must_use]
    pub fn render(&self, menu: &PublishedMenu, tag: &MenuTag, current_url: &str) -> String {
        match menu {
            PublishedMenu::Single(items) => {
                if let Some(name) = &tag.menu {
                    debug!(menu = %name, "menu name ignored in single-menu mode");
                }
                self.render_items(items, current_url, tag.max_depth)
            }
            PublishedMenu::Multi(menus) => match &tag.menu {
                Some(name) => match menus.get(name) {
                    Some(items) => self.render_items(items, current_url, tag.max_depth),
                    None => {
                        warn!(menu = %name, "unknown menu");
                        String::new()
                    }
                },
                None => menus
                    .values()
                    .map(|items| self.render_items(items, current_url, tag.max_depth))
                    .collect(),
            },
        }
    }

    /// Render one ordered list of items starting at level 0.
    ///
    /// Children are nested while the level is below `max_depth`; `None`
    /// nests without limit.
    #[must_use]
    pub fn render_items(
        &self,
        items: &[MenuItem],
        current_url: &str,
        max_depth: Option<usize>,
    ) -> String {
        let mut out = String::new();
        self.render_level(items, current_url, max_depth, 0, &mut out);
        out
    }

    fn render_level(
        &self,
        items: &[MenuItem],
        current_url: &str,
        max_depth: Option<usize>,
        level: usize,
        out: &mut String,
    ) {
        let _ = write!(out, r#"<ul class="menu-level-{level}"#);
        if !self.css.ul.is_empty() {
            let _ = write!(out, " {}", escape_html(&self.css.ul));
        }
        out.push_str("\">");

        for item in items {
            match self.item_class(item, current_url) {
                Some(class) => {
                    out.push_str("<li class=\"");
                    if !self.css.li.is_empty() {
                        let _ = write!(out, "{} ", escape_html(&self.css.li));
                    }
                    let _ = write!(out, "{}\">", escape_html(class));
                }
                None => out.push_str("<li>"),
            }

            let _ = write!(
                out,
                r#"<a href="{}">{}</a>"#,
                escape_html(&item.url),
                escape_html(&item.name)
            );

            let nest = max_depth.is_none_or(|max| level < max);
            if nest && !item.children.is_empty() {
                self.render_level(&item.children, current_url, max_depth, level + 1, out);
            }
            out.push_str("</li>");
        }

        out.push_str("</ul>");
    }

    fn item_class(&self, item: &MenuItem, current_url: &str) -> Option<&str> {
        if item.url == current_url {
            Some(&self.css.current)
        } else if item.has_descendant_url(current_url) {
            Some(&self.css.current_ancestor)
        } else {
            None
        }
    }
}
