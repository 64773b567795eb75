//! HTML rendering for generated menus.
//!
//! A page template calls the `menu` tag with an optional parameter string.
//! [`MenuTag`] parses it once; [`MenuRenderer`] then turns a
//! [`menugen_site::PublishedMenu`] into nested lists for each page.
//!
//! ```
//! use menugen_renderer::{CssClasses, render_menu};
//! use menugen_site::PublishedMenu;
//!
//! let html = render_menu(&PublishedMenu::Single(Vec::new()), "max_depth:2", "/", &CssClasses::default());
//! assert_eq!(html.unwrap(), r#"<ul class="menu-level-0"></ul>"#);
//! ```

mod html;
mod menu;
mod tag;

pub use html::escape_html;
pub use menu::{CssClasses, MenuRenderer};
pub use tag::{MenuTag, TAG_USAGE, TagSyntaxError};

use menugen_site::PublishedMenu;

/// Parse `markup` and render `menu` for the page at `current_url`.
///
/// # Errors
///
/// Returns [`TagSyntaxError`] if `markup` is not valid tag syntax.
pub fn render_menu(
    menu: &PublishedMenu,
    markup: &str,
    current_url: &str,
    css: &CssClasses,
) -> Result<String, TagSyntaxError> {
    let tag = MenuTag::parse(markup)?;
    Ok(MenuRenderer::new(css.clone()).render(menu, &tag, current_url))
}
