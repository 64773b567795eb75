//! Menu tag parameter parsing.
//!
//! Parses the parameter string of a `menu` template tag:
//! whitespace-separated `key:value` pairs.
//!
//! - `max_depth:<digits>` limits list nesting (absent means unlimited)
//! - `menu:<name>` selects a named menu in multi-menu mode
//!
//! Parsing happens when the template is parsed, so a malformed tag is
//! reported before any page is rendered.

use std::str::FromStr;

/// Usage string reported with every syntax error.
pub const TAG_USAGE: &str = "menu [max_depth:y] [menu:name]";

/// Error in menu tag parameters.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TagSyntaxError {
    /// Token is not a `key:value` pair.
    #[error("Syntax Error in 'menu' - Valid syntax: {TAG_USAGE} (unexpected '{0}')")]
    Malformed(String),
    /// Key is not recognized.
    #[error("Syntax Error in 'menu' - Valid syntax: {TAG_USAGE} (unknown parameter '{0}')")]
    UnknownParameter(String),
    /// Key given more than once.
    #[error("Syntax Error in 'menu' - Valid syntax: {TAG_USAGE} (duplicate parameter '{0}')")]
    DuplicateParameter(String),
    /// `max_depth` is not a non-negative integer.
    #[error("Syntax Error in 'menu' - Valid syntax: {TAG_USAGE} (invalid max_depth '{0}')")]
    InvalidDepth(String),
}

/// Parsed menu tag parameters.
///
/// # Example
///
/// ```
/// use menugen_renderer::MenuTag;
///
/// let tag = MenuTag::parse("max_depth:2 menu:footer").unwrap();
/// assert_eq!(tag.max_depth, Some(2));
/// assert_eq!(tag.menu.as_deref(), Some("footer"));
///
/// assert!(MenuTag::parse("depth=2").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuTag {
    /// Deepest list level that still gets nested children. `None` is unlimited.
    pub max_depth: Option<usize>,
    /// Named menu to render.
    pub menu: Option<String>,
}

impl MenuTag {
    /// Parse tag parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TagSyntaxError`] for anything other than the documented
    /// parameters, each given at most once.
    pub fn parse(markup: &str) -> Result<Self, TagSyntaxError> {
        let mut tag = Self::default();
        let mut seen_depth = false;

        for token in markup.split_whitespace() {
            let Some((key, value)) = token.split_once(':') else {
                return Err(TagSyntaxError::Malformed(token.to_owned()));
            };
            if value.is_empty() {
                return Err(TagSyntaxError::Malformed(token.to_owned()));
            }

            match key {
                "max_depth" => {
                    if seen_depth {
                        return Err(TagSyntaxError::DuplicateParameter(key.to_owned()));
                    }
                    seen_depth = true;
                    tag.max_depth = Some(parse_depth(value)?);
                }
                "menu" => {
                    if tag.menu.is_some() {
                        return Err(TagSyntaxError::DuplicateParameter(key.to_owned()));
                    }
                    tag.menu = Some(value.to_owned());
                }
                _ => return Err(TagSyntaxError::UnknownParameter(key.to_owned())),
            }
        }

        Ok(tag)
    }
}

impl FromStr for MenuTag {
    type Err = TagSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Digits only: no sign, no whitespace.
fn parse_depth(value: &str) -> Result<usize, TagSyntaxError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TagSyntaxError::InvalidDepth(value.to_owned()));
    }
    value
        .parse()
        .map_err(|_| TagSyntaxError::InvalidDepth(value.to_owned()))
}
