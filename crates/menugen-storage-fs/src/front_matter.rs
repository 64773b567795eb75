//! YAML front matter parsing.
//!
//! A page starts with a `---` line, followed by a YAML mapping, closed by a
//! second `---` (or `...`) line. Everything after the closing line is the body.

use serde_json::{Map, Value};
use tracing::warn;

use menugen_storage::MenuMeta;

/// Error parsing a front matter block.
#[derive(Debug, thiserror::Error)]
pub(crate) enum FrontMatterError {
    /// Opening `---` without a closing line.
    #[error("front matter is not terminated")]
    Unterminated,
    /// YAML syntax error.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// YAML that cannot be represented as a string-keyed mapping.
    #[error("front matter must be a mapping with string keys")]
    NotAMapping,
}

/// Typed view of a page's front matter.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub permalink: Option<String>,
    pub menu: MenuMeta,
    /// Every other top-level entry.
    pub data: Map<String, Value>,
}

/// Split source text into raw YAML and body.
///
/// Returns `Ok(None)` when the text has no front matter.
pub(crate) fn split(source: &str) -> Result<Option<(&str, &str)>, FrontMatterError> {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == "---" || trimmed == "..." {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok(Some((yaml, body)));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// Parse raw YAML into [`FrontMatter`].
pub(crate) fn parse(yaml: &str, page: &str) -> Result<FrontMatter, FrontMatterError> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(trimmed)?;
    if value.is_null() {
        return Ok(FrontMatter::default());
    }
    let Ok(Value::Object(mut data)) = serde_json::to_value(&value) else {
        return Err(FrontMatterError::NotAMapping);
    };

    let title = data.remove("title").and_then(scalar_to_string);
    let permalink = data.remove("permalink").and_then(scalar_to_string);
    let menu = match data.remove("menu") {
        Some(Value::Object(menu)) => menu_meta(&menu, page),
        Some(Value::Null) | None => MenuMeta::default(),
        Some(other) => {
            warn!(page = %page, value = %other, "ignoring non-mapping menu entry");
            MenuMeta::default()
        }
    };

    Ok(FrontMatter {
        title,
        permalink,
        menu,
        data,
    })
}

fn menu_meta(menu: &Map<String, Value>, page: &str) -> MenuMeta {
    let position = match menu.get("position") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let position = value.as_i64();
            if position.is_none() {
                warn!(page = %page, value = %value, "ignoring non-integer menu position");
            }
            position
        }
    };

    MenuMeta {
        parent: menu.get("parent").cloned().and_then(scalar_to_string),
        name: menu.get("name").cloned().and_then(scalar_to_string),
        position,
    }
}

/// Strings pass through; numbers and booleans are stringified.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
