//! Published menu representation.
//!
//! The arena is internal to generation. Downstream consumers (the renderer,
//! JSON output) read the nested [`MenuItem`] form built here.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::tree::{Container, MenuTree};

/// Menu entry with nested children.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuItem {
    /// Display name.
    pub name: String,
    /// Link target.
    pub url: String,
    /// Manual sort position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// URLs of all descendants.
    pub suburls: Vec<String>,
    /// Child entries in sibling order.
    #[serde(rename = "subpages")]
    pub children: Vec<MenuItem>,
    /// Plain record of the page.
    pub page: Map<String, Value>,
}

impl MenuItem {
    /// Whether `url` belongs to a descendant of this item.
    #[must_use]
    pub fn has_descendant_url(&self, url: &str) -> bool {
        self.suburls.iter().any(|u| u == url)
    }
}

/// Menu made available to renderers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PublishedMenu {
    /// Single-menu mode: the root's ordered children.
    Single(Vec<MenuItem>),
    /// Multi-menu mode: menu name to ordered children.
    Multi(BTreeMap<String, Vec<MenuItem>>),
}

impl PublishedMenu {
    /// Whether no menu entries were published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(items) => items.is_empty(),
            Self::Multi(menus) => menus.is_empty(),
        }
    }

    /// Items of a named menu. In single-menu mode the name is ignored.
    #[must_use]
    pub fn menu(&self, name: &str) -> Option<&[MenuItem]> {
        match self {
            Self::Single(items) => Some(items),
            Self::Multi(menus) => menus.get(name).map(Vec::as_slice),
        }
    }
}

/// Build the published menu from a sorted, propagated tree.
///
/// With no discovered roots the result is an empty list (single-menu) or
/// an empty mapping (multi-menu).
pub(crate) fn publish(tree: &MenuTree, multi_menu: bool) -> PublishedMenu {
    if multi_menu {
        let menus = tree
            .roots()
            .iter()
            .map(|root| (root.name.clone(), build_items(tree, root.children())))
            .collect();
        PublishedMenu::Multi(menus)
    } else {
        let items = tree
            .roots()
            .first()
            .map(|root| build_items(tree, root.children()))
            .unwrap_or_default();
        PublishedMenu::Single(items)
    }
}

fn build_items(tree: &MenuTree, indices: &[usize]) -> Vec<MenuItem> {
    indices
        .iter()
        .map(|&idx| {
            let node = tree.node(idx);
            MenuItem {
                name: node.name.clone(),
                url: node.url.clone(),
                position: node.position,
                suburls: node.suburls.clone(),
                children: build_items(tree, tree.children(Container::Node(idx))),
                page: node.record.clone(),
            }
        })
        .collect()
}
