//! Menu tree arena.
//!
//! Nodes are stored in a flat `Vec<MenuNode>` with children tracked by
//! indices, one children list per node and per discovered root. The lookup
//! table maps container keys (identity keys and root keys) to the node or
//! root that currently owns them.
//!
//! Children are always appended after their container exists, so every edge
//! points from a lower index to a higher one and the tree is acyclic even
//! when identity keys repeat.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// A record placed in the menu tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuNode {
    /// Identity key, if the record has one.
    pub key: Option<String>,
    /// Declared parent key.
    pub parent: String,
    /// Display name, resolved once at attachment.
    pub name: String,
    /// Manual sort position.
    pub position: Option<i64>,
    /// Published URL.
    pub url: String,
    /// URLs of all descendants, filled by suburl propagation.
    pub suburls: Vec<String>,
    /// Plain record payload.
    pub record: Map<String, Value>,
}

/// A discovered menu root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuRoot {
    /// Menu name (suffix after the base root key; empty in single-menu mode).
    pub name: String,
    /// Full root key.
    pub key: String,
    children: Vec<usize>,
}

/// Owner of a children list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    /// Index into [`MenuTree::roots`].
    Root(usize),
    /// Index into [`MenuTree::nodes`].
    Node(usize),
}

/// Root key convention.
///
/// In single-menu mode only `base` itself is a root key. In multi-menu mode
/// any key starting with `base` is, and the suffix names the menu. One `_`
/// separating the suffix from the base is not part of the name, so
/// `__root_main` and `__rootmain` both name the menu `main`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootKeys {
    base: String,
    multi_menu: bool,
}

impl RootKeys {
    /// Create a root key convention.
    #[must_use]
    pub fn new(base: impl Into<String>, multi_menu: bool) -> Self {
        Self {
            base: base.into(),
            multi_menu,
        }
    }

    /// Menu name for `key`, or `None` if `key` is not a root key.
    #[must_use]
    pub fn menu_name<'k>(&self, key: &'k str) -> Option<&'k str> {
        if self.multi_menu {
            key.strip_prefix(self.base.as_str())
                .map(|suffix| suffix.strip_prefix('_').unwrap_or(suffix))
        } else if key == self.base {
            Some("")
        } else {
            None
        }
    }

    /// Whether multiple named menus are enabled.
    #[must_use]
    pub fn is_multi_menu(&self) -> bool {
        self.multi_menu
    }
}

/// Resolved menu tree.
#[derive(Debug, Default)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    children: Vec<Vec<usize>>,
    roots: Vec<MenuRoot>,
    lookup: HashMap<String, Container>,
}

impl MenuTree {
    /// All nodes in attachment order.
    #[must_use]
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Node by index.
    #[must_use]
    pub fn node(&self, idx: usize) -> &MenuNode {
        &self.nodes[idx]
    }

    /// Discovered roots in discovery order.
    #[must_use]
    pub fn roots(&self) -> &[MenuRoot] {
        &self.roots
    }

    /// Container currently registered under `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Container> {
        self.lookup.get(key).copied()
    }

    /// Children of a container.
    #[must_use]
    pub fn children(&self, container: Container) -> &[usize] {
        match container {
            Container::Root(i) => &self.roots[i].children,
            Container::Node(i) => &self.children[i],
        }
    }

    /// Children of the container registered under `key`.
    #[must_use]
    pub fn children_of_key(&self, key: &str) -> Option<&[usize]> {
        self.lookup(key).map(|c| self.children(c))
    }

    /// Display names of the children registered under `key`.
    #[cfg(test)]
    pub(crate) fn child_names(&self, key: &str) -> Vec<&str> {
        self.children_of_key(key)
            .unwrap_or_default()
            .iter()
            .map(|&i| self.nodes[i].name.as_str())
            .collect()
    }

    /// Register a new root under `key`.
    pub(crate) fn add_root(&mut self, key: &str, name: &str) -> Container {
        let container = Container::Root(self.roots.len());
        self.roots.push(MenuRoot {
            name: name.to_owned(),
            key: key.to_owned(),
            children: Vec::new(),
        });
        self.lookup.insert(key.to_owned(), container);
        container
    }

    /// Root already discovered under `name`.
    pub(crate) fn root_named(&self, name: &str) -> Option<Container> {
        self.roots
            .iter()
            .position(|r| r.name == name)
            .map(Container::Root)
    }

    /// Register an additional root key for an existing root.
    pub(crate) fn register_root_alias(&mut self, key: &str, root: Container) {
        self.lookup.insert(key.to_owned(), root);
    }

    /// Append `node` to `parent`'s children and return its index.
    pub(crate) fn add_node(&mut self, node: MenuNode, parent: Container) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.children.push(Vec::new());
        match parent {
            Container::Root(i) => self.roots[i].children.push(idx),
            Container::Node(i) => self.children[i].push(idx),
        }
        idx
    }

    /// Register node `idx` as the container for `key`.
    pub(crate) fn register_container(&mut self, key: &str, idx: usize) -> Option<Container> {
        self.lookup.insert(key.to_owned(), Container::Node(idx))
    }

    /// Mutable access for in-place passes (sorting, suburls).
    pub(crate) fn parts_mut(&mut self) -> (&mut [MenuNode], &mut [Vec<usize>], &mut [MenuRoot]) {
        (&mut self.nodes, &mut self.children, &mut self.roots)
    }
}

impl MenuRoot {
    /// Top-level node indices.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<usize> {
        &mut self.children
    }
}
