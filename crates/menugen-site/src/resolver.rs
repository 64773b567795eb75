//! Tree resolution by repeated peeling.
//!
//! [`TreeResolver`] owns the lookup table (inside a [`MenuTree`]) and the
//! set of still-unresolved records. Each pass walks the unresolved records
//! in order and attaches every record whose parent key is already a
//! container. A parent key that is not yet a container but matches the root
//! key convention becomes a root on the spot. Passes repeat until one
//! attaches nothing.
//!
//! A record attaches in the same pass its parent became a container when it
//! comes later in the collection, so resolution needs at most `D + 1`
//! passes for a maximum parent-chain depth `D`. Records whose chain never
//! reaches a root (unknown parent, cycles) stay unresolved and are excluded.

use tracing::{debug, info, warn};

use crate::record::Record;
use crate::tree::{Container, MenuNode, MenuTree, RootKeys};

/// Options controlling resolution.
#[derive(Clone, Debug)]
pub struct ResolveOptions {
    /// Record field holding the identity key.
    pub identity_field: String,
    /// Root key convention.
    pub root_keys: RootKeys,
    /// Strip raw content from stored plain records.
    pub strip_content: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            identity_field: "path".to_owned(),
            root_keys: RootKeys::new("__root", false),
            strip_content: false,
        }
    }
}

/// Summary of a resolution run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Passes over the unresolved collection.
    pub passes: usize,
    /// Records attached to a menu.
    pub attached: usize,
    /// Records without a declared parent (not menu entries).
    pub skipped: usize,
    /// Identity keys (or URLs, when the key is missing) of records that
    /// declare a parent but never reached a root.
    pub unreachable: Vec<String>,
}

/// Result of [`TreeResolver::resolve`].
#[derive(Debug)]
pub struct Resolution {
    /// The resolved tree.
    pub tree: MenuTree,
    /// Run summary.
    pub stats: ResolveStats,
}

/// Fixed-point resolver from flat records to a [`MenuTree`].
pub struct TreeResolver<'r, R> {
    options: &'r ResolveOptions,
    tree: MenuTree,
    unresolved: Vec<&'r R>,
}

impl<'r, R: Record> TreeResolver<'r, R> {
    /// Prepare a resolver over `records`.
    ///
    /// Records without a parent key never enter the unresolved set.
    #[must_use]
    pub fn new(records: &'r [R], options: &'r ResolveOptions) -> Self {
        Self {
            options,
            tree: MenuTree::default(),
            unresolved: records.iter().collect(),
        }
    }

    /// Run passes until no record attaches, consuming the resolver.
    #[must_use]
    pub fn resolve(mut self) -> Resolution {
        let total = self.unresolved.len();
        self.unresolved.retain(|r| r.parent_key().is_some());
        let skipped = total - self.unresolved.len();

        let mut passes = 0;
        while !self.unresolved.is_empty() {
            passes += 1;
            let attached = self.pass();
            debug!(
                pass = passes,
                attached,
                remaining = self.unresolved.len(),
                "resolution pass"
            );
            if attached == 0 {
                break;
            }
        }

        let unreachable: Vec<String> = self
            .unresolved
            .iter()
            .map(|r| {
                let id = r
                    .identity_key(&self.options.identity_field)
                    .unwrap_or_else(|| r.url());
                warn!(
                    record = %id,
                    parent = %r.parent_key().unwrap_or_default(),
                    "parent chain never reaches a menu root, excluded from menus"
                );
                id.to_owned()
            })
            .collect();

        let stats = ResolveStats {
            passes,
            attached: self.tree.nodes().len(),
            skipped,
            unreachable,
        };
        info!(
            passes = stats.passes,
            attached = stats.attached,
            unreachable = stats.unreachable.len(),
            roots = self.tree.roots().len(),
            "resolved menu tree"
        );

        Resolution {
            tree: self.tree,
            stats,
        }
    }

    /// One pass over the unresolved records. Returns the number attached.
    fn pass(&mut self) -> usize {
        let pending = std::mem::take(&mut self.unresolved);
        let before = pending.len();

        for record in pending {
            match self.find_container(record.parent_key()) {
                Some(parent) => self.attach(record, parent),
                None => self.unresolved.push(record),
            }
        }

        before - self.unresolved.len()
    }

    /// Locate the container for `parent`, creating a root when the key
    /// follows the root convention.
    fn find_container(&mut self, parent: Option<&str>) -> Option<Container> {
        let parent = parent?;
        if let Some(container) = self.tree.lookup(parent) {
            return Some(container);
        }

        let name = self.options.root_keys.menu_name(parent)?;
        if let Some(existing) = self.tree.root_named(name) {
            debug!(key = %parent, menu = %name, "root key aliases existing menu");
            self.tree.register_root_alias(parent, existing);
            return Some(existing);
        }

        debug!(key = %parent, menu = %name, "discovered menu root");
        Some(self.tree.add_root(parent, name))
    }

    /// Attach `record` under `parent` and make it a container.
    fn attach(&mut self, record: &R, parent: Container) {
        let key = record
            .identity_key(&self.options.identity_field)
            .map(str::to_owned);
        let node = MenuNode {
            key: key.clone(),
            parent: record.parent_key().unwrap_or_default().to_owned(),
            name: record
                .menu_name()
                .or_else(|| record.title())
                .unwrap_or_default()
                .to_owned(),
            position: record.position(),
            url: record.url().to_owned(),
            suburls: Vec::new(),
            record: record.to_plain_record(self.options.strip_content),
        };
        let idx = self.tree.add_node(node, parent);

        let Some(key) = key else {
            debug!(url = %record.url(), "record has no identity key, cannot own children");
            return;
        };
        match self.tree.lookup(&key) {
            Some(Container::Root(_)) => {
                warn!(key = %key, "identity key collides with a menu root key, children stay on the root");
            }
            Some(Container::Node(_)) => {
                warn!(key = %key, "duplicate identity key, later children attach to the newest record");
                self.tree.register_container(&key, idx);
            }
            None => {
                self.tree.register_container(&key, idx);
            }
        }
    }
}
