//! Menu tree resolution and publishing for menugen.
//!
//! This crate turns a flat collection of content records into one or more
//! rooted, ordered menu trees:
//!
//! 1. [`TreeResolver`] attaches records to their parents by repeated passes
//!    until nothing more attaches
//! 2. siblings are ordered by position, then name ([`compare_siblings`])
//! 3. every node learns the URLs of its whole subtree
//! 4. the result is published as nested [`MenuItem`]s ([`PublishedMenu`])
//!
//! [`MenuGenerator`] runs all four steps.
//!
//! # Quick Start
//!
//! ```
//! use menugen_site::{MenuGenerator, MenuGeneratorConfig};
//! use menugen_storage::Document;
//!
//! let mut home = Document::new("index.md", "/");
//! home.title = Some("Home".to_owned());
//! home.menu.parent = Some("__root".to_owned());
//!
//! let generated = MenuGenerator::new(MenuGeneratorConfig::default()).generate(&[home]);
//! assert_eq!(generated.menu.menu("").unwrap()[0].name, "Home");
//! ```

mod generator;
mod publish;
mod record;
mod resolver;
mod sort;
mod suburls;
mod tree;

pub use generator::{GeneratedMenu, MenuGenerator, MenuGeneratorConfig};
pub use publish::{MenuItem, PublishedMenu};
pub use record::Record;
pub use resolver::{Resolution, ResolveOptions, ResolveStats, TreeResolver};
pub use sort::compare_siblings;
pub use tree::{Container, MenuNode, MenuRoot, MenuTree, RootKeys};
