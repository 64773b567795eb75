//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod render;

pub(crate) use build::BuildArgs;
pub(crate) use render::RenderArgs;

use menugen_config::{Config, CssConfig};
use menugen_renderer::CssClasses;
use menugen_site::{GeneratedMenu, MenuGenerator, MenuGeneratorConfig};
use menugen_storage::Storage;
use menugen_storage_fs::FsStorage;
use tracing::info;

use crate::error::CliError;

/// Pages scanned and the menu generated from them.
pub(crate) struct Generated {
    pub pages: usize,
    pub menu: GeneratedMenu,
}

/// Scan the configured source directory and generate menus.
pub(crate) fn generate(config: &Config) -> Result<Generated, CliError> {
    let storage = FsStorage::new(config.site_resolved.source_dir.clone());
    let documents = storage.scan()?;
    info!(pages = documents.len(), source_dir = %storage.source_dir().display(), "scanned pages");

    let generator = MenuGenerator::new(generator_config(config));
    let menu = generator.generate(&documents);

    Ok(Generated {
        pages: documents.len(),
        menu,
    })
}

/// Map file configuration to generator options.
pub(crate) fn generator_config(config: &Config) -> MenuGeneratorConfig {
    let options = &config.menu_generator;
    MenuGeneratorConfig {
        parent_match_hash: options.parent_match_hash.clone(),
        menu_root: options.menu_root.clone(),
        multi_menu: options.multi_menu,
        delete_content_hash: options.delete_content_hash,
    }
}

/// Map file configuration to renderer class names.
pub(crate) fn css_classes(css: &CssConfig) -> CssClasses {
    CssClasses {
        current: css.current.clone(),
        current_ancestor: css.current_parent.clone(),
        li: css.li.clone(),
        ul: css.ul.clone(),
    }
}
