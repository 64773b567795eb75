//! Configuration management for menugen.
//!
//! Parses `menugen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.source_dir` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## Example
//!
//! ```toml
//! [site]
//! source_dir = "pages"
//!
//! [menu_generator]
//! menu_root = "__root"
//! multi_menu = true
//!
//! [menu_generator.css]
//! current = "active"
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override page source directory.
    pub source_dir: Option<PathBuf>,
    /// Override multi-menu mode.
    pub multi_menu: Option<bool>,
    /// Override base root key.
    pub menu_root: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "menugen.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Menu generator options.
    pub menu_generator: MenuGeneratorConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source_dir: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Directory scanned for content pages.
    pub source_dir: PathBuf,
}

/// Options recognized by the menu generator.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuGeneratorConfig {
    /// Record field used as the identity key that `menu.parent` refers to.
    pub parent_match_hash: String,
    /// Base root key. In multi-menu mode, any key starting with it is a root.
    pub menu_root: String,
    /// Partition pages into several named menus.
    pub multi_menu: bool,
    /// Strip the raw `content` field from published records.
    pub delete_content_hash: bool,
    /// Name the published menu is keyed under.
    pub hash_name_in_site_config: String,
    /// CSS hook names used by the renderer.
    pub css: CssConfig,
}

impl Default for MenuGeneratorConfig {
    fn default() -> Self {
        Self {
            parent_match_hash: "path".to_owned(),
            menu_root: "__root".to_owned(),
            multi_menu: false,
            delete_content_hash: false,
            hash_name_in_site_config: "menu".to_owned(),
            css: CssConfig::default(),
        }
    }
}

/// CSS class names applied to rendered menus.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CssConfig {
    /// Class of the item whose URL is the current page.
    pub current: String,
    /// Class of every item whose subtree contains the current page.
    #[serde(alias = "current_ancestor")]
    pub current_parent: String,
    /// Extra class for styled list items.
    pub li: String,
    /// Extra class for every list wrapper.
    pub ul: String,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            current: "current".to_owned(),
            current_parent: "current-ancestor".to_owned(),
            li: String::new(),
            ul: String::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a class name to be safe inside a double-quoted HTML attribute.
fn require_class_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.contains(['"', '<', '>']) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain '\"', '<' or '>'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `menugen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(multi_menu) = settings.multi_menu {
            self.menu_generator.multi_menu = multi_menu;
        }
        if let Some(menu_root) = &settings.menu_root {
            self.menu_generator.menu_root.clone_from(menu_root);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            menu_generator: MenuGeneratorConfig::default(),
            site_resolved: SiteConfig {
                source_dir: base.to_path_buf(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let menu = &self.menu_generator;
        require_non_empty(&menu.parent_match_hash, "menu_generator.parent_match_hash")?;
        require_non_empty(&menu.menu_root, "menu_generator.menu_root")?;
        require_non_empty(
            &menu.hash_name_in_site_config,
            "menu_generator.hash_name_in_site_config",
        )?;

        require_class_name(&menu.css.current, "menu_generator.css.current")?;
        require_class_name(&menu.css.current_parent, "menu_generator.css.current_parent")?;
        require_class_name(&menu.css.li, "menu_generator.css.li")?;
        require_class_name(&menu.css.ul, "menu_generator.css.ul")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.site.source_dir {
            self.site.source_dir = Some(expand::expand_env(dir, "site.source_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            source_dir: config_dir.join(self.site.source_dir.as_deref().unwrap_or(".")),
        };
    }
}
