//! `menugen build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use menugen_config::{CliSettings, Config};

use super::{Generated, generate};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover menugen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Publish one menu per root key suffix (overrides config).
    #[arg(long)]
    multi_menu: bool,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (resolution summary and warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, page loading, or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            multi_menu: self.multi_menu.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Source: {}",
            config.site_resolved.source_dir.display()
        ));

        let generated = generate(&config)?;
        let json = site_json(&config, &generated)?;

        match &self.output {
            Some(path) => std::fs::write(path, format!("{json}\n"))?,
            None => writeln!(std::io::stdout().lock(), "{json}")?,
        }

        output.resolution_summary(generated.pages, &generated.menu.stats);
        if let Some(path) = &self.output {
            output.success(&format!("Menu written to {}", path.display()));
        }
        Ok(())
    }
}

/// Pretty JSON keyed by the configured menu name.
fn site_json(config: &Config, generated: &Generated) -> Result<String, CliError> {
    let value = generated
        .menu
        .to_site_json(&config.menu_generator.hash_name_in_site_config)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use serde_json::Value;

    fn args(config: PathBuf, output: PathBuf, multi_menu: bool) -> BuildArgs {
        BuildArgs {
            config: Some(config),
            source_dir: None,
            multi_menu,
            output: Some(output),
            verbose: false,
        }
    }

    #[test]
    fn test_build_writes_site_json() {
        let (dir, config_path) = fixtures::site("");
        let out = dir.path().join("menu.json");

        args(config_path, out.clone(), false).execute().unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["menu"][0]["name"], "Docs");
        assert_eq!(value["menu"][0]["suburls"][0], "/docs/setup.html");
        assert_eq!(value["menu"][0]["subpages"][0]["name"], "Setup & Install");
        assert_eq!(value["menu"][1]["name"], "About");
    }

    #[test]
    fn test_build_uses_hash_name() {
        let (dir, config_path) =
            fixtures::site("[menu_generator]\nhash_name_in_site_config = \"nav\"\n");
        let out = dir.path().join("menu.json");

        args(config_path, out.clone(), false).execute().unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert!(value.get("menu").is_none());
        assert!(value["nav"].is_array());
    }

    #[test]
    fn test_build_multi_menu_flag() {
        let (dir, config_path) = fixtures::site("");
        let out = dir.path().join("menu.json");

        args(config_path, out.clone(), true).execute().unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        // "__root" itself is the base key, published under the empty name
        assert_eq!(value["menu"][""][0]["name"], "Docs");
    }

    #[test]
    fn test_build_reports_unresolved_pages_without_failing() {
        let (dir, config_path) = fixtures::site("");
        std::fs::write(
            dir.path().join("pages/orphan.md"),
            "---\ntitle: Orphan\nmenu:\n  parent: missing.md\n---\n",
        )
        .unwrap();
        let out = dir.path().join("menu.json");

        args(config_path, out.clone(), false).execute().unwrap();

        let json = std::fs::read_to_string(&out).unwrap();
        assert!(!json.contains("Orphan"));
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["menu"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_build_missing_config() {
        let dir = tempfile::tempdir().unwrap();

        let result = args(
            dir.path().join("nope.toml"),
            dir.path().join("menu.json"),
            false,
        )
        .execute();

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
