//! `menugen render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use menugen_config::{CliSettings, Config};
use menugen_renderer::{MenuRenderer, MenuTag};

use super::{css_classes, generate};
use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// URL of the page being rendered.
    #[arg(short, long)]
    page: String,

    /// Menu tag parameters, e.g. "max_depth:2 menu:main".
    #[arg(short, long, default_value = "")]
    tag: String,

    /// Path to configuration file (default: auto-discover menugen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Publish one menu per root key suffix (overrides config).
    #[arg(long)]
    multi_menu: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command, printing markup to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is malformed, or configuration or page
    /// loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut stdout = std::io::stdout().lock();
        self.render_to(&mut stdout)
    }

    fn render_to(&self, out: &mut impl Write) -> Result<(), CliError> {
        // Tag errors surface before any page is loaded
        let tag = MenuTag::parse(&self.tag)?;

        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            multi_menu: self.multi_menu.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let generated = generate(&config)?;
        let renderer = MenuRenderer::new(css_classes(&config.menu_generator.css));
        let html = renderer.render(&generated.menu.menu, &tag, &self.page);

        writeln!(out, "{html}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use pretty_assertions::assert_eq;

    fn args(config: PathBuf, page: &str, tag: &str) -> RenderArgs {
        RenderArgs {
            page: page.to_owned(),
            tag: tag.to_owned(),
            config: Some(config),
            source_dir: None,
            multi_menu: false,
            verbose: false,
        }
    }

    fn render(args: &RenderArgs) -> Result<String, CliError> {
        let mut out = Vec::new();
        args.render_to(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_highlights_current_page() {
        let (_dir, config_path) = fixtures::site("");

        let html = render(&args(config_path, "/docs/setup.html", "")).unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<ul class="menu-level-0">"#,
                r#"<li class="current-ancestor"><a href="/docs/">Docs</a>"#,
                r#"<ul class="menu-level-1">"#,
                r#"<li class="current"><a href="/docs/setup.html">Setup &amp; Install</a></li>"#,
                "</ul></li>",
                r#"<li><a href="/about.html">About</a></li>"#,
                "</ul>\n",
            )
        );
    }

    #[test]
    fn test_render_max_depth() {
        let (_dir, config_path) = fixtures::site("");

        let html = render(&args(config_path, "/", "max_depth:0")).unwrap();

        assert!(!html.contains("menu-level-1"));
        assert!(!html.contains("Setup"));
    }

    #[test]
    fn test_render_configured_classes() {
        let (_dir, config_path) = fixtures::site(
            "[menu_generator.css]\ncurrent = \"active\"\ncurrent_ancestor = \"open\"\nul = \"nav\"\n",
        );

        let html = render(&args(config_path, "/docs/setup.html", "")).unwrap();

        assert!(html.starts_with(r#"<ul class="menu-level-0 nav">"#));
        assert!(html.contains(r#"<li class="open">"#));
        assert!(html.contains(r#"<li class="active">"#));
    }

    #[test]
    fn test_render_rejects_bad_tag_before_loading() {
        let dir = tempfile::tempdir().unwrap();

        let result = render(&args(dir.path().join("missing.toml"), "/", "depth:2"));

        assert!(matches!(result, Err(CliError::Tag(_))));
    }
}
