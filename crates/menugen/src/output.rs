//! Terminal reporting for menugen commands.
//!
//! Everything goes to stderr; stdout carries only generated JSON or markup.

use console::{Style, Term};
use menugen_site::ResolveStats;

/// Styled stderr writer.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            bold: Style::new().bold(),
        }
    }

    /// Plain progress line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Page and resolution counts, then one yellow line per record left out
    /// of every menu.
    pub(crate) fn resolution_summary(&self, pages: usize, stats: &ResolveStats) {
        let line = format!(
            "{} pages, {} in menus, {} unresolved, {} passes",
            self.bold.apply_to(pages),
            self.bold.apply_to(stats.attached),
            self.bold.apply_to(stats.unreachable.len()),
            stats.passes
        );
        let _ = self.term.write_line(&line);

        for key in &stats.unreachable {
            let msg = format!("  not in any menu: {key}");
            let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
        }
    }
}
