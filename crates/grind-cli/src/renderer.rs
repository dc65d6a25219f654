//! Terminal rendering module for rich markdown output
//!
//! Operation results are markdown. In rich mode termimad styles bold text and
//! inline code; with `--no-color` the text is printed unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        print!("{}", self.format(markdown));
        Ok(())
    }

    /// Formats `markdown` the way [`TerminalRenderer::render`] prints it.
    fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        markdown
            .lines()
            .map(|line| self.format_line(line) + "\n")
            .collect()
    }

    /// Styles one line. Leading whitespace is emitted verbatim so the
    /// histogram columns stay aligned.
    fn format_line(&self, line: &str) -> String {
        let content = line.trim_start();
        let indent = &line[..line.len() - content.len()];
        format!("{indent}{}", self.skin.inline(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_is_unchanged() {
        let renderer = TerminalRenderer::new(false);
        let text = "Last 2 days:\n     Today ██ (2)";
        assert_eq!(renderer.format(text), text);
    }

    #[test]
    fn test_rich_output_keeps_indentation() {
        let renderer = TerminalRenderer::new(true);
        let output = renderer.format("Last 3 days:\n    Mar 08 ·\n     Today ██ (2)\n");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("    Mar 08"));
        assert!(lines[2].starts_with("     Today"));
        assert!(lines[2].contains("██ (2)"));
    }

    #[test]
    fn test_rich_output_styles_inline_code() {
        let renderer = TerminalRenderer::new(true);
        let line = renderer.format_line("Completion of `LeetCode 75` stats:");

        assert!(line.contains("LeetCode 75"));
        assert!(!line.contains('`'));
    }
}
