//! Terminal output
//!
//! Core display types produce markdown. With color enabled it goes through
//! a termimad skin, otherwise it is printed untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Status prefixes written by `OperationStatus`, with their colors.
const STATUS_COLORS: [(&str, Color); 3] = [
    ("Success:", Color::Green),
    ("Warning:", Color::Yellow),
    ("Error:", Color::Red),
];

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // termimad drops the hashes; keep them so day and item
                // levels stay distinguishable
                println!("\x1b[34m{line}\x1b[0m");
            } else if let Some(color) = status_color(line) {
                let mut skin = self.skin.clone();
                skin.paragraph.set_fg(color);
                skin.print_inline(line);
                println!();
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

fn status_color(line: &str) -> Option<Color> {
    STATUS_COLORS
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
        .map(|(_, color)| *color)
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color("Warning: 2 left behind"), Some(Color::Yellow));
        assert_eq!(status_color("Error: nope"), Some(Color::Red));
        assert_eq!(status_color("Saved changes:"), None);
    }
}
