//! Terminal markdown rendering for coach replies.

use termimad::MadSkin;

/// Widest column coach replies are wrapped to.
const MAX_WIDTH: usize = 88;

/// Render `markdown` with `skin`, wrapped to `width` columns.
pub fn render_markdown(skin: &MadSkin, markdown: &str, width: usize) -> String {
    skin.text(markdown, Some(width)).to_string()
}

/// Prints markdown to stdout, sized to the current terminal.
pub struct MarkdownPrinter {
    skin: MadSkin,
}

impl Default for MarkdownPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownPrinter {
    pub fn new() -> Self {
        Self {
            skin: MadSkin::default(),
        }
    }

    pub fn print(&self, markdown: &str) {
        let (columns, _) = termimad::terminal_size();
        let width = usize::from(columns).clamp(20, MAX_WIDTH);
        println!("{}", render_markdown(&self.skin, markdown, width));
    }
}
