use ratatui::style::{Color, Style};

use crate::game::COLOR_CLASSES;

/// Tile styles indexed by color class.
///
/// Built once at startup and handed to the renderer; tiles cycle through
/// the same foreground colors first on the default background, then on
/// white, then on yellow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: [Style; COLOR_CLASSES as usize],
}

impl Palette {
    pub fn new(styles: [Style; COLOR_CLASSES as usize]) -> Self {
        Self { styles }
    }

    /// Style for a tile's color class
    pub fn style(&self, color_class: u8) -> Style {
        self.styles[color_class as usize % self.styles.len()]
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let fg = |color| Style::default().fg(color);
        let on = |color, bg| Style::default().fg(color).bg(bg);

        Self::new([
            fg(Color::White),
            fg(Color::Green),
            fg(Color::Magenta),
            fg(Color::Blue),
            fg(Color::Cyan),
            fg(Color::Yellow),
            on(Color::Black, Color::White),
            on(Color::Green, Color::White),
            on(Color::Magenta, Color::White),
            on(Color::Blue, Color::White),
            on(Color::Cyan, Color::White),
            on(Color::Yellow, Color::White),
            on(Color::Black, Color::Yellow),
            on(Color::Green, Color::Yellow),
        ])
    }
}
