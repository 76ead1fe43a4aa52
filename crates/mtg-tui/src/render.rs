//! Frame layout.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// How a frame is laid out on screen. Both styles anchor at the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStyle {
    /// The bare frame text on the first row.
    Plain,
    /// The frame text inside a titled border.
    #[default]
    Boxed,
}

/// Draws `text` according to `style`. `title` is only used by [`FrameStyle::Boxed`].
pub fn render_frame(frame: &mut Frame, text: &str, style: FrameStyle, title: &str) {
    let area = frame.area();
    match style {
        FrameStyle::Plain => {
            let row = Rect::new(area.x, area.y, area.width, area.height.min(1));
            frame.render_widget(Paragraph::new(text), row);
        }
        FrameStyle::Boxed => {
            let content_width = text.chars().count().max(title.chars().count() + 2) as u16;
            // Border plus one column of padding on each side.
            let width = content_width.saturating_add(4).min(area.width);
            let height = 3.min(area.height);
            let boxed = Rect::new(area.x, area.y, width, height);

            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "));
            let paragraph = Paragraph::new(format!(" {text}"))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(block);
            frame.render_widget(paragraph, boxed);
        }
    }
}
