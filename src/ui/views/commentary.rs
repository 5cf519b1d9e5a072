use crate::ui::theme::MUTED;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub struct NameCountCommentary {
    comment: &'static str,
}

impl NameCountCommentary {
    /// An unset comment renders as an empty line.
    pub fn new(comment: Option<&'static str>) -> Self {
        Self {
            comment: comment.unwrap_or(""),
        }
    }

    pub fn text(&self) -> String {
        self.comment.to_string()
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let style = Style::default().fg(MUTED).add_modifier(Modifier::ITALIC);
        Paragraph::new(Line::styled(self.comment, style))
    }
}
