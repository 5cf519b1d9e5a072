use crate::ui::theme::TEXT;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const LABEL: &str = "Count of names you have had: ";

pub struct NameCount {
    count: Option<u64>,
}

impl NameCount {
    pub fn new(count: Option<u64>) -> Self {
        Self { count }
    }

    /// Label plus the count; the count is left blank while unset.
    pub fn text(&self) -> String {
        match self.count {
            Some(count) => format!("{LABEL}{count}"),
            None => LABEL.to_string(),
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(Line::styled(self.text(), Style::default().fg(TEXT)))
    }
}
