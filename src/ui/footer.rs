use crate::ui::theme::MUTED;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::EditTrigger;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    trigger: EditTrigger,
}

impl Footer {
    pub fn new(trigger: EditTrigger) -> Self {
        Self { trigger }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = match self.trigger {
            EditTrigger::Change => " Enter: Submit │ Esc: Revert │ Ctrl+Q: Quit",
            EditTrigger::Input => " Esc: Revert │ Ctrl+Q: Quit",
        };
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the separators are multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(MUTED).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]))
    }
}
