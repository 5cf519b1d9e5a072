use crate::ui::theme::ACCENT;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Heading that greets the current name.
pub struct Greeting {
    name: String,
}

impl Greeting {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_default(),
        }
    }

    pub fn text(&self) -> String {
        format!("Hello {}!", self.name)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        Paragraph::new(Line::styled(self.text(), style))
    }
}

#[cfg(test)]
mod tests {
    use super::Greeting;

    #[test]
    fn interpolates_name() {
        assert_eq!(Greeting::new(Some("World".into())).text(), "Hello World!");
    }

    #[test]
    fn missing_name_renders_empty_slot() {
        assert_eq!(Greeting::new(None).text(), "Hello !");
    }
}
