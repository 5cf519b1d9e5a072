use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::{layout_regions, view_rows};
use crate::ui::theme::{ACCENT, CONTAINER_BORDER};
use crate::ui::views::{Greeting, NameCount, NameCountCommentary, NameEditor};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Title of the container every view is mounted into.
pub const MOUNT_ID: &str = "app";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (container, footer) = layout_regions(frame.area());

    let block = Block::default()
        .title(Span::styled(MOUNT_ID, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CONTAINER_BORDER));
    let inner = block.inner(container);
    frame.render_widget(block, container);

    let [greeting, editor, count, commentary] = view_rows(inner);

    frame.render_widget(Greeting::new(app.name()).widget(), greeting);

    let name_editor = NameEditor::new(app.editor());
    frame.render_widget(name_editor.widget(), editor);
    if editor.width > 0 && editor.height > 0 {
        let x = editor.x + name_editor.cursor_offset().min(editor.width.saturating_sub(1));
        frame.set_cursor_position((x, editor.y));
    }

    frame.render_widget(NameCount::new(app.count()).widget(), count);
    frame.render_widget(NameCountCommentary::new(app.comment()).widget(), commentary);

    frame.render_widget(Footer::new(app.edit_trigger()).widget(footer), footer);
}
