use ratatui::layout::{Constraint, Layout, Rect};

/// Splits the screen into the `app` container and a one-row hint footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = 1.min(area.height);
    let container = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    (container, footer)
}

/// One row per view inside the container: greeting, editor, count, commentary.
pub fn view_rows(inner: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner)
}
