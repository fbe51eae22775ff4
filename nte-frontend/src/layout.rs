use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug, Default)]
pub struct AppLayout {
    pub buffer: Rect,
    pub statusline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect, statusline_height: u16) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(statusline_height), Constraint::Min(0)])
            .split(rect);

        Self {
            buffer: main[1],
            statusline: main[0],
        }
    }
}
