use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let path = get_path_content(model);
    let changes = get_changes_content(model);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(path.width() as u16),
            Constraint::Length(changes.width() as u16),
            Constraint::Min(0),
            Constraint::Length(position.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(path), layout[0]);
    frame.render_widget(Paragraph::new(changes), layout[1]);
    frame.render_widget(Paragraph::new(position), layout[3]);
}

fn get_path_content(model: &Model) -> Line<'static> {
    let content = format!("Editing: {}", model.settings.path.display());
    Line::from(Span::styled(content, Style::default().fg(Color::White)))
}

fn get_changes_content(model: &Model) -> Line<'static> {
    if model.modified {
        Line::from(Span::styled(" [+]", Style::default().fg(Color::Yellow)))
    } else {
        Line::default()
    }
}

fn get_position_content(model: &Model) -> Line<'static> {
    let cursor = &model.buffer.cursor;
    let content = format!(
        "{}:{} ",
        cursor.vertical_index + 1,
        cursor.horizontal_index + 1
    );

    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
}
