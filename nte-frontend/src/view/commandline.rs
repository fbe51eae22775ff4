use nte_keymap::{message::KeymapMessage, MessageResolver};
use ratatui::{
    prelude::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::model::Model;

/// Draws the exit prompt on the row right below the last rendered content line.
pub fn view(model: &Model, resolver: &MessageResolver, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }

    let rendered = nte_buffer::get_rendered_line_count(&model.viewport, &model.buffer);
    let row = usize::from(model.layout.buffer.y) + rendered;
    let row = u16::try_from(row)
        .unwrap_or(u16::MAX)
        .min(area.bottom().saturating_sub(1));

    let rect = Rect::new(area.x, row, area.width, 1);
    let prompt = Span::styled(get_prompt(resolver), Style::default().fg(Color::Red));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(prompt), rect);
}

fn get_prompt(resolver: &MessageResolver) -> String {
    match resolver.get_keys(&KeymapMessage::ConfirmQuit).first() {
        Some(key) => format!("Press {} again to confirm exit", key),
        None => "Press the quit key again to confirm exit".to_string(),
    }
}
