use message::BufferMessage;
use model::{viewport::ViewPort, BufferResult, TextBuffer};
use ratatui::{prelude::Rect, Frame};

pub mod message;
pub mod model;
mod update;
mod view;

pub use view::{get_cursor_position, get_rendered_line_count};

pub fn update(
    viewport: &mut ViewPort,
    buffer: &mut TextBuffer,
    messages: Vec<&BufferMessage>,
) -> Vec<BufferResult> {
    update::update(viewport, buffer, messages)
}

pub fn view(viewport: &ViewPort, buffer: &TextBuffer, frame: &mut Frame, rect: Rect) {
    view::view(viewport, buffer, frame, rect)
}
