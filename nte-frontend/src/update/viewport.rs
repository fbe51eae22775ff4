use nte_buffer::message::BufferMessage;
use ratatui::prelude::Rect;

use crate::{layout::AppLayout, model::Model};

use super::buffer;

pub fn set_size(model: &mut Model, rect: Rect) {
    model.layout = AppLayout::new(rect, model.settings.statusline_height);
    model.viewport.height = model.layout.buffer.height;
    model.viewport.width = model.layout.buffer.width;

    buffer::update(model, &BufferMessage::UpdateViewPortByCursor);
}
