use crate::{
    message::BufferMessage,
    model::{viewport::ViewPort, BufferResult, TextBuffer},
};

mod cursor;
mod modification;
mod viewport;

pub fn update(
    viewport: &mut ViewPort,
    buffer: &mut TextBuffer,
    messages: Vec<&BufferMessage>,
) -> Vec<BufferResult> {
    messages
        .into_iter()
        .flat_map(|message| update_buffer(viewport, buffer, message))
        .collect()
}

fn update_buffer(
    viewport: &mut ViewPort,
    buffer: &mut TextBuffer,
    message: &BufferMessage,
) -> Vec<BufferResult> {
    tracing::trace!("handling buffer message: {:?}", message);

    match message {
        BufferMessage::Modification(modification) => {
            let changes = modification::update(buffer, modification);
            viewport::update_by_cursor(viewport, buffer);

            match changes {
                Some(changes) => vec![BufferResult::Changes(changes)],
                None => Vec::new(),
            }
        }
        BufferMessage::MoveCursor(direction) => {
            let moved = cursor::update_by_direction(buffer, direction);
            viewport::update_by_vertical_move(viewport, buffer, direction, moved);

            Vec::new()
        }
        BufferMessage::UpdateViewPortByCursor => {
            cursor::validate_cursor_position(buffer);
            viewport::update_by_cursor(viewport, buffer);

            Vec::new()
        }
    }
}
