use crate::{
    message::TextModification,
    model::{BufferChanged, BufferLine, TextBuffer},
};

use super::cursor;

pub fn update(buffer: &mut TextBuffer, modification: &TextModification) -> Option<Vec<BufferChanged>> {
    cursor::validate_cursor_position(buffer);

    match modification {
        TextModification::DeleteCharBeforeCursor => delete_char_before_cursor(buffer),
        TextModification::Insert(c) => {
            let cursor = &mut buffer.cursor;
            let line = &mut buffer.lines[cursor.vertical_index];

            let previous = line.content.clone();
            let index = line.byte_index(cursor.horizontal_index);
            line.content.insert(index, *c);
            cursor.horizontal_index += 1;

            Some(vec![BufferChanged::Content(
                cursor.vertical_index,
                previous,
                line.content.clone(),
            )])
        }
        TextModification::InsertLineBreak => {
            let cursor = &mut buffer.cursor;
            let line = &mut buffer.lines[cursor.vertical_index];

            let index = line.byte_index(cursor.horizontal_index);
            let new = line.content.split_off(index);

            let mut changes = Vec::new();
            if !new.is_empty() {
                let mut previous = line.content.clone();
                previous.push_str(&new);

                changes.push(BufferChanged::Content(
                    cursor.vertical_index,
                    previous,
                    line.content.clone(),
                ));
            }

            let vertical = cursor.vertical_index + 1;
            cursor.vertical_index = vertical;
            cursor.horizontal_index = 0;

            buffer.lines.insert(vertical, BufferLine::from(new.clone()));
            changes.push(BufferChanged::LineAdded(vertical, new));

            Some(changes)
        }
    }
}

fn delete_char_before_cursor(buffer: &mut TextBuffer) -> Option<Vec<BufferChanged>> {
    let cursor = &mut buffer.cursor;
    if cursor.horizontal_index > 0 {
        let line = &mut buffer.lines[cursor.vertical_index];

        let previous = line.content.clone();
        let index = line.byte_index(cursor.horizontal_index - 1);
        line.content.remove(index);
        cursor.horizontal_index -= 1;

        Some(vec![BufferChanged::Content(
            cursor.vertical_index,
            previous,
            line.content.clone(),
        )])
    } else if cursor.vertical_index > 0 {
        let removed = buffer.lines.remove(cursor.vertical_index);
        let removed_index = cursor.vertical_index;

        cursor.vertical_index -= 1;

        let line = &mut buffer.lines[cursor.vertical_index];
        let previous = line.content.clone();
        cursor.horizontal_index = line.len();
        line.content.push_str(&removed.content);

        let mut changes = vec![BufferChanged::LineRemoved(removed_index, removed.content)];
        if line.content != previous {
            changes.push(BufferChanged::Content(
                cursor.vertical_index,
                previous,
                line.content.clone(),
            ));
        }

        Some(changes)
    } else {
        None
    }
}
