use crate::{
    message::CursorDirection,
    model::{viewport::ViewPort, TextBuffer},
};

/// Scrolls after a single vertical cursor step. `moved` is false when the cursor
/// was already on the first or last line, in which case the viewport may still
/// scroll one line to reveal content beyond the cursor.
pub fn update_by_vertical_move(
    viewport: &mut ViewPort,
    buffer: &TextBuffer,
    direction: &CursorDirection,
    moved: bool,
) {
    let height = viewport.get_visible_height();
    let cursor_index = buffer.cursor.vertical_index;

    match direction {
        CursorDirection::Up => {
            if moved {
                if cursor_index < viewport.vertical_index {
                    viewport.vertical_index = cursor_index;
                }
            } else if viewport.vertical_index > 0 {
                viewport.vertical_index -= 1;
            }
        }
        CursorDirection::Down => {
            if moved {
                if cursor_index >= viewport.vertical_index + height {
                    viewport.vertical_index = cursor_index + 1 - height;
                }
            } else if viewport.vertical_index < viewport.get_max_vertical_index(buffer.lines.len())
            {
                viewport.vertical_index += 1;
            }
        }
        CursorDirection::Left | CursorDirection::Right => update_by_cursor(viewport, buffer),
    }
}

/// Brings the cursor row back into view and keeps the viewport from running past
/// the end of the document.
pub fn update_by_cursor(viewport: &mut ViewPort, buffer: &TextBuffer) {
    if buffer.cursor.vertical_index >= buffer.lines.len() {
        return;
    }

    let height = viewport.get_visible_height();
    let cursor_index = buffer.cursor.vertical_index;

    if viewport.vertical_index > cursor_index {
        viewport.vertical_index = cursor_index;
    } else if viewport.vertical_index + height <= cursor_index {
        viewport.vertical_index = cursor_index + 1 - height;
    }

    let max_index = viewport.get_max_vertical_index(buffer.lines.len());
    if viewport.vertical_index > max_index {
        viewport.vertical_index = max_index;
    }
}

#[cfg(test)]
mod tests {
    use super::{update_by_cursor, update_by_vertical_move};
    use crate::{
        message::CursorDirection,
        model::{viewport::ViewPort, Cursor, TextBuffer},
    };

    fn buffer(line_count: usize, cursor: Cursor) -> TextBuffer {
        let lines = (0..line_count).map(|i| format!("line {}", i)).collect();
        let mut buffer = TextBuffer::from_lines(lines);
        buffer.cursor = cursor;
        buffer
    }

    fn viewport(height: u16, vertical_index: usize) -> ViewPort {
        ViewPort {
            height,
            vertical_index,
            width: 80,
        }
    }

    #[test]
    fn update_by_cursor_ignores_out_of_bounds_cursor() {
        let mut viewport = viewport(5, 3);
        let buffer = buffer(10, Cursor::new(0, 20));

        update_by_cursor(&mut viewport, &buffer);
        assert_eq!(3, viewport.vertical_index);
    }

    #[test]
    fn update_by_cursor_scrolls_up_to_cursor() {
        let mut viewport = viewport(5, 6);
        let buffer = buffer(20, Cursor::new(0, 2));

        update_by_cursor(&mut viewport, &buffer);
        assert_eq!(2, viewport.vertical_index);
    }

    #[test]
    fn update_by_cursor_scrolls_down_to_cursor() {
        let mut viewport = viewport(5, 0);
        let buffer = buffer(20, Cursor::new(0, 9));

        update_by_cursor(&mut viewport, &buffer);
        assert_eq!(5, viewport.vertical_index);
    }

    #[test]
    fn update_by_cursor_clamps_after_document_shrinks() {
        let mut viewport = viewport(5, 8);
        let buffer = buffer(10, Cursor::new(0, 9));

        update_by_cursor(&mut viewport, &buffer);
        assert_eq!(5, viewport.vertical_index);
    }

    #[test]
    fn down_scrolls_when_cursor_leaves_viewport() {
        let mut viewport = viewport(5, 0);
        let buffer = buffer(20, Cursor::new(0, 5));

        update_by_vertical_move(&mut viewport, &buffer, &CursorDirection::Down, true);
        assert_eq!(1, viewport.vertical_index);
    }

    #[test]
    fn down_on_last_line_scrolls_until_document_end() {
        let mut viewport = viewport(5, 4);
        let buffer = buffer(10, Cursor::new(0, 9));

        update_by_vertical_move(&mut viewport, &buffer, &CursorDirection::Down, false);
        assert_eq!(5, viewport.vertical_index);

        update_by_vertical_move(&mut viewport, &buffer, &CursorDirection::Down, false);
        assert_eq!(5, viewport.vertical_index);
    }

    #[test]
    fn up_scrolls_when_cursor_leaves_viewport() {
        let mut viewport = viewport(5, 4);
        let buffer = buffer(20, Cursor::new(0, 3));

        update_by_vertical_move(&mut viewport, &buffer, &CursorDirection::Up, true);
        assert_eq!(3, viewport.vertical_index);
    }

    #[test]
    fn up_on_first_line_still_scrolls_viewport() {
        let mut viewport = viewport(5, 2);
        let buffer = buffer(20, Cursor::new(0, 0));

        update_by_vertical_move(&mut viewport, &buffer, &CursorDirection::Up, false);
        assert_eq!(1, viewport.vertical_index);

        viewport.vertical_index = 0;
        update_by_vertical_move(&mut viewport, &buffer, &CursorDirection::Up, false);
        assert_eq!(0, viewport.vertical_index);
    }
}
