use crate::{message::CursorDirection, model::TextBuffer};

/// Moves the cursor one step and returns whether the position changed.
pub fn update_by_direction(buffer: &mut TextBuffer, direction: &CursorDirection) -> bool {
    validate_cursor_position(buffer);

    let cursor = &mut buffer.cursor;
    let line_length = buffer.lines[cursor.vertical_index].len();
    let max_vertical_index = buffer.lines.len() - 1;

    match direction {
        CursorDirection::Down => {
            if cursor.vertical_index >= max_vertical_index {
                return false;
            }

            cursor.vertical_index += 1;
            cursor.horizontal_index = cursor
                .horizontal_index
                .min(buffer.lines[cursor.vertical_index].len());
        }
        CursorDirection::Left => {
            if cursor.horizontal_index > 0 {
                cursor.horizontal_index -= 1;
            } else if cursor.vertical_index > 0 {
                cursor.vertical_index -= 1;
                cursor.horizontal_index = buffer.lines[cursor.vertical_index].len();
            } else {
                return false;
            }
        }
        CursorDirection::Right => {
            if cursor.horizontal_index < line_length {
                cursor.horizontal_index += 1;
            } else if cursor.vertical_index < max_vertical_index {
                cursor.vertical_index += 1;
                cursor.horizontal_index = 0;
            } else {
                return false;
            }
        }
        CursorDirection::Up => {
            if cursor.vertical_index == 0 {
                return false;
            }

            cursor.vertical_index -= 1;
            cursor.horizontal_index = cursor
                .horizontal_index
                .min(buffer.lines[cursor.vertical_index].len());
        }
    }

    true
}

/// Pulls an out of bounds cursor back onto the nearest valid position.
pub fn validate_cursor_position(buffer: &mut TextBuffer) {
    if buffer.lines.is_empty() {
        buffer.lines.push(Default::default());
    }

    let cursor = &mut buffer.cursor;
    let max_vertical_index = buffer.lines.len() - 1;
    if cursor.vertical_index > max_vertical_index {
        cursor.vertical_index = max_vertical_index;
    }

    let line_length = buffer.lines[cursor.vertical_index].len();
    if cursor.horizontal_index > line_length {
        cursor.horizontal_index = line_length;
    }
}

#[cfg(test)]
mod tests {
    use super::{update_by_direction, validate_cursor_position};
    use crate::{
        message::CursorDirection,
        model::{Cursor, TextBuffer},
    };

    fn buffer(lines: &[&str], cursor: Cursor) -> TextBuffer {
        let mut buffer = TextBuffer::from_lines(lines.iter().map(|l| l.to_string()).collect());
        buffer.cursor = cursor;
        buffer
    }

    #[test]
    fn right_at_line_end_wraps_to_next_line() {
        let mut buffer = buffer(&["ab", "cd"], Cursor::new(2, 0));

        assert!(update_by_direction(&mut buffer, &CursorDirection::Right));
        assert_eq!(Cursor::new(0, 1), buffer.cursor);
    }

    #[test]
    fn right_at_document_end_is_noop() {
        let mut buffer = buffer(&["ab", "cd"], Cursor::new(2, 1));

        assert!(!update_by_direction(&mut buffer, &CursorDirection::Right));
        assert_eq!(Cursor::new(2, 1), buffer.cursor);
    }

    #[test]
    fn left_at_line_start_wraps_to_previous_line_end() {
        let mut buffer = buffer(&["abc", "d"], Cursor::new(0, 1));

        assert!(update_by_direction(&mut buffer, &CursorDirection::Left));
        assert_eq!(Cursor::new(3, 0), buffer.cursor);
    }

    #[test]
    fn left_at_document_start_is_noop() {
        let mut buffer = buffer(&["abc"], Cursor::new(0, 0));

        assert!(!update_by_direction(&mut buffer, &CursorDirection::Left));
        assert_eq!(Cursor::new(0, 0), buffer.cursor);
    }

    #[test]
    fn down_clamps_column_to_shorter_line() {
        let mut buffer = buffer(&["abcdef", "ab"], Cursor::new(5, 0));

        assert!(update_by_direction(&mut buffer, &CursorDirection::Down));
        assert_eq!(Cursor::new(2, 1), buffer.cursor);
    }

    #[test]
    fn up_clamps_column_to_shorter_line() {
        let mut buffer = buffer(&["", "abcdef"], Cursor::new(4, 1));

        assert!(update_by_direction(&mut buffer, &CursorDirection::Up));
        assert_eq!(Cursor::new(0, 0), buffer.cursor);
    }

    #[test]
    fn up_keeps_column_on_longer_line() {
        let mut buffer = buffer(&["abcdef", "abc"], Cursor::new(2, 1));

        assert!(update_by_direction(&mut buffer, &CursorDirection::Up));
        assert_eq!(Cursor::new(2, 0), buffer.cursor);
    }

    #[test]
    fn vertical_moves_at_document_bounds_are_noop() {
        let mut buffer = buffer(&["a", "b"], Cursor::new(0, 0));
        assert!(!update_by_direction(&mut buffer, &CursorDirection::Up));

        buffer.cursor = Cursor::new(1, 1);
        assert!(!update_by_direction(&mut buffer, &CursorDirection::Down));
        assert_eq!(Cursor::new(1, 1), buffer.cursor);
    }

    #[test]
    fn validate_cursor_position_clamps_row_and_column() {
        let mut buffer = buffer(&["abc", "d"], Cursor::new(10, 10));

        validate_cursor_position(&mut buffer);
        assert_eq!(Cursor::new(1, 1), buffer.cursor);
    }
}
