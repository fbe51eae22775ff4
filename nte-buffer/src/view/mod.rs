use ratatui::{prelude::Rect, text::Line, widgets::Paragraph, Frame};

use crate::model::{viewport::ViewPort, TextBuffer};

mod line;

pub fn view(viewport: &ViewPort, buffer: &TextBuffer, frame: &mut Frame, rect: Rect) {
    let lines: Vec<_> = get_rendered_lines(viewport, buffer)
        .map(|content| Line::raw(line::to_cells(content)))
        .collect();

    frame.render_widget(Paragraph::new(lines), rect);

    if let Some(position) = get_cursor_position(viewport, buffer, rect) {
        frame.set_cursor_position(position);
    }
}

pub fn get_rendered_line_count(viewport: &ViewPort, buffer: &TextBuffer) -> usize {
    get_rendered_lines(viewport, buffer).count()
}

fn get_rendered_lines<'a>(
    viewport: &ViewPort,
    buffer: &'a TextBuffer,
) -> impl Iterator<Item = &'a str> {
    buffer
        .contents()
        .skip(viewport.vertical_index)
        .take(usize::from(viewport.height))
}

/// Screen position of the cursor, `None` while the cursor row is scrolled out of view.
pub fn get_cursor_position(
    viewport: &ViewPort,
    buffer: &TextBuffer,
    rect: Rect,
) -> Option<(u16, u16)> {
    if rect.width == 0 || rect.height == 0 {
        return None;
    }

    let cursor = &buffer.cursor;
    let row = cursor.vertical_index.checked_sub(viewport.vertical_index)?;
    if row >= usize::from(rect.height) {
        return None;
    }

    let offset = buffer
        .line(cursor.vertical_index)
        .map(|content| line::get_cell_offset(content, cursor.horizontal_index))
        .unwrap_or(0);

    // NOTE: no horizontal scrolling, overlong lines pin the cursor to the last column
    let column = offset.min(usize::from(rect.width.saturating_sub(1)));

    Some((
        rect.x + u16::try_from(column).ok()?,
        rect.y + u16::try_from(row).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use ratatui::prelude::Rect;

    use super::{get_cursor_position, get_rendered_line_count};
    use crate::model::{viewport::ViewPort, Cursor, TextBuffer};

    fn buffer(line_count: usize, cursor: Cursor) -> TextBuffer {
        let lines = (0..line_count).map(|_| "abcdefghij".to_string()).collect();
        let mut buffer = TextBuffer::from_lines(lines);
        buffer.cursor = cursor;
        buffer
    }

    #[test]
    fn cursor_position_is_relative_to_viewport() {
        let viewport = ViewPort {
            height: 5,
            vertical_index: 3,
            width: 20,
        };
        let buffer = buffer(10, Cursor::new(4, 5));

        let position = get_cursor_position(&viewport, &buffer, Rect::new(0, 1, 20, 5));
        assert_eq!(Some((4, 3)), position);
    }

    #[test]
    fn cursor_position_clamps_to_last_column() {
        let viewport = ViewPort::new(5, 4);
        let buffer = buffer(1, Cursor::new(9, 0));

        let position = get_cursor_position(&viewport, &buffer, Rect::new(0, 1, 4, 5));
        assert_eq!(Some((3, 1)), position);
    }

    #[test]
    fn cursor_position_hidden_when_scrolled_out() {
        let viewport = ViewPort {
            height: 3,
            vertical_index: 2,
            width: 20,
        };
        let buffer = buffer(10, Cursor::new(0, 0));

        let position = get_cursor_position(&viewport, &buffer, Rect::new(0, 1, 20, 3));
        assert_eq!(None, position);
    }

    #[test]
    fn cursor_position_skips_wide_char_cells() {
        let viewport = ViewPort::new(5, 20);
        let mut buffer = TextBuffer::from_lines(vec!["日本x".to_string()]);
        buffer.cursor = Cursor::new(2, 0);

        let position = get_cursor_position(&viewport, &buffer, Rect::new(0, 1, 20, 5));
        assert_eq!(Some((4, 1)), position);
    }

    #[test]
    fn cursor_position_after_tab() {
        let viewport = ViewPort::new(5, 20);
        let mut buffer = TextBuffer::from_lines(vec!["\tab".to_string()]);
        buffer.cursor = Cursor::new(1, 0);

        let position = get_cursor_position(&viewport, &buffer, Rect::new(0, 1, 20, 5));
        assert_eq!(Some((1, 1)), position);
    }

    #[test]
    fn rendered_line_count_short_document() {
        let viewport = ViewPort::new(10, 20);
        let buffer = buffer(3, Cursor::default());

        assert_eq!(3, get_rendered_line_count(&viewport, &buffer));
    }

    #[test]
    fn rendered_line_count_scrolled_document() {
        let viewport = ViewPort {
            height: 4,
            vertical_index: 8,
            width: 20,
        };
        let buffer = buffer(10, Cursor::default());

        assert_eq!(2, get_rendered_line_count(&viewport, &buffer));
    }
}
