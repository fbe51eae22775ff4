pub mod viewport;

#[derive(Debug)]
pub struct TextBuffer {
    pub cursor: Cursor,
    pub lines: Vec<BufferLine>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            lines: vec![BufferLine::default()],
        }
    }
}

impl TextBuffer {
    /// Creates a buffer from raw file lines. An empty document is a single empty line.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let mut lines: Vec<_> = lines.into_iter().map(BufferLine::from).collect();
        if lines.is_empty() {
            lines.push(BufferLine::default());
        }

        Self {
            cursor: Cursor::default(),
            lines,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|line| line.content.as_str())
    }

    pub fn line_length(&self, index: usize) -> Option<usize> {
        self.lines.get(index).map(BufferLine::len)
    }

    pub fn contents(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.content.as_str())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub horizontal_index: usize,
    pub vertical_index: usize,
}

impl Cursor {
    pub fn new(horizontal_index: usize, vertical_index: usize) -> Self {
        Self {
            horizontal_index,
            vertical_index,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BufferLine {
    pub content: String,
}

impl BufferLine {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the char at `index`, or the content length when `index` is past the end.
    pub fn byte_index(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map_or(self.content.len(), |(byte_index, _)| byte_index)
    }
}

impl From<String> for BufferLine {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl From<&str> for BufferLine {
    fn from(content: &str) -> Self {
        Self {
            content: content.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferChanged {
    Content(usize, String, String),
    LineAdded(usize, String),
    LineRemoved(usize, String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferResult {
    Changes(Vec<BufferChanged>),
}

#[cfg(test)]
mod tests {
    use super::{BufferLine, TextBuffer};

    #[test]
    fn from_lines_empty_creates_single_line() {
        let buffer = TextBuffer::from_lines(Vec::new());

        assert_eq!(1, buffer.line_count());
        assert_eq!(Some(""), buffer.line(0));
    }

    #[test]
    fn line_length_counts_chars() {
        let buffer = TextBuffer::from_lines(vec!["añb".to_string()]);

        assert_eq!(Some(3), buffer.line_length(0));
        assert_eq!(None, buffer.line_length(1));
    }

    #[test]
    fn byte_index_multibyte() {
        let line = BufferLine::from("añb");

        assert_eq!(0, line.byte_index(0));
        assert_eq!(1, line.byte_index(1));
        assert_eq!(3, line.byte_index(2));
        assert_eq!(4, line.byte_index(3));
        assert_eq!(4, line.byte_index(10));
    }
}
