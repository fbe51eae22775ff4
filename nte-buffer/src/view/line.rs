use unicode_width::UnicodeWidthChar;

/// Replaces control chars with a blank so every char occupies its own display width.
pub fn to_cells(content: &str) -> String {
    content.chars().map(to_cell).collect()
}

/// Screen columns taken by the first `char_count` chars of `content` once rendered.
pub fn get_cell_offset(content: &str, char_count: usize) -> usize {
    content
        .chars()
        .take(char_count)
        .map(|c| UnicodeWidthChar::width(to_cell(c)).unwrap_or(0))
        .sum()
}

fn to_cell(c: char) -> char {
    if c.is_control() {
        ' '
    } else {
        c
    }
}
