#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferMessage {
    Modification(TextModification),
    MoveCursor(CursorDirection),
    UpdateViewPortByCursor,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    Insert(char),
    InsertLineBreak,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Down,
    Left,
    Right,
    Up,
}
