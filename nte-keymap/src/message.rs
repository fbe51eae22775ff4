use nte_buffer::message::BufferMessage;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    Buffer(BufferMessage),
    ConfirmQuit,
    Quit,
    Save,
}
