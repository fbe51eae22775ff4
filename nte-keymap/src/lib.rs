use key::Key;
use map::KeyMap;
use message::KeymapMessage;
use nte_buffer::message::{BufferMessage, TextModification};

pub mod conversion;
pub mod key;
pub mod map;
pub mod message;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyMapError {
    #[error("Keycode {0} is invalid.")]
    KeycodeInvalid(String),
}

#[derive(Debug, Default)]
pub struct MessageResolver {
    map: KeyMap,
}

impl MessageResolver {
    pub fn new(map: KeyMap) -> Self {
        Self { map }
    }

    /// Bound commands win over typed characters, so a mapped char never reaches the buffer.
    pub fn resolve(&self, key: &Key) -> Option<KeymapMessage> {
        if let Some(message) = self.map.get(key) {
            return Some(message.clone());
        }

        key.to_printable().map(|c| {
            KeymapMessage::Buffer(BufferMessage::Modification(TextModification::Insert(c)))
        })
    }

    pub fn get_keys(&self, message: &KeymapMessage) -> Vec<&Key> {
        self.map.get_keys(message)
    }
}
