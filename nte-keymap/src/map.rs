use std::collections::HashMap;

use nte_buffer::message::{BufferMessage, CursorDirection, TextModification};

use crate::{key::Key, message::KeymapMessage, KeyMapError};

#[derive(Clone, Debug)]
pub struct KeyMap {
    mappings: HashMap<Key, KeymapMessage>,
}

impl KeyMap {
    pub fn get(&self, key: &Key) -> Option<&KeymapMessage> {
        self.mappings.get(key)
    }

    /// All keys bound to `message`, sorted by their keycode string.
    pub fn get_keys(&self, message: &KeymapMessage) -> Vec<&Key> {
        let mut keys: Vec<_> = self
            .mappings
            .iter()
            .filter(|(_, msg)| *msg == message)
            .map(|(key, _)| key)
            .collect();

        keys.sort_by_key(|key| key.to_string());
        keys
    }

    pub fn add_mapping(&mut self, keycode: &str, message: KeymapMessage) -> Result<(), KeyMapError> {
        let key = match Key::from_keycode_string(keycode) {
            Some(it) => it,
            None => return Err(KeyMapError::KeycodeInvalid(keycode.to_owned())),
        };

        if let Some(replaced) = self.mappings.insert(key, message) {
            tracing::debug!("replaced mapping for {}: {:?}", keycode, replaced);
        }

        Ok(())
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = KeyMap {
            mappings: HashMap::new(),
        };

        let mappings = vec![
            ("<C-s>", KeymapMessage::Save),
            ("<C-q>", KeymapMessage::Quit),
            ("<esc>", KeymapMessage::ConfirmQuit),
            ("<cr>", modification(TextModification::InsertLineBreak)),
            ("<C-j>", modification(TextModification::InsertLineBreak)),
            ("<C-m>", modification(TextModification::InsertLineBreak)),
            ("<tab>", modification(TextModification::Insert('\t'))),
            ("<space>", modification(TextModification::Insert(' '))),
            ("<bs>", modification(TextModification::DeleteCharBeforeCursor)),
            ("<C-h>", modification(TextModification::DeleteCharBeforeCursor)),
            ("<left>", motion(CursorDirection::Left)),
            ("<right>", motion(CursorDirection::Right)),
            ("<up>", motion(CursorDirection::Up)),
            ("<down>", motion(CursorDirection::Down)),
        ];

        for (keycode, message) in mappings {
            if let Err(error) = map.add_mapping(keycode, message) {
                tracing::error!("adding default mapping failed: {}", error);
            }
        }

        map
    }
}

fn modification(modification: TextModification) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::Modification(modification))
}

fn motion(direction: CursorDirection) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::MoveCursor(direction))
}
