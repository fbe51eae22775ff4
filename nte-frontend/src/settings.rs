use std::path::PathBuf;

use nte_keymap::map::KeyMap;

#[derive(Debug)]
pub struct Settings {
    pub keymap: KeyMap,
    pub path: PathBuf,
    pub statusline_height: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keymap: KeyMap::default(),
            path: PathBuf::new(),
            statusline_height: 1,
        }
    }
}
