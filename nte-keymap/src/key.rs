use std::{collections::VecDeque, fmt::Display, hash::Hash};

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(key: KeyCode, modifiers: Vec<KeyModifier>) -> Self {
        Self {
            code: key,
            modifiers,
        }
    }

    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        let regex = regex::Regex::new(r"[^-<>]+|^-$|--").expect("Failed to compile regex");
        let mut codes = regex
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect::<VecDeque<_>>();

        let mut modifiers = Vec::new();
        let mut last = codes.pop_back()?;
        if last == "--" {
            last = "-";
        }

        if last.chars().count() == 1 && last.chars().last()?.is_ascii_uppercase() {
            modifiers.push(KeyModifier::Shift);
        }

        for modifier in codes {
            match modifier.to_ascii_uppercase().as_str() {
                "A" => modifiers.push(KeyModifier::Alt),
                "C" => modifiers.push(KeyModifier::Ctrl),
                "D" => modifiers.push(KeyModifier::Command),
                "S" => modifiers.push(KeyModifier::Shift),
                _ => (),
            }
        }

        KeyCode::from_keycode_string(last).map(|code| Self { code, modifiers })
    }

    /// The char this key types into the buffer, if it is a plain or shifted character.
    /// Ctrl and Alt held together count as AltGr and still type characters.
    pub fn to_printable(&self) -> Option<char> {
        let shifted = self.modifiers.contains(&KeyModifier::Shift);
        let ctrl = self.modifiers.contains(&KeyModifier::Ctrl);
        let alt = self.modifiers.contains(&KeyModifier::Alt);
        if self.modifiers.contains(&KeyModifier::Command) || ctrl != alt {
            return None;
        }

        let altgr = ctrl && alt;
        match self.code {
            KeyCode::Char(c) if c.is_control() => None,
            KeyCode::Char(c) if shifted => c.to_uppercase().next(),
            KeyCode::Char(c) => Some(c),
            KeyCode::Space if !altgr => Some(' '),
            _ => None,
        }
    }
}

impl Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        if self.code != other.code {
            return false;
        }

        if self.modifiers.len() != other.modifiers.len() {
            return false;
        }

        for modifier in &self.modifiers {
            if !other.modifiers.contains(modifier) {
                return false;
            }
        }

        true
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();

        let content = match self.code {
            KeyCode::Char('<') => get_key_string(self.code.to_string(), modifiers, true),
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            _ => get_key_string(self.code.to_string(), modifiers, true),
        };

        write!(f, "{}", content)
    }
}

fn get_key_string(code: String, modifiers: Vec<KeyModifier>, force_ltgt: bool) -> String {
    if modifiers.is_empty() && !force_ltgt {
        return code;
    }

    let mut result = String::from("<");
    for modifier in modifiers {
        match modifier {
            KeyModifier::Alt => result.push_str("A-"),
            KeyModifier::Command => result.push_str("D-"),
            KeyModifier::Ctrl => result.push_str("C-"),
            KeyModifier::Shift => result.push_str("S-"),
        };
    }

    result.push_str(&code);
    result.push('>');

    result
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backspace,
    Char(char),
    Delete,
    Down,
    End,
    Enter,
    Esc,
    Home,
    Left,
    PageDown,
    PageUp,
    Right,
    Space,
    Tab,
    Up,
}

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        match keycode {
            "bslash" => Some(KeyCode::Char('\\')),
            "bs" => Some(KeyCode::Backspace),
            "bar" => Some(KeyCode::Char('|')),
            "del" => Some(KeyCode::Delete),
            "down" => Some(KeyCode::Down),
            "end" => Some(KeyCode::End),
            "cr" => Some(KeyCode::Enter),
            "esc" => Some(KeyCode::Esc),
            "home" => Some(KeyCode::Home),
            "left" => Some(KeyCode::Left),
            "lt" => Some(KeyCode::Char('<')),
            "pagedown" => Some(KeyCode::PageDown),
            "pageup" => Some(KeyCode::PageUp),
            "right" => Some(KeyCode::Right),
            "space" => Some(KeyCode::Space),
            "tab" => Some(KeyCode::Tab),
            "up" => Some(KeyCode::Up),
            code => {
                if code.chars().count() == 1 {
                    code.chars().next().map(Self::from_char)
                } else {
                    None
                }
            }
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        match c {
            ' ' => KeyCode::Space,
            passed => KeyCode::Char(passed.to_ascii_lowercase()),
        }
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyCode::Backspace => write!(f, "bs"),
            KeyCode::Char('<') => write!(f, "lt"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Delete => write!(f, "del"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::End => write!(f, "end"),
            KeyCode::Enter => write!(f, "cr"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::PageDown => write!(f, "pagedown"),
            KeyCode::PageUp => write!(f, "pageup"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Space => write!(f, "space"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Up => write!(f, "up"),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Command,
    Ctrl,
    Shift,
}
