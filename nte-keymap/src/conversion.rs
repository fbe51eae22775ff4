use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::key::{Key, KeyCode, KeyModifier};

pub fn to_key(event: &KeyEvent) -> Option<Key> {
    let mut modifier: Vec<_> = event
        .modifiers
        .iter_names()
        .flat_map(|(s, _)| to_modifier(s))
        .collect();

    // NOTE: crossterm reports META/ALT and SUPER/HYPER separately
    modifier.sort();
    modifier.dedup();

    match event.code {
        event::KeyCode::Backspace => resolve(event.kind, KeyCode::Backspace, modifier),
        event::KeyCode::Enter => resolve(event.kind, KeyCode::Enter, modifier),
        event::KeyCode::Left => resolve(event.kind, KeyCode::Left, modifier),
        event::KeyCode::Right => resolve(event.kind, KeyCode::Right, modifier),
        event::KeyCode::Up => resolve(event.kind, KeyCode::Up, modifier),
        event::KeyCode::Down => resolve(event.kind, KeyCode::Down, modifier),
        event::KeyCode::Home => resolve(event.kind, KeyCode::Home, modifier),
        event::KeyCode::End => resolve(event.kind, KeyCode::End, modifier),
        event::KeyCode::PageUp => resolve(event.kind, KeyCode::PageUp, modifier),
        event::KeyCode::PageDown => resolve(event.kind, KeyCode::PageDown, modifier),
        event::KeyCode::Tab => resolve(event.kind, KeyCode::Tab, modifier),
        event::KeyCode::Delete => resolve(event.kind, KeyCode::Delete, modifier),
        event::KeyCode::Char(c) => {
            // NOTE: some terminals report upper case chars without the shift modifier
            if c.is_uppercase() && !modifier.contains(&KeyModifier::Shift) {
                modifier.push(KeyModifier::Shift);
            }

            resolve(event.kind, KeyCode::from_char(c), modifier)
        }
        event::KeyCode::Esc => resolve(event.kind, KeyCode::Esc, modifier),
        _ => None,
    }
}

fn resolve(kind: KeyEventKind, code: KeyCode, modifier: Vec<KeyModifier>) -> Option<Key> {
    if kind != KeyEventKind::Press {
        return None;
    }

    Some(Key::new(code, modifier))
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "HYPER" => Some(KeyModifier::Command),
        "META" => Some(KeyModifier::Alt),
        "SHIFT" => Some(KeyModifier::Shift),
        "SUPER" => Some(KeyModifier::Command),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{self, KeyEvent, KeyEventKind, KeyModifiers};

    use super::*;

    #[test]
    fn to_key_plain_char() {
        let event = KeyEvent::new(event::KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(Some(Key::new(KeyCode::Char('x'), vec![])), to_key(&event));
    }

    #[test]
    fn to_key_upper_char_without_shift() {
        let event = KeyEvent::new(event::KeyCode::Char('X'), KeyModifiers::NONE);
        let key = to_key(&event).unwrap();

        assert_eq!(Key::new(KeyCode::Char('x'), vec![KeyModifier::Shift]), key);
        assert_eq!(Some('X'), key.to_printable());
    }

    #[test]
    fn to_key_upper_char_with_shift() {
        let event = KeyEvent::new(event::KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(
            Some(Key::new(KeyCode::Char('x'), vec![KeyModifier::Shift])),
            to_key(&event)
        );
    }

    #[test]
    fn to_key_space_is_named_key() {
        let event = KeyEvent::new(event::KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(Some(Key::new(KeyCode::Space, vec![])), to_key(&event));
    }

    #[test]
    fn to_key_ctrl_char() {
        let event = KeyEvent::new(event::KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            Some(Key::new(KeyCode::Char('s'), vec![KeyModifier::Ctrl])),
            to_key(&event)
        );
    }

    #[test]
    fn to_key_collapses_duplicate_modifiers() {
        let event = KeyEvent::new(
            event::KeyCode::Char('x'),
            KeyModifiers::ALT | KeyModifiers::META | KeyModifiers::SUPER | KeyModifiers::HYPER,
        );
        let key = to_key(&event).unwrap();

        assert_eq!(vec![KeyModifier::Alt, KeyModifier::Command], key.modifiers);
        assert_ne!(
            Key::new(KeyCode::Char('x'), vec![KeyModifier::Alt, KeyModifier::Ctrl]),
            key
        );
    }

    #[test]
    fn to_key_ignores_release() {
        let event = KeyEvent::new_with_kind(
            event::KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(None, to_key(&event));
    }

    #[test]
    fn to_key_ignores_unmapped_codes() {
        let event = KeyEvent::new(event::KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(None, to_key(&event));
    }
}
