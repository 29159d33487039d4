use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Key;

/// Waits up to `timeout` for a key press.
///
/// Returns `Ok(None)` when nothing was pressed, or when the event was not a
/// character key (resize, mouse, arrows, key releases).
pub fn poll_key_timeout(timeout: Duration) -> io::Result<Option<Key>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            Ok(translate_key(key_event))
        }
        _ => Ok(None),
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Interrupt),
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Key::Char(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_plain_and_shifted_chars() {
        let plain = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(translate_key(plain), Some(Key::Char('e')));

        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(translate_key(shifted), Some(Key::Char('Q')));
    }

    #[test]
    fn test_translate_ctrl_c_is_interrupt() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(ctrl_c), Some(Key::Interrupt));
    }

    #[test]
    fn test_translate_ignores_other_keys() {
        assert_eq!(translate_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)), None);
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
        let mut release = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate_key(release), None);
    }
}
