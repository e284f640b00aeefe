//! Keyboard input handling
//!
//! A headless session replays key events from a [`KeyScript`]. Keys are
//! named DOM style ("ArrowUp", "w", "Escape").

use anyhow::{anyhow, bail, Context, Result};
use game_core::{KeyCode, KeyboardState};

/// What happens to a key on its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press and release within the frame
    Tap,
    Down,
    Up,
}

/// A scripted key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedKey {
    pub frame: u64,
    pub key: KeyCode,
    pub action: KeyAction,
}

impl std::str::FromStr for ScriptedKey {
    type Err = anyhow::Error;

    /// Parse `FRAME:KEY[:down|up]`, e.g. `120:Space` or `0:w:down`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let (Some(frame), Some(name)) = (parts.next(), parts.next()) else {
            return Err(anyhow!("expected FRAME:KEY[:down|up], got {s:?}"));
        };
        let frame = frame
            .trim()
            .parse()
            .with_context(|| format!("bad frame number in {s:?}"))?;
        let Some(key) = KeyCode::from_key_name(name) else {
            bail!("unknown key {name:?}");
        };
        let action = match parts.next() {
            None | Some("tap") => KeyAction::Tap,
            Some("down") => KeyAction::Down,
            Some("up") => KeyAction::Up,
            Some(other) => bail!("unknown key action {other:?} in {s:?}"),
        };
        Ok(Self { frame, key, action })
    }
}

/// Key events to replay, ordered by frame
#[derive(Debug, Clone, Default)]
pub struct KeyScript {
    events: Vec<ScriptedKey>,
    next: usize,
}

impl KeyScript {
    pub fn new(mut events: Vec<ScriptedKey>) -> Self {
        events.sort_by_key(|event| event.frame);
        Self { events, next: 0 }
    }

    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let events = entries
            .iter()
            .map(|entry| entry.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(events))
    }

    /// Apply every event scheduled for `frame`
    pub fn apply(&mut self, frame: u64, keys: &mut KeyboardState) -> usize {
        let mut applied = 0;
        while let Some(event) = self.events.get(self.next) {
            if event.frame > frame {
                break;
            }
            if event.frame == frame {
                match event.action {
                    KeyAction::Tap => keys.tap(event.key),
                    KeyAction::Down => keys.key_down(event.key),
                    KeyAction::Up => keys.key_up(event.key),
                }
                applied += 1;
            }
            self.next += 1;
        }
        applied
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::InputSource;

    #[test]
    fn test_parse_scripted_key() {
        let tap: ScriptedKey = "120:Space".parse().unwrap();
        assert_eq!(
            tap,
            ScriptedKey {
                frame: 120,
                key: KeyCode::Space,
                action: KeyAction::Tap
            }
        );
        let down: ScriptedKey = "4:W:down".parse().unwrap();
        assert_eq!(down.key, KeyCode::W);
        assert_eq!(down.action, KeyAction::Down);
        assert_eq!("9:ArrowUp:up".parse::<ScriptedKey>().unwrap().action, KeyAction::Up);
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert!("Space".parse::<ScriptedKey>().is_err());
        assert!("x:Space".parse::<ScriptedKey>().is_err());
        assert!("3:NotAKey".parse::<ScriptedKey>().is_err());
        assert!("3:w:sideways".parse::<ScriptedKey>().is_err());
    }

    #[test]
    fn test_script_taps_on_its_frame() {
        let mut script = KeyScript::parse(&["5:ArrowUp", "2:w", "5:Escape"]).unwrap();
        let mut keys = KeyboardState::new();

        assert_eq!(script.apply(0, &mut keys), 0);
        assert_eq!(script.apply(2, &mut keys), 1);
        assert!(keys.was_key_pressed(KeyCode::W));
        keys.end_frame();

        assert_eq!(script.apply(3, &mut keys), 0);
        assert_eq!(script.apply(5, &mut keys), 2);
        assert!(keys.escape_pressed());
        assert!(!keys.is_key_down(KeyCode::ArrowUp), "taps are not held");
    }

    #[test]
    fn test_held_key_stays_down_until_released() {
        let mut script = KeyScript::parse(&["1:s:down", "4:s:up"]).unwrap();
        let mut keys = KeyboardState::new();

        script.apply(1, &mut keys);
        assert!(keys.was_key_pressed(KeyCode::S));
        keys.end_frame();
        for frame in 2..4 {
            script.apply(frame, &mut keys);
            assert!(keys.is_key_down(KeyCode::S));
            assert!(!keys.was_key_pressed(KeyCode::S));
            keys.end_frame();
        }

        script.apply(4, &mut keys);
        assert!(!keys.is_key_down(KeyCode::S));
    }

    #[test]
    fn test_missed_frames_are_skipped() {
        let mut script = KeyScript::parse(&["1:Space"]).unwrap();
        let mut keys = KeyboardState::new();
        assert_eq!(script.apply(4, &mut keys), 0);
        assert_eq!(script.apply(1, &mut keys), 0);
    }
}
