//! Key state fed in by the host's input polling
//!
//! Held keys drive paddle movement. The start key is edge-triggered: it
//! fires once per press and re-arms only after release.

use serde::{Deserialize, Serialize};

/// Logical keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
    Start,
}

pub const KEY_COUNT: usize = 5;

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Player1Up,
        Key::Player1Down,
        Key::Player2Up,
        Key::Player2Down,
        Key::Start,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Key> {
        Self::ALL.get(index).copied()
    }
}

/// Per-key "down" and "already handled" flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    down: [bool; KEY_COUNT],
    processed: [bool; KEY_COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release. Releasing re-arms edge-triggered handling.
    pub fn set(&mut self, key: Key, down: bool) {
        let i = key.index();
        self.down[i] = down;
        if !down {
            self.processed[i] = false;
        }
    }

    /// Same as [`KeyState::set`] for raw indices; unknown indices are ignored
    pub fn set_index(&mut self, index: usize, down: bool) {
        if let Some(key) = Key::from_index(index) {
            self.set(key, down);
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    /// True once per press: the key is down and has not been consumed yet
    pub fn consume_press(&mut self, key: Key) -> bool {
        let i = key.index();
        if self.down[i] && !self.processed[i] {
            self.processed[i] = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_index(key.index()), Some(key));
        }
        assert_eq!(Key::from_index(KEY_COUNT), None);
    }

    #[test]
    fn test_press_fires_once_until_release() {
        let mut keys = KeyState::new();
        keys.set(Key::Start, true);
        assert!(keys.consume_press(Key::Start));
        assert!(!keys.consume_press(Key::Start));
        assert!(keys.is_down(Key::Start));

        keys.set(Key::Start, false);
        assert!(!keys.consume_press(Key::Start));

        keys.set(Key::Start, true);
        assert!(keys.consume_press(Key::Start));
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut keys = KeyState::new();
        keys.set_index(1024, true);
        assert_eq!(keys, KeyState::new());

        keys.set_index(Key::Player2Down.index(), true);
        assert!(keys.is_down(Key::Player2Down));
    }
}
