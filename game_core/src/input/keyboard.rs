use std::collections::HashSet;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Space,
    B,
    C,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value; letters are case-insensitive
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "ArrowUp" | "Up" => Some(Key::ArrowUp),
            "ArrowDown" | "Down" => Some(Key::ArrowDown),
            " " | "Spacebar" => Some(Key::Space),
            "b" | "B" => Some(Key::B),
            "c" | "C" => Some(Key::C),
            _ => None,
        }
    }
}

/// Keys currently held down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop every held key (window lost focus)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
