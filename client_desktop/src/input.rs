//! Keyboard input handling

use std::collections::HashSet;

use game_core::InputState;
use winit::keyboard::KeyCode;

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Up,
    Down,
    Start,
    Quit,
}

pub fn binding_for(key: KeyCode) -> Option<Binding> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Binding::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Binding::Down),
        KeyCode::Space => Some(Binding::Start),
        KeyCode::Escape => Some(Binding::Quit),
        _ => None,
    }
}

/// Tracks which bound keys are currently held down
#[derive(Debug, Default)]
pub struct Keyboard {
    held: HashSet<KeyCode>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: KeyCode) {
        if binding_for(key).is_some() {
            self.held.insert(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Forget everything, e.g. when the window loses focus and key-up
    /// events will never arrive
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, binding: Binding) -> bool {
        self.held
            .iter()
            .any(|&key| binding_for(key) == Some(binding))
    }

    pub fn snapshot(&self) -> InputState {
        InputState {
            up: self.is_held(Binding::Up),
            down: self.is_held(Binding::Down),
            start: self.is_held(Binding::Start),
        }
    }
}
