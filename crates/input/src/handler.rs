//! Pressed-or-held tracking for terminal environments.
//!
//! The rule engine wants, for every tick, whether each logical input was
//! pressed or is still held. Terminals report presses (and auto-repeat as
//! further presses), but many never report releases, so a held key that stops
//! repeating is released after a timeout.

use crossterm::event::KeyCode;

use crate::map::map_key;
use crate::types::{Input, InputSnapshot};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct KeyState {
    /// Pressed since the last snapshot; survives a release in the same tick
    pressed: bool,
    held: bool,
    /// Milliseconds since the last press or repeat while held
    idle_ms: u32,
}

/// Tracks input state across ticks.
#[derive(Debug, Clone)]
pub struct InputHandler {
    keys: [KeyState; 4],
    key_release_timeout_ms: u32,
}

fn slot(input: Input) -> usize {
    match input {
        Input::MoveLeft => 0,
        Input::MoveRight => 1,
        Input::SoftDrop => 2,
        Input::Rotate => 3,
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            keys: [KeyState::default(); 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press (or terminal auto-repeat). Returns the input it drives.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Input> {
        let input = map_key(code)?;
        self.press(input);
        Some(input)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(input) = map_key(code) {
            self.release(input);
        }
    }

    pub fn press(&mut self, input: Input) {
        let key = &mut self.keys[slot(input)];
        key.pressed = true;
        key.held = true;
        key.idle_ms = 0;
    }

    pub fn release(&mut self, input: Input) {
        let key = &mut self.keys[slot(input)];
        key.held = false;
        key.idle_ms = 0;
    }

    pub fn is_held(&self, input: Input) -> bool {
        self.keys[slot(input)].held
    }

    /// Produce the inputs active for this tick, then age held keys by
    /// `elapsed_ms` and auto-release the ones that went quiet.
    pub fn snapshot(&mut self, elapsed_ms: u32) -> InputSnapshot {
        let timeout_ms = self.key_release_timeout_ms;
        let mut out = InputSnapshot::none();
        for input in Input::ALL {
            let key = &mut self.keys[slot(input)];
            out.set(input, key.pressed || key.held);
            key.pressed = false;

            if key.held {
                key.idle_ms = key.idle_ms.saturating_add(elapsed_ms);
                if key.idle_ms > timeout_ms {
                    key.held = false;
                    key.idle_ms = 0;
                }
            }
        }
        out
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
