use std::collections::HashSet;

use crate::coords::ScreenPx;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, MouseButton};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Pointer position in physical pixels, `None` when outside the window.
    pub pointer: Option<ScreenPx>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the held state and records transitions into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Releases are never delivered to an unfocused window.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(pos) => self.pointer = Some(pos),

            InputEvent::PointerLeft => self.pointer = None,

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(&key) {
                        frame.keys_released.insert(key);
                    }
                }
            },

            InputEvent::PointerButton { button, state } => match state {
                KeyState::Pressed => {
                    if self.buttons_down.insert(button) {
                        frame.buttons_pressed.insert(button);
                    }
                }
                KeyState::Released => {
                    if self.buttons_down.remove(&button) {
                        frame.buttons_released.insert(button);
                    }
                }
            },

            InputEvent::MouseWheel(delta) => {
                frame.wheel_steps += delta.vertical_steps();
            }
        }
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn any_key_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.keys_down.contains(k))
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
