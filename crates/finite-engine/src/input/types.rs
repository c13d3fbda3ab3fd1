use std::fmt;

use crate::coords::ScreenPx;

/// Keyboard key identifier.
///
/// The runtime maps platform key codes into these variants; anything not
/// listed arrives as `Key::Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    W,
    A,
    S,
    D,

    F11,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Mouse wheel delta as reported by the platform.
///
/// `Line` comes from notched wheels; `Pixel` from touchpads and other
/// high-precision devices. Positive `y` is wheel-up / scroll away from user.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Whole notches along Y. A non-zero delta always yields at least one step;
    /// a delta with no vertical component (horizontal scroll) yields none.
    pub fn vertical_steps(self) -> i32 {
        let (y, precise) = match self {
            MouseWheelDelta::Line { y, .. } => (y, false),
            MouseWheelDelta::Pixel { y, .. } => (y, true),
        };
        // `0.0.signum()` is 1.0, so zero must be rejected on the raw delta.
        if y == 0.0 || !y.is_finite() {
            return 0;
        }
        if precise {
            return y.signum() as i32;
        }
        let rounded = y.round() as i32;
        if rounded == 0 { y.signum() as i32 } else { rounded }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        repeat: bool,
    },

    /// Pointer position in physical window pixels.
    PointerMoved(ScreenPx),

    PointerButton {
        button: MouseButton,
        state: KeyState,
    },

    MouseWheel(MouseWheelDelta),

    PointerLeft,

    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_deltas_round_to_notches() {
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: 1.0 }.vertical_steps(), 1);
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: -2.0 }.vertical_steps(), -2);
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: 0.3 }.vertical_steps(), 1);
        assert_eq!(MouseWheelDelta::Line { x: 3.0, y: 0.0 }.vertical_steps(), 0);
    }

    #[test]
    fn pixel_deltas_count_as_one_step() {
        assert_eq!(MouseWheelDelta::Pixel { x: 0.0, y: 48.0 }.vertical_steps(), 1);
        assert_eq!(MouseWheelDelta::Pixel { x: 0.0, y: -0.5 }.vertical_steps(), -1);
    }

    #[test]
    fn horizontal_only_deltas_are_not_steps() {
        assert_eq!(MouseWheelDelta::Pixel { x: 12.0, y: 0.0 }.vertical_steps(), 0);
        assert_eq!(MouseWheelDelta::Pixel { x: -3.0, y: -0.0 }.vertical_steps(), 0);
        assert_eq!(MouseWheelDelta::Pixel { x: 0.0, y: f32::NAN }.vertical_steps(), 0);
    }
}
