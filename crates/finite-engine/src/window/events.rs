use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::coords::ScreenPx;
use crate::input::{InputEvent, Key, KeyState, MouseButton, MouseWheelDelta};

/// Physical keys the engine names. Anything else arrives as `Key::Unknown`.
const KEYS: &[(KeyCode, Key)] = &[
    (KeyCode::Escape, Key::Escape),
    (KeyCode::ArrowUp, Key::ArrowUp),
    (KeyCode::ArrowDown, Key::ArrowDown),
    (KeyCode::ArrowLeft, Key::ArrowLeft),
    (KeyCode::ArrowRight, Key::ArrowRight),
    (KeyCode::KeyW, Key::W),
    (KeyCode::KeyA, Key::A),
    (KeyCode::KeyS, Key::S),
    (KeyCode::KeyD, Key::D),
    (KeyCode::F11, Key::F11),
];

/// Input carried by a window event, if any. Cursor positions stay in
/// physical pixels.
pub(crate) fn input_event(event: &WindowEvent) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => {
            InputEvent::PointerMoved(ScreenPx::new(position.x as f32, position.y as f32))
        }
        WindowEvent::MouseInput { state, button, .. } => InputEvent::PointerButton {
            button: mouse_button(*button),
            state: key_state(*state),
        },
        WindowEvent::MouseWheel { delta, .. } => InputEvent::MouseWheel(wheel_delta(*delta)),
        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: key(event.physical_key),
            state: key_state(event.state),
            repeat: event.repeat,
        },
        _ => return None,
    };
    Some(ev)
}

fn wheel_delta(delta: MouseScrollDelta) -> MouseWheelDelta {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x, y },
        MouseScrollDelta::PixelDelta(p) => MouseWheelDelta::Pixel { x: p.x as f32, y: p.y as f32 },
    }
}

fn key_state(state: ElementState) -> KeyState {
    if state.is_pressed() {
        KeyState::Pressed
    } else {
        KeyState::Released
    }
}

fn mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

fn key(physical: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = physical else {
        // Native scancodes have no stable number in winit 0.30.
        return Key::Unknown(0);
    };
    KEYS.iter()
        .find(|(c, _)| *c == code)
        .map(|(_, k)| *k)
        .unwrap_or(Key::Unknown(code as u32))
}
