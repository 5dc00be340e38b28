use std::fmt;

/// Keyboard key identifier.
///
/// Covers the keys a viewer binds to. Anything else is reported as
/// `Key::Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` comes from notched wheels; `Pixel` from touchpads and other
/// high-precision devices. Positive `y` scrolls away from the user.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Signed vertical direction of the scroll: `1`, `-1` or `0`.
    pub fn steps(&self) -> i32 {
        let y = match *self {
            MouseWheelDelta::Line { y, .. } | MouseWheelDelta::Pixel { y, .. } => y,
        };
        if y > 0.0 {
            1
        } else if y < 0.0 {
            -1
        } else {
            0
        }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an OS key-repeat.
        repeat: bool,
    },

    MouseWheel { delta: MouseWheelDelta },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Shorthand for a fresh (non-repeat) key press.
    pub fn key_pressed(key: Key) -> Self {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }
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
    fn wheel_steps_follow_sign() {
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: 1.0 }.steps(), 1);
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: -3.0 }.steps(), -1);
        assert_eq!(MouseWheelDelta::Pixel { x: 0.0, y: 0.25 }.steps(), 1);
        assert_eq!(MouseWheelDelta::Pixel { x: 4.0, y: 0.0 }.steps(), 0);
    }

    #[test]
    fn key_display_names_the_key() {
        assert_eq!(Key::R.to_string(), "R");
        assert_eq!(Key::Digit3.to_string(), "Digit3");
        assert_eq!(Key::Unknown(7).to_string(), "Unknown(7)");
    }

    #[test]
    fn key_pressed_is_not_repeat() {
        assert_eq!(
            InputEvent::key_pressed(Key::N),
            InputEvent::Key { key: Key::N, state: KeyState::Pressed, repeat: false }
        );
    }
}
