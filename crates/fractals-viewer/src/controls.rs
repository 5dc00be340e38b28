//! Input bindings.

use fractals_engine::input::{InputEvent, Key, KeyState};

use crate::params::{Channel, Direction};

/// Something the user asked the viewer to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Pan(Direction),
    /// Iteration change in steps of 50.
    Iterations(i32),
    NextFractal,
    /// Julia constant change in steps along x / y.
    Julia { dx: i32, dy: i32 },
    /// Wheel direction: positive zooms in.
    Zoom(i32),
    Tint(Channel),
    /// Replace every tint channel with a random value.
    RandomTint,
    /// Log the current view state.
    Report,
    Quit,
}

/// Maps an input event to an action.
///
/// Key presses and OS repeats both act, so holding an arrow keeps panning.
/// Releases, focus changes and unbound keys map to nothing.
pub fn action_for(event: &InputEvent) -> Option<Action> {
    match event {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            ..
        } => action_for_key(*key),
        InputEvent::MouseWheel { delta } => match delta.steps() {
            0 => None,
            steps => Some(Action::Zoom(steps)),
        },
        _ => None,
    }
}

fn action_for_key(key: Key) -> Option<Action> {
    let action = match key {
        Key::ArrowLeft => Action::Pan(Direction::Left),
        Key::ArrowRight => Action::Pan(Direction::Right),
        Key::ArrowUp => Action::Pan(Direction::Up),
        Key::ArrowDown => Action::Pan(Direction::Down),

        Key::Q => Action::Iterations(-1),
        Key::E => Action::Iterations(1),

        Key::N => Action::NextFractal,

        Key::A => Action::Julia { dx: -1, dy: 0 },
        Key::S => Action::Julia { dx: 1, dy: 0 },
        Key::D => Action::Julia { dx: 0, dy: -1 },
        Key::F => Action::Julia { dx: 0, dy: 1 },

        Key::Digit1 => Action::Tint(Channel::Red),
        Key::Digit2 => Action::Tint(Channel::Green),
        Key::Digit3 => Action::Tint(Channel::Blue),
        Key::R => Action::RandomTint,

        Key::P => Action::Report,
        Key::Escape => Action::Quit,

        other => {
            log::trace!("no binding for {other}");
            return None;
        }
    };
    Some(action)
}
