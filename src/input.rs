//! Keyboard mapping for the flight screen.
//!
//! Translates crossterm key events into the session's logical signals:
//! thrust, rotate left, rotate right, retry, plus quit.

use crate::flight::FlightInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of translating one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Flight(FlightInput),
    Quit,
    Ignore,
}

/// Map a key event to an action.
///
/// Presses and auto-repeats turn a signal on; releases (only reported by
/// terminals with enhanced keyboard support) turn it off. Retry and quit are
/// edge-triggered and only fire on the press itself.
pub fn map_key(key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return InputAction::Quit;
    }

    let released = key.kind == KeyEventKind::Release;
    let signal = |on: FlightInput, off: FlightInput| {
        InputAction::Flight(if released { off } else { on })
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            signal(FlightInput::ThrustOn, FlightInput::ThrustOff)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            signal(FlightInput::RotateLeftOn, FlightInput::RotateLeftOff)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            signal(FlightInput::RotateRightOn, FlightInput::RotateRightOff)
        }
        KeyCode::Char(' ') if key.kind == KeyEventKind::Press => {
            InputAction::Flight(FlightInput::Retry)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
            if key.kind == KeyEventKind::Press =>
        {
            InputAction::Quit
        }
        _ => InputAction::Ignore,
    }
}
