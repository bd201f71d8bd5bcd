//! Keyboard input.
//!
//! Each tick drains every pending terminal event without blocking and maps
//! key presses to `InputEvent`s. Release events are dropped (only reported
//! by terminals with keyboard enhancement, and a turn is a press anyway).
//! Gamepad events, when a pad is attached, are appended after the keys.

use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::grid::Direction;
use crate::sim::event::InputEvent;
use super::gamepad::GamepadState;

pub trait InputSource {
    /// Everything that arrived since the last call. Never blocks; empty is fine.
    fn poll(&mut self) -> Vec<InputEvent>;
}

// ── Key Constants ──

const KEYS_LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const KEYS_RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const KEYS_UP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const KEYS_DOWN: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')];

pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_ctrl_c(&key) || KEYS_QUIT.contains(&key.code) {
        return Some(InputEvent::Quit);
    }

    let dir = if KEYS_UP.contains(&key.code) {
        Direction::Up
    } else if KEYS_DOWN.contains(&key.code) {
        Direction::Down
    } else if KEYS_LEFT.contains(&key.code) {
        Direction::Left
    } else if KEYS_RIGHT.contains(&key.code) {
        Direction::Right
    } else {
        return None;
    };
    Some(InputEvent::Direction(dir))
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

pub struct TerminalInput {
    gamepad: GamepadState,
}

impl TerminalInput {
    pub fn new(gamepad: GamepadState) -> Self {
        TerminalInput { gamepad }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::with_capacity(4);

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(ev) = map_key(key) {
                        events.push(ev);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("terminal event read failed: {e}");
                    break;
                }
            }
        }

        self.gamepad.update();
        events.extend(self.gamepad.events());
        events
    }
}
