//! Gamepad input tracker using gilrs.
//!
//! Without the `gamepad` feature this compiles to a pad that is never
//! connected and never reports anything.
//!
//! Mapping:
//!   D-pad / Left Stick    →  Turn (edge-triggered)
//!   Select (configurable) →  Quit

#[cfg(feature = "gamepad")]
use gilrs::{Axis, Button, EventType, Gilrs};

use crate::config::GamepadConfig;
use crate::domain::grid::Direction;
use crate::sim::event::InputEvent;

#[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
const STICK_DEADZONE: f32 = 0.25;

/// Logical button identifiers (one per physical face/shoulder button).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Btn {
    A,       // South
    B,       // East
    X,       // West
    Y,       // North
    L1,
    R1,
    Start,
    Select,
}

const BTN_COUNT: usize = 8;

impl Btn {
    fn from_name(s: &str) -> Option<Btn> {
        match s.to_uppercase().as_str() {
            "A" | "SOUTH" => Some(Btn::A),
            "B" | "EAST" => Some(Btn::B),
            "X" | "WEST" => Some(Btn::X),
            "Y" | "NORTH" => Some(Btn::Y),
            "L1" | "LB" | "LEFTTRIGGER" => Some(Btn::L1),
            "R1" | "RB" | "RIGHTTRIGGER" => Some(Btn::R1),
            "START" => Some(Btn::Start),
            "SELECT" | "BACK" => Some(Btn::Select),
            _ => None,
        }
    }
}

/// Anything on the pad that can be pressed.
#[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PadInput {
    Button(Btn),
    DPad(Direction),
}

#[cfg(feature = "gamepad")]
fn from_gilrs(btn: Button) -> Option<PadInput> {
    let input = match btn {
        Button::DPadUp => PadInput::DPad(Direction::Up),
        Button::DPadDown => PadInput::DPad(Direction::Down),
        Button::DPadLeft => PadInput::DPad(Direction::Left),
        Button::DPadRight => PadInput::DPad(Direction::Right),
        Button::South => PadInput::Button(Btn::A),
        Button::East => PadInput::Button(Btn::B),
        Button::West => PadInput::Button(Btn::X),
        Button::North => PadInput::Button(Btn::Y),
        Button::LeftTrigger => PadInput::Button(Btn::L1),
        Button::RightTrigger => PadInput::Button(Btn::R1),
        Button::Start => PadInput::Button(Btn::Start),
        Button::Select => PadInput::Button(Btn::Select),
        _ => return None,
    };
    Some(input)
}

/// Per-input state: held (level) and just_pressed (edge).
#[derive(Clone, Copy, Debug, Default)]
struct BtnState {
    held: bool,
    just_pressed: bool,
}

impl BtnState {
    fn set(&mut self, held: bool) {
        if held && !self.held {
            self.just_pressed = true;
        }
        self.held = held;
    }
}

fn dir_index(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

pub struct GamepadState {
    #[cfg(feature = "gamepad")]
    gilrs: Option<Gilrs>,

    buttons: [BtnState; BTN_COUNT],
    dpad: [BtnState; 4],
    stick: [BtnState; 4],
    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    stick_x: f32,
    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    stick_y: f32,

    quit: Vec<Btn>,

    pub connected: bool,
}

impl GamepadState {
    pub fn new() -> Self {
        #[cfg(feature = "gamepad")]
        let (gilrs_opt, connected) = match Gilrs::new() {
            Ok(g) => {
                let has_pad = g.gamepads().next().is_some();
                (Some(g), has_pad)
            }
            Err(e) => {
                tracing::warn!("gamepad support unavailable: {e}");
                (None, false)
            }
        };
        #[cfg(not(feature = "gamepad"))]
        let connected = false;

        GamepadState {
            #[cfg(feature = "gamepad")]
            gilrs: gilrs_opt,
            buttons: [BtnState::default(); BTN_COUNT],
            dpad: [BtnState::default(); 4],
            stick: [BtnState::default(); 4],
            stick_x: 0.0,
            stick_y: 0.0,
            quit: vec![Btn::Select],
            connected,
        }
    }

    /// Load the quit mapping from config. Unknown names are skipped; an
    /// empty result keeps the default.
    pub fn load_button_config(&mut self, cfg: &GamepadConfig) {
        let quit: Vec<Btn> = cfg.quit.iter().filter_map(|s| Btn::from_name(s)).collect();
        if !quit.is_empty() {
            self.quit = quit;
        }
    }

    pub fn update(&mut self) {
        self.clear_just_pressed();

        #[cfg(feature = "gamepad")]
        self.poll_gilrs();
    }

    /// Edge presses since the last `update()`, quit first.
    pub fn events(&self) -> Vec<InputEvent> {
        let mut out = Vec::new();
        if self.quit.iter().any(|&b| self.buttons[b as usize].just_pressed) {
            out.push(InputEvent::Quit);
        }
        for dir in Direction::ALL {
            let i = dir_index(dir);
            if self.dpad[i].just_pressed || self.stick[i].just_pressed {
                out.push(InputEvent::Direction(dir));
            }
        }
        out
    }

    #[cfg(feature = "gamepad")]
    fn poll_gilrs(&mut self) {
        let gilrs = match &mut self.gilrs {
            Some(g) => g,
            None => return,
        };

        let events: Vec<_> = std::iter::from_fn(|| gilrs.next_event()).collect();

        for event in events {
            match event.event {
                EventType::ButtonPressed(btn, _) => {
                    self.connected = true;
                    if let Some(input) = from_gilrs(btn) {
                        self.set(input, true);
                    }
                }
                EventType::ButtonReleased(btn, _) => {
                    if let Some(input) = from_gilrs(btn) {
                        self.set(input, false);
                    }
                }
                EventType::AxisChanged(axis, value, _) => {
                    self.connected = true;
                    match axis {
                        Axis::LeftStickX => self.stick_x = value,
                        Axis::LeftStickY => self.stick_y = value,
                        _ => {}
                    }
                }
                EventType::Connected => {
                    tracing::info!("gamepad connected");
                    self.connected = true;
                }
                EventType::Disconnected => {
                    tracing::info!("gamepad disconnected");
                    self.connected = false;
                    self.release_all();
                }
                _ => {}
            }
        }

        self.update_stick();
    }

    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    fn set(&mut self, input: PadInput, held: bool) {
        match input {
            PadInput::Button(btn) => self.buttons[btn as usize].set(held),
            PadInput::DPad(dir) => self.dpad[dir_index(dir)].set(held),
        }
    }

    /// Derive digital stick directions from the analog axes (y up is positive).
    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    fn update_stick(&mut self) {
        let (x, y) = (self.stick_x, self.stick_y);
        self.stick[dir_index(Direction::Left)].set(x < -STICK_DEADZONE);
        self.stick[dir_index(Direction::Right)].set(x > STICK_DEADZONE);
        self.stick[dir_index(Direction::Up)].set(y > STICK_DEADZONE);
        self.stick[dir_index(Direction::Down)].set(y < -STICK_DEADZONE);
    }

    // ── Internal ──

    fn clear_just_pressed(&mut self) {
        for b in self.buttons.iter_mut().chain(&mut self.dpad).chain(&mut self.stick) {
            b.just_pressed = false;
        }
    }

    #[cfg_attr(not(feature = "gamepad"), allow(dead_code))]
    fn release_all(&mut self) {
        for b in self.buttons.iter_mut().chain(&mut self.dpad).chain(&mut self.stick) {
            *b = BtnState::default();
        }
        self.stick_x = 0.0;
        self.stick_y = 0.0;
    }
}

impl Default for GamepadState {
    fn default() -> Self {
        GamepadState::new()
    }
}
