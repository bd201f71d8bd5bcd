//! Events crossing the simulation boundary.
//!
//! `InputEvent` flows in from whatever input backend is attached.
//! `GameEvent` flows out of `step` for logging and tests.

use crate::domain::grid::{Direction, Position};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Quit,
    Direction(Direction),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    Moved { head: Position },
    FoodEaten { at: Position, length: usize },
    /// Head ran into the body; the snake is back at the center.
    Collided { at: Position },
}
