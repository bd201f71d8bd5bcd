//! Food: a single cell that jumps to a random spot when eaten.
//!
//! Placement ignores the snake entirely, so food can land under the body.

use rand::Rng;

use super::grid::{Position, GRID_HEIGHT, GRID_WIDTH};
use super::palette::{self, Rgb};

#[derive(Clone, Debug)]
pub struct Food {
    position: Position,
    color: Rgb,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut food = Food::at(Position::new(0, 0));
        food.relocate(rng);
        food
    }

    pub fn at(position: Position) -> Self {
        Food { position, color: palette::APPLE }
    }

    /// Uniform over the whole grid.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = Position::new(rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT));
        debug_assert!(self.position.in_bounds());
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}
