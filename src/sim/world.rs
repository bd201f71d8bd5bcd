//! WorldState: everything the simulation owns.
//!
//! Snake and food are siblings with no link between them; `step` compares
//! their positions. The RNG lives here so food placement is reproducible
//! from a seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::food::Food;
use crate::domain::snake::Snake;

pub struct WorldState {
    pub snake: Snake,
    pub food: Food,
    pub rng: StdRng,
    /// Completed simulation ticks.
    pub tick: u64,
}

impl WorldState {
    /// Fresh game. `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let food = Food::new(&mut rng);
        WorldState::from_parts(Snake::new(), food, rng)
    }

    pub fn from_parts(snake: Snake, food: Food, rng: StdRng) -> Self {
        WorldState { snake, food, rng, tick: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::Position;

    #[test]
    fn seeded_worlds_match() {
        let a = WorldState::new(Some(5));
        let b = WorldState::new(Some(5));
        assert_eq!(a.food.position(), b.food.position());
        assert!(a.food.position().in_bounds());
    }

    #[test]
    fn starts_at_tick_zero_with_centered_snake() {
        let w = WorldState::new(None);
        assert_eq!(w.tick, 0);
        assert_eq!(w.snake.head_position(), Position::center());
        assert_eq!(w.snake.length(), 1);
    }
}
