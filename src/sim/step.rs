//! The step function: advances the world by one tick.
//!
//! Processing order:
//!   1. Snake movement (pending turn applied, wraparound, self-collision)
//!   2. Food check (head on food → grow + relocate)
//!
//! Input is applied before `step` by `apply_input`, so a turn pressed
//! during tick N is visible on tick N's movement.

use crate::domain::snake::{Advance, Snake};
use super::event::{GameEvent, InputEvent};
use super::world::WorldState;

/// Whether the loop should keep going after handling input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

/// Forward this tick's input to the snake, in arrival order.
/// Reversal requests are dropped by the snake itself.
pub fn apply_input(snake: &mut Snake, events: &[InputEvent]) -> Flow {
    for event in events {
        match *event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::Direction(dir) => {
                if !snake.set_pending_direction(dir) {
                    tracing::trace!(?dir, current = ?snake.direction(), "reversal ignored");
                }
            }
        }
    }
    Flow::Continue
}

pub fn step(world: &mut WorldState) -> Vec<GameEvent> {
    let mut events: Vec<GameEvent> = Vec::with_capacity(2);
    world.tick += 1;

    resolve_movement(world, &mut events);
    resolve_food(world, &mut events);

    events
}

fn resolve_movement(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    match world.snake.advance() {
        Advance::Moved { head } => events.push(GameEvent::Moved { head }),
        Advance::Collided { at } => events.push(GameEvent::Collided { at }),
    }
}

/// Also runs right after a reset: food sitting on the center cell is eaten.
fn resolve_food(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    let head = world.snake.head_position();
    if head != world.food.position() {
        return;
    }
    world.snake.grow();
    world.food.relocate(&mut world.rng);
    events.push(GameEvent::FoodEaten { at: head, length: world.snake.length() });
}
