//! The orchestrator: owns the world and the three outside collaborators
//! (render sink, input source, frame clock) and runs the fixed-order loop.
//!
//! Per tick: poll input → apply turns → step → render → wait for the clock.

use anyhow::{Context, Result};

use crate::domain::grid::TICK_RATE;
use crate::sim::event::GameEvent;
use crate::sim::step::{self, Flow};
use crate::sim::world::WorldState;
use crate::ui::clock::Clock;
use crate::ui::draw;
use crate::ui::input::InputSource;
use crate::ui::renderer::RenderSink;

pub struct Game<R, I, C> {
    world: WorldState,
    renderer: R,
    input: I,
    clock: C,
}

impl<R: RenderSink, I: InputSource, C: Clock> Game<R, I, C> {
    pub fn new(world: WorldState, renderer: R, input: I, clock: C) -> Self {
        Game { world, renderer, input, clock }
    }

    /// Run until the player quits.
    pub fn run(&mut self) -> Result<()> {
        while self.tick()? == Flow::Continue {}
        tracing::info!(tick = self.world.tick, length = self.world.snake.length(), "quit");
        Ok(())
    }

    /// One loop iteration. Quit returns before the world is touched.
    pub fn tick(&mut self) -> Result<Flow> {
        let input = self.input.poll();
        if step::apply_input(&mut self.world.snake, &input) == Flow::Quit {
            return Ok(Flow::Quit);
        }

        for event in step::step(&mut self.world) {
            log_event(self.world.tick, &event);
        }

        draw::render_world(&mut self.renderer, &self.world)
            .with_context(|| format!("rendering frame {}", self.world.tick))?;

        self.clock.tick(TICK_RATE);
        Ok(Flow::Continue)
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

fn log_event(tick: u64, event: &GameEvent) {
    match *event {
        GameEvent::Moved { head } => tracing::trace!(tick, x = head.x, y = head.y, "moved"),
        GameEvent::FoodEaten { at, length } => {
            tracing::debug!(tick, x = at.x, y = at.y, length, "food eaten")
        }
        GameEvent::Collided { at } => {
            tracing::info!(tick, x = at.x, y = at.y, "self-collision, snake reset")
        }
    }
}
