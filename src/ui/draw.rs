//! What each entity looks like, and the per-frame composition order.

use std::io;

use crate::domain::food::Food;
use crate::domain::palette;
use crate::domain::snake::Snake;
use crate::sim::world::WorldState;
use super::renderer::RenderSink;

pub trait Drawable {
    fn draw(&self, sink: &mut dyn RenderSink);
}

impl Drawable for Snake {
    /// Body tail-to-neck, then the head, then erase the vacated tail cell.
    fn draw(&self, sink: &mut dyn RenderSink) {
        for &pos in self.positions().iter().skip(1).rev() {
            sink.draw_cell(pos, palette::SNAKE, palette::BORDER);
        }
        sink.draw_cell(self.head_position(), palette::SNAKE, palette::BORDER);

        // The remembered tail can be stale (after a reset, or when the head
        // re-entered that cell); never blank a cell the snake occupies.
        if let Some(tail) = self.last_removed_tail() {
            if !self.positions().contains(&tail) {
                sink.draw_cell(tail, palette::BOARD_BACKGROUND, palette::BOARD_BACKGROUND);
            }
        }
    }
}

impl Drawable for Food {
    fn draw(&self, sink: &mut dyn RenderSink) {
        sink.draw_cell(self.position(), self.color(), palette::BORDER);
    }
}

/// One full frame: background, snake, food, status, present.
pub fn render_world(sink: &mut dyn RenderSink, world: &WorldState) -> io::Result<()> {
    sink.clear(palette::BOARD_BACKGROUND);
    world.snake.draw(sink);
    world.food.draw(sink);
    sink.draw_status(&format!(" Snake  length {}", world.snake.length()));
    sink.present()
}


#[cfg(test)]
mod tests {
    use super::testing::{Op, RecordingSink};
    use super::*;
    use crate::domain::grid::{Direction, Position};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snake_draws_head_last_then_erases_tail() {
        let mut snake = Snake::from_cells(
            &[Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );
        snake.advance();

        let mut sink = RecordingSink::default();
        snake.draw(&mut sink);
        assert_eq!(
            sink.ops,
            vec![
                Op::Cell(Position::new(4, 5), palette::SNAKE, palette::BORDER),
                Op::Cell(Position::new(5, 5), palette::SNAKE, palette::BORDER),
                Op::Cell(Position::new(6, 5), palette::SNAKE, palette::BORDER),
                Op::Cell(Position::new(3, 5), palette::BOARD_BACKGROUND, palette::BOARD_BACKGROUND),
            ]
        );
    }

    #[test]
    fn stale_tail_on_body_is_not_erased() {
        // Step off the center, then reset back onto it: the remembered tail
        // is the center cell, which the snake occupies again.
        let mut snake = Snake::from_cells(
            &[Position::new(17, 12), Position::center()],
            Direction::Right,
        );
        snake.advance();
        assert_eq!(snake.last_removed_tail(), Some(Position::center()));
        snake.reset();

        let mut sink = RecordingSink::default();
        snake.draw(&mut sink);
        assert_eq!(sink.ops, vec![Op::Cell(Position::center(), palette::SNAKE, palette::BORDER)]);
    }

    #[test]
    fn frame_order_is_clear_snake_food_status_present() {
        let world = WorldState::from_parts(
            Snake::new(),
            Food::at(Position::new(0, 0)),
            StdRng::seed_from_u64(0),
        );
        let mut sink = RecordingSink::default();
        render_world(&mut sink, &world).unwrap();
        assert_eq!(
            sink.ops,
            vec![
                Op::Clear(palette::BOARD_BACKGROUND),
                Op::Cell(Position::center(), palette::SNAKE, palette::BORDER),
                Op::Cell(Position::new(0, 0), palette::APPLE, palette::BORDER),
                Op::Status(" Snake  length 1".to_string()),
                Op::Present,
            ]
        );
    }
}
