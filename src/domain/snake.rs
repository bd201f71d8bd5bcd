//! The snake: an ordered run of cells with the head at the front.
//!
//! One `advance()` per tick. Growth is deferred: `grow()` only raises the
//! target length, and the next `advance()` skips popping the tail.
//! Self-collision is not a failure state; the snake resets in place and
//! keeps running.

use std::collections::VecDeque;

use super::grid::{Direction, Position, INITIAL_LENGTH};

/// Outcome of a single `advance()`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Advance {
    Moved { head: Position },
    /// The new head landed on the body; the snake has already been reset.
    Collided { at: Position },
}

#[derive(Clone, Debug)]
pub struct Snake {
    positions: VecDeque<Position>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Cell vacated by the last tail pop, for the renderer to erase.
    last_removed_tail: Option<Position>,
}

impl Snake {
    pub fn new() -> Self {
        let mut snake = Snake {
            positions: VecDeque::with_capacity(64),
            length: INITIAL_LENGTH,
            direction: Direction::Right,
            pending_direction: None,
            last_removed_tail: None,
        };
        snake.reset();
        snake
    }

    /// Build a snake of arbitrary shape, head first. Length matches the cells.
    #[cfg(test)]
    pub fn from_cells(cells: &[Position], direction: Direction) -> Self {
        assert!(!cells.is_empty());
        Snake {
            positions: cells.iter().copied().collect(),
            length: cells.len(),
            direction,
            pending_direction: None,
            last_removed_tail: None,
        }
    }

    /// Queue a turn for the next tick. A request to reverse onto the neck
    /// is dropped. Returns whether the request was accepted.
    pub fn set_pending_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(requested);
        true
    }

    pub fn advance(&mut self) -> Advance {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }

        let new_head = self.head_position().step(self.direction);

        // Head and neck are skipped: the neck is unreachable and the head
        // is about to move off its cell.
        if self.positions.iter().skip(2).any(|&p| p == new_head) {
            self.reset();
            return Advance::Collided { at: new_head };
        }

        self.positions.push_front(new_head);
        if self.positions.len() > self.length {
            self.last_removed_tail = self.positions.pop_back();
        }

        Advance::Moved { head: new_head }
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a single centered cell heading right.
    pub fn reset(&mut self) {
        self.length = INITIAL_LENGTH;
        self.positions.clear();
        self.positions.push_back(Position::center());
        self.direction = Direction::Right;
        self.pending_direction = None;
    }

    pub fn head_position(&self) -> Position {
        // Never empty: every mutation path leaves at least one cell.
        self.positions[0]
    }

    pub fn positions(&self) -> &VecDeque<Position> {
        &self.positions
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn last_removed_tail(&self) -> Option<Position> {
        self.last_removed_tail
    }
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: i32, y: i32) -> Position {
        Position::from_pixels(x, y)
    }

    fn cells(snake: &Snake) -> Vec<Position> {
        snake.positions().iter().copied().collect()
    }

    #[test]
    fn starts_centered() {
        let s = Snake::new();
        assert_eq!(s.length(), 1);
        assert_eq!(cells(&s), vec![px(320, 240)]);
        assert_eq!(s.direction(), Direction::Right);
        assert_eq!(s.pending_direction(), None);
        assert_eq!(s.last_removed_tail(), None);
    }

    // ── Reversal guard ──

    #[test]
    fn reversal_request_dropped() {
        let mut s = Snake::new();
        assert!(!s.set_pending_direction(Direction::Left));
        assert_eq!(s.pending_direction(), None);
    }

    #[test]
    fn perpendicular_request_accepted() {
        let mut s = Snake::new();
        assert!(s.set_pending_direction(Direction::Up));
        assert_eq!(s.pending_direction(), Some(Direction::Up));

        let mut s = Snake::new();
        assert!(s.set_pending_direction(Direction::Down));
        assert_eq!(s.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn later_request_overwrites_pending() {
        let mut s = Snake::new();
        s.set_pending_direction(Direction::Up);
        s.set_pending_direction(Direction::Down);
        assert_eq!(s.pending_direction(), Some(Direction::Down));
        // Guard is against the current direction, not the pending one.
        s.set_pending_direction(Direction::Left);
        assert_eq!(s.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn pending_applied_then_cleared() {
        let mut s = Snake::new();
        s.set_pending_direction(Direction::Up);
        assert_eq!(s.advance(), Advance::Moved { head: px(320, 220) });
        assert_eq!(s.direction(), Direction::Up);
        assert_eq!(s.pending_direction(), None);
    }

    // ── Movement and wraparound ──

    #[test]
    fn wraps_at_right_edge() {
        let mut s = Snake::from_cells(&[px(620, 0)], Direction::Right);
        s.advance();
        assert_eq!(s.head_position(), px(0, 0));
    }

    #[test]
    fn wraps_at_top_edge() {
        let mut s = Snake::from_cells(&[px(100, 0)], Direction::Up);
        s.advance();
        assert_eq!(s.head_position(), px(100, 460));
    }

    #[test]
    fn tail_popped_and_remembered() {
        let mut s = Snake::from_cells(&[px(100, 100), px(80, 100)], Direction::Right);
        s.advance();
        assert_eq!(cells(&s), vec![px(120, 100), px(100, 100)]);
        assert_eq!(s.last_removed_tail(), Some(px(80, 100)));
    }

    // ── Growth ──

    #[test]
    fn growth_lags_one_tick() {
        let mut s = Snake::new();
        s.grow();
        assert_eq!(s.length(), 2);
        assert_eq!(s.positions().len(), 1);

        s.advance();
        assert_eq!(cells(&s), vec![px(340, 240), px(320, 240)]);
        assert_eq!(s.last_removed_tail(), None);

        s.advance();
        assert_eq!(s.positions().len(), 2);
        assert_eq!(s.last_removed_tail(), Some(px(320, 240)));
    }

    // ── Self-collision ──

    #[test]
    fn collision_with_body_resets() {
        // Head at (2,1) moving up toward (2,0), which the body occupies.
        //   (1,0) (2,0)
        //   (1,1) (2,1)<head
        let mut s = Snake::from_cells(
            &[
                Position::new(2, 1),
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
            ],
            Direction::Right,
        );
        s.set_pending_direction(Direction::Up);
        assert_eq!(s.advance(), Advance::Collided { at: Position::new(2, 0) });
        assert_eq!(s.length(), 1);
        assert_eq!(cells(&s), vec![Position::center()]);
        assert_eq!(s.direction(), Direction::Right);
        assert_eq!(s.pending_direction(), None);
    }

    #[test]
    fn moving_into_vacating_tail_of_square_collides() {
        // A 4-cell loop: the tail cell is still occupied when checked.
        let mut s = Snake::from_cells(
            &[
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(4, 6),
                Position::new(4, 5),
            ],
            Direction::Up,
        );
        s.set_pending_direction(Direction::Left);
        assert!(matches!(s.advance(), Advance::Collided { .. }));
        assert_eq!(s.length(), 1);
    }

    #[test]
    fn neck_is_never_a_collision() {
        let mut s = Snake::from_cells(
            &[Position::new(5, 5), Position::new(6, 5)],
            Direction::Left,
        );
        // Even forcing the snake back onto its neck does not reset it.
        s.direction = Direction::Right;
        assert_eq!(s.advance(), Advance::Moved { head: Position::new(6, 5) });
        assert_eq!(s.length(), 2);
    }

    #[test]
    fn reset_keeps_last_removed_tail() {
        let mut s = Snake::from_cells(&[px(100, 100), px(80, 100)], Direction::Right);
        s.advance();
        s.reset();
        assert_eq!(s.last_removed_tail(), Some(px(80, 100)));
    }
}
