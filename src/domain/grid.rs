//! Board geometry: fixed dimensions, cell positions and directions.
//!
//! Positions are stored in cell units. Pixel coordinates only exist at the
//! edges (`to_pixels` / `from_pixels`), so wraparound is a plain
//! `rem_euclid` on the grid size.

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / CELL_SIZE;

/// Simulation ticks per second.
pub const TICK_RATE: u32 = 20;
pub const INITIAL_LENGTH: usize = 1;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Board center, where the snake starts and respawns.
    pub const fn center() -> Self {
        Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)
    }

    /// Convert a pixel coordinate to the cell containing it.
    #[allow(dead_code)]
    pub fn from_pixels(px: i32, py: i32) -> Self {
        Position::new(px.div_euclid(CELL_SIZE), py.div_euclid(CELL_SIZE))
    }

    /// Top-left pixel of this cell.
    #[allow(dead_code)]
    pub fn to_pixels(self) -> (i32, i32) {
        (self.x * CELL_SIZE, self.y * CELL_SIZE)
    }

    /// One step in `dir`, re-entering from the opposite edge.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy).wrapped()
    }

    /// Fold any coordinate back onto the board (toroidal).
    pub fn wrapped(self) -> Self {
        Position::new(self.x.rem_euclid(GRID_WIDTH), self.y.rem_euclid(GRID_HEIGHT))
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit vector in cell units (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
