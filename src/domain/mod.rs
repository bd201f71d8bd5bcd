pub mod food;
pub mod grid;
pub mod palette;
pub mod snake;
