//! Fixed colors. Kept backend-neutral; the renderer maps them to terminal colors.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

pub const BOARD_BACKGROUND: Rgb = Rgb::new(0, 0, 0);
pub const BORDER: Rgb = Rgb::new(93, 216, 228);
pub const APPLE: Rgb = Rgb::new(255, 0, 0);
pub const SNAKE: Rgb = Rgb::new(0, 255, 0);
