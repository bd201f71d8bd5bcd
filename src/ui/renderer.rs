//! Presentation layer: double-buffered, diff-based terminal renderer.
//!
//! How it works:
//!   1. `clear` + `draw_cell` + `draw_status` build the next frame into `front`
//!   2. `present` compares each cell with `back` (previous frame)
//!   3. Only changed cells produce terminal commands, batched with `queue!`
//!   4. One flush per frame, then front/back swap
//!
//! A board cell is `CELL_W` terminal columns wide and one row high. Row 0
//! is the status line; the board starts at `BOARD_ROW`.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, SetTitle},
};

use crate::domain::grid::{Position, GRID_HEIGHT, GRID_WIDTH};
use crate::domain::palette::{self, Rgb};

/// Drawing surface the game loop renders into.
pub trait RenderSink {
    /// Start a new frame filled with `color`.
    fn clear(&mut self, color: Rgb);

    /// One board cell, filled with `fill` and outlined with `border`.
    fn draw_cell(&mut self, pos: Position, fill: Rgb, border: Rgb);

    /// One line of text above the board.
    fn draw_status(&mut self, _text: &str) {}

    /// Push the frame to the screen.
    fn present(&mut self) -> io::Result<()>;
}

pub const CELL_W: usize = 2;
const STATUS_ROW: usize = 0;
const BOARD_ROW: usize = 1;

/// Smallest terminal that fits the status line and the whole board.
pub const MIN_TERM_W: usize = GRID_WIDTH as usize * CELL_W;
pub const MIN_TERM_H: usize = BOARD_ROW + GRID_HEIGHT as usize;

fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// Top-left terminal (column, row) of a board cell.
pub fn cell_origin(pos: Position) -> (usize, usize) {
    (pos.x as usize * CELL_W, BOARD_ROW + pos.y as usize)
}

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    const BLANK: Cell = Cell { ch: ' ', fg: Color::White, bg: Color::Black };

    /// Never equal to a real cell, so the next flush repaints everything.
    const INVALID: Cell = Cell { ch: '?', fg: Color::Magenta, bg: Color::Magenta };
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer { width: w, height: h, cells: vec![Cell::BLANK; w * h] }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y). Each char occupies one column; overflow is clipped.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i, y, Cell { ch, fg, bg });
        }
    }

    /// Paint one board cell. A cell whose border matches its fill is drawn
    /// as plain background (used to erase).
    fn put_board_cell(&mut self, pos: Position, fill: Color, border: Color) {
        let (col, row) = cell_origin(pos);
        let (left, right) = if fill == border { (' ', ' ') } else { ('[', ']') };
        self.set(col, row, Cell { ch: left, fg: border, bg: fill });
        self.set(col + 1, row, Cell { ch: right, fg: border, bg: fill });
    }
}

// ── Renderer ──

pub struct TerminalRenderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    background: Color,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        TerminalRenderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            background: to_color(palette::BOARD_BACKGROUND),
        }
    }

    /// Take over the terminal. Fails before touching it if the window is too small.
    pub fn init(&mut self) -> io::Result<()> {
        let (tw, th) = terminal::size()?;
        let (tw, th) = (tw as usize, th as usize);
        if tw < MIN_TERM_W || th < MIN_TERM_H {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("terminal is {tw}x{th}, need at least {MIN_TERM_W}x{MIN_TERM_H}"),
            ));
        }
        tracing::info!(width = tw, height = th, "terminal size");

        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            SetTitle("Snake"),
            cursor::Hide,
            SetBackgroundColor(self.background),
            Clear(ClearType::All)
        )?;

        self.term_w = tw;
        self.term_h = th;
        self.front.resize(tw, th);
        self.back.resize(tw, th);
        // Force full repaint on first frame.
        self.back.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    fn check_resize(&mut self) {
        let Ok((tw, th)) = terminal::size() else { return };
        let (tw, th) = (tw as usize, th as usize);
        if tw == self.term_w && th == self.term_h {
            return;
        }
        tracing::debug!(width = tw, height = th, "terminal resized");
        self.term_w = tw;
        self.term_h = th;
        self.front.resize(tw, th);
        self.back.resize(tw, th);
        self.back.fill(Cell::INVALID);
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = self.background;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        queue!(self.writer, SetForegroundColor(last_fg), SetBackgroundColor(last_bg))?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }
                queue!(self.writer, Print(cell.ch))?;

                last_x = x;
                last_y = y;
            }
        }

        self.writer.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        TerminalRenderer::new()
    }
}

impl RenderSink for TerminalRenderer {
    fn clear(&mut self, color: Rgb) {
        self.check_resize();
        self.background = to_color(color);
        self.front.fill(Cell { ch: ' ', fg: Color::White, bg: self.background });
    }

    fn draw_cell(&mut self, pos: Position, fill: Rgb, border: Rgb) {
        self.front.put_board_cell(pos, to_color(fill), to_color(border));
    }

    fn draw_status(&mut self, text: &str) {
        let fg = to_color(palette::BORDER);
        self.front.put_str(0, STATUS_ROW, text, fg, self.background);
    }

    fn present(&mut self) -> io::Result<()> {
        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_fits_minimum_terminal() {
        assert_eq!(MIN_TERM_W, 64);
        assert_eq!(MIN_TERM_H, 25);
        let (col, row) = cell_origin(Position::new(GRID_WIDTH - 1, GRID_HEIGHT - 1));
        assert!(col + 1 < MIN_TERM_W);
        assert!(row < MIN_TERM_H);
    }

    #[test]
    fn cell_origin_skips_status_row() {
        assert_eq!(cell_origin(Position::new(0, 0)), (0, 1));
        assert_eq!(cell_origin(Position::new(3, 2)), (6, 3));
    }

    #[test]
    fn board_cell_is_two_columns_with_border() {
        let mut fb = FrameBuffer::new(MIN_TERM_W, MIN_TERM_H);
        let fill = to_color(palette::SNAKE);
        let border = to_color(palette::BORDER);
        fb.put_board_cell(Position::new(1, 0), fill, border);
        assert_eq!(fb.get(2, 1), Cell { ch: '[', fg: border, bg: fill });
        assert_eq!(fb.get(3, 1), Cell { ch: ']', fg: border, bg: fill });
        assert_eq!(fb.get(4, 1), Cell::BLANK);
    }

    #[test]
    fn matching_border_erases() {
        let mut fb = FrameBuffer::new(MIN_TERM_W, MIN_TERM_H);
        let bg = to_color(palette::BOARD_BACKGROUND);
        fb.put_board_cell(Position::new(0, 0), bg, bg);
        assert_eq!(fb.get(0, 1).ch, ' ');
        assert_eq!(fb.get(0, 1).bg, bg);
    }

    #[test]
    fn writes_outside_buffer_are_clipped() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(2, 0, "hello", Color::White, Color::Black);
        assert_eq!(fb.get(3, 0).ch, 'e');
        fb.set(10, 10, Cell::INVALID);
        assert_eq!(fb.get(10, 10), Cell::BLANK);
    }

    #[test]
    fn resize_resets_contents() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.fill(Cell::INVALID);
        fb.resize(3, 3);
        assert_eq!(fb.cells.len(), 9);
        assert!(fb.cells.iter().all(|c| *c == Cell::BLANK));
    }
}
