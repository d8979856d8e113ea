//! Terminal cell grid for half-block presentation.
//!
//! Each cell shows two vertically stacked pixels: the upper one as the
//! foreground of `▀`, the lower one as its background.

use pixel_bounce_types::Color;

pub const UPPER_HALF: char = '▀';

/// 24-bit RGB color as sent to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb {
    fn from(c: Color) -> Self {
        Self::new(c.r(), c.g(), c.b())
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Color::new(packed).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Cell {
    /// Two stacked pixels, `top` over `bottom`.
    pub const fn pixels(top: Rgb, bottom: Rgb) -> Self {
        Self {
            ch: UPPER_HALF,
            fg: top,
            bg: bottom,
        }
    }

    /// An empty cell painted entirely in `color`.
    pub const fn blank(color: Rgb) -> Self {
        Self {
            ch: ' ',
            fg: color,
            bg: color,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::BLACK)
    }
}

/// Row-major grid of cells sized to the terminal viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.reset(width, height, Rgb::BLACK);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reshape to `width x height` and blank every cell with `color`.
    ///
    /// The allocation is reused across frames.
    pub fn reset(&mut self, width: u16, height: u16, color: Rgb) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::blank(color));
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Write a pixel pair into cell `(x, y)`; out-of-range cells are ignored.
    pub fn put_pixels(&mut self, x: u16, y: u16, top: Rgb, bottom: Rgb) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = Cell::pixels(top, bottom);
        }
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
