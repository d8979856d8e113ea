//! Shared types module - colors, defaults, configuration and errors
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the simulation core, the terminal surface and the binary alike.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WINDOW_WIDTH` | 800 | Pixel buffer width |
//! | `DEFAULT_WINDOW_HEIGHT` | 600 | Pixel buffer height |
//! | `DEFAULT_TARGET_FPS` | 60 | Frame pacing target |
//! | `DEFAULT_BACKGROUND` | `0x151525` | Background fill |
//! | `DEFAULT_CIRCLE_COLOR` | `0xffffff` | Circle fill when none is given |
//! | `DEFAULT_RECTANGLE_COLOR` | `0xffff00` | Rectangle fill when none is given |
//! | `DEBUG_SUMMARY_EVERY` | 100 | Frames between debug summaries |
//!
//! # Examples
//!
//! ```
//! use pixel_bounce_types::{Color, SimConfig};
//!
//! let red = Color::from_rgb(0xff, 0, 0);
//! assert_eq!(red.packed(), 0xff0000);
//!
//! let config = SimConfig::default().with_size(100, 100).with_background(Color::BLACK);
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;

pub use config::SimConfig;
pub use error::{ConfigError, SimError};

/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "game window";

/// Default pixel buffer width
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;

/// Default pixel buffer height
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Default frame pacing target (frames per second)
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Default background fill
pub const DEFAULT_BACKGROUND: Color = Color::new(0x151525);

/// Fill used by circles constructed without an explicit color
pub const DEFAULT_CIRCLE_COLOR: Color = Color::new(0xffffff);

/// Fill used by rectangles constructed without an explicit color
pub const DEFAULT_RECTANGLE_COLOR: Color = Color::new(0xffff00);

/// Number of frames between two periodic debug summaries
pub const DEBUG_SUMMARY_EVERY: u64 = 100;

/// Packed 24-bit RGB color (`0xRRGGBB`).
///
/// The upper byte is always zero; constructors mask it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    pub const fn new(packed: u32) -> Self {
        Self(packed & 0x00ff_ffff)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Parse a hex color (`ff0000`, `0xff0000` or `#ff0000`, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_bounce_types::Color;
    ///
    /// assert_eq!(Color::from_hex("#00ff00"), Some(Color::new(0x00ff00)));
    /// assert_eq!(Color::from_hex("0X151525"), Some(Color::new(0x151525)));
    /// assert_eq!(Color::from_hex("purple"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || digits.len() > 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::new)
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self::new(packed)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:06x}", self.0)
    }
}
