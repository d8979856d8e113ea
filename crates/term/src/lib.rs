//! Terminal display surface for the simulation.
//!
//! Renders the simulation's pixel buffer into a cell framebuffer (two pixels
//! per cell via half-block glyphs) and flushes it to a truecolor terminal with
//! crossterm, redrawing only changed runs of cells.

pub mod fb;
pub mod pixel_view;
pub mod renderer;
pub mod surface;

pub use pixel_bounce_core as core;
pub use pixel_bounce_types as types;

pub use fb::{Cell, FrameBuffer, Rgb};
pub use pixel_view::{Placement, PixelView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
