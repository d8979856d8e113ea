//! Terminal display surface.

use std::io;

use pixel_bounce_core::{DisplaySurface, PixelBuffer};

use crate::fb::FrameBuffer;
use crate::pixel_view::{PixelView, Viewport};
use crate::renderer::TerminalRenderer;

/// Presents simulation frames in the current terminal.
///
/// Raw mode and the alternate screen are left to the caller
/// ([`TerminalRenderer::enter`] / [`TerminalRenderer::exit`]), since the
/// surface itself moves into the frame worker.
///
/// The logical window size is fixed at construction; the image is rescaled to
/// whatever the terminal size is at each frame.
pub struct TerminalSurface {
    width: u32,
    height: u32,
    renderer: TerminalRenderer,
    view: PixelView,
    fb: FrameBuffer,
    viewport: Option<Viewport>,
}

impl TerminalSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            renderer: TerminalRenderer::new(),
            view: PixelView::default(),
            fb: FrameBuffer::new(0, 0),
            viewport: None,
        }
    }
}

impl DisplaySurface for TerminalSurface {
    fn window_width(&self) -> u32 {
        self.width
    }

    fn window_height(&self) -> u32 {
        self.height
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        self.renderer.set_title(title).map_err(io::Error::other)
    }

    fn present(&mut self, frame: &PixelBuffer) -> io::Result<()> {
        let (cols, rows) = crossterm::terminal::size()?;
        let viewport = Viewport::new(cols, rows);
        if self.viewport != Some(viewport) {
            self.renderer.invalidate();
            self.viewport = Some(viewport);
        }

        self.view.render_into(frame, viewport, &mut self.fb);
        self.renderer
            .draw_swap(&mut self.fb)
            .map_err(io::Error::other)
    }
}
