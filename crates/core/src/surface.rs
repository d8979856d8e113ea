//! Display surface seam.
//!
//! A surface owns whatever actually shows pixels (terminal, window, file) and
//! receives one finished [`PixelBuffer`] per frame.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use crate::raster::PixelBuffer;

pub trait DisplaySurface: Send {
    fn window_width(&self) -> u32;

    fn window_height(&self) -> u32;

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        let _ = title;
        Ok(())
    }

    /// Show a finished frame. Called once per frame with a read-only buffer.
    fn present(&mut self, frame: &PixelBuffer) -> io::Result<()>;
}

#[derive(Debug, Default)]
struct Recorded {
    title: String,
    frames: u64,
    last: Option<PixelBuffer>,
}

/// In-memory surface that keeps the most recent frame.
///
/// Clones share the same recording, so a test can keep one handle while the
/// other is moved into a running simulation.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    width: u32,
    height: u32,
    fail_after: Option<u64>,
    recorded: Arc<Mutex<Recorded>>,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fail_after: None,
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    /// Surface whose `present` fails once `frames` frames have been shown.
    pub fn failing_after(width: u32, height: u32, frames: u64) -> Self {
        Self {
            fail_after: Some(frames),
            ..Self::new(width, height)
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .frames
    }

    pub fn last_frame(&self) -> Option<PixelBuffer> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last
            .clone()
    }

    pub fn title(&self) -> String {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .title
            .clone()
    }
}

impl DisplaySurface for MemorySurface {
    fn window_width(&self) -> u32 {
        self.width
    }

    fn window_height(&self) -> u32 {
        self.height
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .title = title.to_string();
        Ok(())
    }

    fn present(&mut self, frame: &PixelBuffer) -> io::Result<()> {
        let mut recorded = self.recorded.lock().unwrap_or_else(PoisonError::into_inner);
        if self.fail_after.is_some_and(|n| recorded.frames >= n) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "surface closed"));
        }
        recorded.frames += 1;
        match recorded.last.as_mut() {
            Some(last) if last.width() == frame.width() && last.height() == frame.height() => {
                last.clone_from(frame);
            }
            _ => recorded.last = Some(frame.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn clones_share_recording() {
        let surface = MemorySurface::new(2, 2);
        let mut moved = surface.clone();
        moved
            .present(&PixelBuffer::new(2, 2, Color::WHITE))
            .unwrap();
        assert_eq!(surface.frames_presented(), 1);
        assert_eq!(surface.last_frame().unwrap().get(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn failing_surface_errors_after_limit() {
        let mut surface = MemorySurface::failing_after(1, 1, 1);
        let frame = PixelBuffer::new(1, 1, Color::BLACK);
        assert!(surface.present(&frame).is_ok());
        assert!(surface.present(&frame).is_err());
        assert_eq!(surface.frames_presented(), 1);
    }
}
