//! PixelView: maps a simulation `PixelBuffer` into a terminal framebuffer.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half-block glyph (foreground = top pixel, background = bottom pixel). The
//! image is scaled with nearest-neighbour sampling to fit the viewport while
//! keeping its aspect ratio, and centered. This module is pure (no I/O).

use pixel_bounce_core::PixelBuffer;

use crate::fb::{FrameBuffer, Rgb};

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the scaled image lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Left column of the image.
    pub x0: u16,
    /// Top row of the image.
    pub y0: u16,
    /// Image width in columns (one pixel per column).
    pub cols: u16,
    /// Image height in half-cell pixels (two per row).
    pub sub_rows: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct PixelView {
    letterbox: Rgb,
}

impl Default for PixelView {
    fn default() -> Self {
        Self {
            letterbox: Rgb::BLACK,
        }
    }
}

impl PixelView {
    pub fn new(letterbox: Rgb) -> Self {
        Self { letterbox }
    }

    pub fn place(&self, frame_w: u32, frame_h: u32, vp: Viewport) -> Placement {
        let avail_w = vp.width as u64;
        let avail_h = vp.height as u64 * 2;
        let (fw, fh) = (frame_w.max(1) as u64, frame_h.max(1) as u64);

        let (cols, sub_rows) = if fw * avail_h >= avail_w * fh {
            (avail_w, fh * avail_w / fw)
        } else {
            (fw * avail_h / fh, avail_h)
        };
        let (cols, sub_rows) = if avail_w == 0 || avail_h == 0 {
            (0, 0)
        } else {
            (cols.max(1), sub_rows.max(1))
        };

        let used_rows = sub_rows.div_ceil(2);
        Placement {
            x0: ((avail_w - cols) / 2) as u16,
            y0: ((vp.height as u64 - used_rows) / 2) as u16,
            cols: cols as u16,
            sub_rows: sub_rows as u32,
        }
    }

    pub fn render(&self, frame: &PixelBuffer, vp: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(vp.width, vp.height);
        self.render_into(frame, vp, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &PixelBuffer, vp: Viewport, fb: &mut FrameBuffer) {
        fb.reset(vp.width, vp.height, self.letterbox);

        let placement = self.place(frame.width(), frame.height(), vp);
        if placement.cols == 0 || placement.sub_rows == 0 {
            return;
        }

        let sample = |gx: u32, gy: u32| -> Rgb {
            if gy >= placement.sub_rows {
                return self.letterbox;
            }
            let sx = (gx as u64 * frame.width() as u64 / placement.cols as u64) as u32;
            let sy = (gy as u64 * frame.height() as u64 / placement.sub_rows as u64) as u32;
            frame.get(sx, sy).map(Rgb::from).unwrap_or(self.letterbox)
        };

        let rows = placement.sub_rows.div_ceil(2);
        for row in 0..rows {
            for col in 0..placement.cols as u32 {
                fb.put_pixels(
                    placement.x0 + col as u16,
                    placement.y0 + row as u16,
                    sample(col, row * 2),
                    sample(col, row * 2 + 1),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_viewport_places_nothing() {
        let p = PixelView::default().place(800, 600, Viewport::new(0, 0));
        assert_eq!(p.cols, 0);
        assert_eq!(p.sub_rows, 0);
    }

    #[test]
    fn wide_frame_is_width_limited_and_centered_vertically() {
        // 200x50 into 100 cols x 50 rows (100 sub-rows): scale 0.5 -> 100x25.
        let p = PixelView::default().place(200, 50, Viewport::new(100, 50));
        assert_eq!(p.cols, 100);
        assert_eq!(p.sub_rows, 25);
        assert_eq!(p.x0, 0);
        assert_eq!(p.y0, (50 - 13) / 2);
    }

    #[test]
    fn tall_frame_is_height_limited_and_centered_horizontally() {
        // 10x40 into 40 cols x 10 rows (20 sub-rows): scale 0.5 -> 5x20.
        let p = PixelView::default().place(10, 40, Viewport::new(40, 10));
        assert_eq!(p.sub_rows, 20);
        assert_eq!(p.cols, 5);
        assert_eq!(p.x0, 17);
        assert_eq!(p.y0, 0);
    }
}
