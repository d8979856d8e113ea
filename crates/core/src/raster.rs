//! Rasterizer and pixel buffer.
//!
//! Drawing is painter's order only: background first, then entities in the
//! order given. There is no depth buffer.

use crate::entity::Entity;
use crate::types::Color;

/// Window-sized buffer of packed `0xRRGGBB` pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill.packed(); len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.idx(x, y).map(|i| Color::new(self.pixels[i]))
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color.packed();
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.packed());
    }

    /// Paint the covered part of `entity`'s bounding box.
    pub fn draw_entity(&mut self, entity: &Entity) {
        let color = entity.color().packed();
        let bb = entity.bounding_box(self.width, self.height);
        for index in bb.indices(self.width) {
            if entity.covers(index, self.width) {
                self.pixels[index] = color;
            }
        }
    }
}

/// Fill with `background`, then draw `entities` in slice order.
///
/// Pass the entities already sorted by render layer so higher layers end up
/// on top.
pub fn rasterize(entities: &[Entity], background: Color, buffer: &mut PixelBuffer) {
    buffer.clear(background);
    for entity in entities {
        buffer.draw_entity(entity);
    }
}
