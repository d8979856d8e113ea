//! Entity module - moving, collidable, drawable shapes
//!
//! An [`Entity`] stores its anchor (circle center or rectangle top-left) as
//! `f64` so sub-pixel motion accumulates across frames, while every geometric
//! query sees the truncated integer position.
//!
//! Entities do not hold a reference to the simulation that owns them. Window
//! size and elapsed time are passed in through a [`FrameContext`].

use std::fmt;

use crate::geometry::{self, BoundingBox, Circle, Rect};
use crate::types::{Color, ConfigError, DEFAULT_CIRCLE_COLOR, DEFAULT_RECTANGLE_COLOR};

/// Per-frame inputs an entity needs from its owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub window_width: u32,
    pub window_height: u32,
    /// Milliseconds elapsed since the previous frame.
    pub delta_ms: f64,
}

impl FrameContext {
    pub fn new(window_width: u32, window_height: u32, delta_ms: f64) -> Self {
        Self {
            window_width,
            window_height,
            delta_ms,
        }
    }
}

/// Shape variant and its integer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle { radius: i32 },
    Rectangle { width: i32, height: i32 },
}

/// Integer geometry of an entity at its current (truncated) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Circle(Circle),
    Rect(Rect),
}

impl Geometry {
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Geometry::Circle(c) => c.bounding_box(),
            Geometry::Rect(r) => r.bounding_box(),
        }
    }

    pub fn overlaps(&self, other: &Geometry) -> bool {
        match (self, other) {
            (Geometry::Circle(a), Geometry::Circle(b)) => geometry::circle_overlaps_circle(a, b),
            (Geometry::Circle(c), Geometry::Rect(r)) | (Geometry::Rect(r), Geometry::Circle(c)) => {
                geometry::circle_overlaps_rect(c, r)
            }
            (Geometry::Rect(a), Geometry::Rect(b)) => geometry::rect_overlaps_rect(a, b),
        }
    }

    pub fn covers_point(&self, px: i64, py: i64) -> bool {
        match self {
            Geometry::Circle(c) => geometry::point_in_circle(px, py, c),
            Geometry::Rect(r) => geometry::point_in_rect(px, py, r),
        }
    }
}

/// A shape moving through the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    shape: Shape,
    x: f64,
    y: f64,
    /// Velocity in pixels per second.
    dx: i32,
    dy: i32,
    color: Color,
    render_layer: i32,
    collision_layer: i32,
    borders_enabled: bool,
    collides_with_entities: bool,
}

impl Entity {
    /// Circle centered at `(cx, cy)`.
    ///
    /// Fails if `radius < 1`.
    pub fn circle(radius: i32, cx: i32, cy: i32) -> Result<Self, ConfigError> {
        if radius < 1 {
            return Err(ConfigError::RadiusTooSmall(radius));
        }
        Ok(Self::with_shape(
            Shape::Circle { radius },
            cx,
            cy,
            DEFAULT_CIRCLE_COLOR,
        ))
    }

    /// Rectangle with top-left corner at `(x, y)`.
    ///
    /// Fails if `width < 1` or `height < 1`.
    pub fn rectangle(x: i32, y: i32, width: i32, height: i32) -> Result<Self, ConfigError> {
        if width < 1 {
            return Err(ConfigError::WidthTooSmall(width));
        }
        if height < 1 {
            return Err(ConfigError::HeightTooSmall(height));
        }
        Ok(Self::with_shape(
            Shape::Rectangle { width, height },
            x,
            y,
            DEFAULT_RECTANGLE_COLOR,
        ))
    }

    fn with_shape(shape: Shape, x: i32, y: i32, color: Color) -> Self {
        Self {
            shape,
            x: x as f64,
            y: y as f64,
            dx: 0,
            dy: 0,
            color,
            render_layer: 0,
            collision_layer: 0,
            borders_enabled: false,
            collides_with_entities: false,
        }
    }

    pub fn with_velocity(mut self, dx: i32, dy: i32) -> Self {
        self.set_velocity(dx, dy);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_render_layer(mut self, layer: i32) -> Self {
        self.render_layer = layer;
        self
    }

    pub fn with_collision_layer(mut self, layer: i32) -> Self {
        self.collision_layer = layer;
        self
    }

    pub fn with_borders(mut self, enabled: bool) -> Self {
        self.borders_enabled = enabled;
        self
    }

    pub fn with_entity_collisions(mut self, enabled: bool) -> Self {
        self.collides_with_entities = enabled;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Anchor position truncated toward zero (not rounded).
    pub fn position(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// Anchor position with its sub-pixel remainder.
    pub fn exact_position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn render_layer(&self) -> i32 {
        self.render_layer
    }

    pub fn collision_layer(&self) -> i32 {
        self.collision_layer
    }

    pub fn borders_enabled(&self) -> bool {
        self.borders_enabled
    }

    pub fn collides_with_entities(&self) -> bool {
        self.collides_with_entities
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x as f64;
        self.y = y as f64;
    }

    pub fn set_velocity(&mut self, dx: i32, dy: i32) {
        self.dx = dx;
        self.dy = dy;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_borders_enabled(&mut self, enabled: bool) {
        self.borders_enabled = enabled;
    }

    pub fn set_collides_with_entities(&mut self, enabled: bool) {
        self.collides_with_entities = enabled;
    }

    pub fn geometry(&self) -> Geometry {
        let (x, y) = self.position();
        match self.shape {
            Shape::Circle { radius } => Geometry::Circle(Circle::new(x, y, radius)),
            Shape::Rectangle { width, height } => Geometry::Rect(Rect::new(x, y, width, height)),
        }
    }

    /// Advance by velocity × elapsed seconds, then bounce off the window
    /// borders if enabled.
    ///
    /// Bouncing only redirects velocity inward; the position is never clamped,
    /// so an entity may overlap a border for a frame.
    pub fn update_position(&mut self, ctx: &FrameContext) {
        let dt_sec = ctx.delta_ms / 1000.0;

        self.x += self.dx as f64 * dt_sec;
        self.y += self.dy as f64 * dt_sec;

        if self.borders_enabled {
            self.bounce_off_borders(ctx.window_width, ctx.window_height);
        }
    }

    fn bounce_off_borders(&mut self, window_width: u32, window_height: u32) {
        let bb = self.geometry().bounding_box();
        let (w, h) = (window_width as i64, window_height as i64);

        if bb.right > w {
            self.dx = -self.dx.abs();
        } else if bb.left < 0 {
            self.dx = self.dx.abs();
        }

        if bb.bottom > h {
            self.dy = -self.dy.abs();
        } else if bb.top < 0 {
            self.dy = self.dy.abs();
        }
    }

    /// Overlap test against another entity, dispatched on the variant pair.
    pub fn collides_with(&self, other: &Entity) -> bool {
        self.geometry().overlaps(&other.geometry())
    }

    /// Bounding box clipped to `[0, window_width) x [0, window_height)`.
    pub fn bounding_box(&self, window_width: u32, window_height: u32) -> BoundingBox {
        self.geometry()
            .bounding_box()
            .clipped(window_width, window_height)
    }

    /// Flat pixel indices of the clipped bounding box.
    ///
    /// Pixels outside the window are omitted, so the result may be shorter than
    /// the full box (`(2·radius)²` or `width·height`).
    pub fn bounding_box_pixels(&self, window_width: u32, window_height: u32) -> Vec<usize> {
        self.bounding_box(window_width, window_height)
            .indices(window_width)
            .collect()
    }

    /// Whether the pixel at flat `index` lies inside the shape.
    pub fn covers(&self, index: usize, window_width: u32) -> bool {
        let stride = window_width.max(1) as usize;
        let px = (index % stride) as i64;
        let py = (index / stride) as i64;
        self.geometry().covers_point(px, py)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.position();
        match self.shape {
            Shape::Circle { radius } => write!(
                f,
                "Circle with radius: {radius}, center x: {x}, center y: {y}, dx: {}, dy: {}, and color: {}",
                self.dx, self.dy, self.color
            ),
            Shape::Rectangle { width, height } => write!(
                f,
                "Rectangle with width: {width}, height: {height}, top left x: {x}, top left y: {y}, dx: {}, dy: {}, and color: {}",
                self.dx, self.dy, self.color
            ),
        }
    }
}
