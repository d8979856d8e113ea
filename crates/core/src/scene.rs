//! Scene: the entity collection and the per-frame update pipeline.
//!
//! Entities are appended in insertion order. Any append marks the collection
//! dirty; the next [`Scene::update`] stable-sorts by render layer before
//! anything iterates, so equal layers keep their insertion order.

use std::fmt;

use tracing::debug;

use crate::collision::{self, CollisionResolver, IgnoreCollisions};
use crate::entity::{Entity, FrameContext};
use crate::raster::{self, PixelBuffer};
use crate::types::Color;

pub struct Scene {
    width: u32,
    height: u32,
    background: Color,
    entities: Vec<Entity>,
    needs_sort: bool,
    resolver: Box<dyn CollisionResolver>,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .field("entities", &self.entities.len())
            .field("needs_sort", &self.needs_sort)
            .finish()
    }
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            entities: Vec::new(),
            needs_sort: false,
            resolver: Box::new(IgnoreCollisions),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn set_resolver(&mut self, resolver: Box<dyn CollisionResolver>) {
        self.resolver = resolver;
    }

    pub fn add_entity(&mut self, entity: Entity) {
        debug!(
            render_layer = entity.render_layer(),
            collision_layer = entity.collision_layer(),
            "entity added"
        );
        self.entities.push(entity);
        self.needs_sort = true;
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in their current order (insertion order until the next sort).
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn needs_sort(&self) -> bool {
        self.needs_sort
    }

    /// Stable-sort by render layer if anything was added since the last sort.
    pub fn sort_if_needed(&mut self) -> bool {
        if !self.needs_sort {
            return false;
        }
        self.entities.sort_by_key(Entity::render_layer);
        self.needs_sort = false;
        true
    }

    /// Sort, move every entity by `delta_ms`, then run the collision sweep.
    ///
    /// Returns the number of colliding pairs handed to the resolver.
    pub fn update(&mut self, delta_ms: f64) -> usize {
        self.sort_if_needed();

        let ctx = FrameContext::new(self.width, self.height, delta_ms);
        for entity in &mut self.entities {
            entity.update_position(&ctx);
        }

        collision::sweep(&mut self.entities, self.resolver.as_mut())
    }

    /// Paint background and entities into `buffer`.
    pub fn render(&mut self, buffer: &mut PixelBuffer) {
        self.sort_if_needed();
        raster::rasterize(&self.entities, self.background, buffer);
    }
}
