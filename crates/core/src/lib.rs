//! Simulation core - geometry, entities, collisions, rasterization and the frame loop
//!
//! Everything except the threaded [`Simulation`] driver is plain, synchronous
//! and deterministic, so it can be unit-tested without a display or a clock.
//!
//! # Module Structure
//!
//! - [`geometry`]: circle/rectangle overlap and pixel coverage predicates
//! - [`entity`]: moving shapes with border bounce and variant-pair dispatch
//! - [`collision`]: ordered pairwise sweep with collision-layer pruning
//! - [`raster`]: pixel buffer and painter's-order rasterizer
//! - [`scene`]: entity collection kept sorted by render layer
//! - [`timing`]: delta time, frame pacing and averages
//! - [`simulation`]: start/stop frame-cycle worker
//! - [`surface`]: the display seam plus an in-memory surface
//! - [`rng`]: seeded LCG for reproducible scenes
//!
//! # Example
//!
//! ```
//! use pixel_bounce_core::{Entity, PixelBuffer, Scene};
//! use pixel_bounce_types::Color;
//!
//! let mut scene = Scene::new(100, 100, Color::BLACK);
//! scene.add_entity(Entity::circle(10, 50, 50).unwrap().with_color(Color::new(0xff0000)));
//!
//! let mut buffer = PixelBuffer::new(100, 100, Color::BLACK);
//! scene.update(16.0);
//! scene.render(&mut buffer);
//!
//! assert_eq!(buffer.pixels()[50 * 100 + 50], 0xff0000);
//! assert_eq!(buffer.pixels()[0], 0x000000);
//! ```

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod raster;
pub mod rng;
pub mod scene;
pub mod simulation;
pub mod surface;
pub mod timing;

pub use pixel_bounce_types as types;

pub use collision::{sweep, CollisionResolver, IgnoreCollisions};
pub use entity::{Entity, FrameContext, Geometry, Shape};
pub use raster::{rasterize, PixelBuffer};
pub use rng::SimpleRng;
pub use scene::Scene;
pub use simulation::Simulation;
pub use surface::{DisplaySurface, MemorySurface};
pub use timing::{FrameStats, FrameTiming};
