//! Pixel Bounce (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` so binaries, tests and
//! benches can use a single `pixel_bounce::{core, term, types}` path.

pub use pixel_bounce_core as core;
pub use pixel_bounce_term as term;
pub use pixel_bounce_types as types;
