//! Collision engine - ordered pairwise sweep with layer pruning
//!
//! The sweep walks the render-layer-sorted entity list. For each entity `i`
//! that participates in entity collisions it checks every later entity `j`,
//! and stops scanning `i` at the first `j` whose collision layer is greater
//! than `i`'s.
//!
//! Caveat: the pruning assumes collision layers never decrease along the list,
//! but the list is only ordered by *render* layer. When the two orderings
//! disagree, valid overlaps after the first higher collision layer are never
//! reported. This is the established behavior and callers rely on it.

use crate::entity::Entity;

/// Hook invoked once for every detected pair.
///
/// The default implementation does nothing; implement it to add real
/// collision response (impulses, damage, ...).
pub trait CollisionResolver: Send {
    /// `checking` precedes `checked` in render order.
    fn resolve(&mut self, checking: &mut Entity, checked: &mut Entity) {
        let _ = (checking, checked);
    }
}

/// Resolver that leaves both entities untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreCollisions;

impl CollisionResolver for IgnoreCollisions {}

/// Run one collision sweep and return the number of pairs handed to `resolver`.
pub fn sweep(entities: &mut [Entity], resolver: &mut dyn CollisionResolver) -> usize {
    let mut resolved = 0;

    for i in 0..entities.len() {
        if !entities[i].collides_with_entities() {
            continue;
        }

        for j in (i + 1)..entities.len() {
            let (checking, checked) = (&entities[i], &entities[j]);
            if checked.collision_layer() > checking.collision_layer() {
                break;
            }
            if !checked.collides_with_entities() || !checking.collides_with(checked) {
                continue;
            }

            let (head, tail) = entities.split_at_mut(j);
            resolver.resolve(&mut head[i], &mut tail[0]);
            resolved += 1;
        }
    }

    resolved
}
