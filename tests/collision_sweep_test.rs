//! Collision sweep ordering and collision-layer pruning.
//!
//! The sweep runs over entities sorted by render layer, but prunes on
//! collision layer. These tests pin that coupling down, including the case
//! where it hides a real overlap.

use pixel_bounce::core::{sweep, CollisionResolver, Entity, Scene};
use pixel_bounce::types::Color;

#[derive(Default)]
struct Recorder {
    pairs: Vec<(i32, i32)>,
}

impl CollisionResolver for Recorder {
    fn resolve(&mut self, checking: &mut Entity, checked: &mut Entity) {
        self.pairs
            .push((checking.render_layer(), checked.render_layer()));
    }
}

fn overlapping_ball(render: i32, collision: i32) -> Entity {
    Entity::circle(10, 50, 50)
        .unwrap()
        .with_render_layer(render)
        .with_collision_layer(collision)
        .with_entity_collisions(true)
}

fn count_collisions(entities: Vec<Entity>) -> usize {
    let mut scene = Scene::new(100, 100, Color::BLACK);
    for e in entities {
        scene.add_entity(e);
    }
    scene.update(0.0)
}

#[test]
fn sweep_runs_after_render_layer_sort() {
    // Sorted by render layer: (render=1, collision=5), (render=2, collision=1).
    let found = count_collisions(vec![overlapping_ball(2, 1), overlapping_ball(1, 5)]);
    assert_eq!(found, 1);
}

#[test]
fn higher_collision_layer_after_lower_hides_overlap() {
    // Sorted by render layer: (render=1, collision=1), (render=2, collision=5).
    // The second entity's higher collision layer stops the scan for the first,
    // so this genuine overlap is never reported.
    let found = count_collisions(vec![overlapping_ball(2, 5), overlapping_ball(1, 1)]);
    assert_eq!(found, 0);
}

#[test]
fn pruning_follows_render_order_not_collision_order() {
    // The same two entities with render layers swapped are found again.
    let found = count_collisions(vec![overlapping_ball(1, 5), overlapping_ball(2, 1)]);
    assert_eq!(found, 1);
}

#[test]
fn scan_stops_at_first_mismatch_not_just_skips_it() {
    let found = count_collisions(vec![
        overlapping_ball(1, 2),
        // Far away and on a higher collision layer.
        Entity::circle(3, 5, 5)
            .unwrap()
            .with_render_layer(2)
            .with_collision_layer(3)
            .with_entity_collisions(true),
        overlapping_ball(3, 0),
    ]);
    assert_eq!(found, 0);
}

#[test]
fn resolver_sees_pairs_in_render_order() {
    let mut scene = Scene::new(100, 100, Color::BLACK);
    scene.add_entity(overlapping_ball(3, 0));
    scene.add_entity(overlapping_ball(1, 0));
    scene.add_entity(overlapping_ball(2, 0));
    scene.sort_if_needed();

    let mut entities = scene.entities().to_vec();
    let mut recorder = Recorder::default();
    assert_eq!(sweep(&mut entities, &mut recorder), 3);
    assert_eq!(recorder.pairs, vec![(1, 2), (1, 3), (2, 3)]);
}

#[test]
fn non_participating_entities_are_skipped() {
    let found = count_collisions(vec![
        overlapping_ball(1, 0).with_entity_collisions(false),
        overlapping_ball(2, 0),
        overlapping_ball(3, 0).with_entity_collisions(false),
    ]);
    assert_eq!(found, 0);
}

#[test]
fn mixed_shapes_collide() {
    let found = count_collisions(vec![
        overlapping_ball(1, 0),
        Entity::rectangle(55, 40, 20, 20)
            .unwrap()
            .with_render_layer(2)
            .with_entity_collisions(true),
    ]);
    assert_eq!(found, 1);
}
