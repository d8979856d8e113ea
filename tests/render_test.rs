use pixel_bounce::core::{Entity, PixelBuffer, Scene};
use pixel_bounce::types::Color;

#[test]
fn single_circle_end_to_end() {
    let mut scene = Scene::new(100, 100, Color::BLACK);
    scene.add_entity(
        Entity::circle(10, 50, 50)
            .unwrap()
            .with_color(Color::new(0xff0000)),
    );

    let mut buffer = PixelBuffer::new(100, 100, Color::WHITE);
    scene.update(16.0);
    scene.render(&mut buffer);

    assert_eq!(buffer.pixels()[50 * 100 + 50], 0xff0000);
    assert_eq!(buffer.pixels()[0], 0x000000);
}

#[test]
fn render_layers_sort_ascending_and_top_layer_wins() {
    let mut scene = Scene::new(40, 40, Color::BLACK);
    scene.add_entity(
        Entity::rectangle(10, 10, 10, 10)
            .unwrap()
            .with_render_layer(3)
            .with_color(Color::new(0x000003)),
    );
    scene.add_entity(
        Entity::rectangle(5, 5, 10, 10)
            .unwrap()
            .with_render_layer(1)
            .with_color(Color::new(0x000001)),
    );
    scene.add_entity(
        Entity::circle(3, 30, 30)
            .unwrap()
            .with_render_layer(2)
            .with_color(Color::new(0x000002)),
    );

    let mut buffer = PixelBuffer::new(40, 40, Color::BLACK);
    scene.render(&mut buffer);

    let layers: Vec<i32> = scene.entities().iter().map(Entity::render_layer).collect();
    assert_eq!(layers, vec![1, 2, 3]);

    // (12, 12) is inside both the layer-1 and layer-3 rectangles.
    assert_eq!(buffer.get(12, 12), Some(Color::new(0x000003)));
    // Only layer 1 covers (6, 6).
    assert_eq!(buffer.get(6, 6), Some(Color::new(0x000001)));
    assert_eq!(buffer.get(30, 30), Some(Color::new(0x000002)));
}

#[test]
fn negative_render_layers_draw_first() {
    let mut scene = Scene::new(10, 10, Color::BLACK);
    scene.add_entity(
        Entity::rectangle(0, 0, 10, 10)
            .unwrap()
            .with_render_layer(0)
            .with_color(Color::new(0xaaaaaa)),
    );
    scene.add_entity(
        Entity::rectangle(0, 0, 10, 10)
            .unwrap()
            .with_render_layer(-4)
            .with_color(Color::new(0x111111)),
    );

    let mut buffer = PixelBuffer::new(10, 10, Color::BLACK);
    scene.render(&mut buffer);
    assert!(buffer.pixels().iter().all(|&p| p == 0xaaaaaa));
}

#[test]
fn background_change_applies_next_frame() {
    let mut scene = Scene::new(8, 8, Color::BLACK);
    let mut buffer = PixelBuffer::new(8, 8, Color::BLACK);
    scene.render(&mut buffer);
    assert_eq!(buffer.pixels()[0], 0x000000);

    scene.set_background(Color::new(0x151525));
    scene.render(&mut buffer);
    assert!(buffer.pixels().iter().all(|&p| p == 0x151525));
}

#[test]
fn moving_circle_repaints_at_new_position() {
    let mut scene = Scene::new(100, 20, Color::BLACK);
    scene.add_entity(
        Entity::circle(4, 10, 10)
            .unwrap()
            .with_velocity(1000, 0)
            .with_color(Color::WHITE),
    );

    let mut buffer = PixelBuffer::new(100, 20, Color::BLACK);
    scene.update(50.0);
    scene.render(&mut buffer);

    assert_eq!(buffer.get(10, 10), Some(Color::BLACK));
    assert_eq!(buffer.get(60, 10), Some(Color::WHITE));
}
