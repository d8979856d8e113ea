//! Shape geometry - pure overlap and coverage predicates
//!
//! All predicates work on integer pixel coordinates (positions are truncated
//! by the caller) and use strict inequalities: shapes that merely touch do not
//! overlap. Sums and differences are computed in `i64` and squares in `i128`, so
//! any `i32` coordinate or size is accepted without overflow.

/// A circle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

/// An axis-aligned rectangle in pixel coordinates, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Half-open pixel box `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Circle {
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    /// `[center - radius, center + radius)` on both axes.
    pub fn bounding_box(&self) -> BoundingBox {
        let (cx, cy, r) = (self.cx as i64, self.cy as i64, self.radius as i64);
        BoundingBox {
            left: cx - r,
            top: cy - r,
            right: cx + r,
            bottom: cy + r,
        }
    }
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            left: self.x as i64,
            top: self.y as i64,
            right: self.right(),
            bottom: self.bottom(),
        }
    }

    fn corners(&self) -> [(i64, i64); 4] {
        let (l, t, r, b) = (self.x as i64, self.y as i64, self.right(), self.bottom());
        [(l, t), (l, b), (r, t), (r, b)]
    }
}

impl BoundingBox {
    /// Clip to the window `[0, width) x [0, height)`.
    ///
    /// A box entirely outside the window clips to an empty box.
    pub fn clipped(&self, width: u32, height: u32) -> BoundingBox {
        let left = self.left.clamp(0, width as i64);
        let top = self.top.clamp(0, height as i64);
        BoundingBox {
            left,
            top,
            right: self.right.clamp(left, width as i64),
            bottom: self.bottom.clamp(top, height as i64),
        }
    }

    pub fn width(&self) -> usize {
        (self.right - self.left).max(0) as usize
    }

    pub fn height(&self) -> usize {
        (self.bottom - self.top).max(0) as usize
    }

    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major flat indices into a buffer `window_width` pixels wide.
    ///
    /// Callers must clip first; indices of an unclipped box are meaningless.
    pub fn indices(&self, window_width: u32) -> impl Iterator<Item = usize> {
        let stride = window_width as usize;
        let (left, right) = (self.left.max(0) as usize, self.right.max(0) as usize);
        (self.top.max(0) as usize..self.bottom.max(0) as usize)
            .flat_map(move |y| (left..right).map(move |x| y * stride + x))
    }
}

#[inline]
fn distance_sq(ax: i64, ay: i64, bx: i64, by: i64) -> i128 {
    let dx = (bx - ax) as i128;
    let dy = (by - ay) as i128;
    dx * dx + dy * dy
}

#[inline]
fn square(v: i64) -> i128 {
    let v = v as i128;
    v * v
}

/// Boxes overlap on both axes and centers are closer than the sum of radii.
pub fn circle_overlaps_circle(a: &Circle, b: &Circle) -> bool {
    let (ax, ay, ar) = (a.cx as i64, a.cy as i64, a.radius as i64);
    let (bx, by, br) = (b.cx as i64, b.cy as i64, b.radius as i64);

    ax - ar < bx + br
        && ax + ar > bx - br
        && ay - ar < by + br
        && ay + ar > by - br
        && distance_sq(ax, ay, bx, by) < square(ar + br)
}

/// Approximate circle/rectangle intersection.
///
/// Boxes must overlap, and then either the center lies strictly inside the
/// rectangle's horizontal or vertical span, or one of the rectangle's corners
/// lies strictly inside the radius. Near corners this can disagree with exact
/// intersection in both directions.
pub fn circle_overlaps_rect(circle: &Circle, rect: &Rect) -> bool {
    let (cx, cy, r) = (circle.cx as i64, circle.cy as i64, circle.radius as i64);
    let (left, top, right, bottom) = (rect.x as i64, rect.y as i64, rect.right(), rect.bottom());

    let boxes_overlap = cx - r < right && cx + r > left && cy - r < bottom && cy + r > top;
    if !boxes_overlap {
        return false;
    }

    let within_span = (cx > left && cx < right) || (cy > top && cy < bottom);
    within_span
        || rect
            .corners()
            .iter()
            .any(|&(px, py)| distance_sq(cx, cy, px, py) < square(r))
}

/// Standard AABB overlap; touching edges do not overlap.
pub fn rect_overlaps_rect(a: &Rect, b: &Rect) -> bool {
    (a.x as i64) < b.right()
        && a.right() > b.x as i64
        && (a.y as i64) < b.bottom()
        && a.bottom() > b.y as i64
}

/// Pixel coverage for circles.
///
/// The Manhattan test is an early accept; the Euclidean test is decisive.
pub fn point_in_circle(px: i64, py: i64, circle: &Circle) -> bool {
    let (cx, cy) = (circle.cx as i64, circle.cy as i64);
    let r = circle.radius as i64;

    (px - cx).abs() + (py - cy).abs() < r || distance_sq(cx, cy, px, py) < square(r)
}

/// Pixel coverage for rectangles: everything inside the box is covered.
pub fn point_in_rect(px: i64, py: i64, rect: &Rect) -> bool {
    px >= rect.x as i64 && px < rect.right() && py >= rect.y as i64 && py < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangent_circles_do_not_overlap() {
        let a = Circle::new(0, 0, 5);
        let b = Circle::new(10, 0, 5);
        assert!(!circle_overlaps_circle(&a, &b));

        let c = Circle::new(9, 0, 5);
        assert!(circle_overlaps_circle(&a, &c));
    }

    #[test]
    fn diagonal_circles_with_overlapping_boxes_can_miss() {
        // Boxes overlap at the corner but the distance is 8*sqrt(2) > 10.
        let a = Circle::new(0, 0, 5);
        let b = Circle::new(8, 8, 5);
        assert!(!circle_overlaps_circle(&a, &b));
    }

    #[test]
    fn touching_rectangles_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!rect_overlaps_rect(&a, &b));
        assert!(rect_overlaps_rect(&a, &Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn circle_center_inside_rect_span_overlaps() {
        let rect = Rect::new(10, 10, 20, 20);
        // Center horizontally inside the span, above the rectangle.
        assert!(circle_overlaps_rect(&Circle::new(20, 5, 6), &rect));
        // Same column but too far to reach.
        assert!(!circle_overlaps_rect(&Circle::new(20, 0, 10), &rect));
    }

    #[test]
    fn circle_near_corner_uses_corner_distance() {
        let rect = Rect::new(10, 10, 20, 20);
        // Diagonal from the top-left corner at distance sqrt(18) < 5.
        assert!(circle_overlaps_rect(&Circle::new(7, 7, 5), &rect));
        // Boxes overlap but the corner is at distance sqrt(32) > 5.
        assert!(!circle_overlaps_rect(&Circle::new(6, 6, 5), &rect));
    }

    #[test]
    fn circle_on_rect_edge_line_falls_back_to_corners() {
        // Center sits on the left edge line, so neither span test is strict;
        // only the corner distance can report the overlap.
        let rect = Rect::new(10, 10, 20, 20);
        assert!(circle_overlaps_rect(&Circle::new(10, 0, 11), &rect));
        assert!(!circle_overlaps_rect(&Circle::new(10, 0, 10), &rect));
    }

    #[test]
    fn extreme_sizes_and_coordinates_do_not_overflow() {
        let huge = Circle::new(0, 0, i32::MAX);
        assert!(circle_overlaps_circle(&huge, &Circle::new(10, 10, i32::MAX)));
        // Centers 2^32 - 11 apart, radii summing to 2^32 - 2.
        assert!(circle_overlaps_circle(
            &Circle::new(i32::MIN, 0, i32::MAX),
            &Circle::new(i32::MAX - 10, 0, i32::MAX),
        ));
        assert!(!circle_overlaps_circle(
            &Circle::new(i32::MIN, i32::MIN, i32::MAX),
            &Circle::new(i32::MAX, i32::MAX, i32::MAX),
        ));
        assert!(!circle_overlaps_circle(
            &Circle::new(i32::MIN, 0, 1),
            &Circle::new(i32::MAX, 0, 1),
        ));

        let wide = Rect::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        let far = Circle::new(i32::MIN, i32::MIN, i32::MAX);
        assert!(!circle_overlaps_rect(&far, &wide));
        assert!(circle_overlaps_rect(&huge, &Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX)));

        assert!(point_in_circle(0, 0, &huge));
        assert!(!point_in_circle(u32::MAX as i64, u32::MAX as i64, &Circle::new(i32::MIN, i32::MIN, 1)));
    }

    #[test]
    fn point_coverage_for_circle_excludes_rim() {
        let c = Circle::new(10, 10, 3);
        assert!(point_in_circle(10, 10, &c));
        assert!(point_in_circle(12, 11, &c));
        assert!(point_in_circle(12, 12, &c));
        assert!(!point_in_circle(13, 10, &c));
        assert!(!point_in_circle(13, 11, &c));
    }

    #[test]
    fn bounding_box_clips_to_window() {
        let bb = Circle::new(2, 2, 5).bounding_box().clipped(100, 100);
        assert_eq!(
            bb,
            BoundingBox {
                left: 0,
                top: 0,
                right: 7,
                bottom: 7
            }
        );
        assert_eq!(bb.len(), 49);
    }

    #[test]
    fn bounding_box_outside_window_is_empty() {
        let bb = Rect::new(-50, -50, 10, 10).bounding_box().clipped(100, 100);
        assert!(bb.is_empty());
        assert_eq!(bb.indices(100).count(), 0);

        let bb = Rect::new(150, 20, 10, 10).bounding_box().clipped(100, 100);
        assert!(bb.is_empty());
    }

    #[test]
    fn indices_are_row_major() {
        let bb = Rect::new(1, 1, 2, 2).bounding_box().clipped(4, 4);
        let idx: Vec<usize> = bb.indices(4).collect();
        assert_eq!(idx, vec![5, 6, 9, 10]);
    }
}
