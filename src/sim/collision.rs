//! Axis-aligned box overlap tests
//!
//! Every interaction in the maze (walls, pickups, pursuer encounters) reduces
//! to "do these two boxes overlap". Edges that only touch do not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left corner plus size, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Same box shifted by `delta`
    #[inline]
    pub fn offset(&self, delta: Vec2) -> Self {
        Self::new(self.pos + delta, self.size)
    }
}

/// Strict overlap on both axes. Symmetric and side-effect free.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// True if `rect` overlaps any of `obstacles`
pub fn overlaps_any<'a>(rect: &Rect, obstacles: impl IntoIterator<Item = &'a Rect>) -> bool {
    obstacles.into_iter().any(|o| overlaps(rect, o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));

        let below = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_partial_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.5, 9.5, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_contained_box_overlaps() {
        // Food pellet sitting inside a tile-sized agent
        let agent = rect(32.0, 32.0, 32.0, 32.0);
        let food = rect(46.0, 46.0, 4.0, 4.0);
        assert!(overlaps(&agent, &food));
        assert!(overlaps(&food, &agent));
    }

    #[test]
    fn test_overlaps_any() {
        let walls = [rect(0.0, 0.0, 32.0, 32.0), rect(64.0, 0.0, 32.0, 32.0)];
        assert!(!overlaps_any(&rect(32.0, 0.0, 32.0, 32.0), &walls));
        assert!(overlaps_any(&rect(40.0, 0.0, 32.0, 32.0), &walls));
        assert!(!overlaps_any(&rect(40.0, 0.0, 32.0, 32.0), &[]));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-500i32..500, -500i32..500, 1i32..100, 1i32..100)
            .prop_map(|(x, y, w, h)| rect(x as f32, y as f32, w as f32, h as f32))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in arb_rect()) {
            prop_assert!(overlaps(&a, &a));
        }

        #[test]
        fn prop_adjacent_rects_never_overlap(a in arb_rect(), h in 1i32..100, dy in -50i32..50) {
            let right = rect(a.max().x, a.pos.y + dy as f32, 10.0, h as f32);
            prop_assert!(!overlaps(&a, &right));
        }
    }
}
