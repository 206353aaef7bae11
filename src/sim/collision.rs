//! Axis-aligned collision geometry
//!
//! Everything on the road is a rectangle centred on its position, so overlap
//! and "has passed" checks reduce to separating-axis comparisons on four edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world units (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Box of the given size centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            top: center.y + half.y,
            bottom: center.y - half.y,
        }
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top > other.bottom
            && self.bottom < other.top
    }

    /// True when this box lies entirely below `other` (top edge under its bottom edge)
    #[inline]
    pub fn is_below(&self, other: &Aabb) -> bool {
        self.top < other.bottom
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.top - self.bottom)
    }
}

/// A rectangular entity that advances once per frame
///
/// Implemented by the car and by obstacles; dispatch is static.
pub trait Body {
    /// Per-frame input consumed by `update`
    type Input;

    /// Advance one frame
    fn update(&mut self, input: Self::Input);

    /// Current collision box
    fn bounds(&self) -> Aabb;
}

/// Check whether two bodies overlap
pub fn bodies_overlap<A: Body, B: Body>(a: &A, b: &B) -> bool {
    a.bounds().overlaps(&b.bounds())
}
