//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex slice, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.5, 0.7, 1.0, 1.0];
    pub const GRASS: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
    pub const ROAD: [f32; 4] = [0.4, 0.4, 0.4, 1.0];
    pub const ROAD_EDGE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CENTER_LINE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TREE_TRUNK: [f32; 4] = [0.5, 0.3, 0.1, 1.0];
    pub const TREE_LEAVES: [f32; 4] = [0.1, 0.6, 0.1, 1.0];
    pub const BUILDING: [f32; 4] = [0.6, 0.6, 0.7, 1.0];
    pub const BUILDING_WINDOW: [f32; 4] = [0.8, 0.8, 0.2, 1.0];
    pub const CAR_BODY: [f32; 4] = [0.2, 0.4, 0.8, 1.0];
    pub const CAR_WINDOW: [f32; 4] = [0.8, 0.9, 1.0, 1.0];
    pub const WHEEL: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const WHEEL_RIM: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.8, 0.2, 0.2, 1.0];
    pub const OBSTACLE_BORDER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE_STRIPE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.7];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT_HINT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TEXT_ALERT: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::ROAD); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }
}
