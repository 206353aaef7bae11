//! Scrolling road markings and roadside scenery
//!
//! Purely cosmetic: nothing here interacts with the car or obstacles.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Roadside tree trunk centres
pub const TREE_POSITIONS: [(f32, f32); 8] = [
    (-5.0, 3.0),
    (-4.0, -2.0),
    (-6.0, 0.0),
    (-5.0, -4.0),
    (5.0, 2.0),
    (4.0, -1.0),
    (6.0, 1.0),
    (5.0, -3.0),
];

/// Background building (centre x, base y, width, height)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    pub x: f32,
    pub base_y: f32,
    pub width: f32,
    pub height: f32,
}

pub const BUILDINGS: [Building; 6] = [
    Building { x: -8.0, base_y: 2.0, width: 1.5, height: 3.0 },
    Building { x: -7.0, base_y: 1.0, width: 1.0, height: 2.0 },
    Building { x: -6.0, base_y: 0.5, width: 0.8, height: 1.5 },
    Building { x: 6.0, base_y: 1.5, width: 1.2, height: 2.5 },
    Building { x: 7.0, base_y: 0.8, width: 1.0, height: 1.8 },
    Building { x: 8.0, base_y: 2.2, width: 1.5, height: 3.2 },
];

/// Centre-line dash state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub width: f32,
    /// Bottom y of each centre-line dash
    pub line_positions: [f32; ROAD_LINE_COUNT],
    pub line_speed: f32,
}

impl Default for Road {
    fn default() -> Self {
        let mut line_positions = [0.0; ROAD_LINE_COUNT];
        for (i, y) in line_positions.iter_mut().enumerate() {
            *y = i as f32 * 2.0 - 8.0;
        }
        Self {
            width: ROAD_WIDTH,
            line_positions,
            line_speed: ROAD_LINE_SPEED,
        }
    }
}

impl Road {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll dashes down; any dash below the wrap line jumps back to the top
    pub fn update(&mut self) {
        for y in &mut self.line_positions {
            *y -= self.line_speed;
            if *y < ROAD_LINE_WRAP_BELOW {
                *y = ROAD_LINE_WRAP_TO;
            }
        }
    }

    /// Left and right road edges
    pub fn edges(&self) -> (f32, f32) {
        (-self.width / 2.0, self.width / 2.0)
    }
}
