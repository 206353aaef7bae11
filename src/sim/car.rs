//! The player's car

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Body};
use crate::consts::*;

/// Directional input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

/// The player's car. Moves only along x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Centre position
    pub pos: Vec2,
    /// Body width and height
    pub size: Vec2,
    /// Lateral distance covered per frame
    pub speed: f32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CAR_START_X, CAR_START_Y),
            size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            speed: CAR_SPEED,
        }
    }
}

impl Car {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the car at an arbitrary x (clamped like a regular move)
    pub fn with_x(mut self, x: f32) -> Self {
        self.pos.x = x.clamp(CAR_MIN_X, CAR_MAX_X);
        self
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }
}

impl Body for Car {
    type Input = Steering;

    /// Apply left and right independently (both held cancel out), then clamp.
    fn update(&mut self, input: Steering) {
        if input.left {
            self.pos.x -= self.speed;
        }
        if input.right {
            self.pos.x += self.speed;
        }
        self.pos.x = self.pos.x.clamp(CAR_MIN_X, CAR_MAX_X);
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LEFT: Steering = Steering {
        left: true,
        right: false,
    };
    const RIGHT: Steering = Steering {
        left: false,
        right: true,
    };

    #[test]
    fn test_default_car() {
        let car = Car::new();
        assert_eq!(car.pos, Vec2::new(0.0, -3.0));
        let b = car.bounds();
        assert!((b.left - -0.75).abs() < 1e-6);
        assert!((b.right - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_move_left_and_right() {
        let mut car = Car::new();
        car.update(LEFT);
        assert!((car.x() - -0.1).abs() < 1e-6);
        car.update(RIGHT);
        car.update(RIGHT);
        assert!((car.x() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut car = Car::new().with_x(1.0);
        car.update(Steering {
            left: true,
            right: true,
        });
        assert!((car.x() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamped_at_edges() {
        let mut car = Car::new().with_x(3.95);
        car.update(RIGHT);
        assert_eq!(car.x(), CAR_MAX_X);

        let mut car = Car::new().with_x(-3.95);
        car.update(LEFT);
        assert_eq!(car.x(), CAR_MIN_X);
    }

    proptest! {
        #[test]
        fn car_x_stays_in_bounds(
            start in -50.0f32..50.0,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..200),
        ) {
            let mut car = Car::new();
            car.pos.x = start;
            for (left, right) in moves {
                car.update(Steering { left, right });
                prop_assert!(car.x() >= CAR_MIN_X && car.x() <= CAR_MAX_X);
            }
        }
    }
}
