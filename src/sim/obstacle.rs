//! Falling obstacles and the manager that spawns, advances and culls them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::car::Car;
use super::collision::{Aabb, Body, bodies_overlap};
use crate::consts::*;

/// A block falling down the road toward the car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Centre position
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward distance covered per frame
    pub speed: f32,
    /// Set once the obstacle has been counted as passed
    pub scored: bool,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(OBSTACLE_SIZE),
            speed: OBSTACLE_SPEED,
            scored: false,
        }
    }

    /// Below the bottom of the world (strict: exactly on the threshold is still visible)
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.y < OFF_SCREEN_Y
    }
}

impl Body for Obstacle {
    type Input = ();

    fn update(&mut self, _: ()) {
        self.pos.y -= self.speed;
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// Owns the live obstacles and the spawn timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleManager {
    obstacles: Vec<Obstacle>,
    /// Frames since the last spawn
    spawn_timer: u32,
    spawn_interval: u32,
    road_width: f32,
    next_id: u32,
}

impl Default for ObstacleManager {
    fn default() -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0,
            spawn_interval: SPAWN_INTERVAL_FRAMES,
            road_width: ROAD_WIDTH,
            next_id: 1,
        }
    }
}

impl ObstacleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    /// Horizontal range for spawned obstacle centres
    pub fn spawn_range(&self) -> (f32, f32) {
        let half = self.road_width / 2.0;
        (-half + SPAWN_EDGE_MARGIN, half - SPAWN_EDGE_MARGIN)
    }

    /// Advance one frame: spawn if due, move every obstacle, cull off-screen ones.
    ///
    /// The spawn check runs before movement, so a freshly spawned obstacle
    /// moves on the frame it appears.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        self.spawn_timer += 1;
        if self.spawn_timer >= self.spawn_interval {
            self.spawn(rng);
            self.spawn_timer = 0;
        }

        for obstacle in &mut self.obstacles {
            obstacle.update(());
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        let culled = before - self.obstacles.len();
        if culled > 0 {
            log::debug!("Culled {} obstacle(s), {} live", culled, self.obstacles.len());
        }
    }

    /// Spawn one obstacle at a random x on the road, at the top of the world
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> u32 {
        let (lo, hi) = self.spawn_range();
        let x = rng.random_range(lo..=hi);
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle::new(id, Vec2::new(x, OBSTACLE_SPAWN_Y)));
        log::debug!("Spawned obstacle {} at x={:.2}", id, x);
        id
    }

    /// True if the car overlaps any live obstacle
    pub fn check_collision(&self, car: &Car) -> bool {
        self.obstacles.iter().any(|o| bodies_overlap(car, o))
    }

    /// Award one point per obstacle that has fully passed beneath the car.
    ///
    /// Each obstacle is counted at most once over its lifetime.
    pub fn check_score(&mut self, car: &Car) -> u32 {
        let car_box = car.bounds();
        let mut points = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.scored) {
            if obstacle.bounds().is_below(&car_box) {
                obstacle.scored = true;
                points += 1;
            }
        }
        points
    }

    /// Clear all obstacles and restart the spawn timer
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0;
    }

    /// Insert an obstacle directly (scripted layouts and tests)
    pub fn insert(&mut self, pos: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle::new(id, pos));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_obstacle_falls() {
        let mut o = Obstacle::new(1, Vec2::new(0.0, 6.0));
        o.update(());
        assert!((o.pos.y - 5.85).abs() < 1e-5);
        assert!(!o.scored);
    }

    #[test]
    fn test_off_screen_boundary_is_exclusive() {
        let mut o = Obstacle::new(1, Vec2::new(0.0, -6.0));
        assert!(!o.is_off_screen());
        o.pos.y = -6.0001;
        assert!(o.is_off_screen());
        o.pos.y = 3.0;
        assert!(!o.is_off_screen());
    }

    #[test]
    fn test_bounds() {
        let o = Obstacle::new(1, Vec2::new(1.0, 2.0));
        let b = o.bounds();
        assert!((b.left - 0.6).abs() < 1e-6);
        assert!((b.right - 1.4).abs() < 1e-6);
        assert!((b.top - 2.4).abs() < 1e-6);
        assert!((b.bottom - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_first_spawn_on_frame_120() {
        let mut manager = ObstacleManager::new();
        let mut rng = rng();
        for frame in 1..SPAWN_INTERVAL_FRAMES {
            manager.update(&mut rng);
            assert!(manager.is_empty(), "spawned early at frame {frame}");
        }
        manager.update(&mut rng);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.spawn_timer(), 0);

        // Spawned at the top and already advanced once this frame
        let y = manager.obstacles()[0].pos.y;
        assert!((y - (OBSTACLE_SPAWN_Y - OBSTACLE_SPEED)).abs() < 1e-5);
    }

    #[test]
    fn test_obstacles_are_culled_below_world() {
        let mut manager = ObstacleManager::new();
        manager.insert(Vec2::new(0.0, -5.9));
        manager.insert(Vec2::new(1.0, 0.0));
        manager.update(&mut rng());
        assert_eq!(manager.len(), 1);
        assert!(manager.obstacles().iter().all(|o| o.pos.y >= OFF_SCREEN_Y));
        assert!((manager.obstacles()[0].pos.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_collision_with_overlapping_obstacle() {
        let car = Car::new();
        let mut manager = ObstacleManager::new();
        manager.insert(Vec2::new(2.5, 4.0));
        assert!(!manager.check_collision(&car));

        manager.insert(Vec2::new(0.3, -2.8));
        assert!(manager.check_collision(&car));
    }

    /// Car and obstacle with power-of-two friendly sizes so edges compare exactly
    fn exact_car() -> Car {
        let mut car = Car::new();
        car.size = Vec2::new(1.5, 1.0);
        car
    }

    fn insert_unit(manager: &mut ObstacleManager, pos: Vec2) {
        manager.insert(pos);
        if let Some(o) = manager.obstacles.last_mut() {
            o.size = Vec2::splat(1.0);
        }
    }

    #[test]
    fn test_touching_obstacle_does_not_collide() {
        let car = exact_car();
        let mut manager = ObstacleManager::new();
        // Bottom edge sits exactly on the car roof (y = -2.5)
        insert_unit(&mut manager, Vec2::new(0.0, -2.0));
        assert!(!manager.check_collision(&car));

        // Flush against the right side (car right edge is x = 0.75)
        manager.reset();
        insert_unit(&mut manager, Vec2::new(1.25, -3.0));
        assert!(!manager.check_collision(&car));
    }

    #[test]
    fn test_collision_does_not_mutate() {
        let car = Car::new();
        let mut manager = ObstacleManager::new();
        manager.insert(Vec2::new(0.0, -3.0));
        let before = manager.obstacles().to_vec();
        assert!(manager.check_collision(&car));
        assert_eq!(manager.obstacles(), &before[..]);
    }

    #[test]
    fn test_score_once_per_obstacle() {
        let car = Car::new();
        let mut manager = ObstacleManager::new();
        // Car bottom is -3.4; obstacle top is -3.5
        manager.insert(Vec2::new(3.0, -3.9));
        // Still above the car
        manager.insert(Vec2::new(-1.0, 2.0));

        assert_eq!(manager.check_score(&car), 1);
        assert_eq!(manager.check_score(&car), 0);
        assert_eq!(manager.check_score(&car), 0);
        assert!(manager.obstacles()[0].scored);
        assert!(!manager.obstacles()[1].scored);
    }

    #[test]
    fn test_score_requires_fully_passed() {
        let car = exact_car();
        let mut manager = ObstacleManager::new();
        // Top edge exactly at the car's bottom edge (-3.5)
        insert_unit(&mut manager, Vec2::new(3.0, -4.0));
        assert_eq!(manager.check_score(&car), 0);

        insert_unit(&mut manager, Vec2::new(-3.0, -4.25));
        assert_eq!(manager.check_score(&car), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut manager = ObstacleManager::new();
        let mut rng = rng();
        for _ in 0..300 {
            manager.update(&mut rng);
        }
        assert!(!manager.is_empty());

        manager.reset();
        assert!(manager.is_empty());
        assert_eq!(manager.spawn_timer(), 0);
        assert!(!manager.check_collision(&Car::new()));
    }

    #[test]
    fn test_obstacle_ids_are_unique() {
        let mut manager = ObstacleManager::new();
        let mut rng = rng();
        let a = manager.spawn(&mut rng);
        let b = manager.spawn(&mut rng);
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn spawn_x_within_road(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut manager = ObstacleManager::new();
            for _ in 0..16 {
                manager.spawn(&mut rng);
            }
            for o in manager.obstacles() {
                prop_assert!(o.pos.x >= -2.5 && o.pos.x <= 2.5);
                prop_assert_eq!(o.pos.y, OBSTACLE_SPAWN_Y);
            }
        }

        #[test]
        fn off_screen_iff_below_threshold(y in -20.0f32..20.0) {
            let o = Obstacle::new(1, Vec2::new(0.0, y));
            prop_assert_eq!(o.is_off_screen(), y < -6.0);
        }
    }
}
