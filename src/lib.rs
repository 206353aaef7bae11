//! Road Dash - A lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (car, obstacles, collisions, game state)
//! - `renderer`: Draw-list generation for an external graphics backend
//! - `settings`: Runtime settings for the host loop

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// All distances are world units. The visible world spans
/// x ∈ [-10, 10], y ∈ [-6, 6].
pub mod consts {
    /// Simulation rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

    /// World bounds
    pub const WORLD_LEFT: f32 = -10.0;
    pub const WORLD_RIGHT: f32 = 10.0;
    pub const WORLD_TOP: f32 = 6.0;
    pub const WORLD_BOTTOM: f32 = -6.0;

    /// Car defaults
    pub const CAR_START_X: f32 = 0.0;
    pub const CAR_START_Y: f32 = -3.0;
    pub const CAR_WIDTH: f32 = 1.5;
    pub const CAR_HEIGHT: f32 = 0.8;
    /// Lateral movement per frame while a direction is held
    pub const CAR_SPEED: f32 = 0.1;
    /// Horizontal clamp for the car centre
    pub const CAR_MIN_X: f32 = -4.0;
    pub const CAR_MAX_X: f32 = 4.0;
    pub const WHEEL_RADIUS: f32 = 0.2;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 0.8;
    /// Downward movement per frame
    pub const OBSTACLE_SPEED: f32 = 0.15;
    /// Spawn height (top of world)
    pub const OBSTACLE_SPAWN_Y: f32 = WORLD_TOP;
    /// Obstacles strictly below this are culled
    pub const OFF_SCREEN_Y: f32 = WORLD_BOTTOM;
    /// Frames between spawns (2 seconds at 60 Hz)
    pub const SPAWN_INTERVAL_FRAMES: u32 = 120;
    /// Gap kept between a spawned obstacle centre and the road edge
    pub const SPAWN_EDGE_MARGIN: f32 = 0.5;

    /// Road defaults
    pub const ROAD_WIDTH: f32 = 6.0;
    pub const ROAD_LINE_COUNT: usize = 8;
    pub const ROAD_LINE_LENGTH: f32 = 1.0;
    pub const ROAD_LINE_SPEED: f32 = 0.2;
    /// Dashes below this wrap back to `ROAD_LINE_WRAP_TO`
    pub const ROAD_LINE_WRAP_BELOW: f32 = -10.0;
    pub const ROAD_LINE_WRAP_TO: f32 = 8.0;
}
