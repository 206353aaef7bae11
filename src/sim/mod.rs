//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, no wall-clock time
//! - Randomness only through the RNG owned by `GameState`
//! - No rendering or platform dependencies

pub mod car;
pub mod collision;
pub mod obstacle;
pub mod road;
pub mod state;
pub mod tick;

pub use car::{Car, Steering};
pub use collision::{Aabb, Body, bodies_overlap};
pub use obstacle::{Obstacle, ObstacleManager};
pub use road::{BUILDINGS, Building, Road, TREE_POSITIONS};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{AUTOPILOT_RESTART_DELAY, TickInput, dodge_target, tick};
