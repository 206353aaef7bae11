//! Per-frame simulation tick
//!
//! Core game loop that advances the state machine by exactly one frame.

use super::car::{Car, Steering};
use super::collision::Body;
use super::obstacle::Obstacle;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Frames the autopilot waits on the game-over screen before restarting
pub const AUTOPILOT_RESTART_DELAY: u32 = 90;
/// Extra horizontal gap that makes an obstacle count as "in the car's lane"
const AUTOPILOT_LOOKOUT: f32 = 0.3;
/// Gap the autopilot aims to leave between car and obstacle
const AUTOPILOT_CLEARANCE: f32 = 0.35;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Leave the menu
    pub start: bool,
    /// Start again from the game-over screen
    pub restart: bool,
    /// Quit request. Handled by the host loop; the simulation ignores it.
    pub quit: bool,
    /// Idle/demo mode - autopilot drives the car and presses start/restart
    pub idle_mode: bool,
}

impl TickInput {
    pub fn steering(&self) -> Steering {
        Steering {
            left: self.left,
            right: self.right,
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let input = if input.idle_mode {
        autopilot(state, input)
    } else {
        *input
    };

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => {
            state.road.update();
            if input.start {
                state.begin_session();
            }
        }
        GamePhase::Playing => {
            state.car.update(input.steering());
            state.obstacles.update(&mut state.rng);
            state.road.update();

            if state.obstacles.check_collision(&state.car) {
                state.end_session();
            } else {
                let points = state.obstacles.check_score(&state.car);
                if points > 0 {
                    state.score += u64::from(points);
                    state.push_event(GameEvent::Scored { points });
                    log::debug!("+{} (score {})", points, state.score);
                }
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.begin_session();
            } else {
                state.game_over_ticks = state.game_over_ticks.saturating_add(1);
            }
        }
    }
}

/// Fill in input for idle/demo mode
fn autopilot(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = *input;
    match state.phase {
        GamePhase::Menu => input.start = true,
        GamePhase::GameOver => {
            input.restart = state.game_over_ticks >= AUTOPILOT_RESTART_DELAY;
        }
        GamePhase::Playing => {
            let target = dodge_target(&state.car, state.obstacles.obstacles());
            let dx = target - state.car.x();
            let dead_band = state.car.speed / 2.0;
            input.left = dx < -dead_band;
            input.right = dx > dead_band;
        }
    }
    input
}

/// Horizontal position the car should steer toward.
///
/// Picks the lowest obstacle that has not yet passed and sits in (or next to)
/// the car's lane, and heads for whichever side of it is closer and still on
/// the road. With nothing to dodge the car returns to its start lane.
pub fn dodge_target(car: &Car, obstacles: &[Obstacle]) -> f32 {
    let car_box = car.bounds();
    let threat = obstacles
        .iter()
        .map(|o| o.bounds())
        .filter(|b| !b.is_below(&car_box))
        .filter(|b| {
            b.left < car_box.right + AUTOPILOT_LOOKOUT && b.right > car_box.left - AUTOPILOT_LOOKOUT
        })
        .min_by(|a, b| a.bottom.total_cmp(&b.bottom));

    let Some(threat) = threat else {
        return CAR_START_X;
    };

    let half_width = car.size.x / 2.0;
    let left_side = threat.left - half_width - AUTOPILOT_CLEARANCE;
    let right_side = threat.right + half_width + AUTOPILOT_CLEARANCE;
    let on_road = |x: f32| (CAR_MIN_X..=CAR_MAX_X).contains(&x);

    let (near, far) = if (car.x() - left_side).abs() <= (right_side - car.x()).abs() {
        (left_side, right_side)
    } else {
        (right_side, left_side)
    };
    if on_road(near) { near } else { far }
}
