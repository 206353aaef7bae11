//! Game state and session bookkeeping
//!
//! One owned `GameState` holds everything the frame loop mutates. It is
//! threaded explicitly through `tick` and the draw-list builder.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::car::Car;
use super::obstacle::ObstacleManager;
use super::road::Road;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Car crashed, waiting for restart
    GameOver,
}

/// Notable things that happened during a tick, drained by the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Left the menu and began the first session
    Started,
    /// Began a new session from the game-over screen
    Restarted,
    /// Obstacles passed beneath the car this tick
    Scored { points: u32 },
    /// Car hit an obstacle; carries the final score
    Crashed { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the spawn RNG was created from
    pub seed: u64,
    /// Spawn position RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Score of the current (or last) session
    pub score: u64,
    /// Best score seen since the process started
    pub best_score: u64,
    /// Frames spent on the game-over screen (reset on each crash)
    pub game_over_ticks: u32,
    /// Total ticks processed
    pub time_ticks: u64,
    /// Sessions started so far
    pub sessions: u32,
    pub car: Car,
    pub obstacles: ObstacleManager,
    pub road: Road,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game sitting on the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            best_score: 0,
            game_over_ticks: 0,
            time_ticks: 0,
            sessions: 0,
            car: Car::new(),
            obstacles: ObstacleManager::new(),
            road: Road::new(),
            events: Vec::new(),
        }
    }

    /// Reset score, car and obstacles and enter `Playing`
    pub fn begin_session(&mut self) {
        let event = match self.phase {
            GamePhase::GameOver => GameEvent::Restarted,
            _ => GameEvent::Started,
        };
        self.score = 0;
        self.car = Car::new();
        self.obstacles.reset();
        self.phase = GamePhase::Playing;
        self.sessions += 1;
        self.push_event(event);
        log::info!("Session {} started", self.sessions);
    }

    /// Enter `GameOver` after a crash
    pub fn end_session(&mut self) {
        self.phase = GamePhase::GameOver;
        self.game_over_ticks = 0;
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        self.push_event(GameEvent::Crashed { score: self.score });
        log::info!(
            "Crashed with score {} (best {})",
            self.score,
            self.best_score
        );
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all recorded events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
