//! Twin Arcade - Ping Pong and Collect Quest
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, state machine)
//! - `ui`: Declarative interactive regions for menu/pause/game-over screens
//! - `renderer`: macroquad drawing for both games
//! - `settings`: Game tuning constants

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{PlatformerConfig, PongConfig};

/// Frame loop constants
pub mod consts {
    /// Pong simulation timestep (120 Hz)
    pub const PONG_TICK_DT: f32 = 1.0 / 120.0;
    /// Platformer simulation timestep (60 Hz)
    pub const PLATFORMER_TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Fixed-timestep accumulator shared by both frame loops
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame's real time and return how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, consts::MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < consts::MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == consts::MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }
}
