//! Game tuning
//!
//! All gameplay constants live here. Velocities are in pixels per second and
//! accelerations in pixels per second squared; the simulation integrates them
//! with a fixed tick dt.

use serde::{Deserialize, Serialize};

/// Ping Pong tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    /// Playfield width
    pub width: f32,
    /// Playfield height
    pub height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the side wall to the paddle's outer edge
    pub paddle_inset: f32,
    /// Player paddle speed while a direction is held
    pub player_speed: f32,
    /// Opponent tracking speed
    pub opponent_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Per-axis ball speed after a serve
    pub ball_speed: f32,

    /// Points needed to win the match
    pub winning_score: u32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,

            paddle_width: 10.0,
            paddle_height: 100.0,
            paddle_inset: 50.0,
            player_speed: 840.0,
            opponent_speed: 720.0,

            ball_size: 20.0,
            ball_speed: 720.0,

            winning_score: 5,
        }
    }
}

/// Collect Quest tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub width: f32,
    pub height: f32,

    // === Terrain ===
    /// Horizontal distance between terrain samples
    pub ground_step: f32,
    /// Highest allowed terrain surface (smallest y)
    pub terrain_min_y: f32,
    /// Lowest allowed terrain surface (largest y)
    pub terrain_max_y: f32,
    /// Largest per-sample change of the random walk
    pub terrain_max_delta: i32,
    pub smoothing_passes: u32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,
    pub gravity: f32,
    /// Spawn x as a fraction of the screen width
    pub spawn_x_fraction: f32,

    // === Collectibles ===
    pub collectible_count: usize,
    pub collectible_radius: f32,
    /// Minimum distance between two collectibles
    pub collectible_spacing: f32,
    /// Horizontal keep-out from both screen edges
    pub collectible_margin: f32,
    /// Collectibles never spawn above this y
    pub collectible_min_y: f32,
    /// Lowest hover height above the ground
    pub hover_min: f32,
    /// Highest hover height above the ground
    pub hover_max: f32,
    /// Placement attempts allowed per requested collectible
    pub attempts_per_item: usize,
    /// Pickup reach as a fraction of the player's larger dimension
    pub reach_factor: f32,

    // === Run ===
    pub target_score: u32,
    /// Countdown length in seconds
    pub time_limit: f32,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        let height = 600.0;
        Self {
            width: 900.0,
            height,

            ground_step: 6.0,
            terrain_min_y: height / 3.0,
            terrain_max_y: height - 120.0,
            terrain_max_delta: 18,
            smoothing_passes: 2,

            player_width: 28.0,
            player_height: 36.0,
            player_speed: 300.0,
            jump_velocity: -630.0,
            gravity: 1980.0,
            spawn_x_fraction: 1.0 / 6.0,

            collectible_count: 12,
            collectible_radius: 8.0,
            collectible_spacing: 40.0,
            collectible_margin: 30.0,
            collectible_min_y: 30.0,
            hover_min: 36.0,
            hover_max: 160.0,
            attempts_per_item: 8,
            reach_factor: 0.45,

            target_score: 10,
            time_limit: 120.0,
        }
    }
}

impl PlatformerConfig {
    /// Distance at which the player claims a collectible
    pub fn pickup_reach(&self) -> f32 {
        self.collectible_radius + self.player_width.max(self.player_height) * self.reach_factor
    }

    /// Total placement attempts for one pool
    pub fn placement_budget(&self) -> usize {
        self.collectible_count * self.attempts_per_item
    }
}
