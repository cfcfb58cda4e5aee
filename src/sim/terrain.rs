//! Terrain height profile for Collect Quest
//!
//! A bounded random walk sampled every `ground_step` pixels, smoothed with a
//! 3-point moving average. Heights are screen y values: smaller is higher.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::PlatformerConfig;

/// Sampled terrain surface, immutable for the duration of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainProfile {
    step: f32,
    min_y: f32,
    max_y: f32,
    heights: Vec<f32>,
}

impl TerrainProfile {
    /// Generate a new profile covering the screen width
    pub fn generate<R: Rng>(rng: &mut R, config: &PlatformerConfig) -> Self {
        let n_points = (config.width / config.ground_step) as usize + 1;
        let min_y = config.terrain_min_y.round() as i32;
        let max_y = config.terrain_max_y.round() as i32;
        let max_delta = config.terrain_max_delta.abs();

        let mut y = rng.random_range(min_y..=max_y);
        let mut heights = Vec::with_capacity(n_points);
        for _ in 0..n_points {
            y = (y + rng.random_range(-max_delta..=max_delta)).clamp(min_y, max_y);
            heights.push(y as f32);
        }

        for _ in 0..config.smoothing_passes {
            heights = smooth(&heights);
        }

        Self::from_heights(config.ground_step, config.terrain_min_y, config.terrain_max_y, heights)
    }

    /// Build a profile from explicit samples (clamped to bounds)
    pub fn from_heights(step: f32, min_y: f32, max_y: f32, mut heights: Vec<f32>) -> Self {
        debug_assert!(!heights.is_empty(), "terrain needs at least one sample");
        for h in &mut heights {
            *h = h.clamp(min_y, max_y);
        }
        Self {
            step,
            min_y,
            max_y,
            heights,
        }
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    /// x of the last sample
    pub fn extent(&self) -> f32 {
        (self.heights.len().saturating_sub(1)) as f32 * self.step
    }

    /// Sample points as (x, height), for drawing
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.heights
            .iter()
            .enumerate()
            .map(|(i, &h)| Vec2::new(i as f32 * self.step, h))
    }

    /// Terrain height at an arbitrary x via linear interpolation
    pub fn height_at(&self, x: f32) -> f32 {
        let Some(&first) = self.heights.first() else {
            return self.max_y;
        };
        let last = self.heights[self.heights.len() - 1];

        if x <= 0.0 {
            return first;
        }
        if x >= self.extent() {
            return last;
        }

        let idx = ((x / self.step) as usize).min(self.heights.len() - 1);
        let next = (idx + 1).min(self.heights.len() - 1);
        let x0 = idx as f32 * self.step;
        let (y0, y1) = (self.heights[idx], self.heights[next]);
        let t = (x - x0) / self.step;
        y0 + (y1 - y0) * t
    }
}

/// One pass of 3-point moving average, endpoints kept
fn smooth(heights: &[f32]) -> Vec<f32> {
    if heights.len() < 3 {
        return heights.to_vec();
    }
    let mut out = Vec::with_capacity(heights.len());
    out.push(heights[0]);
    out.extend(heights.windows(3).map(|w| (w[0] + w[1] + w[2]) / 3.0));
    out.push(heights[heights.len() - 1]);
    out
}
