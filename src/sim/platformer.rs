//! Collect Quest session
//!
//! A side-view run across generated terrain: move, jump, and claim enough
//! collectibles before the countdown expires.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::within_reach;
use super::fsm::{Action, Fsm, Phase, Transition};
use super::geom::Rect;
use super::terrain::TerrainProfile;
use crate::settings::PlatformerConfig;

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub grounded: bool,
}

impl Player {
    /// Stand the player on the terrain with its center at `x`
    pub fn spawn(x: f32, terrain: &TerrainProfile, config: &PlatformerConfig) -> Self {
        let mut rect = Rect::new(0.0, 0.0, config.player_width, config.player_height);
        rect.set_center_x(x);
        rect.set_bottom(terrain.height_at(x));
        Self {
            rect,
            vel: Vec2::ZERO,
            grounded: true,
        }
    }

    /// Jump if standing on the ground; returns whether the jump happened
    pub fn jump(&mut self, velocity: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel.y = velocity;
        self.grounded = false;
        true
    }

    /// Integrate one tick; returns true when the player just landed
    pub fn update(
        &mut self,
        direction: f32,
        terrain: &TerrainProfile,
        config: &PlatformerConfig,
        dt: f32,
    ) -> bool {
        // Horizontal: direct velocity, kept on screen
        self.vel.x = direction.clamp(-1.0, 1.0) * config.player_speed;
        self.rect.x += self.vel.x * dt;
        self.rect.clamp_horizontal(0.0, config.width);

        // Vertical: gravity
        self.vel.y += config.gravity * dt;
        self.rect.y += self.vel.y * dt;

        // Ground contact at the horizontal center
        let ground_y = terrain.height_at(self.rect.center_x());
        if self.rect.bottom() >= ground_y {
            let landed = !self.grounded;
            self.rect.set_bottom(ground_y);
            self.vel.y = 0.0;
            self.grounded = true;
            landed
        } else {
            self.grounded = false;
            false
        }
    }
}

/// A pickup hovering above the terrain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
    /// Once set, stays set for the rest of the run
    pub collected: bool,
}

/// Place up to `collectible_count` pickups above the terrain
///
/// Candidates closer than `collectible_spacing` to an accepted pickup are
/// rejected. Gives up after `placement_budget()` attempts and returns what it has.
pub fn spawn_collectibles<R: Rng>(
    rng: &mut R,
    terrain: &TerrainProfile,
    config: &PlatformerConfig,
) -> Vec<Collectible> {
    let count = config.collectible_count;
    let budget = config.placement_budget();
    let mut picks: Vec<Vec2> = Vec::with_capacity(count);
    let mut attempts = 0;

    let x_min = config.collectible_margin;
    let x_max = (config.width - config.collectible_margin).max(x_min);

    while picks.len() < count && attempts < budget {
        attempts += 1;

        let x = rng.random_range(x_min..=x_max);
        let ground_y = terrain.height_at(x);
        let y_top = (ground_y - config.hover_max).max(config.collectible_min_y);
        let y_bottom = ground_y - config.hover_min;
        if y_top > y_bottom {
            continue;
        }
        let y = rng.random_range(y_top..=y_bottom);

        let candidate = Vec2::new(x, y);
        let spaced = picks
            .iter()
            .all(|p| p.distance(candidate) >= config.collectible_spacing);
        if spaced {
            picks.push(candidate);
        }
    }

    if picks.len() < count {
        log::warn!(
            "Placed only {}/{} collectibles after {} attempts",
            picks.len(),
            count,
            attempts
        );
    } else {
        log::debug!("Placed {} collectibles in {} attempts", count, attempts);
    }

    picks
        .into_iter()
        .map(|pos| Collectible {
            pos,
            radius: config.collectible_radius,
            collected: false,
        })
        .collect()
}

/// Run countdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Countdown {
    limit: f32,
    remaining: f32,
}

impl Countdown {
    pub fn new(limit: f32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn elapsed(&self) -> f32 {
        self.limit - self.remaining
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Remaining time as whole (minutes, seconds)
    pub fn clock(&self) -> (u32, u32) {
        let secs = self.remaining as u32;
        (secs / 60, secs % 60)
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    TimeUp,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformerEvent {
    Jumped,
    Landed,
    /// Index into the collectible pool
    Collected(usize),
    RunOver(Outcome),
}

/// Input for a single tick (`jump` is a one-shot press)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PlatformerInput {
    fn direction(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }
}

/// Record of a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformerSummary {
    pub seed: u64,
    pub run: u32,
    pub ticks: u64,
    pub collected: u32,
    pub target: u32,
    pub time_left: f32,
    pub outcome: Outcome,
}

/// One Collect Quest session: menu, runs and game over
#[derive(Debug, Clone)]
pub struct PlatformerSession {
    pub config: PlatformerConfig,
    fsm: Fsm,
    pub terrain: TerrainProfile,
    pub player: Player,
    pub collectibles: Vec<Collectible>,
    pub score: u32,
    pub countdown: Countdown,
    pub outcome: Option<Outcome>,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<PlatformerEvent>,
    seed: u64,
    run: u32,
    rng: Pcg32,
}

impl PlatformerSession {
    pub fn new(config: PlatformerConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let terrain = TerrainProfile::generate(&mut rng, &config);
        let player = Player::spawn(config.width * config.spawn_x_fraction, &terrain, &config);
        let collectibles = spawn_collectibles(&mut rng, &terrain, &config);
        Self {
            fsm: Fsm::new(false),
            terrain,
            player,
            collectibles,
            score: 0,
            countdown: Countdown::new(config.time_limit),
            outcome: None,
            time_ticks: 0,
            events: Vec::new(),
            seed,
            run: 0,
            rng,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    /// Apply a phase action; starting or restarting generates a fresh run
    pub fn apply(&mut self, action: Action) -> Transition {
        let transition = self.fsm.transition(action);
        if transition.starts_run() {
            self.reset_run();
        }
        if transition.success {
            log::debug!("{:?} -> {:?} via {:?}", transition.from, transition.to, action);
        }
        transition
    }

    /// New terrain, player, pickups, score and countdown
    fn reset_run(&mut self) {
        self.run += 1;
        self.terrain = TerrainProfile::generate(&mut self.rng, &self.config);
        let spawn_x = self.config.width * self.config.spawn_x_fraction;
        self.player = Player::spawn(spawn_x, &self.terrain, &self.config);
        self.collectibles = spawn_collectibles(&mut self.rng, &self.terrain, &self.config);
        self.score = 0;
        self.countdown = Countdown::new(self.config.time_limit);
        self.outcome = None;
        self.time_ticks = 0;
        self.events.clear();

        log::info!("Run {} started (seed {})", self.run, self.seed);
    }

    pub fn remaining_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles.iter().filter(|c| !c.collected)
    }

    /// Advance the run by one fixed timestep
    pub fn tick(&mut self, input: &PlatformerInput, dt: f32) {
        self.events.clear();
        if self.phase() != Phase::Playing {
            return;
        }
        self.time_ticks += 1;
        self.countdown.advance(dt);

        if input.jump && self.player.jump(self.config.jump_velocity) {
            self.events.push(PlatformerEvent::Jumped);
        }
        if self
            .player
            .update(input.direction(), &self.terrain, &self.config, dt)
        {
            self.events.push(PlatformerEvent::Landed);
        }

        self.claim_collectibles();

        // A claim on the final tick beats the clock
        if self.score >= self.config.target_score {
            self.finish(Outcome::Won);
        } else if self.countdown.expired() {
            self.finish(Outcome::TimeUp);
        }
    }

    fn claim_collectibles(&mut self) {
        let center = self.player.rect.center();
        let reach = self.config.pickup_reach();
        for (i, c) in self.collectibles.iter_mut().enumerate() {
            if !c.collected && within_reach(center, c.pos, reach) {
                c.collected = true;
                self.score += 1;
                self.events.push(PlatformerEvent::Collected(i));
                log::debug!("Collected #{} ({}/{})", i, self.score, self.config.target_score);
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        if !self.fsm.transition(Action::Finish).success {
            return;
        }
        self.outcome = Some(outcome);
        self.events.push(PlatformerEvent::RunOver(outcome));

        let summary = PlatformerSummary {
            seed: self.seed,
            run: self.run,
            ticks: self.time_ticks,
            collected: self.score,
            target: self.config.target_score,
            time_left: self.countdown.remaining(),
            outcome,
        };
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Run over: {}", json),
            Err(e) => log::warn!("Run over ({:?}), summary unavailable: {}", outcome, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLATFORMER_TICK_DT;

    fn flat_terrain(config: &PlatformerConfig, y: f32) -> TerrainProfile {
        let n = (config.width / config.ground_step) as usize + 1;
        TerrainProfile::from_heights(
            config.ground_step,
            config.terrain_min_y,
            config.terrain_max_y,
            vec![y; n],
        )
    }

    #[test]
    fn test_spawn_stands_on_ground() {
        let config = PlatformerConfig::default();
        let terrain = flat_terrain(&config, 400.0);
        let player = Player::spawn(150.0, &terrain, &config);
        assert_eq!(player.rect.bottom(), 400.0);
        assert_eq!(player.rect.center_x(), 150.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let config = PlatformerConfig::default();
        let terrain = flat_terrain(&config, 400.0);
        let mut player = Player::spawn(150.0, &terrain, &config);

        assert!(player.jump(config.jump_velocity));
        assert!(!player.jump(config.jump_velocity));

        player.update(0.0, &terrain, &config, PLATFORMER_TICK_DT);
        assert!(!player.grounded);
        assert!(player.rect.bottom() < 400.0);
    }

    #[test]
    fn test_jump_lands_back_on_ground() {
        let config = PlatformerConfig::default();
        let terrain = flat_terrain(&config, 400.0);
        let mut player = Player::spawn(150.0, &terrain, &config);
        player.jump(config.jump_velocity);

        let mut landed = false;
        for _ in 0..120 {
            if player.update(0.0, &terrain, &config, PLATFORMER_TICK_DT) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(player.vel.y, 0.0);
        assert!((player.rect.bottom() - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_clamped_to_screen() {
        let config = PlatformerConfig::default();
        let terrain = flat_terrain(&config, 400.0);
        let mut player = Player::spawn(20.0, &terrain, &config);
        for _ in 0..30 {
            player.update(-1.0, &terrain, &config, PLATFORMER_TICK_DT);
        }
        assert_eq!(player.rect.left(), 0.0);

        for _ in 0..300 {
            player.update(1.0, &terrain, &config, PLATFORMER_TICK_DT);
        }
        assert!((player.rect.right() - config.width).abs() < 1e-3);
    }

    #[test]
    fn test_collectibles_hover_above_ground() {
        let config = PlatformerConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let terrain = TerrainProfile::generate(&mut rng, &config);
        let items = spawn_collectibles(&mut rng, &terrain, &config);
        for c in &items {
            let ground = terrain.height_at(c.pos.x);
            assert!(c.pos.y <= ground - config.hover_min + 1e-3);
            assert!(c.pos.y >= config.collectible_min_y);
            assert!(c.pos.x >= config.collectible_margin);
            assert!(c.pos.x <= config.width - config.collectible_margin);
        }
    }

    #[test]
    fn test_countdown() {
        let mut countdown = Countdown::new(61.5);
        assert_eq!(countdown.clock(), (1, 1));
        countdown.advance(60.0);
        assert_eq!(countdown.clock(), (0, 1));
        countdown.advance(5.0);
        assert!(countdown.expired());
        assert_eq!(countdown.remaining(), 0.0);
        assert_eq!(countdown.elapsed(), 61.5);
    }

    #[test]
    fn test_claim_scores_once() {
        let mut session = PlatformerSession::new(PlatformerConfig::default(), 5);
        session.apply(Action::Start);
        let center = session.player.rect.center();
        session.collectibles = vec![Collectible {
            pos: center,
            radius: session.config.collectible_radius,
            collected: false,
        }];

        session.tick(&PlatformerInput::default(), PLATFORMER_TICK_DT);
        assert_eq!(session.score, 1);
        assert!(session.collectibles[0].collected);
        assert!(session.events.contains(&PlatformerEvent::Collected(0)));

        session.tick(&PlatformerInput::default(), PLATFORMER_TICK_DT);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_restart_builds_new_run() {
        let mut session = PlatformerSession::new(PlatformerConfig::default(), 9);
        session.apply(Action::Start);
        let first = session.terrain.heights().to_vec();
        session.countdown = Countdown::new(PLATFORMER_TICK_DT * 0.5);
        session.tick(&PlatformerInput::default(), PLATFORMER_TICK_DT);
        assert_eq!(session.outcome, Some(Outcome::TimeUp));

        session.apply(Action::Restart);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.outcome, None);
        assert_eq!(session.countdown.remaining(), session.config.time_limit);
        assert_ne!(session.terrain.heights(), first.as_slice());
    }
}
