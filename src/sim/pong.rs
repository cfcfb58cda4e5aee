//! Ping Pong session
//!
//! Player paddle on the left, scripted opponent on the right. All state for a
//! session lives in `PongSession` and advances through `apply` (phase actions)
//! and `tick` (one fixed timestep).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{ball_paddle_collision, ball_wall_collision, reflect_velocity};
use super::fsm::{Action, Fsm, Phase, Transition};
use super::geom::Rect;
use crate::settings::PongConfig;

/// Which side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Opponent => "AI",
        }
    }
}

/// A paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle at the given left x, vertically centered
    pub fn new(x: f32, config: &PongConfig) -> Self {
        let y = (config.height - config.paddle_height) / 2.0;
        Self {
            rect: Rect::new(x, y, config.paddle_width, config.paddle_height),
        }
    }

    /// Move by a held direction (-1 up, +1 down), clamped to the field
    pub fn drive(&mut self, direction: f32, speed: f32, dt: f32, field_height: f32) {
        self.rect.y += direction.clamp(-1.0, 1.0) * speed * dt;
        self.rect.clamp_vertical(0.0, field_height);
    }

    /// Move the paddle center toward `target_y` without overshooting
    pub fn track(&mut self, target_y: f32, max_speed: f32, dt: f32, field_height: f32) {
        let max_delta = max_speed * dt;
        let delta = (target_y - self.rect.center_y()).clamp(-max_delta, max_delta);
        self.rect.y += delta;
        self.rect.clamp_vertical(0.0, field_height);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(config: &PongConfig) -> Self {
        let center = Vec2::new(config.width / 2.0, config.height / 2.0);
        Self {
            rect: Rect::from_center(center, config.ball_size, config.ball_size),
            vel: Vec2::ZERO,
        }
    }

    /// Re-center and launch diagonally in a random direction
    pub fn serve<R: Rng>(&mut self, center: Vec2, speed: f32, rng: &mut R) {
        self.rect.set_center(center);
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * speed, sy * speed);
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub opponent: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Add a point, returning the new total for that side
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        };
        *slot += 1;
        *slot
    }

    /// Side that has reached the winning score, if any
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        if self.player >= winning_score {
            Some(Side::Player)
        } else if self.opponent >= winning_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongEvent {
    WallBounce,
    PaddleHit(Side),
    Scored(Side),
    MatchOver(Side),
}

/// Held input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PongInput {
    pub up: bool,
    pub down: bool,
}

impl PongInput {
    fn direction(&self) -> f32 {
        (self.down as i32 - self.up as i32) as f32
    }
}

/// Record of a finished match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongSummary {
    pub seed: u64,
    pub run: u32,
    pub ticks: u64,
    pub scores: Scores,
    pub winner: Side,
}

/// One Pong session: menu, matches, pause and game over
#[derive(Debug, Clone)]
pub struct PongSession {
    pub config: PongConfig,
    fsm: Fsm,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    pub winner: Option<Side>,
    /// Ticks simulated in the current match
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<PongEvent>,
    seed: u64,
    run: u32,
    rng: Pcg32,
}

impl PongSession {
    pub fn new(config: PongConfig, seed: u64) -> Self {
        let player = Paddle::new(config.paddle_inset, &config);
        let opponent = Paddle::new(
            config.width - config.paddle_inset - config.paddle_width,
            &config,
        );
        let ball = Ball::new(&config);
        Self {
            fsm: Fsm::new(true),
            player,
            opponent,
            ball,
            scores: Scores::default(),
            winner: None,
            time_ticks: 0,
            events: Vec::new(),
            seed,
            run: 0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.config.width / 2.0, self.config.height / 2.0)
    }

    /// Apply a phase action; starting or restarting resets the match
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

    /// Reset paddles, ball and scores for a new match
    fn reset_run(&mut self) {
        self.run += 1;
        self.scores = Scores::default();
        self.winner = None;
        self.time_ticks = 0;
        self.events.clear();

        let center_y = self.config.height / 2.0;
        self.player.rect.set_center_y(center_y);
        self.opponent.rect.set_center_y(center_y);

        let center = self.field_center();
        self.ball.serve(center, self.config.ball_speed, &mut self.rng);

        log::info!("Match {} started (seed {})", self.run, self.seed);
    }

    /// Advance the match by one fixed timestep
    pub fn tick(&mut self, input: &PongInput, dt: f32) {
        self.events.clear();
        if self.phase() != Phase::Playing {
            return;
        }
        self.time_ticks += 1;

        let height = self.config.height;
        self.player
            .drive(input.direction(), self.config.player_speed, dt, height);

        self.move_ball(dt);

        let target_y = self.ball.rect.center_y();
        self.opponent
            .track(target_y, self.config.opponent_speed, dt, height);

        if let Some(winner) = self.scores.winner(self.config.winning_score) {
            self.finish(winner);
        }
    }

    fn move_ball(&mut self, dt: f32) {
        let ball = &mut self.ball;
        ball.rect.translate(ball.vel * dt);

        // Top/bottom walls
        let wall = ball_wall_collision(&ball.rect, 0.0, self.config.height);
        if wall.hit {
            ball.vel = reflect_velocity(ball.vel, wall.normal);
            wall.separate(&mut ball.rect);
            self.events.push(PongEvent::WallBounce);
        }

        // Paddles
        let paddles = [
            (&self.player.rect, Vec2::X, Side::Player),
            (&self.opponent.rect, Vec2::NEG_X, Side::Opponent),
        ];
        for (paddle, face, side) in paddles {
            let contact = ball_paddle_collision(&ball.rect, ball.vel, paddle, face);
            if contact.hit {
                ball.vel = reflect_velocity(ball.vel, contact.normal);
                contact.separate(&mut ball.rect);
                self.events.push(PongEvent::PaddleHit(side));
                break;
            }
        }

        // Out past either side
        let scorer = if ball.rect.left() <= 0.0 {
            Some(Side::Opponent)
        } else if ball.rect.right() >= self.config.width {
            Some(Side::Player)
        } else {
            None
        };

        if let Some(side) = scorer {
            let total = self.scores.award(side);
            log::debug!("{} scores ({})", side.label(), total);
            let center = Vec2::new(self.config.width / 2.0, self.config.height / 2.0);
            self.ball.serve(center, self.config.ball_speed, &mut self.rng);
            self.events.push(PongEvent::Scored(side));
        }
    }

    fn finish(&mut self, winner: Side) {
        if !self.fsm.transition(Action::Finish).success {
            return;
        }
        self.winner = Some(winner);
        self.events.push(PongEvent::MatchOver(winner));

        let summary = self.summary(winner);
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Match over: {}", json),
            Err(e) => log::warn!("Match over ({} wins), summary unavailable: {}", winner.label(), e),
        }
    }

    fn summary(&self, winner: Side) -> PongSummary {
        PongSummary {
            seed: self.seed,
            run: self.run,
            ticks: self.time_ticks,
            scores: self.scores,
            winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PONG_TICK_DT;

    fn playing_session() -> PongSession {
        let mut session = PongSession::new(PongConfig::default(), 12345);
        assert!(session.apply(Action::Start).success);
        session
    }

    #[test]
    fn test_start_serves_ball_from_center() {
        let session = playing_session();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.ball.rect.center(), session.field_center());
        assert_eq!(session.ball.vel.x.abs(), session.config.ball_speed);
        assert_eq!(session.ball.vel.y.abs(), session.config.ball_speed);
    }

    #[test]
    fn test_menu_does_not_tick() {
        let mut session = PongSession::new(PongConfig::default(), 1);
        let before = session.ball.rect;
        session.tick(&PongInput::default(), PONG_TICK_DT);
        assert_eq!(session.ball.rect, before);
        assert_eq!(session.time_ticks, 0);
    }

    #[test]
    fn test_pause_freezes_play() {
        let mut session = playing_session();
        session.apply(Action::TogglePause);
        assert_eq!(session.phase(), Phase::Paused);
        let before = session.ball.rect;
        session.tick(&PongInput { up: true, down: false }, PONG_TICK_DT);
        assert_eq!(session.ball.rect, before);

        session.apply(Action::TogglePause);
        session.tick(&PongInput::default(), PONG_TICK_DT);
        assert_ne!(session.ball.rect, before);
    }

    #[test]
    fn test_player_paddle_clamped() {
        let mut session = playing_session();
        for _ in 0..500 {
            session.tick(&PongInput { up: true, down: false }, PONG_TICK_DT);
            if session.phase() != Phase::Playing {
                break;
            }
        }
        assert!(session.player.rect.top() >= 0.0);
    }

    #[test]
    fn test_wall_bounce_sends_ball_back_into_field() {
        let mut session = playing_session();
        session.ball.rect.set_center(Vec2::new(500.0, 12.0));
        session.ball.vel = Vec2::new(720.0, -720.0);
        session.tick(&PongInput::default(), PONG_TICK_DT);
        assert!(session.events.contains(&PongEvent::WallBounce));
        assert!(session.ball.vel.y > 0.0);
        assert!(session.ball.rect.top() >= 0.0);
        assert_eq!(session.ball.vel.x, 720.0);
    }

    #[test]
    fn test_player_paddle_contact_flips_once() {
        let mut session = playing_session();
        let paddle = session.player.rect;
        session.ball.rect.set_center(Vec2::new(paddle.right() + 12.0, paddle.center_y()));
        session.ball.vel = Vec2::new(-720.0, 0.0);

        session.tick(&PongInput::default(), PONG_TICK_DT);
        assert!(session.events.contains(&PongEvent::PaddleHit(Side::Player)));
        assert_eq!(session.ball.vel.x, 720.0);
        assert!(session.ball.rect.left() >= paddle.right() - 1e-3);

        // Next tick moves away without another flip
        session.tick(&PongInput::default(), PONG_TICK_DT);
        assert!(!session.events.iter().any(|e| matches!(e, PongEvent::PaddleHit(_))));
        assert_eq!(session.ball.vel.x, 720.0);
    }

    #[test]
    fn test_opponent_tracks_ball_without_overshoot() {
        let mut paddle = Paddle::new(940.0, &PongConfig::default());
        paddle.track(302.0, 720.0, PONG_TICK_DT, 600.0);
        assert!((paddle.rect.center_y() - 302.0).abs() < 1e-4);

        paddle.track(0.0, 720.0, PONG_TICK_DT, 600.0);
        assert!((paddle.rect.center_y() - 296.0).abs() < 1e-3);

        for _ in 0..200 {
            paddle.track(0.0, 720.0, PONG_TICK_DT, 600.0);
        }
        assert_eq!(paddle.rect.top(), 0.0);
    }

    #[test]
    fn test_left_exit_scores_for_opponent() {
        let mut session = playing_session();
        session.ball.rect.set_center(Vec2::new(12.0, 100.0));
        session.ball.vel = Vec2::new(-720.0, 0.0);

        session.tick(&PongInput::default(), PONG_TICK_DT);
        assert_eq!(session.scores, Scores { player: 0, opponent: 1 });
        assert!(session.events.contains(&PongEvent::Scored(Side::Opponent)));
        assert_eq!(session.ball.rect.center(), session.field_center());
    }

    #[test]
    fn test_scores_winner() {
        let scores = Scores { player: 2, opponent: 5 };
        assert_eq!(scores.winner(5), Some(Side::Opponent));
        assert_eq!(Scores::default().winner(5), None);
    }

    #[test]
    fn test_restart_resets_match() {
        let mut session = playing_session();
        session.scores = Scores { player: 4, opponent: 3 };
        session.ball.rect.set_center(Vec2::new(985.0, 100.0));
        session.ball.vel = Vec2::new(720.0, 0.0);
        session.tick(&PongInput::default(), PONG_TICK_DT);
        assert_eq!(session.phase(), Phase::GameOver);

        assert!(session.apply(Action::Restart).success);
        assert_eq!(session.scores, Scores::default());
        assert_eq!(session.winner, None);
        assert_eq!(session.time_ticks, 0);
    }
}
