//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod fsm;
pub mod geom;
pub mod platformer;
pub mod pong;
pub mod terrain;

pub use collision::{CollisionResult, ball_paddle_collision, ball_wall_collision, reflect_velocity};
pub use fsm::{Action, Fsm, Phase, Transition};
pub use geom::Rect;
pub use platformer::{
    Collectible, Countdown, Outcome, PlatformerEvent, PlatformerInput, PlatformerSession,
    PlatformerSummary, Player, spawn_collectibles,
};
pub use pong::{Ball, Paddle, PongEvent, PongInput, PongSession, PongSummary, Scores, Side};
pub use terrain::TerrainProfile;
