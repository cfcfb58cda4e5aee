//! Menu, pause and game-over screens as declarative interactive regions
//!
//! Each game describes the screen for its current phase; the frame loop draws
//! it and hit-tests clicks against its buttons to get an `Action`.

use glam::Vec2;

use crate::sim::{Action, Outcome, Phase, PlatformerSession, PongSession, Rect};

/// Clickable button size
pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 48.0;

/// A clickable region that issues an action
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: Action,
}

/// A full-screen menu: title, optional subtitle and a column of buttons
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub title: String,
    /// Title baseline center y
    pub title_y: f32,
    pub subtitle: Option<String>,
    /// Draw over the frozen playfield instead of clearing it
    pub overlay: bool,
    pub buttons: Vec<Button>,
}

impl Screen {
    /// Action of the button under `point`, if any
    pub fn hit_test(&self, point: Vec2) -> Option<Action> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(point))
            .map(|b| b.action)
    }

    pub fn button(&self, action: Action) -> Option<&Button> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

/// Stack buttons vertically, centered on `center_x`
fn button_column(center_x: f32, first_y: f32, gap: f32, entries: &[(&'static str, Action)]) -> Vec<Button> {
    entries
        .iter()
        .enumerate()
        .map(|(i, &(label, action))| Button {
            label,
            rect: Rect::from_center(
                Vec2::new(center_x, first_y + i as f32 * gap),
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            action,
        })
        .collect()
}

/// Screen for the Pong session's phase (`None` while playing)
pub fn pong_screen(session: &PongSession) -> Option<Screen> {
    let (w, h) = (session.config.width, session.config.height);
    let column = |first: &'static str, action: Action| {
        button_column(w / 2.0, h / 2.0, 80.0, &[(first, action), ("Quit", Action::Quit)])
    };

    match session.phase() {
        Phase::Menu => Some(Screen {
            title: "PING PONG".to_string(),
            title_y: h / 4.0,
            subtitle: None,
            overlay: false,
            buttons: column("Start", Action::Start),
        }),
        Phase::Paused => Some(Screen {
            title: "PAUSED".to_string(),
            title_y: h / 3.0,
            subtitle: None,
            overlay: true,
            buttons: column("Resume", Action::TogglePause),
        }),
        Phase::GameOver => {
            let winner = session.winner.map(|s| s.label()).unwrap_or("Nobody");
            Some(Screen {
                title: format!("{} Wins!", winner),
                title_y: h / 4.0,
                subtitle: Some(format!(
                    "{} - {}",
                    session.scores.player, session.scores.opponent
                )),
                overlay: false,
                buttons: column("Restart", Action::Restart),
            })
        }
        Phase::Playing | Phase::Terminated => None,
    }
}

/// Screen for the platformer session's phase (`None` while playing)
pub fn platformer_screen(session: &PlatformerSession) -> Option<Screen> {
    let config = &session.config;
    let (w, h) = (config.width, config.height);
    let column = |first: &'static str, action: Action| {
        button_column(w / 2.0, h / 2.0 + 20.0, 80.0, &[(first, action), ("Quit", Action::Quit)])
    };

    match session.phase() {
        Phase::Menu => Some(Screen {
            title: "Collect Quest".to_string(),
            title_y: h / 3.0,
            subtitle: Some(format!(
                "Collect {} golden circles before time runs out. Move: A/D or Left/Right, Jump: Space",
                config.target_score
            )),
            overlay: false,
            buttons: column("Start", Action::Start),
        }),
        Phase::GameOver => {
            let (title, subtitle) = match session.outcome {
                Some(Outcome::Won) => ("You Win!", "Nice! You collected enough circles."),
                _ => ("Time Up", "You ran out of time."),
            };
            Some(Screen {
                title: title.to_string(),
                title_y: h / 3.0,
                subtitle: Some(subtitle.to_string()),
                overlay: false,
                buttons: column("Restart", Action::Restart),
            })
        }
        Phase::Playing | Phase::Paused | Phase::Terminated => None,
    }
}
