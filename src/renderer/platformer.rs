//! Collect Quest world and HUD

use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::{draw_circle, draw_rectangle, draw_triangle};
use macroquad::text::draw_text;
use macroquad::window::clear_background;

use super::shapes::{clock_text, fill_below};
use super::{TEXT_FONT_SIZE, WHITE};
use crate::sim::PlatformerSession;

pub const SKY: Color = Color::new(0.31, 0.67, 1.0, 1.0);
pub const GROUND: Color = Color::new(0.16, 0.39, 0.16, 1.0);
pub const COLLECTIBLE: Color = Color::new(1.0, 0.84, 0.0, 1.0);
pub const PLAYER: Color = Color::new(0.78, 0.24, 0.24, 1.0);
pub const HUD_BG: Color = Color::new(0.08, 0.08, 0.12, 1.0);

/// Height of the top HUD bar
pub const HUD_HEIGHT: f32 = 48.0;

/// Draw terrain, pickups, player and HUD
pub fn draw_world(session: &PlatformerSession) {
    clear_background(SKY);

    let points: Vec<_> = session.terrain.points().collect();
    for [a, b, c] in fill_below(&points, session.config.height) {
        draw_triangle(vec2(a.x, a.y), vec2(b.x, b.y), vec2(c.x, c.y), GROUND);
    }

    for c in session.remaining_collectibles() {
        draw_circle(c.pos.x, c.pos.y, c.radius, COLLECTIBLE);
    }

    let p = session.player.rect;
    draw_rectangle(p.x, p.y, p.w, p.h, PLAYER);

    draw_hud(session);
}

fn draw_hud(session: &PlatformerSession) {
    let w = session.config.width;
    draw_rectangle(0.0, 0.0, w, HUD_HEIGHT, HUD_BG);

    let baseline = HUD_HEIGHT * 0.5 + TEXT_FONT_SIZE * 0.3;
    let score = format!("Score: {}/{}", session.score, session.config.target_score);
    draw_text(&score, 12.0, baseline, TEXT_FONT_SIZE, WHITE);

    let (minutes, seconds) = session.countdown.clock();
    let time = format!("Time: {}", clock_text(minutes, seconds));
    draw_text(&time, w - 160.0, baseline, TEXT_FONT_SIZE, WHITE);
}
