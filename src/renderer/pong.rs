//! Ping Pong playfield

use macroquad::shapes::{draw_circle, draw_line, draw_rectangle};
use macroquad::window::clear_background;

use super::{BLACK, TEXT_FONT_SIZE, WHITE, draw_text_centered};
use crate::sim::{PongSession, Rect};

fn fill_rect(r: &Rect) {
    draw_rectangle(r.x, r.y, r.w, r.h, WHITE);
}

/// Draw paddles, ball, center line and scores
pub fn draw_playfield(session: &PongSession) {
    let (w, h) = (session.config.width, session.config.height);
    clear_background(BLACK);

    fill_rect(&session.player.rect);
    fill_rect(&session.opponent.rect);

    let ball = session.ball.rect;
    let c = ball.center();
    draw_circle(c.x, c.y, ball.w * 0.5, WHITE);

    draw_line(w * 0.5, 0.0, w * 0.5, h, 1.0, WHITE);

    let size = TEXT_FONT_SIZE * 1.3;
    draw_text_centered(&session.scores.player.to_string(), w * 0.25, 36.0, size, WHITE);
    draw_text_centered(&session.scores.opponent.to_string(), w * 0.75, 36.0, size, WHITE);
}
