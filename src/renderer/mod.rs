//! macroquad rendering
//!
//! Draws simulation state and menu screens. Nothing here mutates game state.

pub mod platformer;
pub mod pong;
pub mod shapes;

use glam::Vec2;
use macroquad::color::Color;
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;

use crate::ui::Screen;

pub const WHITE: Color = Color::new(0.96, 0.96, 0.96, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
/// Pause overlay tint
pub const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.47);

pub const TITLE_FONT_SIZE: f32 = 64.0;
pub const TEXT_FONT_SIZE: f32 = 28.0;

/// Draw text with its center at (x, y)
pub fn draw_text_centered(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let left = (x - dims.width * 0.5).round();
    let baseline = (y + dims.offset_y * 0.5).round();
    draw_text(text, left, baseline, font_size, color);
}

/// Draw a menu screen; `hover` highlights the button under the mouse
pub fn draw_screen(screen: &Screen, background: Color, text_color: Color, hover: Option<Vec2>) {
    if screen.overlay {
        let (w, h) = (macroquad::window::screen_width(), macroquad::window::screen_height());
        draw_rectangle(0.0, 0.0, w, h, OVERLAY);
    } else {
        clear_background(background);
    }

    let center_x = screen
        .buttons
        .first()
        .map(|b| b.rect.center_x())
        .unwrap_or_else(|| macroquad::window::screen_width() * 0.5);

    draw_text_centered(&screen.title, center_x, screen.title_y, TITLE_FONT_SIZE, text_color);
    if let Some(subtitle) = &screen.subtitle {
        draw_text_centered(subtitle, center_x, screen.title_y + 64.0, TEXT_FONT_SIZE * 0.75, text_color);
    }

    for button in &screen.buttons {
        let r = button.rect;
        if hover.is_some_and(|p| r.contains(p)) {
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, text_color);
        }
        let c = r.center();
        draw_text_centered(button.label, c.x, c.y, TEXT_FONT_SIZE, text_color);
    }
}
