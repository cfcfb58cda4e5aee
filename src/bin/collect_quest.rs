//! Collect Quest entry point
//!
//! A/D or Left/Right move, Space/W/Up jump.

use glam::Vec2;
use macroquad::input::{
    KeyCode, MouseButton, is_key_down, is_key_pressed, is_mouse_button_pressed, mouse_position,
};
use macroquad::time::get_frame_time;
use macroquad::window::{Conf, next_frame};

use twin_arcade::consts::PLATFORMER_TICK_DT;
use twin_arcade::renderer::{self, WHITE, platformer::{SKY, draw_world}};
use twin_arcade::sim::{Action, Phase, PlatformerInput, PlatformerSession};
use twin_arcade::ui::platformer_screen;
use twin_arcade::{FixedStep, PlatformerConfig};

fn window_conf() -> Conf {
    let config = PlatformerConfig::default();
    Conf {
        window_title: "Collect on Random Terrain".to_string(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn jump_pressed() -> bool {
    [KeyCode::Space, KeyCode::W, KeyCode::Up]
        .into_iter()
        .any(is_key_pressed)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("Collect Quest starting (seed {})", seed);

    let mut session = PlatformerSession::new(PlatformerConfig::default(), seed);
    let mut clock = FixedStep::new(PLATFORMER_TICK_DT);
    // Jump presses wait here until a tick consumes them
    let mut pending_jump = false;

    loop {
        let (mx, my) = mouse_position();
        let mouse = Vec2::new(mx, my);

        if is_mouse_button_pressed(MouseButton::Left) {
            let clicked = platformer_screen(&session).and_then(|screen| screen.hit_test(mouse));
            if let Some(action) = clicked {
                session.apply(action);
                pending_jump = false;
            }
        }
        if session.phase() == Phase::Terminated {
            break;
        }

        if session.phase() == Phase::Playing {
            pending_jump |= jump_pressed();
        }

        let mut input = PlatformerInput {
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            jump: pending_jump,
        };
        for _ in 0..clock.advance(get_frame_time()) {
            session.tick(&input, clock.step());
            // One-shot inputs only apply to the first tick
            input.jump = false;
            pending_jump = false;
        }

        match platformer_screen(&session) {
            Some(screen) => renderer::draw_screen(&screen, SKY, WHITE, Some(mouse)),
            None => draw_world(&session),
        }

        next_frame().await;
    }

    log::info!("Collect Quest exiting");
}
