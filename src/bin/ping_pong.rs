//! Ping Pong entry point
//!
//! W/S or Up/Down move the left paddle, Escape pauses.

use glam::Vec2;
use macroquad::input::{
    KeyCode, MouseButton, is_key_down, is_key_pressed, is_mouse_button_pressed, mouse_position,
};
use macroquad::time::get_frame_time;
use macroquad::window::{Conf, next_frame};

use twin_arcade::consts::PONG_TICK_DT;
use twin_arcade::renderer::{self, BLACK, WHITE, pong::draw_playfield};
use twin_arcade::sim::{Action, Phase, PongInput, PongSession};
use twin_arcade::ui::pong_screen;
use twin_arcade::{FixedStep, PongConfig};

fn window_conf() -> Conf {
    let config = PongConfig::default();
    Conf {
        window_title: "Easy Ping Pong".to_string(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn read_input() -> PongInput {
    PongInput {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("Ping Pong starting (seed {})", seed);

    let mut session = PongSession::new(PongConfig::default(), seed);
    let mut clock = FixedStep::new(PONG_TICK_DT);

    loop {
        let (mx, my) = mouse_position();
        let mouse = Vec2::new(mx, my);

        // Phase actions: pause key and menu buttons
        if is_key_pressed(KeyCode::Escape) {
            session.apply(Action::TogglePause);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let clicked = pong_screen(&session).and_then(|screen| screen.hit_test(mouse));
            if let Some(action) = clicked {
                session.apply(action);
            }
        }
        if session.phase() == Phase::Terminated {
            break;
        }

        let input = read_input();
        for _ in 0..clock.advance(get_frame_time()) {
            session.tick(&input, clock.step());
        }

        match pong_screen(&session) {
            Some(screen) => {
                if screen.overlay {
                    draw_playfield(&session);
                }
                renderer::draw_screen(&screen, BLACK, WHITE, Some(mouse));
            }
            None => draw_playfield(&session),
        }

        next_frame().await;
    }

    log::info!("Ping Pong exiting");
}
