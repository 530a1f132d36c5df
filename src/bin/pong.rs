//! Single-paddle Pong
//!
//! One paddle on the left (W/S), a ball that bounces off the top, bottom
//! and right walls. The game ends when the ball escapes through the left
//! edge, or on Escape.

use macroquad::prelude::*;

use tinystage::pong::{
    draw_ball, draw_court, draw_paddle, paddle_dir, step_paddle, Ball, Side, COURT_COLOR,
    LEFT_PADDLE_X, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use tinystage::time::{clamp_delta, pace_frame};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pong v{}", tinystage::VERSION),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    rand::srand(miniquad::date::now() as u64);

    let mut paddle_y = WINDOW_HEIGHT / 2.0;
    let mut ball = Ball::serve();
    let mut running = true;

    while running {
        let frame_start = get_time();

        // Input
        if is_key_down(KeyCode::Escape) {
            running = false;
        }
        let dir = paddle_dir(is_key_down(KeyCode::W), is_key_down(KeyCode::S));

        // Update
        let dt = clamp_delta(get_frame_time());
        paddle_y = step_paddle(paddle_y, dir, dt);
        ball.step(dt);
        ball.bounce_walls();
        ball.bounce_right_wall();
        ball.bounce_paddle(paddle_y, Side::Left);
        if ball.off_left() {
            println!("Ball out on the left, game over");
            running = false;
        }

        // Render
        clear_background(COURT_COLOR);
        draw_court();
        draw_paddle(LEFT_PADDLE_X, paddle_y);
        draw_ball(&ball);

        pace_frame(frame_start);
        next_frame().await;
    }
}
