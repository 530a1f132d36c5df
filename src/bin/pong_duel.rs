//! Two-paddle, multi-ball Pong
//!
//! Left paddle on W/S, right paddle on Up/Down, three balls served from
//! the center with random velocities. The game ends when any ball escapes
//! through either side, or on Escape.

use macroquad::prelude::*;

use tinystage::pong::{
    draw_ball, draw_court, draw_paddle, paddle_dir, step_paddle, Ball, Side, COURT_COLOR,
    LEFT_PADDLE_X, RIGHT_PADDLE_X, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use tinystage::time::{clamp_delta, pace_frame};

const NUM_BALLS: usize = 3;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pong Duel v{}", tinystage::VERSION),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    rand::srand(miniquad::date::now() as u64);

    let mut left_y = WINDOW_HEIGHT / 2.0;
    let mut right_y = WINDOW_HEIGHT / 2.0;
    let mut balls: Vec<Ball> = (0..NUM_BALLS).map(|_| Ball::serve()).collect();
    let mut running = true;

    while running {
        let frame_start = get_time();

        // Input
        if is_key_down(KeyCode::Escape) {
            running = false;
        }
        let left_dir = paddle_dir(is_key_down(KeyCode::W), is_key_down(KeyCode::S));
        let right_dir = paddle_dir(is_key_down(KeyCode::Up), is_key_down(KeyCode::Down));

        // Update
        let dt = clamp_delta(get_frame_time());
        left_y = step_paddle(left_y, left_dir, dt);
        right_y = step_paddle(right_y, right_dir, dt);
        for ball in &mut balls {
            ball.step(dt);
            ball.bounce_walls();
            ball.bounce_paddle(left_y, Side::Left);
            ball.bounce_paddle(right_y, Side::Right);
        }
        if balls.iter().any(|ball| ball.off_court()) {
            println!("Ball out, game over");
            running = false;
        }

        // Render
        clear_background(COURT_COLOR);
        draw_court();
        draw_paddle(LEFT_PADDLE_X, left_y);
        draw_paddle(RIGHT_PADDLE_X, right_y);
        for ball in &balls {
            draw_ball(ball);
        }

        pace_frame(frame_start);
        next_frame().await;
    }
}
