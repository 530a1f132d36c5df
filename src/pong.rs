//! Pong physics
//!
//! Shared arithmetic for the Pong demos: paddle movement, ball integration
//! and the wall/paddle bounce rules. All tuning values are named pixel
//! constants, not derived formulas — the paddle x-bands in particular are
//! fixed tuning, not geometry.
//!
//! Every bounce checks that the ball is moving TOWARD the surface before
//! flipping, so a ball still inside a band on the next frame is not
//! flipped back and forth until it escapes.

use macroquad::prelude::{draw_rectangle, vec2, Color, Vec2, WHITE};

pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 700.0;

/// Wall and ball thickness in pixels.
pub const WALL_THICKNESS: f32 = 15.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const PADDLE_SPEED: f32 = 200.0;
pub const BALL_SIZE: f32 = 15.0;

/// Paddle x positions (centers), inset from each edge.
pub const LEFT_PADDLE_X: f32 = 10.0;
pub const RIGHT_PADDLE_X: f32 = WINDOW_WIDTH - 10.0;

/// X-band, measured from the owning edge, within which a paddle can return
/// the ball. Fixed tuning values.
pub const PADDLE_BAND_NEAR: f32 = 20.0;
pub const PADDLE_BAND_FAR: f32 = 25.0;

/// Court background (dark green) and foreground colors.
pub const COURT_COLOR: Color = Color::new(20.0 / 255.0, 100.0 / 255.0, 20.0 / 255.0, 1.0);

/// Which side of the court a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle direction from a key pair: -1 up, +1 down, 0 when neither or
/// both keys are held.
pub fn paddle_dir(up: bool, down: bool) -> i32 {
    (down as i32) - (up as i32)
}

/// Integrate paddle movement and clamp so the paddle stays between the
/// walls.
pub fn step_paddle(y: f32, dir: i32, dt: f32) -> f32 {
    if dir == 0 {
        return y;
    }
    let y = y + dir as f32 * PADDLE_SPEED * dt;
    let min = PADDLE_HEIGHT / 2.0 + WALL_THICKNESS;
    let max = WINDOW_HEIGHT - PADDLE_HEIGHT / 2.0 - WALL_THICKNESS;
    y.clamp(min, max)
}

/// A moving ball.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball served from the court center with a random velocity.
    pub fn serve() -> Self {
        Self::new(
            vec2(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0),
            serve_velocity(),
        )
    }

    /// Integrate position.
    pub fn step(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Bounce off the top and bottom walls. Flips only while moving toward
    /// the wall.
    pub fn bounce_walls(&mut self) {
        if self.pos.y <= WALL_THICKNESS && self.vel.y < 0.0 {
            self.vel.y *= -1.0;
        } else if self.pos.y >= WINDOW_HEIGHT - WALL_THICKNESS && self.vel.y > 0.0 {
            self.vel.y *= -1.0;
        }
    }

    /// Bounce off the right wall (single-paddle variant).
    pub fn bounce_right_wall(&mut self) {
        if self.pos.x >= WINDOW_WIDTH - WALL_THICKNESS && self.vel.x > 0.0 {
            self.vel.x *= -1.0;
        }
    }

    /// Return the ball if it is vertically within the paddle's reach,
    /// horizontally inside that side's x-band, and moving toward the
    /// paddle.
    pub fn bounce_paddle(&mut self, paddle_y: f32, side: Side) {
        if (self.pos.y - paddle_y).abs() > PADDLE_HEIGHT / 2.0 {
            return;
        }
        let hit = match side {
            Side::Left => {
                self.pos.x >= PADDLE_BAND_NEAR && self.pos.x <= PADDLE_BAND_FAR && self.vel.x < 0.0
            }
            Side::Right => {
                self.pos.x >= WINDOW_WIDTH - PADDLE_BAND_FAR
                    && self.pos.x <= WINDOW_WIDTH - PADDLE_BAND_NEAR
                    && self.vel.x > 0.0
            }
        };
        if hit {
            self.vel.x *= -1.0;
        }
    }

    /// Has the ball escaped through the left edge?
    pub fn off_left(&self) -> bool {
        self.pos.x - BALL_SIZE / 2.0 < 0.0
    }

    /// Has the ball escaped through either side edge?
    pub fn off_court(&self) -> bool {
        self.pos.x - BALL_SIZE / 2.0 < 0.0 || self.pos.x + BALL_SIZE / 2.0 > WINDOW_WIDTH
    }
}

/// Random serve velocity: each component in 70..110 px/s with an
/// independent random sign.
pub fn serve_velocity() -> Vec2 {
    use macroquad::rand::gen_range;
    let mut vx = gen_range(70.0, 110.0);
    let mut vy = gen_range(70.0, 110.0);
    if gen_range(0, 2) == 0 {
        vx = -vx;
    }
    if gen_range(0, 2) == 0 {
        vy = -vy;
    }
    Vec2::new(vx, vy)
}

// =========================================================================
// Court drawing
// =========================================================================

/// Mid-line, top wall and bottom wall in white. The caller clears to
/// [`COURT_COLOR`] first.
pub fn draw_court() {
    draw_rectangle(WINDOW_WIDTH / 2.0 - 2.0, 0.0, 4.0, WINDOW_HEIGHT, WHITE);
    draw_rectangle(0.0, 0.0, WINDOW_WIDTH, WALL_THICKNESS, WHITE);
    draw_rectangle(
        0.0,
        WINDOW_HEIGHT - WALL_THICKNESS,
        WINDOW_WIDTH,
        WALL_THICKNESS,
        WHITE,
    );
}

/// Paddle rectangle centered on (x, y).
pub fn draw_paddle(x: f32, y: f32) {
    draw_rectangle(
        x - WALL_THICKNESS / 2.0,
        y - PADDLE_HEIGHT / 2.0,
        WALL_THICKNESS,
        PADDLE_HEIGHT,
        WHITE,
    );
}

/// Ball square centered on its position.
pub fn draw_ball(ball: &Ball) {
    draw_rectangle(
        ball.pos.x - BALL_SIZE / 2.0,
        ball.pos.y - BALL_SIZE / 2.0,
        BALL_SIZE,
        BALL_SIZE,
        WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_dir_cancels_when_both_held() {
        assert_eq!(paddle_dir(true, false), -1);
        assert_eq!(paddle_dir(false, true), 1);
        assert_eq!(paddle_dir(true, true), 0);
        assert_eq!(paddle_dir(false, false), 0);
    }

    #[test]
    fn test_paddle_clamped_between_walls() {
        let top_limit = PADDLE_HEIGHT / 2.0 + WALL_THICKNESS;
        let bottom_limit = WINDOW_HEIGHT - PADDLE_HEIGHT / 2.0 - WALL_THICKNESS;

        let mut y = top_limit + 1.0;
        for _ in 0..100 {
            y = step_paddle(y, -1, 0.05);
        }
        assert_eq!(y, top_limit);

        for _ in 0..1000 {
            y = step_paddle(y, 1, 0.05);
        }
        assert_eq!(y, bottom_limit);
    }

    #[test]
    fn test_top_wall_flips_velocity_exactly_once() {
        // Ball just inside the top band, moving up.
        let mut ball = Ball::new(vec2(500.0, 14.0), vec2(0.0, -100.0));
        ball.bounce_walls();
        assert_eq!(ball.vel.y, 100.0);

        // Still inside the band next frame, but now moving down: no flip.
        ball.bounce_walls();
        assert_eq!(ball.vel.y, 100.0);
    }

    #[test]
    fn test_bottom_wall_flips_only_moving_down() {
        let mut ball = Ball::new(vec2(500.0, WINDOW_HEIGHT - 10.0), vec2(0.0, 80.0));
        ball.bounce_walls();
        assert_eq!(ball.vel.y, -80.0);
        ball.bounce_walls();
        assert_eq!(ball.vel.y, -80.0);
    }

    #[test]
    fn test_left_paddle_returns_ball_in_band() {
        let paddle_y = 350.0;

        // In band, within reach, moving left: flip.
        let mut ball = Ball::new(vec2(22.0, 360.0), vec2(-90.0, 10.0));
        ball.bounce_paddle(paddle_y, Side::Left);
        assert_eq!(ball.vel.x, 90.0);

        // Outside the band: no flip.
        let mut ball = Ball::new(vec2(30.0, 360.0), vec2(-90.0, 10.0));
        ball.bounce_paddle(paddle_y, Side::Left);
        assert_eq!(ball.vel.x, -90.0);

        // Out of vertical reach: no flip.
        let mut ball = Ball::new(vec2(22.0, paddle_y + PADDLE_HEIGHT), vec2(-90.0, 10.0));
        ball.bounce_paddle(paddle_y, Side::Left);
        assert_eq!(ball.vel.x, -90.0);

        // Moving away already: no flip.
        let mut ball = Ball::new(vec2(22.0, 360.0), vec2(90.0, 10.0));
        ball.bounce_paddle(paddle_y, Side::Left);
        assert_eq!(ball.vel.x, 90.0);
    }

    #[test]
    fn test_right_paddle_band_mirrors_left() {
        let paddle_y = 350.0;
        let mut ball = Ball::new(vec2(WINDOW_WIDTH - 22.0, 340.0), vec2(90.0, 10.0));
        ball.bounce_paddle(paddle_y, Side::Right);
        assert_eq!(ball.vel.x, -90.0);
    }

    #[test]
    fn test_off_court_uses_half_extent() {
        let ball = Ball::new(vec2(BALL_SIZE / 2.0 + 0.1, 350.0), vec2(0.0, 0.0));
        assert!(!ball.off_court());
        assert!(!ball.off_left());

        let ball = Ball::new(vec2(BALL_SIZE / 2.0 - 0.1, 350.0), vec2(0.0, 0.0));
        assert!(ball.off_court());
        assert!(ball.off_left());

        let ball = Ball::new(vec2(WINDOW_WIDTH - BALL_SIZE / 2.0 + 0.1, 350.0), vec2(0.0, 0.0));
        assert!(ball.off_court());
        assert!(!ball.off_left());
    }

    #[test]
    fn test_clamped_big_step_cannot_tunnel_walls() {
        // A worst-case clamped step moves the ball at most
        // MAX_DELTA * |vy| pixels, which must stay inside the wall band so
        // the moving-toward check can still see it.
        let max_step = crate::time::MAX_DELTA * 110.0;
        assert!(max_step < WALL_THICKNESS);
    }
}
