use glam::Vec2;

use crate::map::{Aabb, Court};
use crate::{Config, GameRng};

/// Which end of the court a paddle (or player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn player_id(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,      // Left edge, fixed for the whole match
    pub y: f32,      // Top edge, clamped to the court
    pub width: f32,
    pub height: f32,
    pub speed: f32,  // Pixels per tick at direction 1.0
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side.player_id()),
            y: config.paddle_start_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    /// Move by `direction * speed` and clamp into the court.
    ///
    /// `direction` is not clamped; callers pass normalized values.
    pub fn move_by(&mut self, direction: f32, court: &Court) {
        self.y += direction * self.speed;
        self.y = court.clamp_y(self.y, self.height);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Ball component - a square of side `size`, positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Place a fresh ball at the serve point with a random velocity
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to the court centre with a random serve
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::seq::SliceRandom;
        use rand::Rng;

        self.pos = config.ball_spawn();

        let speed_x = config
            .ball_serve_speeds_x
            .choose(&mut rng.0)
            .copied()
            .unwrap_or(config.ball_serve_speeds_x[0]);
        let max_y = config.ball_serve_speed_y;
        let speed_y = rng.0.gen_range(-max_y..=max_y);

        self.vel = Vec2::new(speed_x, speed_y);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, Vec2::splat(self.size))
    }
}

/// Movement intent for paddle, rebuilt from input every tick.
///
/// Keyboard and gamepad contributions are kept apart because they are
/// applied as separate moves within the same tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub key_up: bool,
    pub key_down: bool,
    pub analog: f32, // Resolved gamepad direction
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_clamps_at_top() {
        let config = Config::new();
        let court = Court::new(&config);
        let mut paddle = Paddle::new(Side::Left, &config);
        paddle.y = 0.0;

        paddle.move_by(-1.0, &court);

        assert_eq!(paddle.y, 0.0, "Paddle must not leave the top of the court");
    }

    #[test]
    fn test_paddle_clamps_at_bottom_for_large_input() {
        let config = Config::new();
        let court = Court::new(&config);
        let mut paddle = Paddle::new(Side::Right, &config);

        paddle.move_by(250.0, &court);

        assert_eq!(paddle.y, config.court_height - config.paddle_height);
    }

    #[test]
    fn test_paddle_direction_scales_linearly() {
        let config = Config::new();
        let court = Court::new(&config);
        let mut paddle = Paddle::new(Side::Left, &config);
        let start = paddle.y;

        paddle.move_by(0.5, &court);

        assert_eq!(paddle.y, start + 3.0);
    }

    #[test]
    fn test_ball_reset_uses_serve_table() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let ball = Ball::serve(&config, &mut rng);
            assert_eq!(ball.pos, config.ball_spawn());
            assert!(
                config.ball_serve_speeds_x.contains(&ball.vel.x),
                "speed_x {} not in serve table",
                ball.vel.x
            );
            assert!(ball.vel.y >= -3.0 && ball.vel.y <= 3.0);
        }
    }
}
