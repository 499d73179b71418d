use crate::decoration::DecorationKind;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_serve_speeds_x: [f32; 4],
    pub ball_serve_speed_y: f32,
    pub ball_bounce_multiplier: f32,
    pub ball_deflection_max: f32,
    pub win_score: u8,
    pub stick_deadzone: f32,
    pub trigger_threshold: f32,
    pub decoration: DecorationKind,
    pub decoration_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_serve_speeds_x: Params::BALL_SERVE_SPEEDS_X,
            ball_serve_speed_y: Params::BALL_SERVE_SPEED_Y,
            ball_bounce_multiplier: Params::BALL_BOUNCE_MULTIPLIER,
            ball_deflection_max: Params::BALL_DEFLECTION_MAX,
            win_score: Params::WIN_SCORE,
            stick_deadzone: Params::STICK_DEADZONE,
            trigger_threshold: Params::TRIGGER_THRESHOLD,
            decoration: DecorationKind::Dynamic,
            decoration_alpha: Params::DECORATION_ALPHA,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_inset // Left paddle
        } else {
            self.court_width - self.paddle_inset - self.paddle_width // Right paddle
        }
    }

    /// Y position (top edge) that centres a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.court_height / 2.0 - self.paddle_height / 2.0
    }

    /// Where the ball is placed on every serve
    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(0), 30.0, "Left paddle X position");
        assert_eq!(config.paddle_x(1), 755.0, "Right paddle X position");
    }

    #[test]
    fn test_paddle_start_is_centred() {
        let config = Config::new();
        assert_eq!(config.paddle_start_y(), 210.0);
        assert_eq!(config.ball_spawn(), glam::Vec2::new(400.0, 250.0));
    }
}
