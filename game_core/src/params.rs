/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (pixels)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 6.0; // pixels per tick
    pub const PADDLE_INSET: f32 = 30.0; // distance from the side walls

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SERVE_SPEEDS_X: [f32; 4] = [-4.0, -3.0, 3.0, 4.0];
    pub const BALL_SERVE_SPEED_Y: f32 = 3.0; // serve speed_y in [-3, 3]
    pub const BALL_BOUNCE_MULTIPLIER: f32 = -1.1; // reflect and speed up, no cap
    pub const BALL_DEFLECTION_MAX: f32 = 4.0; // speed_y range after a paddle hit

    // Score
    pub const WIN_SCORE: u8 = 7;

    // Gamepad
    pub const STICK_DEADZONE: f32 = 0.2;
    pub const TRIGGER_THRESHOLD: f32 = 0.1;

    // Decoration
    pub const DECORATION_ALPHA: f32 = 0.3;
    pub const MOTIF_REPEAT: usize = 12;
    pub const MOTIF_SIZE: f32 = 400.0;
    pub const GRADIENT_REPETITIONS: usize = 15;
}
