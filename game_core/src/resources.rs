use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    /// Terminal predicate: either side has reached `win_score`
    pub fn check_win(&self, win_score: u8) -> bool {
        self.left >= win_score || self.right >= win_score
    }

    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if !self.check_win(win_score) {
            None
        } else if self.left > self.right {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        use rand::Rng;
        self.0.gen_range(min..max)
    }

    pub fn gen_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.0.gen_range(0..len.max(1))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
