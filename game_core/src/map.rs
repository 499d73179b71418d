use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from its top-left corner and size (y grows downward)
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// Inclusive test against the horizontal span
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.max.x
    }

    /// Inclusive overlap of `other`'s vertical extent with this box
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        other.max.y >= self.min.y && other.min.y <= self.max.y
    }
}

/// The play area. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.court_width,
            height: config.court_height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of something `extent` tall into the court
    pub fn clamp_y(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, self.height - extent)
    }
}
