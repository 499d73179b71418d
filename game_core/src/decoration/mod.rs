//! Decorative background behind the court
//!
//! Pure geometry and colour: strategies produce ellipses in court
//! coordinates and the client decides how to rasterise them.

pub mod manager;
pub mod motif;
pub mod palette;

pub use manager::*;
pub use motif::*;
pub use palette::*;

use glam::{Affine2, Vec2};

/// Background animation style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    Simple,
    Dynamic,
}

impl DecorationKind {
    pub fn name(self) -> &'static str {
        match self {
            DecorationKind::Simple => "Simple",
            DecorationKind::Dynamic => "Dynamic",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DecorationKind::Simple => DecorationKind::Dynamic,
            DecorationKind::Dynamic => DecorationKind::Simple,
        }
    }
}

/// A rotated ellipse filled with the palette gradient.
///
/// The gradient runs along the ellipse's local y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    pub rotation: f32, // radians, clockwise on screen (y down)
}

impl Ellipse {
    /// Ellipse of local size `width` x `height` placed by a
    /// rotation + uniform scale + translation transform
    pub fn placed(transform: Affine2, width: f32, height: f32) -> Self {
        let x_axis = transform.matrix2.x_axis;
        let scale = x_axis.length();
        Self {
            center: transform.translation,
            width: width * scale,
            height: height * scale,
            rotation: x_axis.y.atan2(x_axis.x),
        }
    }
}

/// One background animation
pub trait DecorationStrategy {
    fn kind(&self) -> DecorationKind;

    /// Step the animation to `frame`
    fn advance(&mut self, frame: u64);

    /// Shapes to draw, back to front
    fn shapes(&self) -> &[Ellipse];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_toggles() {
        assert_eq!(DecorationKind::Simple.toggled(), DecorationKind::Dynamic);
        assert_eq!(DecorationKind::Dynamic.toggled().toggled(), DecorationKind::Dynamic);
    }

    #[test]
    fn test_placed_ellipse_reads_back_transform() {
        let transform = Affine2::from_translation(Vec2::new(10.0, 20.0))
            * Affine2::from_scale(Vec2::splat(2.0))
            * Affine2::from_angle(0.5);

        let ellipse = Ellipse::placed(transform, 30.0, 40.0);

        assert!((ellipse.center - Vec2::new(10.0, 20.0)).length() < 1e-5);
        assert!((ellipse.width - 60.0).abs() < 1e-4);
        assert!((ellipse.height - 80.0).abs() < 1e-4);
        assert!((ellipse.rotation - 0.5).abs() < 1e-5);
    }
}
