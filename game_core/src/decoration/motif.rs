use std::f32::consts::PI;

use glam::{Affine2, Vec2};

use super::{DecorationKind, DecorationStrategy, Ellipse};
use crate::GameRng;

/// Linear remap of `value` from one range to another
fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Element sizes shrink evenly from `size` towards zero
fn element_sizes(size: f32, repeat: usize) -> Vec<f32> {
    let step = size / repeat.max(1) as f32;
    (0..repeat).map(|i| size - i as f32 * step).collect()
}

fn resting_shapes(origin: Vec2, sizes: &[f32]) -> Vec<Ellipse> {
    sizes
        .iter()
        .map(|&size| Ellipse {
            center: origin,
            width: size,
            height: size,
            rotation: 0.0,
        })
        .collect()
}

/// Nested circles turning slowly around the court centre
#[derive(Debug, Clone)]
pub struct SimpleMotif {
    origin: Vec2,
    angle: f32,
    sizes: Vec<f32>,
    shapes: Vec<Ellipse>,
}

impl SimpleMotif {
    pub fn new(origin: Vec2, size: f32, repeat: usize) -> Self {
        let sizes = element_sizes(size, repeat);
        Self {
            origin,
            angle: 0.0,
            shapes: resting_shapes(origin, &sizes),
            sizes,
        }
    }
}

impl DecorationStrategy for SimpleMotif {
    fn kind(&self) -> DecorationKind {
        DecorationKind::Simple
    }

    fn advance(&mut self, frame: u64) {
        let frame = frame as f32;
        let angle_step = PI / self.sizes.len().max(1) as f32;
        self.angle += angle_step * 0.05;

        let mut transform = Affine2::from_translation(self.origin) * Affine2::from_angle(self.angle);
        for (i, (&size, shape)) in self.sizes.iter().zip(self.shapes.iter_mut()).enumerate() {
            let t = angle_step * i as f32 + frame * 0.005;
            // Rotation accumulates from one element to the next
            transform = transform * Affine2::from_angle(t * 0.03);
            let diameter = map_range(t.sin(), -1.0, 1.0, size * 0.6, size * 1.2);
            *shape = Ellipse::placed(transform, diameter, diameter);
        }
    }

    fn shapes(&self) -> &[Ellipse] {
        &self.shapes
    }
}

/// Per-element wobble, randomized once at construction
#[derive(Debug, Clone)]
struct DynamicElement {
    size: f32,
    local_angle: f32,
    rotation_speed: f32,
    pulse_speed: f32,
    drift_speed: f32,
    max_drift: f32,
}

impl DynamicElement {
    fn new(size: f32, rng: &mut GameRng) -> Self {
        Self {
            size,
            local_angle: 0.0,
            rotation_speed: rng.gen_range(-0.02, 0.02),
            pulse_speed: rng.gen_range(0.01, 0.03),
            drift_speed: rng.gen_range(0.005, 0.015),
            max_drift: rng.gen_range(20.0, 50.0),
        }
    }
}

/// Nested ellipses that breathe, sway and drift
#[derive(Debug, Clone)]
pub struct DynamicMotif {
    origin: Vec2,
    angle: f32,
    elements: Vec<DynamicElement>,
    shapes: Vec<Ellipse>,
}

impl DynamicMotif {
    pub fn new(origin: Vec2, size: f32, repeat: usize, rng: &mut GameRng) -> Self {
        let sizes = element_sizes(size, repeat);
        Self {
            origin,
            angle: 0.0,
            shapes: resting_shapes(origin, &sizes),
            elements: sizes
                .into_iter()
                .map(|size| DynamicElement::new(size, rng))
                .collect(),
        }
    }
}

impl DecorationStrategy for DynamicMotif {
    fn kind(&self) -> DecorationKind {
        DecorationKind::Dynamic
    }

    fn advance(&mut self, frame: u64) {
        let frame = frame as f32;
        let breathing = 1.0 + (frame * 0.008).sin() * 0.2;
        let sway = Vec2::new((frame * 0.006).sin() * 30.0, (frame * 0.006 * 0.8).cos() * 20.0);

        let angle_step = PI / self.elements.len().max(1) as f32;
        self.angle += angle_step * 0.05;

        let mut transform = Affine2::from_translation(self.origin + sway)
            * Affine2::from_scale(Vec2::splat(breathing))
            * Affine2::from_angle(self.angle);

        for (i, (element, shape)) in self.elements.iter_mut().zip(self.shapes.iter_mut()).enumerate() {
            let index = i as f32;
            let t = angle_step * index + frame * 0.005;
            transform = transform * Affine2::from_angle(t * 0.03 + (frame * 0.01 + index).sin() * 0.1);

            let size_variation = map_range((t + frame * 0.003).sin(), -1.0, 1.0, 0.6, 1.4);
            let aspect = map_range((t * 1.3 + frame * 0.004).cos(), -1.0, 1.0, 0.8, 1.2);
            let width = element.size * size_variation;
            let height = width * aspect;

            element.local_angle += element.rotation_speed;
            let pulse = 1.0 + (frame * element.pulse_speed).sin() * 0.3;
            let drift = Vec2::new(
                (frame * element.drift_speed).sin() * element.max_drift,
                (frame * element.drift_speed * 0.7).cos() * element.max_drift * 0.5,
            );

            let placed = transform
                * Affine2::from_translation(drift)
                * Affine2::from_scale(Vec2::splat(pulse))
                * Affine2::from_angle(element.local_angle);
            // Height is pulsed again on top of the element scale
            *shape = Ellipse::placed(placed, width, height * pulse);
        }
    }

    fn shapes(&self) -> &[Ellipse] {
        &self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Vec2 = Vec2::new(400.0, 250.0);

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(0.0, -1.0, 1.0, 0.6, 1.4), 1.0);
        assert_eq!(map_range(-1.0, -1.0, 1.0, 240.0, 480.0), 240.0);
        assert_eq!(map_range(1.0, -1.0, 1.0, 240.0, 480.0), 480.0);
    }

    #[test]
    fn test_element_sizes_shrink_evenly() {
        let sizes = element_sizes(400.0, 12);
        assert_eq!(sizes.len(), 12);
        assert_eq!(sizes[0], 400.0);
        assert!((sizes[11] - 400.0 / 12.0).abs() < 1e-3);
    }

    #[test]
    fn test_simple_motif_first_frame() {
        let mut motif = SimpleMotif::new(ORIGIN, 400.0, 12);
        motif.advance(0);

        let shapes = motif.shapes();
        assert_eq!(shapes.len(), 12);
        // Simple motif never translates away from its origin
        for shape in shapes {
            assert!((shape.center - ORIGIN).length() < 1e-3);
            assert_eq!(shape.width, shape.height);
        }
        // t = 0 for the outer circle: sin 0 maps to the middle of [240, 480]
        assert!((shapes[0].width - 360.0).abs() < 1e-3);
        let expected_angle = PI / 12.0 * 0.05;
        assert!((shapes[0].rotation - expected_angle).abs() < 1e-5);
    }

    #[test]
    fn test_simple_motif_rotation_accumulates() {
        let mut motif = SimpleMotif::new(ORIGIN, 400.0, 12);
        motif.advance(10);
        let first = motif.shapes()[0].rotation;
        motif.advance(11);
        assert!(motif.shapes()[0].rotation > first);
        assert!(motif.shapes()[11].rotation > motif.shapes()[0].rotation);
    }

    #[test]
    fn test_dynamic_motif_stays_near_centre() {
        let mut rng = GameRng::new(3);
        let mut motif = DynamicMotif::new(ORIGIN, 400.0, 12, &mut rng);

        for frame in 0..600 {
            motif.advance(frame);
            for shape in motif.shapes() {
                // sway (30, 20) plus drift (<= 50) scaled by breathing (<= 1.2)
                assert!((shape.center - ORIGIN).length() < 120.0);
                assert!(shape.width > 0.0 && shape.height > 0.0);
                assert!(shape.width.is_finite() && shape.rotation.is_finite());
            }
        }
    }

    #[test]
    fn test_dynamic_motif_is_seeded() {
        let mut a = DynamicMotif::new(ORIGIN, 400.0, 12, &mut GameRng::new(9));
        let mut b = DynamicMotif::new(ORIGIN, 400.0, 12, &mut GameRng::new(9));
        a.advance(42);
        b.advance(42);
        assert_eq!(a.shapes(), b.shapes());
    }

    #[test]
    fn test_kinds() {
        let mut rng = GameRng::new(1);
        assert_eq!(SimpleMotif::new(ORIGIN, 400.0, 12).kind(), DecorationKind::Simple);
        assert_eq!(
            DynamicMotif::new(ORIGIN, 400.0, 12, &mut rng).kind(),
            DecorationKind::Dynamic
        );
    }
}
