use tracing::info;

use super::{
    gradient_stops, DecorationKind, DecorationStrategy, DynamicMotif, Ellipse, GradientStop,
    Palette, SimpleMotif, PALETTES,
};
use crate::{Config, Court, GameRng, Params};

/// Active background style and palette, plus both animations
#[derive(Debug, Clone)]
pub struct DecorationManager {
    kind: DecorationKind,
    palette_index: usize,
    alpha: f32,
    simple: SimpleMotif,
    dynamic: DynamicMotif,
}

impl DecorationManager {
    /// Starts with the configured style and a random palette
    pub fn new(config: &Config, court: &Court, rng: &mut GameRng) -> Self {
        let origin = court.center();
        Self {
            kind: config.decoration,
            palette_index: rng.gen_index(PALETTES.len()),
            alpha: config.decoration_alpha,
            simple: SimpleMotif::new(origin, Params::MOTIF_SIZE, Params::MOTIF_REPEAT),
            dynamic: DynamicMotif::new(origin, Params::MOTIF_SIZE, Params::MOTIF_REPEAT, rng),
        }
    }

    pub fn kind(&self) -> DecorationKind {
        self.kind
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn palette(&self) -> &'static Palette {
        &PALETTES[self.palette_index % PALETTES.len()]
    }

    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    /// Only the visible animation moves
    pub fn advance(&mut self, frame: u64) {
        self.active_mut().advance(frame);
    }

    pub fn shapes(&self) -> &[Ellipse] {
        self.active().shapes()
    }

    /// Gradient for the current palette
    pub fn gradient(&self) -> Vec<GradientStop> {
        gradient_stops(&self.palette().rgba(), Params::GRADIENT_REPETITIONS)
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        info!(kind = self.kind.name(), "Background style changed");
    }

    pub fn cycle_palette(&mut self) {
        self.palette_index = (self.palette_index + 1) % PALETTES.len();
        info!(palette = self.palette().name, "Palette changed");
    }

    /// e.g. `"Dynamic / Klein"`
    pub fn label(&self) -> String {
        format!("{} / {}", self.kind.name(), self.palette().name)
    }

    fn active(&self) -> &dyn DecorationStrategy {
        match self.kind {
            DecorationKind::Simple => &self.simple,
            DecorationKind::Dynamic => &self.dynamic,
        }
    }

    fn active_mut(&mut self) -> &mut dyn DecorationStrategy {
        match self.kind {
            DecorationKind::Simple => &mut self.simple,
            DecorationKind::Dynamic => &mut self.dynamic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> DecorationManager {
        let config = Config::new();
        DecorationManager::new(&config, &Court::new(&config), &mut GameRng::new(5))
    }

    #[test]
    fn test_defaults() {
        let m = manager();
        assert_eq!(m.kind(), DecorationKind::Dynamic);
        assert_eq!(m.alpha(), 0.3);
        assert!(m.palette_index() < PALETTES.len());
        assert_eq!(m.shapes().len(), Params::MOTIF_REPEAT);
    }

    #[test]
    fn test_palette_cycle_wraps() {
        let mut m = manager();
        let start = m.palette_index();
        for _ in 0..PALETTES.len() {
            m.cycle_palette();
        }
        assert_eq!(m.palette_index(), start);
        m.cycle_palette();
        assert_eq!(m.palette_index(), (start + 1) % PALETTES.len());
    }

    #[test]
    fn test_toggle_switches_active_strategy() {
        let mut m = manager();
        m.toggle_kind();
        assert_eq!(m.kind(), DecorationKind::Simple);
        m.advance(0);
        let shapes = m.shapes();
        assert!(shapes.iter().all(|s| s.width == s.height), "Simple motif draws circles");

        m.toggle_kind();
        assert_eq!(m.kind(), DecorationKind::Dynamic);
    }

    #[test]
    fn test_label_and_gradient() {
        let mut m = manager();
        while m.palette_index() != 0 {
            m.cycle_palette();
        }
        assert_eq!(m.label(), "Dynamic / Klein");
        assert_eq!(m.gradient().len(), 5 * Params::GRADIENT_REPETITIONS);
    }
}
