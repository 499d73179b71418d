/// Linear-space RGBA
pub type Rgba = [f32; 4];

/// Used when a palette has no colours
pub const FALLBACK_COLORS: [&str; 2] = ["#0000FF", "#00FFFF"];

/// A named set of hex colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

pub static PALETTES: [Palette; 5] = [
    Palette {
        name: "Klein",
        colors: &["#344CB9", "#1B288A", "#0F185B", "#D7C99A", "#F2E4C7"],
    },
    Palette {
        name: "Haru",
        colors: &["#F2DADF", "#E9D6F9", "#EACEE9", "#f2dadf", "#ffefe7"],
    },
    Palette {
        name: "SpringPastels",
        colors: &["#fd7f6f", "#7eb0d5", "#b2e061", "#bd7ebe", "#ffb55a", "#ffee65"],
    },
    Palette {
        name: "MidnightDream",
        colors: &["#030213", "#13115a", "#8587a8", "#30ff9c", "#1b1c34"],
    },
    Palette {
        name: "BlueNightclub",
        colors: &["#4500fe", "#581afe", "#6a33fe", "#7d4dfe", "#8f66fe"],
    },
];

impl Palette {
    /// Parsed colours, skipping malformed entries, falling back when none remain
    pub fn rgba(&self) -> Vec<Rgba> {
        let parsed: Vec<Rgba> = self.colors.iter().filter_map(|c| parse_hex(c)).collect();
        if parsed.is_empty() {
            FALLBACK_COLORS.iter().filter_map(|c| parse_hex(c)).collect()
        } else {
            parsed
        }
    }
}

/// One stop of a linear gradient, `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Repeat `colors` `repetitions` times and space the result evenly over [0, 1]
pub fn gradient_stops(colors: &[Rgba], repetitions: usize) -> Vec<GradientStop> {
    let repeated: Vec<Rgba> = colors
        .iter()
        .copied()
        .cycle()
        .take(colors.len() * repetitions.max(1))
        .collect();

    let last = repeated.len().saturating_sub(1).max(1) as f32;
    repeated
        .into_iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            offset: i as f32 / last,
            color,
        })
        .collect()
}

/// Parse `#RRGGBB` (or `RRGGBB`) into linear RGBA with alpha 1
pub fn parse_hex(hex: &str) -> Option<Rgba> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| srgb_to_linear(v as f32 / 255.0))
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0])
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
