//! Segment model and the default collection.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest permitted satisfaction score.
pub const SCORE_MIN: u8 = 1;
/// Highest permitted satisfaction score.
pub const SCORE_MAX: u8 = 10;
/// Score assigned to freshly added segments.
pub const DEFAULT_SCORE: u8 = 5;
/// Name assigned to freshly added segments.
pub const DEFAULT_NAME: &str = "New area";

/// Preset colors for the default collection, one per default area. Stored
/// segments without a color fall back to this palette by index.
pub const PALETTE: [&str; 7] = [
    "#e15759", "#f28e2b", "#edc948", "#59a14f", "#4e79a7", "#b07aa1", "#76b7b2",
];

/// One named life area with a 1-10 satisfaction score and display color.
///
/// `color` is an opaque `#rrggbb` display attribute; layout math never reads
/// it. Names carry no uniqueness constraint and may be empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub value: u8,
    pub color: String,
}

impl Segment {
    pub fn new(name: impl Into<String>, value: u8, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: clamp_score(value),
            color: color.into(),
        }
    }
}

/// Force a score into the `[1,10]` invariant.
pub fn clamp_score(value: u8) -> u8 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

/// Palette color for a segment index, wrapping past the palette length.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// The seven default life areas shown on first load, each scored 5.
pub fn default_segments() -> Vec<Segment> {
    [
        "Health",
        "Finances",
        "Relationships",
        "Work",
        "Creativity",
        "Personal growth",
        "Rest",
    ]
    .iter()
    .enumerate()
    .map(|(index, name)| Segment::new(*name, DEFAULT_SCORE, palette_color(index)))
    .collect()
}

/// Random saturated color for a newly added segment.
///
/// Best-effort distinctness only: hues are sampled uniformly, so collisions
/// with existing colors are possible but unlikely at small collection sizes.
pub fn fresh_color<R: Rng>(rng: &mut R) -> String {
    let hue = rng.gen_range(0.0..360.0);
    hsl_to_hex(hue, 0.65, 0.55)
}

fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_sector = hue / 60.0;
    let x = chroma * (1.0 - (hue_sector % 2.0 - 1.0).abs());
    let (r, g, b) = match hue_sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let offset = lightness - chroma / 2.0;
    let byte = |channel: f64| ((channel + offset) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn clamp_score_enforces_bounds() {
        assert_eq!(clamp_score(0), 1);
        assert_eq!(clamp_score(1), 1);
        assert_eq!(clamp_score(7), 7);
        assert_eq!(clamp_score(10), 10);
        assert_eq!(clamp_score(200), 10);
    }

    #[test]
    fn default_collection_has_seven_mid_scored_areas() {
        let segments = default_segments();
        assert_eq!(segments.len(), 7);
        assert!(segments.iter().all(|s| s.value == DEFAULT_SCORE));
    }

    #[test]
    fn default_colors_are_distinct() {
        let segments = default_segments();
        let colors: HashSet<&str> = segments.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors.len(), segments.len());
    }

    #[test]
    fn fresh_color_is_hex_rgb() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let color = fresh_color(&mut rng);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn hsl_conversion_matches_known_values() {
        assert_eq!(hsl_to_hex(0.0, 0.65, 0.55), "#d74242");
        assert_eq!(hsl_to_hex(120.0, 0.65, 0.55), "#42d742");
        assert_eq!(hsl_to_hex(240.0, 0.65, 0.55), "#4242d7");
    }
}
