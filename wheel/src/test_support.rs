//! Test-only helpers for constructing segment collections.

use crate::core::segment::{Segment, clamp_score};

/// Create a deterministic segment with a neutral color.
pub fn segment(name: &str, value: u8) -> Segment {
    Segment {
        name: name.to_string(),
        value: clamp_score(value),
        color: "#808080".to_string(),
    }
}

/// Create a deterministic collection, one segment per score.
pub fn segments(values: &[u8]) -> Vec<Segment> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| segment(&format!("area {index}"), value))
        .collect()
}
