//! Pure copy-on-write edits over a segment collection.
//!
//! Every operation takes the current collection by reference and returns a
//! fresh one, so the rendered view and the persisted model never share
//! mutable state. Index checks are the only failure mode; out-of-range
//! scores are clamped into `[1,10]` instead of rejected.

use thiserror::Error;

use crate::core::segment::{DEFAULT_SCORE, Segment, clamp_score};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("segment index {index} out of bounds (collection has {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Replace the name of the segment at `index`.
pub fn rename(segments: &[Segment], index: usize, name: &str) -> Result<Vec<Segment>, EditError> {
    check_index(segments, index)?;
    let mut next = segments.to_vec();
    next[index].name = name.to_string();
    Ok(next)
}

/// Replace the score of the segment at `index`, clamped to `[1,10]`.
pub fn rescore(segments: &[Segment], index: usize, value: u8) -> Result<Vec<Segment>, EditError> {
    check_index(segments, index)?;
    let mut next = segments.to_vec();
    next[index].value = clamp_score(value);
    Ok(next)
}

/// Append a new segment scored [`DEFAULT_SCORE`] with the given color.
pub fn add(segments: &[Segment], name: &str, color: String) -> Vec<Segment> {
    let mut next = segments.to_vec();
    next.push(Segment::new(name, DEFAULT_SCORE, color));
    next
}

/// Delete the segment at `index`; later segments shift down by one.
pub fn remove(segments: &[Segment], index: usize) -> Result<Vec<Segment>, EditError> {
    check_index(segments, index)?;
    let mut next = segments.to_vec();
    next.remove(index);
    Ok(next)
}

fn check_index(segments: &[Segment], index: usize) -> Result<(), EditError> {
    if index >= segments.len() {
        return Err(EditError::IndexOutOfBounds {
            index,
            len: segments.len(),
        });
    }
    Ok(())
}
