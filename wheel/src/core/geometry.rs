//! Radial layout: segment collections to drawing primitives.
//!
//! [`layout`] is a pure, total function: any collection (including the empty
//! one) maps to a [`DrawModel`] without error. Angles are measured in radians
//! from the positive x-axis in screen space, where y grows downward, so
//! increasing angle rotates clockwise on screen.

use std::f64::consts::{PI, TAU};

use crate::core::segment::Segment;

/// A point in chart coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Fixed parameters of one chart rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartParams {
    pub center: Point,
    pub radius: f64,
    pub level_count: u32,
    /// Distance past the rim at which label guide arcs run.
    pub label_offset: f64,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            center: Point { x: 250.0, y: 250.0 },
            radius: 200.0,
            level_count: 10,
            label_offset: 20.0,
        }
    }
}

/// One concentric calibration circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub center: Point,
    pub radius: f64,
}

/// A filled slice: center, out to the arc at the segment's value radius,
/// along the arc, back to center.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    pub origin: Point,
    pub arc_start: Point,
    pub arc_end: Point,
    /// Arc radius, proportional to the segment's score.
    pub radius: f64,
    /// Set when the angular span exceeds half a turn.
    pub large_arc: bool,
    pub color: String,
}

/// Radial divider from the center to the rim at a segment's start angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spoke {
    pub from: Point,
    pub to: Point,
}

/// Invisible guide arc a segment name is rendered along.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelArc {
    pub text: String,
    pub from: Point,
    pub to: Point,
    pub radius: f64,
    pub large_arc: bool,
    /// Arc direction: set when the path runs clockwise on screen.
    pub sweep: bool,
    /// Shift of the glyph baseline relative to the guide path.
    pub baseline_offset: f64,
}

/// Everything a renderer needs to draw one wheel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawModel {
    pub rings: Vec<Ring>,
    pub wedges: Vec<Wedge>,
    pub spokes: Vec<Spoke>,
    pub labels: Vec<LabelArc>,
}

/// Offset of label baselines when the guide arc runs start-to-end (text sits
/// just above its path).
const BASELINE_ABOVE: f64 = -5.0;
/// Offset when the guide arc is reversed (text sits just below its path).
const BASELINE_BELOW: f64 = 15.0;

/// Compute the drawing primitives for a segment collection.
pub fn layout(segments: &[Segment], params: &ChartParams) -> DrawModel {
    let mut model = DrawModel {
        rings: calibration_rings(params),
        ..DrawModel::default()
    };

    let label_radius = params.radius + params.label_offset;
    for (segment, (start, end)) in segments.iter().zip(partition(segments.len())) {
        let mid = (start + end) / 2.0;
        let large_arc = end - start > PI;

        let value_radius = f64::from(segment.value) / 10.0 * params.radius;
        model.wedges.push(Wedge {
            origin: params.center,
            arc_start: polar(params.center, value_radius, start),
            arc_end: polar(params.center, value_radius, end),
            radius: value_radius,
            large_arc,
            color: segment.color.clone(),
        });

        model.spokes.push(Spoke {
            from: params.center,
            to: polar(params.center, params.radius, start),
        });

        // In the lower half of the screen the guide arc runs start-to-end
        // (clockwise); everywhere else it is reversed so the glyphs never
        // render upside-down.
        let (from_angle, to_angle, sweep, baseline_offset) = if lower_hemisphere(mid) {
            (start, end, true, BASELINE_ABOVE)
        } else {
            (end, start, false, BASELINE_BELOW)
        };
        model.labels.push(LabelArc {
            text: segment.name.clone(),
            from: polar(params.center, label_radius, from_angle),
            to: polar(params.center, label_radius, to_angle),
            radius: label_radius,
            large_arc,
            sweep,
            baseline_offset,
        });
    }

    model
}

/// Equal angular partition of the full turn into `n` half-open spans.
///
/// Span `i` is `[i/n * 2π, (i+1)/n * 2π)`; `n = 0` yields no spans.
pub fn partition(n: usize) -> impl Iterator<Item = (f64, f64)> {
    (0..n).map(move |i| {
        let start = i as f64 / n as f64 * TAU;
        let end = (i + 1) as f64 / n as f64 * TAU;
        (start, end)
    })
}

/// True when a mid angle falls strictly inside `(π, 2π)`: the half of the
/// screen below the center line. Exactly `π` (and `0`) count as upper.
pub fn lower_hemisphere(mid_angle: f64) -> bool {
    mid_angle > PI && mid_angle < TAU
}

/// Point at `radius` along `angle` from `center` (y-down screen space).
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

fn calibration_rings(params: &ChartParams) -> Vec<Ring> {
    (1..=params.level_count)
        .map(|level| Ring {
            center: params.center,
            radius: f64::from(level) / f64::from(params.level_count) * params.radius,
        })
        .collect()
}
