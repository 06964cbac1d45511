//! SVG document assembly from the draw model.
//!
//! Thin by design: every coordinate and flag comes precomputed from
//! [`crate::core::geometry::layout`]; this module only formats markup.

use crate::core::geometry::{DrawModel, LabelArc, Point, Ring, Spoke, Wedge};
use crate::io::config::ChartConfig;

const RING_STROKE: &str = "#e0e0e0";
const WEDGE_OPACITY: f64 = 0.45;
const LABEL_FONT_SIZE: u32 = 12;

/// Render a complete standalone SVG document.
pub fn document(model: &DrawModel, config: &ChartConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt(config.width),
        h = fmt(config.height),
    ));
    out.push('\n');

    for ring in &model.rings {
        out.push_str(&ring_element(ring));
    }
    for (index, (wedge, label)) in model.wedges.iter().zip(&model.labels).enumerate() {
        out.push_str(&wedge_element(wedge));
        out.push_str(&label_elements(label, index));
    }
    for spoke in &model.spokes {
        out.push_str(&spoke_element(spoke));
    }

    out.push_str("</svg>\n");
    out
}

fn ring_element(ring: &Ring) -> String {
    format!(
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{RING_STROKE}\" stroke-width=\"1\"/>\n",
        fmt(ring.center.x),
        fmt(ring.center.y),
        fmt(ring.radius),
    )
}

fn wedge_element(wedge: &Wedge) -> String {
    format!(
        "  <path d=\"M {} {} L {} {} A {r} {r} 0 {} 1 {} {} Z\" fill=\"{color}\" fill-opacity=\"{WEDGE_OPACITY}\" stroke=\"{color}\"/>\n",
        fmt(wedge.origin.x),
        fmt(wedge.origin.y),
        fmt(wedge.arc_start.x),
        fmt(wedge.arc_start.y),
        flag(wedge.large_arc),
        fmt(wedge.arc_end.x),
        fmt(wedge.arc_end.y),
        r = fmt(wedge.radius),
        color = wedge.color,
    )
}

fn spoke_element(spoke: &Spoke) -> String {
    format!(
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"black\"/>\n",
        fmt(spoke.from.x),
        fmt(spoke.from.y),
        fmt(spoke.to.x),
        fmt(spoke.to.y),
    )
}

fn label_elements(label: &LabelArc, index: usize) -> String {
    let guide = arc_path(label.from, label.to, label.radius, label.large_arc, label.sweep);
    format!(
        concat!(
            "  <path id=\"label-arc-{index}\" d=\"{guide}\" fill=\"none\"/>\n",
            "  <text font-size=\"{size}\" fill=\"black\">",
            "<textPath href=\"#label-arc-{index}\" startOffset=\"50%\" text-anchor=\"middle\">",
            "<tspan dy=\"{dy}\">{text}</tspan>",
            "</textPath></text>\n",
        ),
        index = index,
        guide = guide,
        size = LABEL_FONT_SIZE,
        dy = fmt(label.baseline_offset),
        text = escape(&label.text),
    )
}

fn arc_path(from: Point, to: Point, radius: f64, large_arc: bool, sweep: bool) -> String {
    format!(
        "M {} {} A {r} {r} 0 {} {} {} {}",
        fmt(from.x),
        fmt(from.y),
        flag(large_arc),
        flag(sweep),
        fmt(to.x),
        fmt(to.y),
        r = fmt(radius),
    )
}

fn flag(on: bool) -> u8 {
    u8::from(on)
}

/// Trim trailing zeros so whole coordinates print without a fraction.
fn fmt(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::layout;
    use crate::core::segment::default_segments;
    use crate::test_support::segment;

    fn default_document() -> String {
        let config = ChartConfig::default();
        document(&layout(&default_segments(), &config.params()), &config)
    }

    #[test]
    fn reference_chart_markup_matches_counts() {
        let doc = default_document();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"viewBox="0 0 500 500""#));
        assert_eq!(doc.matches("<circle ").count(), 10);
        assert_eq!(doc.matches("<line ").count(), 7);
        assert_eq!(doc.matches("<textPath ").count(), 7);
        // One wedge path and one guide path per segment.
        assert_eq!(doc.matches("<path ").count(), 14);
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn empty_collection_renders_rings_only() {
        let config = ChartConfig::default();
        let doc = document(&layout(&[], &config.params()), &config);
        assert_eq!(doc.matches("<circle ").count(), 10);
        assert!(!doc.contains("<path "));
        assert!(!doc.contains("<line "));
        assert!(!doc.contains("<text "));
    }

    #[test]
    fn guide_ids_pair_with_their_textpath_references() {
        let doc = default_document();
        for index in 0..7 {
            assert!(doc.contains(&format!("id=\"label-arc-{index}\"")));
            assert!(doc.contains(&format!("href=\"#label-arc-{index}\"")));
        }
    }

    #[test]
    fn segment_names_are_escaped() {
        let config = ChartConfig::default();
        let model = layout(&[segment("Food & <drink>", 5)], &config.params());
        let doc = document(&model, &config);
        assert!(doc.contains("Food &amp; &lt;drink&gt;"));
        assert!(!doc.contains("<drink>"));
    }

    #[test]
    fn coordinates_print_without_trailing_zeros() {
        assert_eq!(fmt(250.0), "250");
        assert_eq!(fmt(152.5), "152.5");
        assert_eq!(fmt(101.4142), "101.41");
        assert_eq!(fmt(-5.0), "-5");
    }
}
