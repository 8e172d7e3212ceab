//! SVG serialization of a [`BlobPath`].
//!
//! Produces the `d` attribute of a `<path>` element and a minimal standalone
//! document for export. Coordinates are written with at most two decimals.

use crate::color::Srgb;
use crate::geometry::{BlobPoint, CANVAS_SIZE};
use crate::stitch::{BlobPath, PathSegment};

/// SVG path data (`d` attribute) for a blob path, closed with `Z`.
pub fn path_data(path: &BlobPath) -> String {
    let mut parts = vec![format!("M {}", coord(path.start()))];
    parts.extend(path.segments().iter().map(|segment| match *segment {
        PathSegment::Quad { control, to } => format!("Q {} {}", coord(control), coord(to)),
        PathSegment::Line { to } => format!("L {}", coord(to)),
    }));
    parts.push("Z".to_string());
    parts.join(" ")
}

/// A standalone SVG document containing the blob filled with `fill`.
pub fn svg_document(path: &BlobPath, fill: Srgb) -> String {
    let size = number(CANVAS_SIZE);
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\" ",
            "width=\"{size}\" height=\"{size}\">\n",
            "  <path d=\"{d}\" fill=\"{fill}\"/>\n",
            "</svg>\n"
        ),
        size = size,
        d = path_data(path),
        fill = fill.to_hex(),
    )
}

fn coord(p: BlobPoint) -> String {
    format!("{},{}", number(p.x), number(p.y))
}

/// Formats with two decimals, dropping trailing zeros and negative zero.
fn number(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_blob;
    use crate::params::BlobParams;
    use crate::stitch::{stitch_path, StitchMethod};
    use glam::DVec2;

    fn triangle() -> Vec<BlobPoint> {
        vec![
            DVec2::new(300.0, 240.0),
            DVec2::new(210.0, 292.0),
            DVec2::new(210.0, 188.0),
        ]
    }

    #[test]
    fn number_trims_trailing_zeros() {
        assert_eq!(number(240.0), "240");
        assert_eq!(number(12.5), "12.5");
        assert_eq!(number(1.234), "1.23");
        assert_eq!(number(-0.001), "0");
        assert_eq!(number(-3.456), "-3.46");
    }

    #[test]
    fn advanced_path_data_has_one_quad_per_vertex() {
        let path = stitch_path(&triangle(), StitchMethod::Advanced, 0.5).unwrap();
        assert_eq!(
            path_data(&path),
            "M 300,240 Q 255,266 210,292 Q 210,240 210,188 Q 255,214 300,240 Z"
        );
    }

    #[test]
    fn simple_path_data_ends_with_line_back_to_start() {
        let path = stitch_path(&triangle(), StitchMethod::Simple, 0.5).unwrap();
        let d = path_data(&path);
        assert!(d.starts_with("M 300,240 Q 300,240 255,266"), "got: {d}");
        assert!(d.ends_with("L 300,240 Z"), "got: {d}");
        assert_eq!(d.matches(" Q ").count(), 3);
    }

    /// Helper: the command letters of a path string, in order.
    fn commands(d: &str) -> String {
        d.split_whitespace()
            .filter(|token| token.len() == 1 && token.chars().all(|c| c.is_ascii_uppercase()))
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn every_segment_emits_exactly_one_command() {
        let simple = stitch_path(&triangle(), StitchMethod::Simple, 0.5).unwrap();
        assert_eq!(commands(&path_data(&simple)), "MQQQLZ");
        let advanced = stitch_path(&triangle(), StitchMethod::Advanced, 0.5).unwrap();
        assert_eq!(commands(&path_data(&advanced)), "MQQQZ");
        assert_eq!(simple.segments().len() + 2, commands(&path_data(&simple)).len());
    }

    #[test]
    fn generated_blob_serializes_to_closed_path() {
        let path = generate_blob(&BlobParams::default(), StitchMethod::Advanced).unwrap();
        let d = path_data(&path);
        assert!(d.starts_with("M "));
        assert!(d.ends_with(" Z"));
        assert_eq!(d.matches(" Q ").count(), 8);
    }

    #[test]
    fn document_wraps_path_with_fill_and_viewbox() {
        let path = stitch_path(&triangle(), StitchMethod::Advanced, 0.5).unwrap();
        let fill = Srgb::from_hex("#00ff00").unwrap();
        let doc = svg_document(&path, fill);
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains("viewBox=\"0 0 480 480\""));
        assert!(doc.contains("fill=\"#00ff00\""));
        assert!(doc.contains(&path_data(&path)));
        assert!(doc.trim_end().ends_with("</svg>"));
    }
}
