//! SVG rendering of a tour.
//!
//! Coordinates are world coordinates with the origin at the bottom-left of a
//! `width × height` canvas, so `y` is flipped. Each city gets a dot, the
//! visiting path is black, and the closing edge back to the start is red.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::geometry::City;
use crate::tour::Tour;

const DOT_RADIUS: f64 = 1.5;

/// Renders `tour` over `cities` as an SVG document.
pub fn render_svg(tour: &Tour, cities: &[City], width: u32, height: u32) -> String {
    let h = f64::from(height);
    let points = tour.to_cities(cities);

    let mut svg = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        let path: Vec<String> = points
            .iter()
            .map(|c| format!("{:.3},{:.3}", c.x(), h - c.y()))
            .collect();
        let _ = writeln!(
            svg,
            r#"<polyline points="{}" fill="none" stroke="black" stroke-width="1"/>"#,
            path.join(" ")
        );
        let _ = writeln!(
            svg,
            r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="red" stroke-width="1"/>"#,
            last.x(),
            h - last.y(),
            first.x(),
            h - first.y()
        );
        for c in &points {
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.3}" cy="{:.3}" r="{DOT_RADIUS}" fill="black"/>"#,
                c.x(),
                h - c.y()
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Renders `tour` and writes it to `path`.
pub fn write_svg(
    path: impl AsRef<Path>,
    tour: &Tour,
    cities: &[City],
    width: u32,
    height: u32,
) -> Result<()> {
    std::fs::write(path, render_svg(tour, cities, width, height))?;
    Ok(())
}
