//! Rasterizes the glowing cube onto a transparent canvas.

use crate::config::{RenderConfig, GLOW_LAYERS, LOGO_FILE};
use crate::geometry::{with_alpha, CubeGeometry, Point};
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut, Blend};
use imageproc::point::Point as PixelPoint;
use std::path::{Path, PathBuf};

/// Render the logo into memory. Pure function of the config: the same
/// config always produces a pixel-identical image.
pub fn render_logo(config: &RenderConfig) -> RgbaImage {
    let size = config.canvas_size;
    let mut canvas = Blend(RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])));

    let center = Point::new(size as f32 / 2.0, size as f32 / 2.0);
    let geometry = CubeGeometry::new(center, size as f32 * config.cube_scale);
    let faces = geometry.faces(config.cyan, config.purple);

    for edge in geometry.unique_edges(&faces) {
        draw_glow_stroke(&mut canvas, edge.from, edge.to, edge.color, config.glow_width);
    }

    // Fills come last: they composite over the outlines already on the
    // canvas.
    for face in &faces {
        let corners: Vec<PixelPoint<i32>> = face
            .corners
            .iter()
            .map(|&i| to_pixel(geometry.vertices[i]))
            .collect();
        draw_polygon_mut(&mut canvas, &corners, face.fill);
    }

    canvas.0
}

/// Render the logo and write it to `<out_dir>/logo.png`.
///
/// The output directory must already exist; a missing directory surfaces as
/// a write error.
pub fn generate_logo(config: &RenderConfig, out_dir: &Path) -> Result<PathBuf> {
    println!("Generating {LOGO_FILE}...");

    let logo = render_logo(config);
    let output_path = out_dir.join(LOGO_FILE);
    logo.save(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("  ✓ Generated {}", output_path.display());
    Ok(output_path)
}

/// Approximate a soft light halo without an actual blur: three superimposed
/// strokes between the same endpoints, widest and faintest first, ending
/// with the solid core line.
fn draw_glow_stroke(
    canvas: &mut Blend<RgbaImage>,
    from: Point,
    to: Point,
    color: [u8; 3],
    width: f32,
) {
    for (multiplier, alpha) in GLOW_LAYERS {
        draw_thick_line(canvas, from, to, width * multiplier, with_alpha(color, alpha));
    }
}

/// Stroke a line of the given width as a filled quad perpendicular to the
/// segment direction.
fn draw_thick_line(
    canvas: &mut Blend<RgbaImage>,
    from: Point,
    to: Point,
    width: f32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return;
    }

    // Perpendicular unit vector scaled to half the stroke width.
    let nx = -dy / length * width / 2.0;
    let ny = dx / length * width / 2.0;

    let quad = [
        to_pixel(Point::new(from.x + nx, from.y + ny)),
        to_pixel(Point::new(to.x + nx, to.y + ny)),
        to_pixel(Point::new(to.x - nx, to.y - ny)),
        to_pixel(Point::new(from.x - nx, from.y - ny)),
    ];

    // Sub-pixel widths can round the quad down to a closed path, which the
    // polygon rasterizer rejects; fall back to a single-pixel line.
    if quad[0] == quad[3] || quad[1] == quad[2] {
        draw_line_segment_mut(canvas, (from.x, from.y), (to.x, to.y), color);
    } else {
        draw_polygon_mut(canvas, &quad, color);
    }
}

fn to_pixel(p: Point) -> PixelPoint<i32> {
    PixelPoint::new(p.x.round() as i32, p.y.round() as i32)
}
