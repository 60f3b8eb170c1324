use std::path::Path;

use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::command::DrawCommand;
use crate::document::Document;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Errors surfaced to the user when exporting the canvas. Export failure is
/// recoverable: the drawing stays intact and the user may retry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Rasterize the document into an RGBA image with a white background.
///
/// Marks are executed in document order so overlaps resolve the same way
/// the on-screen canvas resolves them. Geometry outside the image is
/// clipped, not an error.
pub fn render_to_image(document: &Document, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width.max(1), height.max(1), BACKGROUND);
    for mark in document.marks() {
        rasterize(&mut img, mark);
    }
    img
}

/// Rasterize and save the document as a PNG.
pub fn save_png(
    document: &Document,
    size: [u32; 2],
    path: &Path,
) -> Result<(), ExportError> {
    let img = render_to_image(document, size[0], size[1]);
    img.save_with_format(path, image::ImageFormat::Png)?;
    log::info!(
        "saved {} marks ({}x{}) to {}",
        document.len(),
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

fn rasterize(img: &mut RgbaImage, mark: &DrawCommand) {
    let color = pixel(mark.color());
    match mark {
        DrawCommand::Oval { rect, .. } => {
            let center = rect.center();
            let rx = (rect.width() / 2.0).abs();
            let ry = (rect.height() / 2.0).abs();
            fill_region(img, *rect, color, |x, y| {
                if rx == 0.0 || ry == 0.0 {
                    return false;
                }
                let nx = (x - center.x) / rx;
                let ny = (y - center.y) / ry;
                nx * nx + ny * ny <= 1.0
            });
        }
        DrawCommand::Rect { rect, .. } => {
            fill_region(img, *rect, color, |_, _| true);
        }
        DrawCommand::Line {
            from, to, width, ..
        } => {
            let radius = width / 2.0;
            fill_region(img, mark.bounds(), color, |x, y| {
                segment_distance(Pos2::new(x, y), *from, *to) <= radius
            });
        }
    }
}

/// Fill every pixel inside `bounds` whose center passes `inside`. Bounds are
/// clipped to the image.
fn fill_region(
    img: &mut RgbaImage,
    bounds: Rect,
    color: Rgba<u8>,
    mut inside: impl FnMut(f32, f32) -> bool,
) {
    let x0 = bounds.min.x.floor().max(0.0) as u32;
    let y0 = bounds.min.y.floor().max(0.0) as u32;
    let x1 = (bounds.max.x.ceil().max(0.0) as u32).min(img.width());
    let y1 = (bounds.max.y.ceil().max(0.0) as u32).min(img.height());
    for py in y0..y1 {
        for px in x0..x1 {
            // Test the pixel center.
            if inside(px as f32 + 0.5, py as f32 + 0.5) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

fn segment_distance(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

fn pixel(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}
