use chaos_paint::export::{render_to_image, save_png};
use chaos_paint::{Document, DrawCommand};
use egui::{pos2, Color32, Rect};
use image::Rgba;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
    Rect::from_min_max(pos2(x0, y0), pos2(x1, y1))
}

#[test]
fn empty_document_renders_white() {
    let img = render_to_image(&Document::new(), 20, 10);
    assert_eq!(img.dimensions(), (20, 10));
    assert!(img.pixels().all(|p| *p == WHITE));
}

#[test]
fn rectangle_fills_its_bounds_only() {
    let mut doc = Document::new();
    doc.add_marks(vec![DrawCommand::Rect {
        rect: rect(2.0, 2.0, 8.0, 8.0),
        color: Color32::RED,
    }]);
    let img = render_to_image(&doc, 16, 16);
    assert_eq!(*img.get_pixel(4, 4), RED);
    assert_eq!(*img.get_pixel(7, 7), RED);
    assert_eq!(*img.get_pixel(1, 4), WHITE);
    assert_eq!(*img.get_pixel(10, 10), WHITE);
}

#[test]
fn oval_is_inscribed_in_its_rect() {
    let mut doc = Document::new();
    doc.add_marks(vec![DrawCommand::Oval {
        rect: rect(0.0, 0.0, 10.0, 10.0),
        color: Color32::RED,
    }]);
    let img = render_to_image(&doc, 12, 12);
    // Center is inside the disc, the rect corners are outside it.
    assert_eq!(*img.get_pixel(5, 5), RED);
    assert_eq!(*img.get_pixel(0, 0), WHITE);
    assert_eq!(*img.get_pixel(9, 0), WHITE);
}

#[test]
fn line_covers_pixels_within_half_width() {
    let mut doc = Document::new();
    doc.add_marks(vec![DrawCommand::Line {
        from: pos2(2.0, 5.0),
        to: pos2(12.0, 5.0),
        width: 4.0,
        color: Color32::RED,
    }]);
    let img = render_to_image(&doc, 16, 16);
    assert_eq!(*img.get_pixel(7, 5), RED);
    assert_eq!(*img.get_pixel(7, 4), RED);
    assert_eq!(*img.get_pixel(7, 0), WHITE);
    assert_eq!(*img.get_pixel(7, 12), WHITE);
}

#[test]
fn later_marks_draw_on_top() {
    let mut doc = Document::new();
    doc.add_marks(vec![
        DrawCommand::Rect {
            rect: rect(0.0, 0.0, 10.0, 10.0),
            color: Color32::RED,
        },
        DrawCommand::Rect {
            rect: rect(0.0, 0.0, 10.0, 10.0),
            color: Color32::GREEN,
        },
    ]);
    let img = render_to_image(&doc, 10, 10);
    let top = Rgba([0, 255, 0, 255]);
    assert_eq!(*img.get_pixel(5, 5), top);
}

#[test]
fn off_canvas_geometry_is_clipped() {
    let mut doc = Document::new();
    doc.add_marks(vec![DrawCommand::Rect {
        rect: rect(-50.0, -50.0, 200.0, 200.0),
        color: Color32::RED,
    }]);
    // Must not panic, and still fills everything visible.
    let img = render_to_image(&doc, 8, 8);
    assert!(img.pixels().all(|p| *p == RED));
}

#[test]
fn save_png_round_trips_to_disk() {
    let mut doc = Document::new();
    doc.add_marks(vec![DrawCommand::Rect {
        rect: rect(0.0, 0.0, 4.0, 4.0),
        color: Color32::RED,
    }]);
    let path = std::env::temp_dir().join("chaos_paint_save_test.png");
    save_png(&doc, [8, 8], &path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(loaded.dimensions(), (8, 8));
    assert_eq!(*loaded.get_pixel(1, 1), RED);
    assert_eq!(*loaded.get_pixel(6, 6), WHITE);
    std::fs::remove_file(&path).ok();
}

#[test]
fn save_png_reports_unwritable_paths() {
    let doc = Document::new();
    let path = std::path::Path::new("/nonexistent-dir/drawing.png");
    let err = save_png(&doc, [4, 4], path).unwrap_err();
    assert!(err.to_string().contains("failed to write image"));
}

#[test]
fn clear_empties_the_canvas() {
    let mut doc = Document::new();
    doc.add_marks(vec![DrawCommand::Rect {
        rect: rect(0.0, 0.0, 4.0, 4.0),
        color: Color32::RED,
    }]);
    assert_eq!(doc.len(), 1);
    doc.clear();
    assert!(doc.is_empty());
    let img = render_to_image(&doc, 4, 4);
    assert!(img.pixels().all(|p| *p == WHITE));
}
