use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::command::DrawCommand;
use crate::document::Document;

/// Dashed outline drawn while the user is dragging out a region.
pub const SELECTION_OUTLINE: Color32 = Color32::BLUE;
const DASH_LENGTH: f32 = 4.0;
const GAP_LENGTH: f32 = 2.0;

/// Executes draw commands against an egui painter.
///
/// Marks are stored in canvas-local coordinates; `origin` is the screen
/// position of the canvas top-left corner for the current frame.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Repaint the whole document, in z-order.
    pub fn render(&self, painter: &Painter, origin: Vec2, document: &Document) {
        for mark in document.marks() {
            self.draw_mark(painter, origin, mark);
        }
    }

    pub fn draw_mark(&self, painter: &Painter, origin: Vec2, mark: &DrawCommand) {
        match mark {
            DrawCommand::Oval { rect, color } => {
                // Ovals are emitted with square bounds, so a circle is exact.
                painter.circle_filled(
                    rect.center() + origin,
                    rect.width().min(rect.height()) / 2.0,
                    *color,
                );
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment([*from + origin, *to + origin], Stroke::new(*width, *color));
            }
            DrawCommand::Rect { rect, color } => {
                painter.rect_filled(rect.translate(origin), 0.0, *color);
            }
        }
    }

    /// Dashed rectangle between the drag anchor and the current pointer
    /// position. `corners` may be in any order.
    pub fn draw_selection_preview(&self, painter: &Painter, origin: Vec2, corners: (Pos2, Pos2)) {
        let rect = Rect::from_two_pos(corners.0, corners.1).translate(origin);
        let outline = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        painter.extend(Shape::dashed_line(
            &outline,
            Stroke::new(1.0, SELECTION_OUTLINE),
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }
}
