use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

/// One primitive for the rendering surface to execute.
///
/// Commands are emitted by the chaos filler in z-order: later commands draw
/// on top of earlier ones. Filled shapes use the same color for fill and
/// outline, so only one color is carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled oval inscribed in `rect`.
    Oval { rect: Rect, color: Color32 },
    /// Line segment with the given stroke width.
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    /// Filled axis-aligned rectangle.
    Rect { rect: Rect, color: Color32 },
}

impl DrawCommand {
    pub fn color(&self) -> Color32 {
        match self {
            DrawCommand::Oval { color, .. }
            | DrawCommand::Line { color, .. }
            | DrawCommand::Rect { color, .. } => *color,
        }
    }

    /// Bounding rectangle covering every pixel the command can touch.
    /// Lines are padded by half their stroke width.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCommand::Oval { rect, .. } | DrawCommand::Rect { rect, .. } => *rect,
            DrawCommand::Line {
                from, to, width, ..
            } => Rect::from_two_pos(*from, *to).expand(width / 2.0),
        }
    }
}
