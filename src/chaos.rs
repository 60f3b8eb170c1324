use egui::{pos2, Color32, Pos2, Rect};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::vibrant_color;
use crate::command::DrawCommand;

/// Marks scattered per fill. Fixed, not configurable.
pub const MARKS_PER_FILL: usize = 100;

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 50;

/// Maximum per-axis displacement of a random line's far endpoint.
const LINE_JITTER: i32 = 20;

/// The zigzag is a fixed decorative pattern: 10 diagonal segments, each
/// spanning a 10px column, alternating down/up across a 100px run.
const ZIGZAG_STEP: i32 = 10;
const ZIGZAG_SPAN: i32 = 100;

const SPIRAL_POINTS: usize = 100;
const SPIRAL_ANGLE_STEP: f32 = 0.1;
const SPIRAL_RADIUS_FACTOR: f32 = 10.0;

const SHAPE_SIZE: std::ops::RangeInclusive<i32> = 20..=100;

/// The mark style scattered by a chaos fill.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaosStyle {
    #[default]
    None,
    Dots,
    Lines,
    Zigzag,
    Spirals,
    RandomShapes,
}

impl ChaosStyle {
    pub const ALL: [ChaosStyle; 6] = [
        ChaosStyle::None,
        ChaosStyle::Dots,
        ChaosStyle::Lines,
        ChaosStyle::Zigzag,
        ChaosStyle::Spirals,
        ChaosStyle::RandomShapes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChaosStyle::None => "none",
            ChaosStyle::Dots => "dots",
            ChaosStyle::Lines => "lines",
            ChaosStyle::Zigzag => "zigzag",
            ChaosStyle::Spirals => "spirals",
            ChaosStyle::RandomShapes => "random shapes",
        }
    }
}

/// Scatters randomly styled, randomly colored marks inside a region.
///
/// A filler is a snapshot of the style and brush size taken when the fill
/// is triggered; changing the live UI controls mid-fill cannot affect a
/// fill already underway.
#[derive(Debug, Clone, Copy)]
pub struct ChaosFiller {
    style: ChaosStyle,
    brush_size: u32,
}

impl ChaosFiller {
    /// Snapshot `style` and `brush_size`. The brush size is clamped to the
    /// range the UI control allows.
    pub fn new(style: ChaosStyle, brush_size: u32) -> Self {
        Self {
            style,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
        }
    }

    pub fn style(&self) -> ChaosStyle {
        self.style
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Scatter marks inside `region`, returning the draw commands in
    /// z-order (later on top).
    ///
    /// `region` need not be normalized; the corner coordinates are reordered
    /// here. Each of the 100 iterations samples an integer anchor point
    /// inside the region (bounds inclusive) and a fresh color, then emits
    /// the commands for one mark of the snapshot style. Sub-shapes of a mark
    /// (zigzag segments, spiral dots) may extend past the region; only the
    /// anchor is constrained.
    pub fn fill<R: Rng>(&self, region: Rect, rng: &mut R) -> Vec<DrawCommand> {
        let x_lo = region.min.x.min(region.max.x) as i32;
        let x_hi = region.min.x.max(region.max.x) as i32;
        let y_lo = region.min.y.min(region.max.y) as i32;
        let y_hi = region.min.y.max(region.max.y) as i32;

        let mut commands = Vec::new();
        for _ in 0..MARKS_PER_FILL {
            let x = rng.gen_range(x_lo..=x_hi);
            let y = rng.gen_range(y_lo..=y_hi);
            // Sampled before the style dispatch so a given seed yields the
            // same point/color stream for every style.
            let color = vibrant_color(rng);

            match self.style {
                ChaosStyle::None => {}
                ChaosStyle::Dots => {
                    commands.push(DrawCommand::Oval {
                        rect: square(x, y, self.brush_size as i32),
                        color,
                    });
                }
                ChaosStyle::Lines => {
                    let dx = rng.gen_range(-LINE_JITTER..=LINE_JITTER);
                    let dy = rng.gen_range(-LINE_JITTER..=LINE_JITTER);
                    commands.push(DrawCommand::Line {
                        from: pos2(x as f32, y as f32),
                        to: pos2((x + dx) as f32, (y + dy) as f32),
                        width: self.brush_size as f32,
                        color,
                    });
                }
                ChaosStyle::Zigzag => self.zigzag(x, y, color, &mut commands),
                ChaosStyle::Spirals => self.spiral(x, y, color, &mut commands),
                ChaosStyle::RandomShapes => self.random_shape(x, y, color, rng, &mut commands),
            }
        }
        commands
    }

    /// Ten alternating diagonal segments starting with a descending one.
    fn zigzag(&self, x: i32, y: i32, color: Color32, out: &mut Vec<DrawCommand>) {
        let width = self.brush_size as f32;
        for i in (0..ZIGZAG_SPAN).step_by(ZIGZAG_STEP as usize) {
            let (from, to) = if i % (2 * ZIGZAG_STEP) == 0 {
                (point(x + i, y), point(x + i + ZIGZAG_STEP, y + ZIGZAG_STEP))
            } else {
                (point(x + i, y + ZIGZAG_STEP), point(x + i + ZIGZAG_STEP, y))
            };
            out.push(DrawCommand::Line {
                from,
                to,
                width,
                color,
            });
        }
    }

    /// Archimedean spiral of small dots winding outward from the anchor.
    fn spiral(&self, x: i32, y: i32, color: Color32, out: &mut Vec<DrawCommand>) {
        for i in 0..SPIRAL_POINTS {
            let angle = i as f32 * SPIRAL_ANGLE_STEP;
            let dx = (SPIRAL_RADIUS_FACTOR * angle * angle.cos()) as i32;
            let dy = (SPIRAL_RADIUS_FACTOR * angle * angle.sin()) as i32;
            out.push(DrawCommand::Oval {
                rect: square(x + dx, y + dy, self.brush_size as i32),
                color,
            });
        }
    }

    /// One oval or rectangle of random size, chosen with equal probability.
    fn random_shape<R: Rng>(
        &self,
        x: i32,
        y: i32,
        color: Color32,
        rng: &mut R,
        out: &mut Vec<DrawCommand>,
    ) {
        let oval = rng.gen_bool(0.5);
        let size = rng.gen_range(SHAPE_SIZE);
        let rect = square(x, y, size);
        out.push(if oval {
            DrawCommand::Oval { rect, color }
        } else {
            DrawCommand::Rect { rect, color }
        });
    }
}

fn point(x: i32, y: i32) -> Pos2 {
    pos2(x as f32, y as f32)
}

fn square(x: i32, y: i32, side: i32) -> Rect {
    Rect::from_min_max(point(x, y), point(x + side, y + side))
}
