use std::path::Path;

use egui::{Color32, ComboBox, Sense, Slider, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::chaos::{ChaosFiller, ChaosStyle, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::document::Document;
use crate::export;
use crate::renderer::Renderer;
use crate::selection::RegionSelector;

pub const DEFAULT_BRUSH_SIZE: u32 = 10;
const DEFAULT_EXPORT_PATH: &str = "chaos_drawing.png";
const DEFAULT_CANVAS_SIZE: Vec2 = Vec2::new(800.0, 600.0);

fn entropy_rng() -> Pcg64 {
    Pcg64::from_entropy()
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ChaosApp {
    document: Document,
    style: ChaosStyle,
    brush_size: u32,
    export_path: String,
    // Runtime-only state below; never persisted.
    #[serde(skip)]
    selector: RegionSelector,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip, default = "entropy_rng")]
    rng: Pcg64,
    #[serde(skip)]
    status: Option<String>,
    #[serde(skip)]
    canvas_size: Vec2,
}

impl Default for ChaosApp {
    fn default() -> Self {
        Self {
            document: Document::new(),
            style: ChaosStyle::default(),
            brush_size: DEFAULT_BRUSH_SIZE,
            export_path: DEFAULT_EXPORT_PATH.to_owned(),
            selector: RegionSelector::new(),
            renderer: Renderer::new(),
            rng: entropy_rng(),
            status: None,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl ChaosApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Style:");
            ComboBox::from_id_salt("chaos_style")
                .selected_text(self.style.label())
                .show_ui(ui, |ui| {
                    for style in ChaosStyle::ALL {
                        ui.selectable_value(&mut self.style, style, style.label());
                    }
                });

            ui.separator();
            ui.add(
                Slider::new(&mut self.brush_size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE)
                    .text("Brush Size"),
            );

            ui.separator();
            if ui.button("Clear Canvas").clicked() {
                self.document.clear();
                self.status = Some("Canvas cleared".to_owned());
            }
            if ui.button("Save Drawing").clicked() {
                self.save_drawing();
            }
            ui.text_edit_singleline(&mut self.export_path);
        });
    }

    fn save_drawing(&mut self) {
        let size = [self.canvas_size.x as u32, self.canvas_size.y as u32];
        match export::save_png(&self.document, size, Path::new(&self.export_path)) {
            Ok(()) => {
                self.status = Some(format!("Drawing saved to {}", self.export_path));
            }
            Err(err) => {
                // Recoverable: report and leave the drawing untouched.
                log::error!("failed to save drawing: {err}");
                self.status = Some(format!("Error saving drawing: {err}"));
            }
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);
        // Marks live in canvas-local coordinates so they stay put when the
        // window is moved or panels resize.
        let origin = rect.min.to_vec2();
        self.canvas_size = rect.size();

        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let pointer = response.interact_pointer_pos().map(|pos| pos - origin);

        if response.drag_started() {
            if let Some(pos) = pointer {
                self.selector.begin(pos);
            }
        }
        if response.drag_stopped() {
            match pointer.and_then(|pos| self.selector.end(pos)) {
                Some(region) => {
                    // Snapshot the controls; the fill must not observe any
                    // change made while it runs.
                    let filler = ChaosFiller::new(self.style, self.brush_size);
                    let marks = filler.fill(region, &mut self.rng);
                    log::debug!(
                        "chaos fill: style={}, brush={}, region={region:?}, {} commands",
                        filler.style().label(),
                        filler.brush_size(),
                        marks.len(),
                    );
                    self.status = Some(format!("Scattered {} marks", marks.len()));
                    self.document.add_marks(marks);
                }
                None => self.selector.cancel(),
            }
        }

        self.renderer.render(&painter, origin, &self.document);
        if let Some(corners) = pointer.and_then(|pos| self.selector.update(pos)) {
            self.renderer.draw_selection_preview(&painter, origin, corners);
        }
    }
}

impl eframe::App for ChaosApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} marks", self.document.len()));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });
    }
}
