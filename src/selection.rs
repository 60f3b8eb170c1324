use egui::{Pos2, Rect};

/// Tracks one click-drag gesture over the canvas and turns it into the
/// rectangular region to fill.
///
/// The selector is ephemeral state: it holds only the anchor point between
/// `begin` and `end`, and nothing once the gesture finishes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegionSelector {
    anchor: Option<Pos2>,
}

impl RegionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Start a gesture at `pos`. A new `begin` replaces any previous anchor.
    pub fn begin(&mut self, pos: Pos2) {
        self.anchor = Some(pos);
    }

    /// Current corner pair for the live preview, anchor first. The pair is
    /// deliberately not normalized so the preview outline follows the
    /// pointer in whichever direction the user drags.
    pub fn update(&self, pos: Pos2) -> Option<(Pos2, Pos2)> {
        self.anchor.map(|anchor| (anchor, pos))
    }

    /// Finish the gesture, returning the normalized region (min corner is
    /// top-left) and clearing the anchor. Returns `None` if no gesture was
    /// in progress.
    pub fn end(&mut self, pos: Pos2) -> Option<Rect> {
        self.anchor.take().map(|anchor| Rect::from_two_pos(anchor, pos))
    }

    /// Abandon the gesture without producing a region.
    pub fn cancel(&mut self) {
        self.anchor = None;
    }
}
