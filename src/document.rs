use serde::{Deserialize, Serialize};

use crate::command::DrawCommand;

/// Retained canvas contents: the flat, ordered list of every mark drawn so
/// far. Order is z-order; there is no per-mark identity and no partial
/// deletion, only "clear all".
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Document {
    marks: Vec<DrawCommand>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the output of one fill, on top of everything already drawn.
    pub fn add_marks(&mut self, marks: Vec<DrawCommand>) {
        self.marks.extend(marks);
    }

    pub fn marks(&self) -> &[DrawCommand] {
        &self.marks
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
