use std::fmt;

use crate::animation::color_data::ColorData;

/// The ordered frames shown on one physical panel.
///
/// Serializes as `"<panel id> <frame count> <frame> <frame> ..."`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelData {
    panel_id: u16,
    frames: Vec<ColorData>,
}

impl PanelData {
    pub fn new(panel_id: u16) -> Self {
        PanelData {
            panel_id,
            frames: Vec::new(),
        }
    }

    pub fn with_frames(panel_id: u16, frames: Vec<ColorData>) -> Self {
        PanelData { panel_id, frames }
    }

    /// Appends a frame and hands the panel back for chaining.
    pub fn add_frame(mut self, frame: ColorData) -> Self {
        self.frames.push(frame);
        self
    }

    /// Inserts a frame at `pos`. Positions past the end append.
    pub fn insert_frame(mut self, pos: usize, frame: ColorData) -> Self {
        let pos = pos.min(self.frames.len());
        self.frames.insert(pos, frame);
        self
    }

    pub fn panel_id(&self) -> u16 {
        self.panel_id
    }

    pub fn frames(&self) -> &[ColorData] {
        &self.frames
    }
}

impl fmt::Display for PanelData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frames = self
            .frames
            .iter()
            .map(ColorData::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} {} {}", self.panel_id, self.frames.len(), frames)
    }
}
