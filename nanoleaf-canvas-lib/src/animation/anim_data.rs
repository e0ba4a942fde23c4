use std::fmt;

use crate::animation::panel_data::PanelData;

/// The full `animData` blob for a custom effect.
///
/// Wire format, as documented in the Nanoleaf OpenAPI (section 3.2.6.1):
///
/// ```text
/// numPanels; panelId0; numFrames0; RGBWT01; ... panelIdN; numFramesN; RGBWTN1; ...
/// ```
///
/// e.g. `"3 82 1 255 0 255 0 20 60 1 0 255 255 0 20 118 1 0 0 0 0 20"`.
///
/// Panels are emitted in the order they were added. Duplicate panel ids are
/// passed through to the device untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimData {
    panels: Vec<PanelData>,
}

impl AnimData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_panels(panels: Vec<PanelData>) -> Self {
        AnimData { panels }
    }

    /// Appends a panel and hands the animation back for chaining.
    pub fn add_panel(mut self, panel: PanelData) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn panels(&self) -> &[PanelData] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl FromIterator<PanelData> for AnimData {
    fn from_iter<I: IntoIterator<Item = PanelData>>(iter: I) -> Self {
        AnimData {
            panels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for AnimData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let panels = self
            .panels
            .iter()
            .map(PanelData::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} {}", self.panels.len(), panels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::color_data::ColorData;

    #[test]
    fn test_single_panel_two_frames() {
        let anim = AnimData::new().add_panel(
            PanelData::new(12200)
                .add_frame(ColorData::new(10, 20, 30, 5))
                .add_frame(ColorData::new(11, 22, 33, 5)),
        );
        assert_eq!(anim.to_string(), "1 12200 2 10 20 30 0 5 11 22 33 0 5");
    }

    #[test]
    fn test_matches_documented_example() {
        let anim = AnimData::new()
            .add_panel(PanelData::new(82).add_frame(ColorData::new(255, 0, 255, 20)))
            .add_panel(PanelData::new(60).add_frame(ColorData::new(0, 255, 255, 20)))
            .add_panel(PanelData::new(118).add_frame(ColorData::new(0, 0, 0, 20)));
        assert_eq!(
            anim.to_string(),
            "3 82 1 255 0 255 0 20 60 1 0 255 255 0 20 118 1 0 0 0 0 20"
        );
    }

    #[test]
    fn test_empty_animation() {
        let anim = AnimData::new();
        assert!(anim.is_empty());
        assert_eq!(anim.to_string(), "0 ");
    }

    #[test]
    fn test_panels_keep_insertion_order() {
        let anim: AnimData = [5, 3, 9].into_iter().map(PanelData::new).collect();
        let ids: Vec<u16> = anim.panels().iter().map(PanelData::panel_id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
        assert_eq!(anim.to_string(), "3 5 0  3 0  9 0 ");
    }

    #[test]
    fn test_duplicate_panel_ids_are_not_merged() {
        let frame = ColorData::rgb(1, 1, 1);
        let anim = AnimData::new()
            .add_panel(PanelData::new(7).add_frame(frame))
            .add_panel(PanelData::new(7).add_frame(frame));
        assert_eq!(anim.len(), 2);
        assert_eq!(anim.to_string(), "2 7 1 1 1 1 0 0 7 1 1 1 1 0 0");
    }

    #[test]
    fn test_display_is_repeatable() {
        let anim = AnimData::new().add_panel(PanelData::new(1).add_frame(ColorData::rgb(4, 5, 6)));
        assert_eq!(anim.to_string(), anim.to_string());
    }
}
