use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::animation::anim_data::AnimData;
use crate::animation::color_data::ColorData;
use crate::animation::panel_data::PanelData;
use crate::layout::Layout;

pub struct Pattern;

impl Pattern {
    pub fn random_frame<R: Rng + ?Sized>(palette: &[ColorData], rng: &mut R) -> Result<ColorData> {
        palette
            .choose(rng)
            .copied()
            .ok_or_else(|| anyhow!("Color palette is empty"))
    }

    /// Builds a panel with between 1 and `max_frames` frames picked from `palette`.
    pub fn random_panel<R: Rng + ?Sized>(
        panel_id: u16,
        palette: &[ColorData],
        max_frames: usize,
        rng: &mut R,
    ) -> Result<PanelData> {
        if max_frames == 0 {
            return Err(anyhow!("At least one frame per panel is required"));
        }
        let frame_count = rng.gen_range(1..=max_frames);
        let mut panel = PanelData::new(panel_id);
        for _ in 0..frame_count {
            panel = panel.add_frame(Self::random_frame(palette, rng)?);
        }
        Ok(panel)
    }

    /// Builds a random animation covering every panel of `layout`.
    ///
    /// Panels are visited by logical name, `"0"` through `"N-1"`.
    pub fn random_animation<R: Rng + ?Sized>(
        layout: &Layout,
        palette: &[ColorData],
        max_frames: usize,
        rng: &mut R,
    ) -> Result<AnimData> {
        let mut anim = AnimData::new();
        for i in 0..layout.len() {
            let panel_id = layout.panel_id(&i.to_string())?;
            anim = anim.add_panel(Self::random_panel(panel_id, palette, max_frames, rng)?);
        }
        Ok(anim)
    }
}
