pub mod anim_data;
pub mod color_data;
pub mod custom_animation;
pub mod panel_data;
pub mod pattern;

pub use anim_data::AnimData;
pub use color_data::{ColorData, PaletteColor};
pub use custom_animation::{AnimationPayload, CommandType, CustomAnimation, EffectType};
pub use panel_data::PanelData;
