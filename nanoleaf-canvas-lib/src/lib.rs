//! # Nanoleaf Canvas Library
//!
//! `nanoleaf-canvas-lib` drives Nanoleaf light panels over the device's local HTTP API.
//! It reads the panel layout, gives every panel a stable logical name, builds
//! frame based animations and writes them to the device as custom effects.
//!
//! ## Features
//!
//! - Panel layout detection with stable logical names
//! - Encoding of per panel color frames into the device's `animData` format
//! - State, brightness, hue, color temperature and effect control
//! - Pairing to obtain an auth token
//!
//! ## Example
//!
//! Show one red frame on every panel:
//!
//! ```no_run
//! use nanoleaf_canvas_lib::animation::color_data::RED;
//! use nanoleaf_canvas_lib::animation::{AnimData, CustomAnimation, PanelData};
//! use nanoleaf_canvas_lib::control_interface::NanoLeafClient;
//! use nanoleaf_canvas_lib::layout::Layout;
//! use nanoleaf_canvas_lib::util::config::DeviceConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = NanoLeafClient::new(DeviceConfig::new("10.0.0.129"))?;
//!     let layout = Layout::detect(&client).await?;
//!
//!     let mut anim_data = AnimData::new();
//!     for name in layout.names() {
//!         anim_data = anim_data.add_panel(PanelData::new(layout.panel_id(name)?).add_frame(RED));
//!     }
//!
//!     let response = client
//!         .write_effect(&CustomAnimation::new(anim_data).payload())
//!         .await?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```
//!
//! ## Disclaimer
//!
//! This project is not affiliated with, authorized by, endorsed by, or in any way officially connected
//! with Nanoleaf or its affiliates.

// The `animation` module holds the frame model (colors, panels, whole animations)
// and its serialization into the text blob the device plays.
pub mod animation;

// The `control_interface` module talks to the device: every request carries the
// auth token in its path and returns the device's response or an error.
pub mod control_interface;

// The `layout` module turns the device's panel positions into logical names.
pub mod layout;

// The `util` module holds configuration, credential loading and status codes.
pub mod util;
