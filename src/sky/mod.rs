//! Dual-sided sky sphere: material, modes and mode switching

use bevy::prelude::*;

pub mod material;
pub mod mode;
pub mod systems;

pub use material::SkyMaterial;
pub use mode::{ControlProfile, SkyMode, SkyModePolicy};
pub use systems::{SkyConfig, SkyModeSelected, SkySphere, mount_sky_globe, mount_star_map};

use crate::viewport::emit_camera_distance;
use systems::{apply_distance_mode, apply_selected_mode};

pub struct SkyPlugin;

impl Plugin for SkyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<SkyMaterial>::default())
            .init_resource::<SkyConfig>()
            .add_message::<SkyModeSelected>()
            .add_systems(Update, apply_selected_mode)
            .add_systems(PostUpdate, apply_distance_mode.after(emit_camera_distance));
    }
}
