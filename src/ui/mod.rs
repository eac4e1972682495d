//! Keyboard input and the heads-up display

use bevy::prelude::*;

pub mod hud;
pub mod input;

pub use hud::spawn_hud;

use crate::lifecycle::ActiveView;
use hud::update_mode_label;
use input::{handle_sky_mode_keys, handle_view_keys};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_view_keys,
                handle_sky_mode_keys.run_if(in_state(ActiveView::StarMap)),
                update_mode_label,
            ),
        );
    }
}
