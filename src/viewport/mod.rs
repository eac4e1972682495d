//! Camera, orbit controls and resize handling

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCameraSystemSet;

pub mod camera;
pub mod distance;
pub mod resize;

pub use camera::{MainCamera, ViewProfile, spawn_main_camera};
pub use distance::{CameraDistanceChanged, emit_camera_distance};
pub use resize::{ViewportController, respond_to_resize};

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportController>()
            .add_message::<CameraDistanceChanged>()
            .add_systems(Update, respond_to_resize)
            .add_systems(
                PostUpdate,
                emit_camera_distance.after(PanOrbitCameraSystemSet),
            );
    }
}
