//! Camera distance notifications

use bevy::prelude::*;

use crate::viewport::camera::MainCamera;

/// Emitted whenever the main camera moves
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct CameraDistanceChanged {
    /// Squared distance from the world origin
    pub distance_squared: f32,
}

pub fn emit_camera_distance(
    cameras: Query<&Transform, (With<MainCamera>, Changed<Transform>)>,
    mut changes: MessageWriter<CameraDistanceChanged>,
) {
    for transform in &cameras {
        changes.write(CameraDistanceChanged {
            distance_squared: transform.translation.length_squared(),
        });
    }
}
