//! Main camera and per-view camera profiles

use bevy::camera::Exposure;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::lifecycle::MountScoped;
use crate::sky::ControlProfile;

/// Vertical field of view of every view, degrees
pub const FIELD_OF_VIEW_DEG: f32 = 75.0;

/// Displays at or below this many logical pixels on either axis are compact
pub const COMPACT_DISPLAY_PX: f32 = 768.0;

#[derive(Component)]
pub struct MainCamera;

/// Camera placement and controls of one view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewProfile {
    pub distance: f32,
    /// Start distance on compact displays, if different
    pub compact_distance: Option<f32>,
    pub near: f32,
    pub far: f32,
    pub controls: ControlProfile,
    pub bloom_intensity: f32,
    /// Linear brightness multiplier ahead of tone mapping
    pub exposure: f32,
}

impl ViewProfile {
    pub const ORRERY: Self = Self {
        distance: 32.0,
        compact_distance: None,
        near: 0.1,
        far: 150.0,
        controls: ControlProfile {
            min_distance: 0.1,
            max_distance: 60.0,
            rotate_speed: 1.0,
        },
        bloom_intensity: 0.3,
        exposure: 3.0,
    };

    pub const SKY_GLOBE: Self = Self {
        distance: 24.0,
        compact_distance: Some(32.0),
        near: 0.1,
        far: 100.0,
        controls: ControlProfile {
            min_distance: 0.1,
            max_distance: 90.0,
            rotate_speed: 1.0,
        },
        bloom_intensity: 0.16,
        exposure: 8.8,
    };

    pub const STAR_MAP: Self = Self {
        distance: 20.0,
        compact_distance: None,
        near: 0.1,
        far: 100.0,
        controls: ControlProfile::GLOBE,
        bloom_intensity: 0.16,
        exposure: 8.8,
    };

    /// Camera exposure equivalent to scaling the default by `exposure`
    pub fn camera_exposure(&self) -> Exposure {
        Exposure {
            ev100: Exposure::EV100_BLENDER - self.exposure.max(f32::EPSILON).log2(),
        }
    }

    pub fn initial_distance(&self, width: f32, height: f32) -> f32 {
        match self.compact_distance {
            Some(compact) if width <= COMPACT_DISPLAY_PX || height <= COMPACT_DISPLAY_PX => compact,
            _ => self.distance,
        }
    }
}

/// Attach the view's camera to the window. One per mount.
pub fn spawn_main_camera(commands: &mut Commands, profile: &ViewProfile, width: f32, height: f32) -> Entity {
    let distance = profile.initial_distance(width, height);

    let mut pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(distance),
        target_radius: distance,
        yaw: Some(0.0),
        pitch: Some(0.0),
        force_update: true,
        ..default()
    };
    profile.controls.apply(&mut pan_orbit);

    commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: FIELD_OF_VIEW_DEG.to_radians(),
                near: profile.near,
                far: profile.far,
                aspect_ratio: width / height.max(1.0),
                ..default()
            }),
            Camera {
                order: 0,
                clear_color: ClearColorConfig::Custom(Color::BLACK),
                ..default()
            },
            Bloom {
                intensity: profile.bloom_intensity,
                ..Bloom::NATURAL
            },
            Tonemapping::TonyMcMapface,
            profile.camera_exposure(),
            pan_orbit,
            MainCamera,
            MountScoped,
            Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y),
            Name::new("Main Camera"),
        ))
        .id()
}
