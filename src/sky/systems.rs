//! Sky sphere mounting and mode switching

use anyhow::Result;
use bevy::light::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::bodies::unit_sphere_mesh;
use crate::lifecycle::MountScoped;
use crate::scene::SceneBuilder;
use crate::sky::material::SkyMaterial;
use crate::sky::mode::{ControlProfile, SkyMode, SkyModePolicy, mode_for_distance_squared};
use crate::textures::{Placeholder, TextureKind};
use crate::viewport::{CameraDistanceChanged, MainCamera, ViewProfile};

/// Sky sphere configuration resource
#[derive(Resource, Clone, Debug)]
pub struct SkyConfig {
    pub starmap: &'static str,
    pub constellations: &'static str,
    pub radius: f32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            starmap: "starmap_2020_4k.jpg",
            constellations: "constellation_figures_2k.tif",
            radius: 10.0,
        }
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct SkySphere {
    pub policy: SkyModePolicy,
    pub mode: SkyMode,
}

/// User request for a sky mode
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkyModeSelected(pub SkyMode);

pub fn spawn_sky_sphere(
    builder: &mut SceneBuilder,
    sky_materials: &mut Assets<SkyMaterial>,
    config: &SkyConfig,
    policy: SkyModePolicy,
    mode: SkyMode,
    exposure: f32,
) -> Result<Entity> {
    let sphere = builder.add_mesh(unit_sphere_mesh()?);
    let starmap = builder.load_texture(config.starmap, TextureKind::Color, Placeholder::Black);
    let constellations =
        builder.load_texture(config.constellations, TextureKind::Color, Placeholder::Black);

    let material = sky_materials.add(
        SkyMaterial::new(starmap, constellations, mode.side()).with_exposure(exposure),
    );
    builder.ledger.track_sky_material(material.id());

    let entity = builder
        .commands
        .spawn((
            Mesh3d(sphere),
            MeshMaterial3d(material),
            Transform::from_scale(Vec3::splat(config.radius)),
            SkySphere { policy, mode },
            NotShadowCaster,
            NotShadowReceiver,
            MountScoped,
            Name::new("Sky Sphere"),
        ))
        .id();
    Ok(entity)
}

/// Sky sphere whose side follows the camera distance
pub fn mount_sky_globe(
    mut builder: SceneBuilder,
    mut sky_materials: ResMut<Assets<SkyMaterial>>,
    config: Res<SkyConfig>,
) {
    let policy = SkyModePolicy::default();
    let exposure = ViewProfile::SKY_GLOBE.exposure;
    if let Err(err) =
        spawn_sky_sphere(&mut builder, &mut sky_materials, &config, policy, SkyMode::Globe, exposure)
    {
        error!("[SKY] failed to mount sky globe: {err:#}");
    }
}

/// Sky sphere whose side only changes on user selection
pub fn mount_star_map(
    mut builder: SceneBuilder,
    mut sky_materials: ResMut<Assets<SkyMaterial>>,
    config: Res<SkyConfig>,
) {
    let policy = SkyModePolicy::Explicit;
    let exposure = ViewProfile::STAR_MAP.exposure;
    if let Err(err) =
        spawn_sky_sphere(&mut builder, &mut sky_materials, &config, policy, SkyMode::Globe, exposure)
    {
        error!("[SKY] failed to mount star map: {err:#}");
    }
}

fn switch_mode(
    sphere: &mut SkySphere,
    material: &MeshMaterial3d<SkyMaterial>,
    materials: &mut Assets<SkyMaterial>,
    mode: SkyMode,
) -> bool {
    if sphere.mode == mode {
        return false;
    }
    sphere.mode = mode;
    if let Some(mut material) = materials.get_mut(&material.0) {
        material.set_side(mode.side());
    }
    true
}

/// Implicit policy: every distance notification is compared with the threshold
pub fn apply_distance_mode(
    mut changes: MessageReader<CameraDistanceChanged>,
    mut spheres: Query<(&mut SkySphere, &MeshMaterial3d<SkyMaterial>)>,
    mut materials: ResMut<Assets<SkyMaterial>>,
) {
    for change in changes.read() {
        for (mut sphere, material) in &mut spheres {
            let SkyModePolicy::DistanceThreshold { distance_squared } = sphere.policy else {
                continue;
            };
            let mode = mode_for_distance_squared(change.distance_squared, distance_squared);
            if switch_mode(&mut sphere, material, &mut materials, mode) {
                debug!("[SKY] camera crossed threshold, now {}", mode.label());
            }
        }
    }
}

/// Explicit policy: a selection switches the side and reconfigures the orbit controls
pub fn apply_selected_mode(
    mut selections: MessageReader<SkyModeSelected>,
    mut spheres: Query<(&mut SkySphere, &MeshMaterial3d<SkyMaterial>)>,
    mut materials: ResMut<Assets<SkyMaterial>>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    for SkyModeSelected(mode) in selections.read().copied() {
        for (mut sphere, material) in &mut spheres {
            if sphere.policy != SkyModePolicy::Explicit {
                continue;
            }
            if !switch_mode(&mut sphere, material, &mut materials, mode) {
                continue;
            }
            let profile = ControlProfile::for_mode(mode);
            for mut camera in &mut cameras {
                profile.apply(&mut camera);
            }
            info!("[SKY] {} mode selected", mode.label());
        }
    }
}
