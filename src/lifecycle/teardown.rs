//! Mount and unmount of a view

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::lifecycle::driver::AnimationDriver;
use crate::lifecycle::view::ActiveView;
use crate::scene::{OrbitArena, SceneLedger};
use crate::sky::SkyMaterial;
use crate::textures::{TextureRegistry, TextureState};
use crate::viewport::{MainCamera, ViewportController, spawn_main_camera};

/// Window size assumed when no primary window exists
const FALLBACK_SIZE: (f32, f32) = (1280.0, 720.0);

/// Root entities owned by the current mount. Children go with their root.
#[derive(Component)]
pub struct MountScoped;

/// Attach the camera, subscribe to resizes and reset the driver
pub fn begin_mount(
    mut commands: Commands,
    view: Res<State<ActiveView>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportController>,
    mut driver: ResMut<AnimationDriver>,
    ledger: Res<SceneLedger>,
) {
    let view = *view.get();
    let Some(profile) = view.profile() else {
        return;
    };
    let (width, height) = windows
        .single()
        .map(|window| (window.width(), window.height()))
        .unwrap_or(FALLBACK_SIZE);

    if !ledger.is_empty() {
        warn!("[LIFECYCLE] {} assets from the previous mount were never released", ledger.len());
    }
    viewport.subscribe();
    viewport.resize(width, height);
    spawn_main_camera(&mut commands, &profile, width, height);
    driver.reset();
    info!("[LIFECYCLE] mounting {} ({width}x{height})", view.title());
}

pub fn start_animation(mut driver: ResMut<AnimationDriver>) {
    if driver.start() {
        debug!("[LIFECYCLE] animation {:?}", driver.state());
    }
}

/// Release everything the mount created: leaves before entities, the camera last
#[allow(clippy::too_many_arguments)]
pub fn teardown_mount(
    mut commands: Commands,
    mut driver: ResMut<AnimationDriver>,
    mut viewport: ResMut<ViewportController>,
    mut textures: ResMut<TextureRegistry>,
    mut ledger: ResMut<SceneLedger>,
    mut arena: ResMut<OrbitArena>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut sky_materials: ResMut<Assets<SkyMaterial>>,
    mut ambient: ResMut<GlobalAmbientLight>,
    scoped: Query<Entity, (With<MountScoped>, Without<MainCamera>)>,
    cameras: Query<Entity, With<MainCamera>>,
) {
    let frames = driver.frame();
    driver.stop();
    viewport.unsubscribe();

    let in_flight = textures.count(TextureState::Pending);
    // Late fetch results for these textures are dropped from here on.
    textures.clear();
    let report = ledger.dispose(
        &mut images,
        &mut meshes,
        &mut standard_materials,
        &mut sky_materials,
    );
    let records = arena.len();
    arena.clear();

    let mut entities = 0;
    for entity in &scoped {
        commands.entity(entity).despawn();
        entities += 1;
    }
    ambient.brightness = 0.0;

    let mut camera_count = 0;
    for camera in &cameras {
        commands.entity(camera).despawn();
        camera_count += 1;
    }

    info!(
        "[LIFECYCLE] unmounted after {frames} frames: {} images, {} meshes, {} materials, {entities} entities, {camera_count} cameras",
        report.images, report.meshes, report.materials
    );
    debug!("[LIFECYCLE] dropped {records} orbit records, {in_flight} textures still in flight");
    if report.missing > 0 {
        warn!("[LIFECYCLE] {} tracked assets were already gone", report.missing);
    }
}

pub fn request_exit(mut exit: MessageWriter<AppExit>) {
    info!("[LIFECYCLE] closing");
    exit.write(AppExit::Success);
}
