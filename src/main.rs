// Solar-system orrery and dual-sided star map

use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod lifecycle;
mod scene;
mod sky;
mod textures;
mod ui;
mod viewport;

use lifecycle::{ActiveView, LifecyclePlugin};
use scene::ScenePlugin;
use sky::SkyPlugin;
use textures::TexturePlugin;
use ui::UiPlugin;
use viewport::ViewportPlugin;

/// First command-line argument, if it names a view
fn initial_view() -> ActiveView {
    let Some(arg) = std::env::args().nth(1) else {
        return ActiveView::default();
    };
    match arg.parse() {
        Ok(view) => view,
        Err(err) => {
            warn!("[INIT] {err:#}; starting with the orrery");
            ActiveView::default()
        }
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Sky Compendium".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(PanOrbitCameraPlugin);

    app.insert_state(initial_view());
    app.add_plugins(TexturePlugin);
    app.add_plugins(ViewportPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(SkyPlugin);
    app.add_plugins(LifecyclePlugin);
    app.add_plugins(UiPlugin);

    app.run();
}
