//! View lifecycle: mount, animate, unmount

use bevy::prelude::*;

pub mod driver;
pub mod teardown;
pub mod view;

pub use driver::AnimationDriver;
pub use teardown::MountScoped;
pub use view::ActiveView;

use crate::scene::compose_scene;
use crate::sky::{mount_sky_globe, mount_star_map};
use crate::ui::spawn_hud;
use teardown::{begin_mount, request_exit, start_animation, teardown_mount};

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationDriver>()
            .add_systems(
                OnEnter(ActiveView::Orrery),
                (begin_mount, compose_scene, spawn_hud, start_animation).chain(),
            )
            .add_systems(
                OnEnter(ActiveView::SkyGlobe),
                (begin_mount, mount_sky_globe, spawn_hud, start_animation).chain(),
            )
            .add_systems(
                OnEnter(ActiveView::StarMap),
                (begin_mount, mount_star_map, spawn_hud, start_animation).chain(),
            )
            .add_systems(OnEnter(ActiveView::Closed), request_exit);

        for view in [ActiveView::Orrery, ActiveView::SkyGlobe, ActiveView::StarMap] {
            app.add_systems(OnExit(view), teardown_mount);
        }
    }
}
