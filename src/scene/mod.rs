//! Orrery scene: body table, orbit arena, composition and asset bookkeeping

use bevy::prelude::*;

pub mod builder;
pub mod composer;
pub mod config;
pub mod ledger;
pub mod orbits;

pub use builder::SceneBuilder;
pub use composer::compose_scene;
pub use config::SceneConfig;
pub use ledger::SceneLedger;
pub use orbits::{OrbitArena, apply_orbit_rotations};

use crate::lifecycle::driver::drive_animation;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<OrbitArena>()
            .init_resource::<SceneLedger>()
            .add_systems(Update, (drive_animation, apply_orbit_rotations).chain());
    }
}
