//! Texture resource module
//!
//! Textures are fetched over HTTP by a background worker. Callers receive an
//! image handle immediately; the decoded pixels replace the placeholder once
//! the fetch resolves.

use bevy::prelude::*;

pub mod fetcher;
pub mod systems;
pub mod types;

use fetcher::start_texture_worker;

pub use systems::{TextureRegistry, apply_texture_results};
pub use types::{Placeholder, TextureChannels, TextureKind, TextureState};

/// Plugin for remote texture loading
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        // The first view mounts before `Startup`, so the worker must exist by then.
        app.init_resource::<TextureRegistry>()
            .insert_resource(start_texture_worker())
            .add_systems(Update, apply_texture_results);
        info!("[INIT] Texture worker started");
    }
}
