//! System parameter bundling what scene construction touches

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::scene::ledger::SceneLedger;
use crate::textures::{Placeholder, TextureChannels, TextureKind, TextureRegistry};

/// Commands plus asset stores, with every created asset recorded in the ledger
#[derive(SystemParam)]
pub struct SceneBuilder<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub meshes: ResMut<'w, Assets<Mesh>>,
    pub materials: ResMut<'w, Assets<StandardMaterial>>,
    pub images: ResMut<'w, Assets<Image>>,
    pub textures: ResMut<'w, TextureRegistry>,
    pub channels: Option<Res<'w, TextureChannels>>,
    pub ledger: ResMut<'w, SceneLedger>,
}

impl SceneBuilder<'_, '_> {
    pub fn load_texture(
        &mut self,
        file: &str,
        kind: TextureKind,
        placeholder: Placeholder,
    ) -> Handle<Image> {
        let handle = self.textures.load(
            file,
            kind,
            placeholder,
            &mut self.images,
            self.channels.as_deref(),
        );
        self.ledger.track_image(handle.id());
        handle
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> Handle<Mesh> {
        let handle = self.meshes.add(mesh);
        self.ledger.track_mesh(handle.id());
        handle
    }

    pub fn add_material(&mut self, material: StandardMaterial) -> Handle<StandardMaterial> {
        let handle = self.materials.add(material);
        self.ledger.track_standard_material(handle.id());
        handle
    }
}
