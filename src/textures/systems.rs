//! Texture bookkeeping and result draining

use bevy::prelude::*;
use std::collections::HashMap;

use crate::textures::types::{
    Placeholder, TextureChannels, TextureCommand, TextureKind, TextureResult, TextureState,
};

/// One texture issued for the current mount
#[derive(Clone, Debug)]
pub struct TextureEntry {
    pub file: String,
    pub state: TextureState,
}

/// Every texture handed out to the current mount, keyed by its image asset
#[derive(Resource, Default)]
pub struct TextureRegistry {
    entries: HashMap<AssetId<Image>, TextureEntry>,
}

impl TextureRegistry {
    /// Issue a texture fetch and return a handle that is usable right away.
    ///
    /// The handle points at a placeholder image until the worker delivers the
    /// decoded pixels. Without a worker the texture fails immediately and the
    /// placeholder stays.
    pub fn load(
        &mut self,
        file: &str,
        kind: TextureKind,
        placeholder: Placeholder,
        images: &mut Assets<Image>,
        channels: Option<&TextureChannels>,
    ) -> Handle<Image> {
        let handle = images.add(placeholder.image());
        let id = handle.id();

        let sent = channels.is_some_and(|channels| {
            channels
                .cmd_tx
                .send(TextureCommand::Fetch {
                    id,
                    file: file.to_string(),
                    kind,
                })
                .is_ok()
        });
        let state = if sent {
            TextureState::Pending
        } else {
            warn!("[TEXTURE] worker unavailable, {} stays untextured", file);
            TextureState::Failed
        };

        self.entries.insert(
            id,
            TextureEntry {
                file: file.to_string(),
                state,
            },
        );
        handle
    }

    pub fn state(&self, id: AssetId<Image>) -> Option<TextureState> {
        self.entries.get(&id).map(|entry| entry.state)
    }

    /// Swap decoded pixels into a pending texture in place.
    ///
    /// Returns false when the texture is unknown (already disposed) or settled.
    pub fn complete(&mut self, id: AssetId<Image>, image: Image, images: &mut Assets<Image>) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if entry.state != TextureState::Pending {
            return false;
        }
        let Some(mut slot) = images.get_mut(id) else {
            entry.state = TextureState::Failed;
            return false;
        };
        *slot = image;
        entry.state = TextureState::Ready;
        true
    }

    /// Mark a pending texture as failed, leaving its placeholder in place
    pub fn fail(&mut self, id: AssetId<Image>) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state == TextureState::Pending => {
                entry.state = TextureState::Failed;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, state: TextureState) -> usize {
        self.entries.values().filter(|e| e.state == state).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Forget every texture; results still in flight for them are dropped.
    pub fn clear(&mut self) {
        for entry in self.entries.values() {
            if entry.state == TextureState::Pending {
                debug!("[TEXTURE] abandoning in-flight {}", entry.file);
            }
        }
        self.entries.clear();
    }
}

/// System to drain fetch results and update image data in place
pub fn apply_texture_results(
    channels: Option<Res<TextureChannels>>,
    mut registry: ResMut<TextureRegistry>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(channels) = channels else { return };
    let Ok(guard) = channels.res_rx.lock() else {
        return;
    };

    while let Ok(msg) = guard.try_recv() {
        match msg {
            TextureResult::Loaded { id, file, image } => {
                if registry.complete(id, image, &mut images) {
                    info!("[TEXTURE] {} ready", file);
                } else if registry.state(id).is_none() {
                    debug!("[TEXTURE] dropping {}: no longer mounted", file);
                } else {
                    debug!("[TEXTURE] dropping {}: already settled", file);
                }
            }
            TextureResult::Failed { id, file, error } => {
                if registry.fail(id) {
                    warn!("[TEXTURE] {} failed, leaving untextured: {}", file, error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
    use std::sync::{Arc, Mutex, mpsc};

    fn channels() -> (TextureChannels, mpsc::Receiver<TextureCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_res_tx, res_rx) = mpsc::channel();
        (
            TextureChannels {
                cmd_tx,
                res_rx: Arc::new(Mutex::new(res_rx)),
            },
            cmd_rx,
        )
    }

    #[test]
    fn test_load_is_pending_and_usable() {
        let mut registry = TextureRegistry::default();
        let mut images = Assets::<Image>::default();
        let (channels, cmd_rx) = channels();

        let handle = registry.load(
            "2k_moon.jpg",
            TextureKind::Color,
            Placeholder::White,
            &mut images,
            Some(&channels),
        );

        assert_eq!(registry.state(handle.id()), Some(TextureState::Pending));
        assert!(images.get(handle.id()).is_some());
        match cmd_rx.try_recv() {
            Ok(TextureCommand::Fetch { id, file, .. }) => {
                assert_eq!(id, handle.id());
                assert_eq!(file, "2k_moon.jpg");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_complete_swaps_image_in_place() {
        let mut registry = TextureRegistry::default();
        let mut images = Assets::<Image>::default();
        let (channels, _cmd_rx) = channels();
        let handle = registry.load(
            "starmap_2020_4k.jpg",
            TextureKind::Color,
            Placeholder::Black,
            &mut images,
            Some(&channels),
        );

        let loaded = Image::new_fill(
            Extent3d {
                width: 8,
                height: 4,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &[40, 40, 60, 255],
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        );
        assert!(registry.complete(handle.id(), loaded, &mut images));
        assert_eq!(registry.state(handle.id()), Some(TextureState::Ready));
        assert_eq!(images.get(handle.id()).map(|i| i.width()), Some(8));

        // Settled textures ignore late results.
        assert!(!registry.complete(handle.id(), Placeholder::White.image(), &mut images));
    }

    #[test]
    fn test_failure_keeps_placeholder() {
        let mut registry = TextureRegistry::default();
        let mut images = Assets::<Image>::default();
        let (channels, _cmd_rx) = channels();
        let handle = registry.load(
            "2k_mars.jpg",
            TextureKind::Color,
            Placeholder::White,
            &mut images,
            Some(&channels),
        );

        assert!(registry.fail(handle.id()));
        assert_eq!(registry.state(handle.id()), Some(TextureState::Failed));
        assert_eq!(images.get(handle.id()).map(|i| i.width()), Some(1));
        assert!(!registry.fail(handle.id()));
    }

    #[test]
    fn test_missing_worker_fails_immediately() {
        let mut registry = TextureRegistry::default();
        let mut images = Assets::<Image>::default();
        let handle = registry.load(
            "2k_sun.jpg",
            TextureKind::Color,
            Placeholder::White,
            &mut images,
            None,
        );
        assert_eq!(registry.state(handle.id()), Some(TextureState::Failed));
        assert_eq!(registry.count(TextureState::Failed), 1);
    }

    #[test]
    fn test_results_after_clear_are_dropped() {
        let mut registry = TextureRegistry::default();
        let mut images = Assets::<Image>::default();
        let (channels, _cmd_rx) = channels();
        let handle = registry.load(
            "2k_venus_atmosphere.jpg",
            TextureKind::Color,
            Placeholder::White,
            &mut images,
            Some(&channels),
        );

        registry.clear();
        assert!(!registry.complete(handle.id(), Placeholder::Black.image(), &mut images));
        assert_eq!(registry.len(), 0);
    }
}
