//! Texture request/result types shared by the fetch worker and the asset systems

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

/// Remote directory every texture file is fetched from
pub const TEXTURES_BASE_URL: &str =
    "https://raw.githubusercontent.com/skycompendium/gallery/main/textures";

/// Lifecycle of a requested texture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Ready,
    Failed,
}

/// How the fetched pixels are interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureKind {
    /// Plain sRGB colour map
    #[default]
    Color,
    /// Greyscale map whose green channel becomes the alpha channel
    AlphaMask,
}

/// Pixel shown until (or instead of) the fetched image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    White,
    Black,
    Transparent,
}

impl Placeholder {
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Placeholder::White => [255, 255, 255, 255],
            Placeholder::Black => [0, 0, 0, 255],
            Placeholder::Transparent => [0, 0, 0, 0],
        }
    }

    /// 1x1 sRGB image filled with the placeholder colour
    pub fn image(self) -> Image {
        Image::new_fill(
            Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &self.rgba(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        )
    }
}

/// Commands for the texture worker thread
#[derive(Debug)]
pub enum TextureCommand {
    Fetch {
        id: AssetId<Image>,
        file: String,
        kind: TextureKind,
    },
}

/// Results from the texture worker thread
pub enum TextureResult {
    Loaded {
        id: AssetId<Image>,
        file: String,
        image: Image,
    },
    Failed {
        id: AssetId<Image>,
        file: String,
        error: String,
    },
}

/// Resource containing channels for communicating with the texture worker thread
#[derive(Resource)]
pub struct TextureChannels {
    pub cmd_tx: Sender<TextureCommand>,
    pub res_rx: Arc<Mutex<Receiver<TextureResult>>>,
}
