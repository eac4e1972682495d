//! Texture fetching worker

use anyhow::{Context, Result, bail};
use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use image::DynamicImage;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use crate::textures::types::{
    TEXTURES_BASE_URL, TextureChannels, TextureCommand, TextureKind, TextureResult,
};

pub fn texture_url(file: &str) -> String {
    format!("{}/{}", TEXTURES_BASE_URL, file)
}

/// Start the background texture worker thread
///
/// Every fetch runs as its own task so slow files never hold back the others.
/// The worker exits once the command sender is dropped.
pub fn start_texture_worker() -> TextureChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<TextureCommand>();
    let (res_tx, res_rx) = mpsc::channel::<TextureResult>();

    thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(err) => {
                error!("[TEXTURE] failed to start runtime, textures stay on placeholders: {err}");
                return;
            }
        };
        let _guard = rt.enter();
        let client = reqwest::Client::new();

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                TextureCommand::Fetch { id, file, kind } => {
                    let client = client.clone();
                    let res_tx = res_tx.clone();
                    rt.spawn(async move {
                        let msg = match fetch_texture(&client, &file, kind).await {
                            Ok(image) => TextureResult::Loaded { id, file, image },
                            Err(err) => TextureResult::Failed {
                                id,
                                file,
                                error: format!("{err:#}"),
                            },
                        };
                        let _ = res_tx.send(msg);
                    });
                }
            }
        }
    });

    TextureChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}

async fn fetch_texture(client: &reqwest::Client, file: &str, kind: TextureKind) -> Result<Image> {
    let url = texture_url(file);
    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        bail!("HTTP {} for {}", status, url);
    }
    let bytes = resp.bytes().await.context("reading texture body")?;
    debug!("[TEXTURE FETCH] file={} bytes={}", file, bytes.len());

    tokio::task::spawn_blocking(move || decode_texture(&bytes, kind))
        .await
        .context("texture decode task")?
}

/// Decode an encoded JPEG/TIFF/PNG payload into a linearly filtered sRGB image
pub fn decode_texture(bytes: &[u8], kind: TextureKind) -> Result<Image> {
    let decoded = image::load_from_memory(bytes).context("decoding texture")?;
    let decoded = match kind {
        TextureKind::Color => decoded,
        TextureKind::AlphaMask => {
            let mut rgba = decoded.to_rgba8();
            for px in rgba.pixels_mut() {
                px[3] = px[1];
            }
            DynamicImage::ImageRgba8(rgba)
        }
    };

    let mut image = Image::from_dynamic(decoded, true, RenderAssetUsages::default());
    image.sampler = ImageSampler::linear();
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::render_resource::TextureFormat;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        bytes.into_inner()
    }

    #[test]
    fn test_texture_url() {
        assert_eq!(
            texture_url("2k_moon.jpg"),
            "https://raw.githubusercontent.com/skycompendium/gallery/main/textures/2k_moon.jpg"
        );
    }

    #[test]
    fn test_decode_color_texture() {
        let png = encode_png(RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255])));
        let image = decode_texture(&png, TextureKind::Color).expect("decode");

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        assert_eq!(image.texture_descriptor.format, TextureFormat::Rgba8UnormSrgb);
        assert!(matches!(image.sampler, ImageSampler::Descriptor(_)));
    }

    #[test]
    fn test_decode_alpha_mask_uses_green_channel() {
        let png = encode_png(RgbaImage::from_pixel(1, 1, Rgba([0, 77, 0, 255])));
        let image = decode_texture(&png, TextureKind::AlphaMask).expect("decode");
        let data = image.data.as_ref().expect("pixel data");
        assert_eq!(data[3], 77);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_texture(b"definitely not an image", TextureKind::Color).is_err());
    }
}
