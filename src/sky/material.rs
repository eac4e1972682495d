//! Two-texture sky sphere material

use bevy::mesh::MeshVertexBufferLayoutRef;
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::render_resource::{
    AsBindGroup, DepthStencilState, RenderPipelineDescriptor, ShaderType,
    SpecializedMeshPipelineError,
};
use bevy::shader::ShaderRef;

/// Overlay channel sum above which a constellation line is drawn
pub const HIGHLIGHT_THRESHOLD: f32 = 0.9;
/// Per-channel brightening applied under constellation lines
pub const HIGHLIGHT_BOOST: f32 = 0.003;

/// Which faces of the sky sphere are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkySide {
    /// Outward faces, seen from outside
    #[default]
    Front,
    /// Inward faces, seen from inside
    Back,
}

impl SkySide {
    fn as_uniform(self) -> u32 {
        match self {
            SkySide::Front => 0,
            SkySide::Back => 1,
        }
    }

    fn from_uniform(value: u32) -> Self {
        if value == 1 { SkySide::Back } else { SkySide::Front }
    }
}

#[derive(ShaderType, Clone, Copy, Debug)]
pub struct SkyUniform {
    pub side: u32,
    pub highlight_threshold: f32,
    pub highlight_boost: f32,
    /// Linear multiplier applied after compositing
    pub exposure: f32,
}

/// Star map with a constellation overlay.
///
/// Culling is disabled in the pipeline; the fragment shader discards the faces
/// that do not match `side`, so flipping sides is a uniform write and never
/// rebuilds the pipeline.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SkyMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub starmap: Handle<Image>,
    #[texture(2)]
    #[sampler(3)]
    pub constellations: Handle<Image>,
    #[uniform(4)]
    pub settings: SkyUniform,
}

impl SkyMaterial {
    pub fn new(starmap: Handle<Image>, constellations: Handle<Image>, side: SkySide) -> Self {
        Self {
            starmap,
            constellations,
            settings: SkyUniform {
                side: side.as_uniform(),
                highlight_threshold: HIGHLIGHT_THRESHOLD,
                highlight_boost: HIGHLIGHT_BOOST,
                exposure: 1.0,
            },
        }
    }

    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.settings.exposure = exposure;
        self
    }

    pub fn side(&self) -> SkySide {
        SkySide::from_uniform(self.settings.side)
    }

    /// Returns true when the side actually changed
    pub fn set_side(&mut self, side: SkySide) -> bool {
        let value = side.as_uniform();
        if self.settings.side == value {
            return false;
        }
        self.settings.side = value;
        true
    }
}

impl Material for SkyMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/sky_material.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Opaque
    }

    fn specialize(
        _pipeline: &MaterialPipeline,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.cull_mode = None;
        if let Some(depth_stencil) = descriptor.depth_stencil.as_mut() {
            sky_depth_state(depth_stencil);
        }
        Ok(())
    }
}

/// The sky never occludes anything drawn after it. The mesh pipeline's
/// reverse-Z compare is left as is.
pub fn sky_depth_state(depth_stencil: &mut DepthStencilState) {
    depth_stencil.depth_write_enabled = false;
}

/// CPU mirror of the fragment shader's compositing rule, before exposure
pub fn composite_sky_texel(base: [f32; 4], overlay: [f32; 4]) -> [f32; 4] {
    if overlay[0] + overlay[1] + overlay[2] > HIGHLIGHT_THRESHOLD {
        [
            (base[0] + HIGHLIGHT_BOOST).clamp(0.0, 1.0),
            (base[1] + HIGHLIGHT_BOOST).clamp(0.0, 1.0),
            (base[2] + HIGHLIGHT_BOOST).clamp(0.0, 1.0),
            1.0,
        ]
    } else {
        base
    }
}
