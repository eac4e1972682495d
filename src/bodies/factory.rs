//! Renderable body construction

use anyhow::{Context, Result};
use bevy::light::{NotShadowCaster, NotShadowReceiver};
use bevy::mesh::Mesh;
use bevy::prelude::*;

use crate::bodies::descriptor::{BodyDescriptor, Shading};
use crate::scene::builder::SceneBuilder;
use crate::scene::orbits::BodyId;
use crate::textures::{Placeholder, TextureKind};

/// Icosphere subdivision level shared by every body
pub const SPHERE_SUBDIVISIONS: u32 = 16;
/// Cloud shell radius relative to its body
pub const CLOUD_SCALE: f32 = 1.01;

/// Marker component for body meshes
#[derive(Component, Clone, Copy, Debug)]
pub struct CelestialBody {
    pub id: BodyId,
}

/// Marker component for the alpha-masked cloud shell around a body
#[derive(Component)]
pub struct CloudLayer;

/// Unit icosphere; bodies scale it through their transform
pub fn unit_sphere_mesh() -> Result<Mesh> {
    Sphere::new(1.0)
        .mesh()
        .ico(SPHERE_SUBDIVISIONS)
        .context("building body icosphere")
}

pub fn body_material(shading: Shading, texture: Handle<Image>) -> StandardMaterial {
    match shading {
        Shading::SelfLit => StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(texture),
            unlit: true,
            ..default()
        },
        Shading::Lit => StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(texture),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        },
    }
}

pub fn cloud_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(0xee, 0xee, 0xee),
        base_color_texture: Some(texture),
        alpha_mode: AlphaMode::Mask(0.1),
        perceptual_roughness: 1.0,
        ..default()
    }
}

/// Spawn a body mesh (and its cloud shell) under `parent`.
///
/// The body sits at its orbit radius along +X of the parent pivot. Its
/// texture fetch is issued here and resolves later.
pub fn create_body(
    builder: &mut SceneBuilder,
    sphere: &Handle<Mesh>,
    descriptor: &BodyDescriptor,
    id: BodyId,
    parent: Entity,
) -> Entity {
    let texture = builder.load_texture(descriptor.texture, TextureKind::Color, Placeholder::White);
    let material = builder.add_material(body_material(descriptor.shading, texture));

    let transform = Transform::from_xyz(descriptor.orbit_radius, 0.0, 0.0)
        .with_rotation(Quat::from_rotation_z(descriptor.axial_tilt))
        .with_scale(Vec3::splat(descriptor.radius));

    let mut body = builder.commands.spawn((
        Mesh3d(sphere.clone()),
        MeshMaterial3d(material),
        transform,
        CelestialBody { id },
        Name::new(descriptor.name),
        ChildOf(parent),
    ));
    if descriptor.shading == Shading::SelfLit {
        body.insert((NotShadowCaster, NotShadowReceiver));
    }
    let body = body.id();

    if let Some(clouds) = descriptor.clouds {
        let texture = builder.load_texture(clouds, TextureKind::AlphaMask, Placeholder::Transparent);
        let material = builder.add_material(cloud_material(texture));
        builder.commands.spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(material),
            Transform::from_scale(Vec3::splat(CLOUD_SCALE)),
            CloudLayer,
            Name::new(format!("{} clouds", descriptor.name)),
            ChildOf(body),
        ));
    }

    body
}
