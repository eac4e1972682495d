//! Orrery scene composition

use bevy::light::{GlobalAmbientLight, NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::render::render_resource::Face;

use crate::bodies::{create_body, orbit_ring_material, orbit_ring_mesh, unit_sphere_mesh};
use crate::lifecycle::MountScoped;
use crate::scene::builder::SceneBuilder;
use crate::scene::config::{SceneConfig, StarfieldConfig};
use crate::scene::orbits::{OrbitArena, OrbitPivot, OrbitRecord, plan_orbits, pivot_rotation};
use crate::textures::{Placeholder, TextureKind};

/// Root of the composed orrery; carries the presentation tilt
#[derive(Component)]
pub struct CelestialScene;

/// Marker component for orbit ring lines
#[derive(Component)]
pub struct OrbitRing;

/// Marker component for the background star sphere
#[derive(Component)]
pub struct Starfield;

/// Build bodies, pivots, rings, lights and the starfield from [`SceneConfig`]
pub fn compose_scene(
    mut builder: SceneBuilder,
    config: Res<SceneConfig>,
    mut arena: ResMut<OrbitArena>,
    mut ambient: ResMut<GlobalAmbientLight>,
) {
    if let Err(err) = config.validate() {
        error!("[SCENE] invalid scene configuration: {err}");
        return;
    }
    let sphere = match unit_sphere_mesh() {
        Ok(mesh) => builder.add_mesh(mesh),
        Err(err) => {
            error!("[SCENE] {err:#}");
            return;
        }
    };

    ambient.color = config.ambient_color;
    ambient.brightness = config.ambient_brightness;

    let root = builder
        .commands
        .spawn((
            CelestialScene,
            MountScoped,
            Transform::from_rotation(Quat::from_rotation_x(config.scene_tilt)),
            Visibility::default(),
            Name::new("Celestial Scene"),
        ))
        .id();

    let records = plan_orbits(&config.bodies, config.initial_phase);
    for (descriptor, record) in config.bodies.iter().zip(records) {
        let initial = record.angle();
        let id = arena.push(record);
        let pivot = OrbitPivot {
            id,
            base: Quat::IDENTITY,
        };
        let pivot_entity = builder
            .commands
            .spawn((
                pivot,
                Transform::from_rotation(pivot_rotation(&pivot, initial)),
                Visibility::default(),
                Name::new(format!("{} pivot", descriptor.name)),
                ChildOf(root),
            ))
            .id();

        create_body(&mut builder, &sphere, descriptor, id, pivot_entity);

        if descriptor.has_orbit_ring() {
            let mesh = builder.add_mesh(orbit_ring_mesh(descriptor.orbit_radius));
            let material = builder.add_material(orbit_ring_material(config.ring_color));
            builder.commands.spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
                NotShadowCaster,
                OrbitRing,
                Name::new(format!("{} orbit", descriptor.name)),
                ChildOf(pivot_entity),
            ));
        }

        if let Some(light) = descriptor.light {
            builder.commands.spawn((
                PointLight {
                    intensity: light.intensity,
                    range: light.range,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_xyz(descriptor.orbit_radius, 0.0, 0.0),
                Name::new(format!("{} light", descriptor.name)),
                ChildOf(pivot_entity),
            ));
        }
    }

    if let Some(starfield) = config.starfield {
        spawn_starfield(&mut builder, &mut arena, &sphere, root, starfield);
    }

    info!(
        "[SCENE] composed {} bodies, {} textures requested",
        config.bodies.len(),
        builder.textures.len()
    );
}

fn spawn_starfield(
    builder: &mut SceneBuilder,
    arena: &mut OrbitArena,
    sphere: &Handle<Mesh>,
    root: Entity,
    starfield: StarfieldConfig,
) {
    let texture = builder.load_texture(starfield.texture, TextureKind::Color, Placeholder::Black);
    let material = builder.add_material(StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        // Inverted winding: only the inside of the sphere is drawn.
        cull_mode: Some(Face::Front),
        ..default()
    });

    let id = arena.push(OrbitRecord::new(
        "Starfield",
        0.0,
        starfield.angular_velocity,
    ));
    let pivot = OrbitPivot {
        id,
        base: Quat::from_rotation_z(starfield.tilt),
    };
    builder.commands.spawn((
        Mesh3d(sphere.clone()),
        MeshMaterial3d(material),
        pivot,
        Transform::from_rotation(pivot_rotation(&pivot, 0.0))
            .with_scale(Vec3::splat(starfield.radius)),
        NotShadowCaster,
        NotShadowReceiver,
        Starfield,
        Name::new("Starfield"),
        ChildOf(root),
    ));
}
