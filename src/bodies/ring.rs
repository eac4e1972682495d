//! Orbit ring polylines

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Mesh, PrimitiveTopology};
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Sample points per ring, the last one closing the loop onto the first
pub const ORBIT_RING_POINTS: usize = 64;

/// Evenly spaced points on a closed circle in the XZ orbital plane.
///
/// The circle is authored in the XY plane and turned a quarter about X.
pub fn orbit_ring_points(radius: f32, points: usize) -> Vec<Vec3> {
    let segments = points.max(2) - 1;
    let to_orbital_plane = Quat::from_rotation_x(FRAC_PI_2);

    let mut ring: Vec<Vec3> = (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            to_orbital_plane * Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Line-strip mesh tracing an orbit of the given radius
pub fn orbit_ring_mesh(radius: f32) -> Mesh {
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_POSITION,
            orbit_ring_points(radius, ORBIT_RING_POINTS),
        )
}

pub fn orbit_ring_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}
