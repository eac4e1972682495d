//! Orbit record arena and the per-frame rotation pass

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

use crate::bodies::BodyDescriptor;
use crate::scene::config::InitialPhase;

/// Index of a record in the [`OrbitArena`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Rotation state of one pivot
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitRecord {
    pub name: &'static str,
    pub initial_angle: f32,
    /// Radians added to the pivot yaw every frame
    pub increment: f32,
    pub frames: u64,
}

impl OrbitRecord {
    pub fn new(name: &'static str, initial_angle: f32, increment: f32) -> Self {
        Self {
            name,
            initial_angle,
            increment,
            frames: 0,
        }
    }

    pub fn stationary(name: &'static str) -> Self {
        Self::new(name, 0.0, 0.0)
    }

    /// Pivot yaw after `frames` steps, wrapped to [0, 2pi)
    pub fn angle(&self) -> f32 {
        angle_after(self.initial_angle, self.increment, self.frames)
    }
}

/// `initial + frames * increment (mod 2pi)`, computed in f64 so long runs do not drift
pub fn angle_after(initial: f32, increment: f32, frames: u64) -> f32 {
    (initial as f64 + frames as f64 * increment as f64).rem_euclid(TAU) as f32
}

/// Step every record forward by `frame_delta` frames
pub fn advance(mut records: Vec<OrbitRecord>, frame_delta: u64) -> Vec<OrbitRecord> {
    for record in &mut records {
        record.frames += frame_delta;
    }
    records
}

/// Initial pivot yaws, one per body
pub fn initial_angles(phase: InitialPhase, count: usize) -> Vec<f32> {
    match phase {
        InitialPhase::Aligned => vec![0.0; count],
        InitialPhase::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_os_rng(),
            };
            (0..count)
                .map(|_| std::f32::consts::TAU * rng.random::<f32>())
                .collect()
        }
    }
}

/// Records for a body table. Bodies at the origin never revolve.
pub fn plan_orbits(bodies: &[BodyDescriptor], phase: InitialPhase) -> Vec<OrbitRecord> {
    bodies
        .iter()
        .zip(initial_angles(phase, bodies.len()))
        .map(|(body, angle)| {
            if body.revolves() {
                OrbitRecord::new(body.name, angle, body.angular_velocity)
            } else {
                OrbitRecord::stationary(body.name)
            }
        })
        .collect()
}

/// Pivot transform driven by an orbit record
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitPivot {
    pub id: BodyId,
    /// Fixed orientation the yaw is applied on top of
    pub base: Quat,
}

/// Every orbit record of the current mount
#[derive(Resource, Default, Debug)]
pub struct OrbitArena {
    records: Vec<OrbitRecord>,
}

impl OrbitArena {
    pub fn push(&mut self, record: OrbitRecord) -> BodyId {
        self.records.push(record);
        BodyId(self.records.len() - 1)
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitRecord> {
        self.records.get(id.0)
    }

    pub fn advance(&mut self, frame_delta: u64) {
        let records = std::mem::take(&mut self.records);
        self.records = advance(records, frame_delta);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

pub fn pivot_rotation(pivot: &OrbitPivot, angle: f32) -> Quat {
    Quat::from_rotation_y(angle) * pivot.base
}

/// Write each record's current angle into its pivot transform
pub fn apply_orbit_rotations(
    arena: Res<OrbitArena>,
    mut pivots: Query<(&OrbitPivot, &mut Transform)>,
) {
    for (pivot, mut transform) in &mut pivots {
        let Some(record) = arena.get(pivot.id) else {
            continue;
        };
        transform.rotation = pivot_rotation(pivot, record.angle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::descriptor::BodyDescriptor;

    fn wrapped(x: f64) -> f32 {
        x.rem_euclid(TAU) as f32
    }

    #[test]
    fn test_angle_is_initial_plus_frames_times_increment() {
        let initial = 1.25_f32;
        let increment = -0.0036_f32;
        for frames in [0_u64, 1, 17, 1_000, 250_000] {
            let expected = wrapped(initial as f64 + frames as f64 * increment as f64);
            let got = angle_after(initial, increment, frames);
            assert!((got - expected).abs() < 1e-5, "frames={frames}");
            assert!((0.0..std::f32::consts::TAU).contains(&got));
        }
    }

    #[test]
    fn test_advance_in_steps_matches_single_jump() {
        let records = vec![
            OrbitRecord::new("Jupiter", 0.3, -0.002),
            OrbitRecord::new("Mars", 2.0, 0.001),
        ];
        let stepped = (0..500).fold(records.clone(), |r, _| advance(r, 1));
        let jumped = advance(records, 500);
        assert_eq!(stepped, jumped);
    }

    #[test]
    fn test_seeded_phases_are_reproducible() {
        let a = initial_angles(InitialPhase::Random { seed: Some(7) }, 8);
        let b = initial_angles(InitialPhase::Random { seed: Some(7) }, 8);
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (0.0..std::f32::consts::TAU).contains(x)));
        // Bodies should not all start co-linear.
        assert!(a.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_plan_keeps_origin_bodies_still() {
        let bodies = [
            BodyDescriptor::lit("Earth", "2k_earth_daymap.jpg", 1.0, 0.0, 0.5),
            BodyDescriptor::lit("Moon", "2k_moon.jpg", 0.2, 5.0, -0.0037),
        ];
        let records = plan_orbits(&bodies, InitialPhase::Random { seed: Some(3) });
        assert_eq!(records[0], OrbitRecord::stationary("Earth"));
        assert_eq!(records[1].increment, -0.0037);
    }

    #[test]
    fn test_sun_earth_moon_after_6000_frames() {
        let bodies = [
            BodyDescriptor::self_lit("Sun", "2k_sun.jpg", 0.9, 9.0, -0.0036),
            BodyDescriptor::lit("Earth", "2k_earth_daymap.jpg", 1.0, 0.0, 0.0),
            BodyDescriptor::lit("Moon", "2k_moon.jpg", 0.2, 5.0, -0.0037),
        ];
        let records = advance(plan_orbits(&bodies, InitialPhase::Aligned), 6000);

        assert_eq!(records[1].angle(), 0.0);
        let expected = wrapped(-0.0037_f32 as f64 * 6000.0);
        assert!((records[2].angle() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_arena_ids_index_records() {
        let mut arena = OrbitArena::default();
        let a = arena.push(OrbitRecord::new("Sun", 0.0, 0.1));
        let b = arena.push(OrbitRecord::stationary("Earth"));
        arena.advance(10);

        assert_eq!(a, BodyId(0));
        assert!((arena.get(a).unwrap().angle() - 1.0).abs() < 1e-5);
        assert_eq!(arena.get(b).unwrap().angle(), 0.0);
        arena.clear();
        assert!(arena.get(a).is_none());
    }
}
