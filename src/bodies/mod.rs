//! Celestial body module
//!
//! Body descriptors, the mesh factory and orbit ring geometry.

pub mod descriptor;
pub mod factory;
pub mod ring;

pub use descriptor::{BodyDescriptor, orrery_bodies};
pub use factory::{CelestialBody, create_body, unit_sphere_mesh};
pub use ring::{orbit_ring_material, orbit_ring_mesh};
