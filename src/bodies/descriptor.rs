//! Body descriptors and the default body table

/// Axial tilt of the Earth in radians (23.44 degrees)
pub const EARTH_AXIAL_TILT: f32 = 0.409_105_2;

/// Reflectance model of a body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Emissive, ignores scene lighting (the sun)
    SelfLit,
    /// Receives light, casts and receives shadows
    Lit,
}

/// Point light attached to a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyLight {
    pub intensity: f32,
    pub range: f32,
}

/// One row of the body table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub texture: &'static str,
    /// Scale applied to the shared unit sphere
    pub radius: f32,
    /// Distance from the origin along +X
    pub orbit_radius: f32,
    /// Axial tilt in radians
    pub axial_tilt: f32,
    /// Radians per frame; the sign is the orbital direction
    pub angular_velocity: f32,
    pub shading: Shading,
    /// Satellites are drawn without an orbit ring
    pub satellite: bool,
    pub clouds: Option<&'static str>,
    pub light: Option<BodyLight>,
}

impl BodyDescriptor {
    pub const fn lit(
        name: &'static str,
        texture: &'static str,
        radius: f32,
        orbit_radius: f32,
        angular_velocity: f32,
    ) -> Self {
        Self {
            name,
            texture,
            radius,
            orbit_radius,
            axial_tilt: 0.0,
            angular_velocity,
            shading: Shading::Lit,
            satellite: false,
            clouds: None,
            light: None,
        }
    }

    pub const fn self_lit(
        name: &'static str,
        texture: &'static str,
        radius: f32,
        orbit_radius: f32,
        angular_velocity: f32,
    ) -> Self {
        Self {
            shading: Shading::SelfLit,
            ..Self::lit(name, texture, radius, orbit_radius, angular_velocity)
        }
    }

    pub const fn with_tilt(self, axial_tilt: f32) -> Self {
        Self { axial_tilt, ..self }
    }

    pub const fn with_clouds(self, texture: &'static str) -> Self {
        Self {
            clouds: Some(texture),
            ..self
        }
    }

    pub const fn with_light(self, intensity: f32, range: f32) -> Self {
        Self {
            light: Some(BodyLight { intensity, range }),
            ..self
        }
    }

    pub const fn as_satellite(self) -> Self {
        Self {
            satellite: true,
            ..self
        }
    }

    /// Bodies at the origin stay put regardless of their velocity
    pub fn revolves(&self) -> bool {
        self.orbit_radius > 0.0
    }

    pub fn has_orbit_ring(&self) -> bool {
        self.revolves() && !self.satellite
    }
}

/// Body table of the orrery view, innermost first
pub fn orrery_bodies() -> Vec<BodyDescriptor> {
    vec![
        BodyDescriptor::lit("Earth", "2k_earth_daymap.jpg", 1.0, 0.0, 0.0)
            .with_tilt(EARTH_AXIAL_TILT)
            .with_clouds("2k_earth_clouds.jpg"),
        BodyDescriptor::lit("Moon", "2k_moon.jpg", 0.2, 5.0, -0.0037).as_satellite(),
        BodyDescriptor::self_lit("Sun", "2k_sun.jpg", 0.9, 9.0, -0.0036)
            .with_light(4_000_000.0, 100.0),
        BodyDescriptor::lit("Jupiter", "2k_jupiter.jpg", 0.4, 16.0, -0.002),
        BodyDescriptor::lit("Mercury", "2k_mercury.jpg", 0.3, 19.0, -0.0017),
        // Mars runs the opposite way round.
        BodyDescriptor::lit("Mars", "2k_mars.jpg", 0.4, 23.0, 0.001),
        BodyDescriptor::lit("Venus", "2k_venus_atmosphere.jpg", 0.6, 25.0, -0.0002),
        BodyDescriptor::lit("Saturn", "2k_saturn.jpg", 0.6, 28.0, -0.0001),
    ]
}
