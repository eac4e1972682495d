//! Scene composition configuration

use bevy::prelude::*;
use thiserror::Error;

use crate::bodies::{BodyDescriptor, orrery_bodies};

/// How pivots are rotated before the first frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialPhase {
    /// `2pi * U(0,1)` per body; seeded for reproducible layouts
    Random { seed: Option<u64> },
    /// Every pivot starts at zero
    Aligned,
}

/// Background star sphere
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub texture: &'static str,
    pub radius: f32,
    /// Tilt about Z applied before the spin, radians
    pub tilt: f32,
    pub angular_velocity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            texture: "2k_stars_milky_way.jpg",
            radius: 64.0,
            tilt: 63_f32.to_radians(),
            angular_velocity: 0.00361,
        }
    }
}

/// Orrery scene configuration resource
#[derive(Resource, Clone, Debug)]
pub struct SceneConfig {
    pub bodies: Vec<BodyDescriptor>,
    pub starfield: Option<StarfieldConfig>,
    pub ambient_color: Color,
    pub ambient_brightness: f32,
    /// Presentation tilt of the whole scene about X, radians
    pub scene_tilt: f32,
    pub ring_color: Color,
    pub initial_phase: InitialPhase,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bodies: orrery_bodies(),
            starfield: Some(StarfieldConfig::default()),
            ambient_color: Color::srgb_u8(0x36, 0x36, 0x36),
            ambient_brightness: 80.0,
            scene_tilt: 8_f32.to_radians(),
            ring_color: Color::srgba(0.45, 0.55, 0.7, 0.6),
            initial_phase: InitialPhase::Random { seed: None },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneConfigError {
    #[error("scene has no bodies")]
    Empty,
    #[error("body `{name}` has non-positive radius {radius}")]
    InvalidRadius { name: &'static str, radius: f32 },
    #[error("orbit of `{name}` ({radius}) must lie outside `{previous}` ({previous_radius})")]
    OrbitOrder {
        name: &'static str,
        radius: f32,
        previous: &'static str,
        previous_radius: f32,
    },
    #[error("starfield radius {radius} does not enclose the outermost orbit {outermost}")]
    StarfieldTooSmall { radius: f32, outermost: f32 },
}

impl SceneConfig {
    /// Check the body table: radii positive, orbit radii strictly increasing.
    pub fn validate(&self) -> Result<(), SceneConfigError> {
        if self.bodies.is_empty() {
            return Err(SceneConfigError::Empty);
        }
        for body in &self.bodies {
            if body.radius <= 0.0 {
                return Err(SceneConfigError::InvalidRadius {
                    name: body.name,
                    radius: body.radius,
                });
            }
        }
        for pair in self.bodies.windows(2) {
            if pair[1].orbit_radius <= pair[0].orbit_radius {
                return Err(SceneConfigError::OrbitOrder {
                    name: pair[1].name,
                    radius: pair[1].orbit_radius,
                    previous: pair[0].name,
                    previous_radius: pair[0].orbit_radius,
                });
            }
        }
        if let (Some(starfield), Some(last)) = (self.starfield, self.bodies.last()) {
            let outermost = last.orbit_radius + last.radius;
            if starfield.radius <= outermost {
                return Err(SceneConfigError::StarfieldTooSmall {
                    radius: starfield.radius,
                    outermost,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_order_orbits() {
        let config = SceneConfig {
            bodies: vec![
                BodyDescriptor::self_lit("Sun", "2k_sun.jpg", 0.9, 9.0, -0.0036),
                BodyDescriptor::lit("Moon", "2k_moon.jpg", 0.2, 5.0, -0.0037),
            ],
            ..default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SceneConfigError::OrbitOrder { name: "Moon", .. }));
        assert!(err.to_string().contains("Sun"));
    }

    #[test]
    fn test_rejects_empty_and_degenerate_bodies() {
        let empty = SceneConfig {
            bodies: Vec::new(),
            ..default()
        };
        assert_eq!(empty.validate(), Err(SceneConfigError::Empty));

        let flat = SceneConfig {
            bodies: vec![BodyDescriptor::lit("Dust", "dust.jpg", 0.0, 1.0, 0.0)],
            ..default()
        };
        assert!(matches!(
            flat.validate(),
            Err(SceneConfigError::InvalidRadius { name: "Dust", .. })
        ));
    }

    #[test]
    fn test_starfield_must_enclose_orbits() {
        let config = SceneConfig {
            starfield: Some(StarfieldConfig {
                radius: 20.0,
                ..default()
            }),
            ..default()
        };
        assert!(matches!(
            config.validate(),
            Err(SceneConfigError::StarfieldTooSmall { .. })
        ));
    }
}
