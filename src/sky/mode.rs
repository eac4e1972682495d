//! Dome/Globe modes and the policies that pick between them

use bevy_panorbit_camera::PanOrbitCamera;

use crate::sky::material::SkySide;

/// Squared camera distance below which the sky is viewed as a dome (radius 13)
pub const DOME_DISTANCE_SQUARED: f32 = 169.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkyMode {
    /// Inside looking out
    Dome,
    /// Outside looking in
    #[default]
    Globe,
}

impl SkyMode {
    pub fn side(self) -> SkySide {
        match self {
            SkyMode::Dome => SkySide::Back,
            SkyMode::Globe => SkySide::Front,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SkyMode::Dome => SkyMode::Globe,
            SkyMode::Globe => SkyMode::Dome,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkyMode::Dome => "Dome",
            SkyMode::Globe => "Globe",
        }
    }
}

/// How the sky mode follows the viewer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkyModePolicy {
    /// Only a user selection changes the mode
    Explicit,
    /// Recomputed on every camera change; no hysteresis band
    DistanceThreshold { distance_squared: f32 },
}

impl Default for SkyModePolicy {
    fn default() -> Self {
        SkyModePolicy::DistanceThreshold {
            distance_squared: DOME_DISTANCE_SQUARED,
        }
    }
}

/// Dome inside the threshold, globe at or beyond it
pub fn mode_for_distance_squared(distance_squared: f32, threshold: f32) -> SkyMode {
    if distance_squared < threshold {
        SkyMode::Dome
    } else {
        SkyMode::Globe
    }
}

/// Orbit control limits for one mode
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlProfile {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Negative values invert the drag direction
    pub rotate_speed: f32,
}

impl ControlProfile {
    pub const DOME: Self = Self {
        min_distance: 0.2,
        max_distance: 20.0,
        rotate_speed: -0.36,
    };

    pub const GLOBE: Self = Self {
        min_distance: 15.0,
        max_distance: 36.0,
        rotate_speed: 0.36,
    };

    pub fn for_mode(mode: SkyMode) -> Self {
        match mode {
            SkyMode::Dome => Self::DOME,
            SkyMode::Globe => Self::GLOBE,
        }
    }

    pub fn apply(&self, camera: &mut PanOrbitCamera) {
        camera.zoom_lower_limit = self.min_distance;
        camera.zoom_upper_limit = Some(self.max_distance);
        camera.orbit_sensitivity = self.rotate_speed;
        camera.target_radius = camera
            .target_radius
            .clamp(self.min_distance, self.max_distance);
        camera.force_update = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(mode_for_distance_squared(0.0, DOME_DISTANCE_SQUARED), SkyMode::Dome);
        assert_eq!(mode_for_distance_squared(168.99, DOME_DISTANCE_SQUARED), SkyMode::Dome);
        assert_eq!(mode_for_distance_squared(169.0, DOME_DISTANCE_SQUARED), SkyMode::Globe);
        assert_eq!(mode_for_distance_squared(400.0, DOME_DISTANCE_SQUARED), SkyMode::Globe);
        assert_eq!(SkyMode::Dome.side(), SkySide::Back);
        assert_eq!(SkyMode::Globe.side(), SkySide::Front);
    }

    #[test]
    fn test_mode_is_monotonic_with_single_crossing() {
        let modes: Vec<_> = (0..400)
            .map(|i| mode_for_distance_squared(i as f32 * 0.5, DOME_DISTANCE_SQUARED))
            .collect();
        let crossings = modes.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(crossings, 1);
        assert_eq!(modes.first(), Some(&SkyMode::Dome));
        assert_eq!(modes.last(), Some(&SkyMode::Globe));
    }

    #[test]
    fn test_control_profiles() {
        let mut camera = PanOrbitCamera {
            target_radius: 5.0,
            ..Default::default()
        };
        ControlProfile::for_mode(SkyMode::Globe).apply(&mut camera);
        assert_eq!(camera.zoom_lower_limit, 15.0);
        assert_eq!(camera.zoom_upper_limit, Some(36.0));
        assert_eq!(camera.target_radius, 15.0);
        assert!(camera.orbit_sensitivity > 0.0);

        ControlProfile::for_mode(SkyMode::Dome).apply(&mut camera);
        assert!(camera.orbit_sensitivity < 0.0);
        assert_eq!(camera.zoom_upper_limit, Some(20.0));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SkyMode::Dome.toggled(), SkyMode::Globe);
        assert_eq!(SkyMode::Globe.toggled().label(), "Dome");
    }
}
