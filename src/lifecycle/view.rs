//! Mountable views

use bevy::prelude::*;
use std::str::FromStr;

use crate::viewport::ViewProfile;

/// The single mounted view. `Closed` unmounts everything and exits.
#[derive(States, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Orrery,
    SkyGlobe,
    StarMap,
    Closed,
}

impl ActiveView {
    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Orrery => "Orrery",
            ActiveView::SkyGlobe => "Sky Globe",
            ActiveView::StarMap => "Star Map",
            ActiveView::Closed => "",
        }
    }

    pub fn profile(self) -> Option<ViewProfile> {
        match self {
            ActiveView::Orrery => Some(ViewProfile::ORRERY),
            ActiveView::SkyGlobe => Some(ViewProfile::SKY_GLOBE),
            ActiveView::StarMap => Some(ViewProfile::STAR_MAP),
            ActiveView::Closed => None,
        }
    }
}

impl FromStr for ActiveView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "orrery" => Ok(ActiveView::Orrery),
            "sky-globe" | "globe" => Ok(ActiveView::SkyGlobe),
            "star-map" | "starmap" => Ok(ActiveView::StarMap),
            other => anyhow::bail!("unknown view `{other}` (expected orrery, sky-globe or star-map)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_argument() {
        assert_eq!("orrery".parse::<ActiveView>().ok(), Some(ActiveView::Orrery));
        assert_eq!("Sky-Globe".parse::<ActiveView>().ok(), Some(ActiveView::SkyGlobe));
        assert_eq!("star-map".parse::<ActiveView>().ok(), Some(ActiveView::StarMap));
        assert!("closed".parse::<ActiveView>().is_err());
    }

    #[test]
    fn test_only_closed_has_no_profile() {
        assert!(ActiveView::Orrery.profile().is_some());
        assert!(ActiveView::SkyGlobe.profile().is_some());
        assert!(ActiveView::StarMap.profile().is_some());
        assert!(ActiveView::Closed.profile().is_none());
    }
}
