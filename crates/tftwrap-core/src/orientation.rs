//! Display orientations and their portrait/landscape classification.

use crate::grid::ConfigError;

/// Which physical axis runs along a text line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrientationClass {
    /// Lines run along the short axis; rows stack along the long axis.
    Portrait,
    /// Lines run along the long axis; rows stack along the short axis.
    Landscape,
}

/// Panel orientation, numbered the way the controller's rotation command
/// indexes them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Orientation {
    Portrait = 0,
    Landscape = 1,
    PortraitInverted = 2,
    PortraitMirrored = 3,
    LandscapeMirrored = 4,
    PortraitInvertedMirrored = 5,
    LandscapeInverted = 6,
    LandscapeInvertedMirrored = 7,
}

impl Orientation {
    pub const ALL: [Self; 8] = [
        Self::Portrait,
        Self::Landscape,
        Self::PortraitInverted,
        Self::PortraitMirrored,
        Self::LandscapeMirrored,
        Self::PortraitInvertedMirrored,
        Self::LandscapeInverted,
        Self::LandscapeInvertedMirrored,
    ];

    /// Rotation the panel must be in before a background clear behaves.
    pub const CLEAR_BASELINE: Self = Self::Portrait;

    pub const fn class(self) -> OrientationClass {
        match self {
            Self::Portrait
            | Self::PortraitInverted
            | Self::PortraitMirrored
            | Self::PortraitInvertedMirrored => OrientationClass::Portrait,
            Self::Landscape
            | Self::LandscapeMirrored
            | Self::LandscapeInverted
            | Self::LandscapeInvertedMirrored => OrientationClass::Landscape,
        }
    }

    pub const fn is_landscape(self) -> bool {
        matches!(self.class(), OrientationClass::Landscape)
    }

    /// Upside-down relative to the base orientation of its class.
    pub const fn is_inverted(self) -> bool {
        matches!(
            self,
            Self::PortraitInverted
                | Self::PortraitInvertedMirrored
                | Self::LandscapeInverted
                | Self::LandscapeInvertedMirrored
        )
    }

    /// Horizontally mirrored relative to the base orientation of its class.
    pub const fn is_mirrored(self) -> bool {
        matches!(
            self,
            Self::PortraitMirrored
                | Self::PortraitInvertedMirrored
                | Self::LandscapeMirrored
                | Self::LandscapeInvertedMirrored
        )
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Orientation {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ConfigError::InvalidOrientation(value))
    }
}
