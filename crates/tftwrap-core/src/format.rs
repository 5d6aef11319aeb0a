//! Formatting remembered between print calls.

use crate::{color::Color, orientation::Orientation};

/// Orientation, colors and font scale reused when a print call omits them.
///
/// Lives for the lifetime of one [`Printer`](crate::printer::Printer); it is
/// not saved across restarts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatState {
    pub orientation: Orientation,
    pub foreground: Color,
    pub background: Color,
    /// Integer glyph magnification, at least 1 once accepted by a print.
    pub scale: u8,
}

impl FormatState {
    pub const DEFAULT: Self = Self::new(Orientation::LandscapeInverted, Color::WHITE, Color::BLACK, 1);

    pub const fn new(orientation: Orientation, foreground: Color, background: Color, scale: u8) -> Self {
        Self {
            orientation,
            foreground,
            background,
            scale,
        }
    }

    pub const fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub const fn with_scale(mut self, scale: u8) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

impl Default for FormatState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white_on_black_landscape_inverted_scale_one() {
        let state = FormatState::default();
        assert_eq!(state.orientation, Orientation::LandscapeInverted);
        assert_eq!(state.foreground, Color::WHITE);
        assert_eq!(state.background, Color::BLACK);
        assert_eq!(state.scale, 1);
    }

    #[test]
    fn builders_touch_only_their_fields() {
        let state = FormatState::default()
            .with_colors(Color::RED, Color::GREEN)
            .with_scale(3);

        assert_eq!(state.orientation, Orientation::LandscapeInverted);
        assert_eq!(state.foreground, Color::RED);
        assert_eq!(state.background, Color::GREEN);
        assert_eq!(state.scale, 3);
        assert_eq!(
            state.with_orientation(Orientation::Portrait).orientation,
            Orientation::Portrait
        );
    }
}
