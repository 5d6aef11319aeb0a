//! Character-cell geometry and the glyph drawing seam.

mod recording;

use core::fmt;

use crate::{
    color::Color,
    orientation::{Orientation, OrientationClass},
};

pub use recording::{GridCall, RecordingError, RecordingGrid};

/// Caller-supplied formatting the display cannot honor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Font scale must be at least 1.
    ZeroScale,
    /// The scaled cell no longer fits one column or one line.
    ScaleTooLarge { scale: u8, orientation: Orientation },
    /// Rotation index outside the eight supported orientations.
    InvalidOrientation(u8),
    /// Grid reported a zero-sized cell or display axis.
    DegenerateGeometry,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroScale => f.write_str("font scale must be at least 1"),
            Self::ScaleTooLarge { scale, orientation } => write!(
                f,
                "font scale {} leaves no room for text in {:?}",
                scale, orientation
            ),
            Self::InvalidOrientation(index) => write!(f, "unknown orientation index {}", index),
            Self::DegenerateGeometry => f.write_str("glyph grid reports a zero-sized cell or axis"),
        }
    }
}

/// Columns per line and lines per screen for one orientation and scale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capacity {
    pub columns: u16,
    pub lines: u16,
}

/// Fixed pixel geometry of a monospaced character grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridGeometry {
    /// Horizontal advance of one glyph at scale 1, spacing included.
    pub cell_width: u16,
    /// Vertical advance of one text line at scale 1, spacing included.
    pub cell_height: u16,
    pub long_axis: u16,
    pub short_axis: u16,
}

impl GridGeometry {
    /// 6x8 cells on a 160x128 panel.
    pub const SENSORIAN_TFT: Self = Self::new(6, 8, 160, 128);

    pub const fn new(cell_width: u16, cell_height: u16, long_axis: u16, short_axis: u16) -> Self {
        Self {
            cell_width,
            cell_height,
            long_axis,
            short_axis,
        }
    }

    /// Pixel extent along a text line and across lines, in that order.
    pub const fn axes(&self, class: OrientationClass) -> (u16, u16) {
        match class {
            OrientationClass::Portrait => (self.short_axis, self.long_axis),
            OrientationClass::Landscape => (self.long_axis, self.short_axis),
        }
    }

    pub fn capacity(&self, orientation: Orientation, scale: u8) -> Result<Capacity, ConfigError> {
        if scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.cell_width == 0
            || self.cell_height == 0
            || self.long_axis == 0
            || self.short_axis == 0
        {
            return Err(ConfigError::DegenerateGeometry);
        }

        let (line_axis, stack_axis) = self.axes(orientation.class());
        let columns = line_axis as u32 / (self.cell_width as u32 * scale as u32);
        let lines = stack_axis as u32 / (self.cell_height as u32 * scale as u32);

        if columns == 0 || lines == 0 {
            return Err(ConfigError::ScaleTooLarge { scale, orientation });
        }

        Ok(Capacity {
            columns: columns as u16,
            lines: lines as u16,
        })
    }

    /// Top-left pixel of the cell at `column`/`row` for a given scale.
    pub const fn cell_origin(&self, column: u16, row: u16, scale: u8) -> (u16, u16) {
        let x = column as u32 * self.cell_width as u32 * scale as u32;
        let y = row as u32 * self.cell_height as u32 * scale as u32;
        (clamp_u16(x), clamp_u16(y))
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::SENSORIAN_TFT
    }
}

const fn clamp_u16(value: u32) -> u16 {
    if value > u16::MAX as u32 {
        u16::MAX
    } else {
        value as u16
    }
}

/// Display surface that places whole glyphs at pixel positions.
pub trait GlyphGrid {
    type Error;

    fn geometry(&self) -> GridGeometry;

    fn set_rotation(&mut self, orientation: Orientation) -> Result<(), Self::Error>;

    /// Paints the whole visible area with `color`.
    fn clear_background(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Draws `glyph` with its top-left corner at `x`/`y`, covering one cell
    /// magnified by `scale`.
    fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        foreground: Color,
        background: Color,
        glyph: u8,
        scale: u8,
    ) -> Result<(), Self::Error>;
}

impl<G> GlyphGrid for &mut G
where
    G: GlyphGrid + ?Sized,
{
    type Error = G::Error;

    fn geometry(&self) -> GridGeometry {
        (**self).geometry()
    }

    fn set_rotation(&mut self, orientation: Orientation) -> Result<(), Self::Error> {
        (**self).set_rotation(orientation)
    }

    fn clear_background(&mut self, color: Color) -> Result<(), Self::Error> {
        (**self).clear_background(color)
    }

    fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        foreground: Color,
        background: Color,
        glyph: u8,
        scale: u8,
    ) -> Result<(), Self::Error> {
        (**self).draw_glyph(x, y, foreground, background, glyph, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: GridGeometry = GridGeometry::SENSORIAN_TFT;

    #[test]
    fn portrait_lines_run_along_the_short_axis() {
        assert_eq!(
            GEOMETRY.capacity(Orientation::Portrait, 1),
            Ok(Capacity {
                columns: 21,
                lines: 20
            })
        );
        assert_eq!(
            GEOMETRY.capacity(Orientation::PortraitInverted, 2),
            Ok(Capacity {
                columns: 10,
                lines: 10
            })
        );
    }

    #[test]
    fn landscape_lines_run_along_the_long_axis() {
        assert_eq!(
            GEOMETRY.capacity(Orientation::LandscapeInverted, 1),
            Ok(Capacity {
                columns: 26,
                lines: 16
            })
        );
        assert_eq!(
            GEOMETRY.capacity(Orientation::Landscape, 3),
            Ok(Capacity {
                columns: 8,
                lines: 5
            })
        );
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert_eq!(
            GEOMETRY.capacity(Orientation::Portrait, 0),
            Err(ConfigError::ZeroScale)
        );
    }

    #[test]
    fn largest_usable_scale_depends_on_orientation_class() {
        assert!(GEOMETRY.capacity(Orientation::Landscape, 16).is_ok());
        assert_eq!(
            GEOMETRY.capacity(Orientation::Landscape, 17),
            Err(ConfigError::ScaleTooLarge {
                scale: 17,
                orientation: Orientation::Landscape
            })
        );
        assert!(GEOMETRY.capacity(Orientation::Portrait, 20).is_ok());
        assert!(GEOMETRY.capacity(Orientation::Portrait, 21).is_err());
    }

    #[test]
    fn degenerate_geometry_is_reported_not_divided_by() {
        let geometry = GridGeometry::new(0, 8, 160, 128);
        assert_eq!(
            geometry.capacity(Orientation::Portrait, 1),
            Err(ConfigError::DegenerateGeometry)
        );
    }

    #[test]
    fn cell_origin_advances_by_scaled_cell() {
        assert_eq!(GEOMETRY.cell_origin(0, 0, 1), (0, 0));
        assert_eq!(GEOMETRY.cell_origin(3, 2, 2), (36, 32));
    }
}
