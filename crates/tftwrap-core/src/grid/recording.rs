use heapless::Vec;

use super::{GlyphGrid, GridGeometry};
use crate::{color::Color, orientation::Orientation};

/// One call received by a [`RecordingGrid`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridCall {
    Rotation(Orientation),
    Clear(Color),
    Glyph {
        x: u16,
        y: u16,
        foreground: Color,
        background: Color,
        glyph: u8,
        scale: u8,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordingError {
    /// The call log reached its capacity.
    Full,
}

/// Panel-less grid that logs every call, for tests and bring-up.
#[derive(Clone, Debug)]
pub struct RecordingGrid<const N: usize> {
    geometry: GridGeometry,
    calls: Vec<GridCall, N>,
}

impl<const N: usize> Default for RecordingGrid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RecordingGrid<N> {
    pub const fn new() -> Self {
        Self::with_geometry(GridGeometry::SENSORIAN_TFT)
    }

    pub const fn with_geometry(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[GridCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Glyph bytes in the order they were drawn.
    pub fn glyphs(&self) -> impl Iterator<Item = u8> + '_ {
        self.calls.iter().filter_map(|call| match call {
            GridCall::Glyph { glyph, .. } => Some(*glyph),
            _ => None,
        })
    }

    fn record(&mut self, call: GridCall) -> Result<(), RecordingError> {
        self.calls.push(call).map_err(|_| RecordingError::Full)
    }
}

impl<const N: usize> GlyphGrid for RecordingGrid<N> {
    type Error = RecordingError;

    fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    fn set_rotation(&mut self, orientation: Orientation) -> Result<(), Self::Error> {
        self.record(GridCall::Rotation(orientation))
    }

    fn clear_background(&mut self, color: Color) -> Result<(), Self::Error> {
        self.record(GridCall::Clear(color))
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
        self.record(GridCall::Glyph {
            x,
            y,
            foreground,
            background,
            glyph,
            scale,
        })
    }
}
