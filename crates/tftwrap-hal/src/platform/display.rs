use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use log::debug;
use st7735r::{Error, St7735, protocol};
use tftwrap_core::{Color, GlyphGrid, GridGeometry, Orientation, OrientationClass};

use crate::render::{
    CELL_HEIGHT, CELL_WIDTH, MAX_GLYPH_SCALE, ROW_BUFFER_BYTES,
    font::{self, GLYPH_ROWS},
    rasterize_cell_row,
};

pub type DisplayError<SpiErr, DcErr> = Error<SpiErr, DcErr>;

/// `MADCTL` byte that puts the panel in `orientation`.
pub const fn madctl_for(orientation: Orientation, bgr: bool) -> u8 {
    let (mut my, mut mx, mv) = match (orientation.class(), orientation.is_inverted()) {
        (OrientationClass::Portrait, false) => (true, true, false),
        (OrientationClass::Portrait, true) => (false, false, false),
        (OrientationClass::Landscape, false) => (true, false, true),
        (OrientationClass::Landscape, true) => (false, true, true),
    };

    // With rows and columns exchanged the horizontal axis is scanned by MY.
    if orientation.is_mirrored() {
        if mv {
            my = !my;
        } else {
            mx = !mx;
        }
    }

    protocol::madctl_byte(my, mx, mv, bgr)
}

/// Character-cell adapter drawing 5x7 glyphs on an ST7735R panel.
#[derive(Debug)]
pub struct TftDisplay<SPI, DC> {
    panel: St7735<SPI, DC>,
    orientation: Orientation,
}

impl<SPI, DC> TftDisplay<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    /// Wraps a panel left in its native portrait scan order.
    pub fn new(panel: St7735<SPI, DC>) -> Self {
        Self {
            panel,
            orientation: Orientation::PortraitInverted,
        }
    }

    /// Powers the panel up and applies the current orientation.
    pub fn initialize<D>(&mut self, delay: &mut D) -> Result<(), DisplayError<SPI::Error, DC::Error>>
    where
        D: DelayNs,
    {
        self.panel.init(delay)?;
        self.set_rotation(self.orientation)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn panel(&self) -> &St7735<SPI, DC> {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut St7735<SPI, DC> {
        &mut self.panel
    }

    pub fn release(self) -> St7735<SPI, DC> {
        self.panel
    }
}

impl<SPI, DC> GlyphGrid for TftDisplay<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    type Error = DisplayError<SPI::Error, DC::Error>;

    fn geometry(&self) -> GridGeometry {
        GridGeometry::new(CELL_WIDTH, CELL_HEIGHT, protocol::LONG_AXIS, protocol::SHORT_AXIS)
    }

    fn set_rotation(&mut self, orientation: Orientation) -> Result<(), Self::Error> {
        let madctl = madctl_for(orientation, self.panel.config().bgr);
        self.panel.set_madctl(madctl)?;
        self.orientation = orientation;

        let (width, height) = self.panel.size();
        debug!(
            "tft: rotation orientation={:?} madctl={:#04x} size={}x{}",
            orientation, madctl, width, height
        );
        Ok(())
    }

    fn clear_background(&mut self, color: Color) -> Result<(), Self::Error> {
        self.panel.fill(color.raw())
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
        if scale == 0 || scale > MAX_GLYPH_SCALE {
            return Err(Error::InvalidInput);
        }

        let cell_w = CELL_WIDTH * scale as u16;
        let cell_h = CELL_HEIGHT * scale as u16;
        self.panel.set_address_window(x, y, cell_w, cell_h)?;

        let bitmap = font::glyph_5x7(glyph);
        let mut row_bytes = [0u8; ROW_BUFFER_BYTES];
        for row in 0..GLYPH_ROWS {
            let len = rasterize_cell_row(
                &bitmap,
                row,
                scale as usize,
                foreground.to_be_bytes(),
                background.to_be_bytes(),
                &mut row_bytes,
            );
            for _ in 0..scale {
                self.panel.write_pixels(&row_bytes[..len])?;
            }
        }

        Ok(())
    }
}
