use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{IntoStorage, Rgb565},
    primitives::Rectangle,
};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::{Error, St7735, protocol};

impl<SPI, DC> DrawTarget for St7735<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    type Color = Rgb565;
    type Error = Error<SPI::Error, DC::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.size();

        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= width as i32 || point.y >= height as i32 {
                continue;
            }

            self.set_address_window(point.x as u16, point.y as u16, 1, 1)?;
            self.write_pixels(&protocol::encode_rgb565(color.into_storage()))?;
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
            color.into_storage(),
        )
    }
}

impl<SPI, DC> OriginDimensions for St7735<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    fn size(&self) -> Size {
        let (width, height) = St7735::size(self);
        Size::new(width as u32, height as u32)
    }
}
