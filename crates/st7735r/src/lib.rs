#![cfg_attr(not(test), no_std)]

//! ST7735R (1.8" 160x128 RGB565 TFT) driver primitives.

pub mod protocol;

#[cfg(feature = "embedded-graphics")]
mod graphics;

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// Pixels streamed per SPI write while filling a rectangle.
const FILL_CHUNK_PIXELS: usize = 64;

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Expected SPI clock in Hz (documented for board glue).
    pub spi_hz: u32,
    /// Panel is wired blue/red swapped.
    pub bgr: bool,
    /// RAM column offset of the visible area in native orientation.
    pub column_offset: u16,
    /// RAM row offset of the visible area in native orientation.
    pub row_offset: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_hz: 8_000_000,
            bgr: true,
            column_offset: 0,
            row_offset: 0,
        }
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<SpiErr, DcErr> {
    /// SPI transaction failed.
    Spi(SpiErr),
    /// Data/command pin operation failed.
    Dc(DcErr),
    /// Input parameters are outside supported bounds.
    InvalidInput,
}

pub type DriverResult<SpiErr, DcErr> = Result<(), Error<SpiErr, DcErr>>;

/// ST7735R driver over a 4-wire SPI device plus a data/command pin.
#[derive(Debug)]
pub struct St7735<SPI, DC> {
    spi: SPI,
    dc: DC,
    config: Config,
    madctl: u8,
}

impl<SPI, DC> St7735<SPI, DC>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
{
    /// Creates a new driver instance in native (portrait) scan order.
    pub fn new(spi: SPI, dc: DC, config: Config) -> Self {
        Self {
            spi,
            dc,
            config,
            madctl: protocol::madctl_byte(false, false, false, config.bgr),
        }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases owned bus and pin.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    /// Last `MADCTL` byte written to the controller.
    pub fn madctl(&self) -> u8 {
        self.madctl
    }

    /// Visible `(width, height)` for the current scan order.
    pub fn size(&self) -> (u16, u16) {
        protocol::visible_size(self.madctl)
    }

    /// Runs the power-up sequence and turns the display on.
    pub fn init<D>(&mut self, delay: &mut D) -> DriverResult<SPI::Error, DC::Error>
    where
        D: DelayNs,
    {
        self.write_command(protocol::SWRESET, &[])?;
        delay.delay_ms(150);
        self.write_command(protocol::SLPOUT, &[])?;
        delay.delay_ms(120);
        self.write_command(protocol::COLMOD, &[protocol::COLMOD_16BIT])?;
        delay.delay_ms(10);
        self.write_command(protocol::MADCTL, &[self.madctl])?;
        self.write_command(protocol::INVOFF, &[])?;
        self.write_command(protocol::NORON, &[])?;
        delay.delay_ms(10);
        self.write_command(protocol::DISPON, &[])?;
        delay.delay_ms(100);
        Ok(())
    }

    /// Sends one command byte followed by its parameter bytes.
    pub fn write_command(&mut self, command: u8, params: &[u8]) -> DriverResult<SPI::Error, DC::Error> {
        self.dc.set_low().map_err(Error::Dc)?;
        self.spi.write(&[command]).map_err(Error::Spi)?;

        if !params.is_empty() {
            self.dc.set_high().map_err(Error::Dc)?;
            self.spi.write(params).map_err(Error::Spi)?;
        }

        Ok(())
    }

    /// Sets the memory access order (rotation and mirroring).
    pub fn set_madctl(&mut self, madctl: u8) -> DriverResult<SPI::Error, DC::Error> {
        self.write_command(protocol::MADCTL, &[madctl])?;
        self.madctl = madctl;
        Ok(())
    }

    /// Selects a visible-area window and leaves the controller expecting
    /// pixel data for it.
    pub fn set_address_window(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> DriverResult<SPI::Error, DC::Error> {
        let (visible_w, visible_h) = self.size();
        let (x_offset, y_offset) = if protocol::exchanges_axes(self.madctl) {
            (self.config.row_offset, self.config.column_offset)
        } else {
            (self.config.column_offset, self.config.row_offset)
        };

        let columns = protocol::build_range_params(x, width, visible_w, x_offset)
            .ok_or(Error::InvalidInput)?;
        let rows = protocol::build_range_params(y, height, visible_h, y_offset)
            .ok_or(Error::InvalidInput)?;

        self.write_command(protocol::CASET, &columns)?;
        self.write_command(protocol::RASET, &rows)?;
        self.write_command(protocol::RAMWR, &[])
    }

    /// Streams raw RGB565 bytes into the active window.
    pub fn write_pixels(&mut self, bytes: &[u8]) -> DriverResult<SPI::Error, DC::Error> {
        if bytes.is_empty() {
            return Ok(());
        }

        self.dc.set_high().map_err(Error::Dc)?;
        self.spi.write(bytes).map_err(Error::Spi)
    }

    /// Fills a rectangle with one color.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: u16,
    ) -> DriverResult<SPI::Error, DC::Error> {
        self.set_address_window(x, y, width, height)?;

        let pixel = protocol::encode_rgb565(color);
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * protocol::BYTES_PER_PIXEL];
        for slot in chunk.chunks_exact_mut(protocol::BYTES_PER_PIXEL) {
            slot.copy_from_slice(&pixel);
        }

        let mut remaining = width as usize * height as usize;
        while remaining > 0 {
            let batch = remaining.min(FILL_CHUNK_PIXELS);
            self.write_pixels(&chunk[..batch * protocol::BYTES_PER_PIXEL])?;
            remaining -= batch;
        }

        Ok(())
    }

    /// Fills the whole visible area.
    pub fn fill(&mut self, color: u16) -> DriverResult<SPI::Error, DC::Error> {
        let (width, height) = self.size();
        self.fill_rect(0, 0, width, height, color)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use core::convert::Infallible;
    use std::{cell::Cell, cell::RefCell, rc::Rc, vec::Vec};

    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    /// One SPI write, tagged with the DC level at the time it was sent.
    pub(crate) type Write = (bool, Vec<u8>);

    pub(crate) struct FakeSpi {
        pub(crate) log: Rc<RefCell<Vec<Write>>>,
        dc_high: Rc<Cell<bool>>,
    }

    impl SpiErrorType for FakeSpi {
        type Error = Infallible;
    }

    impl SpiDevice<u8> for FakeSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.log.borrow_mut().push((self.dc_high.get(), bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    pub(crate) struct FakeDc(Rc<Cell<bool>>);

    impl embedded_hal::digital::ErrorType for FakeDc {
        type Error = Infallible;
    }

    impl OutputPin for FakeDc {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.set(true);
            Ok(())
        }
    }

    pub(crate) struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    pub(crate) fn make_panel() -> (St7735<FakeSpi, FakeDc>, Rc<RefCell<Vec<Write>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let dc_high = Rc::new(Cell::new(false));
        let spi = FakeSpi {
            log: log.clone(),
            dc_high: dc_high.clone(),
        };
        (St7735::new(spi, FakeDc(dc_high), Config::default()), log)
    }

    pub(crate) fn commands(log: &[Write]) -> Vec<u8> {
        log.iter()
            .filter(|(dc_high, _)| !dc_high)
            .map(|(_, bytes)| bytes[0])
            .collect()
    }

    pub(crate) fn data_len(log: &[Write]) -> usize {
        log.iter()
            .filter(|(dc_high, _)| *dc_high)
            .map(|(_, bytes)| bytes.len())
            .sum()
    }

    #[test]
    fn init_runs_power_up_sequence_in_order() {
        let (mut panel, log) = make_panel();
        panel.init(&mut NoDelay).unwrap();

        assert_eq!(
            commands(&log.borrow()),
            [
                protocol::SWRESET,
                protocol::SLPOUT,
                protocol::COLMOD,
                protocol::MADCTL,
                protocol::INVOFF,
                protocol::NORON,
                protocol::DISPON,
            ]
        );
        assert!(log.borrow().contains(&(true, vec![protocol::COLMOD_16BIT])));
    }

    #[test]
    fn madctl_exchange_swaps_reported_size() {
        let (mut panel, log) = make_panel();
        assert_eq!(panel.size(), (128, 160));

        let landscape = protocol::madctl_byte(true, false, true, true);
        panel.set_madctl(landscape).unwrap();

        assert_eq!(panel.madctl(), landscape);
        assert_eq!(panel.size(), (160, 128));
        assert_eq!(log.borrow().last(), Some(&(true, vec![landscape])));
    }

    #[test]
    fn window_outside_visible_area_is_rejected_without_traffic() {
        let (mut panel, log) = make_panel();

        assert_eq!(panel.set_address_window(125, 0, 6, 8), Err(Error::InvalidInput));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn fill_rect_streams_every_pixel_after_ramwr() {
        let (mut panel, log) = make_panel();
        panel.fill_rect(2, 3, 10, 9, 0xF800).unwrap();

        let log = log.borrow();
        assert_eq!(
            commands(&log),
            [protocol::CASET, protocol::RASET, protocol::RAMWR]
        );
        assert_eq!(log[1], (true, vec![0, 2, 0, 11]));
        assert_eq!(log[3], (true, vec![0, 3, 0, 11]));
        assert_eq!(data_len(&log[5..]), 10 * 9 * protocol::BYTES_PER_PIXEL);
        assert_eq!(&log[5].1[..2], &[0xF8, 0x00]);
    }

    #[test]
    fn fill_covers_the_rotated_visible_area() {
        let (mut panel, log) = make_panel();
        panel.set_madctl(protocol::MADCTL_MV).unwrap();
        log.borrow_mut().clear();

        panel.fill(0x0000).unwrap();

        let log = log.borrow();
        assert_eq!(log[1], (true, vec![0, 0, 0, 159]));
        assert_eq!(log[3], (true, vec![0, 0, 0, 127]));
        assert_eq!(data_len(&log[5..]), 160 * 128 * 2);
    }
}
