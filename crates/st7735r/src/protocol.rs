//! Command-level protocol helpers for ST7735R panels.

/// Panel extent along its long axis in pixels.
pub const LONG_AXIS: u16 = 160;
/// Panel extent along its short axis in pixels.
pub const SHORT_AXIS: u16 = 128;
/// Bytes per pixel in 16-bit (RGB565) interface mode.
pub const BYTES_PER_PIXEL: usize = 2;

pub const SWRESET: u8 = 0x01;
pub const SLPOUT: u8 = 0x11;
pub const NORON: u8 = 0x13;
pub const INVOFF: u8 = 0x20;
pub const DISPON: u8 = 0x29;
pub const CASET: u8 = 0x2A;
pub const RASET: u8 = 0x2B;
pub const RAMWR: u8 = 0x2C;
pub const MADCTL: u8 = 0x36;
pub const COLMOD: u8 = 0x3A;

/// `COLMOD` parameter selecting 16 bits per pixel.
pub const COLMOD_16BIT: u8 = 0x05;

/// Row address order (vertical flip).
pub const MADCTL_MY: u8 = 0x80;
/// Column address order (horizontal flip).
pub const MADCTL_MX: u8 = 0x40;
/// Row/column exchange; set for landscape scanning.
pub const MADCTL_MV: u8 = 0x20;
/// Blue/red channel swap for BGR-wired panels.
pub const MADCTL_BGR: u8 = 0x08;

/// Builds a `MADCTL` parameter byte.
#[inline]
pub const fn madctl_byte(my: bool, mx: bool, mv: bool, bgr: bool) -> u8 {
    ((my as u8) << 7) | ((mx as u8) << 6) | ((mv as u8) << 5) | ((bgr as u8) << 3)
}

/// Returns `true` when a `MADCTL` byte swaps rows and columns.
#[inline]
pub const fn exchanges_axes(madctl: u8) -> bool {
    madctl & MADCTL_MV != 0
}

/// Visible `(width, height)` for a given `MADCTL` byte.
#[inline]
pub const fn visible_size(madctl: u8) -> (u16, u16) {
    if exchanges_axes(madctl) {
        (LONG_AXIS, SHORT_AXIS)
    } else {
        (SHORT_AXIS, LONG_AXIS)
    }
}

/// Builds the four parameter bytes of a `CASET`/`RASET` command.
///
/// `start` and `len` are in visible coordinates; `offset` is the panel's
/// RAM offset for that axis. Returns `None` for an empty span or one that
/// leaves the `extent` of the axis.
#[inline]
pub fn build_range_params(start: u16, len: u16, extent: u16, offset: u16) -> Option<[u8; 4]> {
    if len == 0 {
        return None;
    }

    let end = start.checked_add(len)?;
    if end > extent {
        return None;
    }

    let first = start.checked_add(offset)?;
    let last = (end - 1).checked_add(offset)?;
    let [first_hi, first_lo] = first.to_be_bytes();
    let [last_hi, last_lo] = last.to_be_bytes();

    Some([first_hi, first_lo, last_hi, last_lo])
}

/// Encodes one RGB565 pixel in wire order (high byte first).
#[inline]
pub const fn encode_rgb565(color: u16) -> [u8; BYTES_PER_PIXEL] {
    color.to_be_bytes()
}
