pub mod font;

use self::font::{GLYPH_COLUMNS, GLYPH_ROWS};

/// Horizontal advance of one cell at scale 1: five glyph columns plus a gap.
pub const CELL_WIDTH: u16 = 6;
/// Vertical advance of one line at scale 1: seven glyph rows plus a gap.
pub const CELL_HEIGHT: u16 = GLYPH_ROWS as u16;
/// Largest magnification the row buffer can hold.
pub const MAX_GLYPH_SCALE: u8 = 21;
/// Bytes in one scaled RGB565 cell row at `MAX_GLYPH_SCALE`.
pub const ROW_BUFFER_BYTES: usize = CELL_WIDTH as usize * MAX_GLYPH_SCALE as usize * 2;

/// Writes one horizontal pixel row of a cell, each glyph column repeated
/// `scale` times. Returns the number of bytes written.
pub fn rasterize_cell_row(
    glyph: &[u8; GLYPH_COLUMNS],
    row: usize,
    scale: usize,
    foreground: [u8; 2],
    background: [u8; 2],
    out: &mut [u8],
) -> usize {
    let mut len = 0usize;

    for col in 0..CELL_WIDTH as usize {
        let lit = col < GLYPH_COLUMNS && row < GLYPH_ROWS && (glyph[col] & (1u8 << row)) != 0;
        let pixel = if lit { foreground } else { background };

        for _ in 0..scale {
            if len + pixel.len() > out.len() {
                return len;
            }
            out[len..len + pixel.len()].copy_from_slice(&pixel);
            len += pixel.len();
        }
    }

    len
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: [u8; 2] = [0xFF, 0xFF];
    const BG: [u8; 2] = [0x00, 0x00];

    #[test]
    fn row_has_gap_column_in_background() {
        let glyph = [0x01; GLYPH_COLUMNS];
        let mut out = [0u8; ROW_BUFFER_BYTES];

        let len = rasterize_cell_row(&glyph, 0, 1, FG, BG, &mut out);

        assert_eq!(len, 12);
        assert_eq!(&out[..10], &[0xFF; 10]);
        assert_eq!(&out[10..12], &BG);
    }

    #[test]
    fn scale_repeats_each_column() {
        let glyph = font::glyph_5x7(b'I');
        let mut out = [0u8; ROW_BUFFER_BYTES];

        // Top row of 'I' lights columns 1..=3.
        let len = rasterize_cell_row(&glyph, 0, 2, FG, BG, &mut out);

        assert_eq!(len, 24);
        assert_eq!(&out[..4], &[0x00; 4]);
        assert_eq!(&out[4..16], &[0xFF; 12]);
        assert_eq!(&out[16..24], &[0x00; 8]);
    }

    #[test]
    fn short_buffer_is_filled_without_overrun() {
        let glyph = [0x7F; GLYPH_COLUMNS];
        let mut out = [0u8; 7];

        assert_eq!(rasterize_cell_row(&glyph, 3, 1, FG, BG, &mut out), 6);
    }

    #[test]
    fn largest_scale_fits_row_buffer() {
        let glyph = [0x00; GLYPH_COLUMNS];
        let mut out = [0u8; ROW_BUFFER_BYTES];

        assert_eq!(
            rasterize_cell_row(&glyph, 7, MAX_GLYPH_SCALE as usize, FG, BG, &mut out),
            ROW_BUFFER_BYTES
        );
    }
}
