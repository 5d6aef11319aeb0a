//! 5x7 column-major bitmap font for printable ASCII.
//!
//! Each glyph is five column bytes; bit 0 is the top row.

pub const GLYPH_COLUMNS: usize = 5;
pub const GLYPH_ROWS: usize = 8;

/// Byte drawn in place of anything outside printable ASCII.
pub const REPLACEMENT: u8 = b'?';

pub fn normalize_glyph_byte(byte: u8) -> u8 {
    if (0x20..=0x7E).contains(&byte) {
        byte
    } else {
        REPLACEMENT
    }
}

pub fn glyph_5x7(byte: u8) -> [u8; GLYPH_COLUMNS] {
    match normalize_glyph_byte(byte) {
        b'A' => [0x7E, 0x11, 0x11, 0x11, 0x7E],
        b'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
        b'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
        b'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
        b'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
        b'F' => [0x7F, 0x09, 0x09, 0x09, 0x01],
        b'G' => [0x3E, 0x41, 0x49, 0x49, 0x7A],
        b'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
        b'I' => [0x00, 0x41, 0x7F, 0x41, 0x00],
        b'J' => [0x20, 0x40, 0x41, 0x3F, 0x01],
        b'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
        b'L' => [0x7F, 0x40, 0x40, 0x40, 0x40],
        b'M' => [0x7F, 0x02, 0x0C, 0x02, 0x7F],
        b'N' => [0x7F, 0x04, 0x08, 0x10, 0x7F],
        b'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
        b'P' => [0x7F, 0x09, 0x09, 0x09, 0x06],
        b'Q' => [0x3E, 0x41, 0x51, 0x21, 0x5E],
        b'R' => [0x7F, 0x09, 0x19, 0x29, 0x46],
        b'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
        b'T' => [0x01, 0x01, 0x7F, 0x01, 0x01],
        b'U' => [0x3F, 0x40, 0x40, 0x40, 0x3F],
        b'V' => [0x1F, 0x20, 0x40, 0x20, 0x1F],
        b'W' => [0x7F, 0x20, 0x18, 0x20, 0x7F],
        b'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        b'Y' => [0x03, 0x04, 0x78, 0x04, 0x03],
        b'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
        b'a' => [0x20, 0x54, 0x54, 0x54, 0x78],
        b'b' => [0x7F, 0x48, 0x44, 0x44, 0x38],
        b'c' => [0x38, 0x44, 0x44, 0x44, 0x20],
        b'd' => [0x38, 0x44, 0x44, 0x48, 0x7F],
        b'e' => [0x38, 0x54, 0x54, 0x54, 0x18],
        b'f' => [0x08, 0x7E, 0x09, 0x01, 0x02],
        b'g' => [0x08, 0x14, 0x54, 0x54, 0x3C],
        b'h' => [0x7F, 0x08, 0x04, 0x04, 0x78],
        b'i' => [0x00, 0x44, 0x7D, 0x40, 0x00],
        b'j' => [0x20, 0x40, 0x44, 0x3D, 0x00],
        b'k' => [0x7F, 0x10, 0x28, 0x44, 0x00],
        b'l' => [0x00, 0x41, 0x7F, 0x40, 0x00],
        b'm' => [0x7C, 0x04, 0x18, 0x04, 0x78],
        b'n' => [0x7C, 0x08, 0x04, 0x04, 0x78],
        b'o' => [0x38, 0x44, 0x44, 0x44, 0x38],
        b'p' => [0x7C, 0x14, 0x14, 0x14, 0x08],
        b'q' => [0x08, 0x14, 0x14, 0x18, 0x7C],
        b'r' => [0x7C, 0x08, 0x04, 0x04, 0x08],
        b's' => [0x48, 0x54, 0x54, 0x54, 0x20],
        b't' => [0x04, 0x3F, 0x44, 0x40, 0x20],
        b'u' => [0x3C, 0x40, 0x40, 0x20, 0x7C],
        b'v' => [0x1C, 0x20, 0x40, 0x20, 0x1C],
        b'w' => [0x3C, 0x40, 0x30, 0x40, 0x3C],
        b'x' => [0x44, 0x28, 0x10, 0x28, 0x44],
        b'y' => [0x0C, 0x50, 0x50, 0x50, 0x3C],
        b'z' => [0x44, 0x64, 0x54, 0x4C, 0x44],
        b'0' => [0x3E, 0x51, 0x49, 0x45, 0x3E],
        b'1' => [0x00, 0x42, 0x7F, 0x40, 0x00],
        b'2' => [0x42, 0x61, 0x51, 0x49, 0x46],
        b'3' => [0x21, 0x41, 0x45, 0x4B, 0x31],
        b'4' => [0x18, 0x14, 0x12, 0x7F, 0x10],
        b'5' => [0x27, 0x45, 0x45, 0x45, 0x39],
        b'6' => [0x3C, 0x4A, 0x49, 0x49, 0x30],
        b'7' => [0x01, 0x71, 0x09, 0x05, 0x03],
        b'8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        b'9' => [0x06, 0x49, 0x49, 0x29, 0x1E],
        b'.' => [0x00, 0x60, 0x60, 0x00, 0x00],
        b',' => [0x00, 0x80, 0x60, 0x00, 0x00],
        b';' => [0x00, 0x80, 0x66, 0x00, 0x00],
        b':' => [0x00, 0x36, 0x36, 0x00, 0x00],
        b'!' => [0x00, 0x00, 0x5F, 0x00, 0x00],
        b'?' => [0x02, 0x01, 0x51, 0x09, 0x06],
        b'"' => [0x00, 0x07, 0x00, 0x07, 0x00],
        b'\'' => [0x00, 0x05, 0x03, 0x00, 0x00],
        b'`' => [0x00, 0x01, 0x02, 0x04, 0x00],
        b'#' => [0x14, 0x7F, 0x14, 0x7F, 0x14],
        b'$' => [0x24, 0x2A, 0x7F, 0x2A, 0x12],
        b'%' => [0x23, 0x13, 0x08, 0x64, 0x62],
        b'&' => [0x36, 0x49, 0x55, 0x22, 0x50],
        b'@' => [0x32, 0x49, 0x79, 0x41, 0x3E],
        b'(' => [0x00, 0x1C, 0x22, 0x41, 0x00],
        b')' => [0x00, 0x41, 0x22, 0x1C, 0x00],
        b'[' => [0x00, 0x7F, 0x41, 0x41, 0x00],
        b']' => [0x00, 0x41, 0x41, 0x7F, 0x00],
        b'{' => [0x00, 0x08, 0x36, 0x41, 0x00],
        b'}' => [0x00, 0x41, 0x36, 0x08, 0x00],
        b'<' => [0x08, 0x14, 0x22, 0x41, 0x00],
        b'>' => [0x00, 0x41, 0x22, 0x14, 0x08],
        b'/' => [0x20, 0x10, 0x08, 0x04, 0x02],
        b'\\' => [0x02, 0x04, 0x08, 0x10, 0x20],
        b'|' => [0x00, 0x00, 0x7F, 0x00, 0x00],
        b'-' => [0x08, 0x08, 0x08, 0x08, 0x08],
        b'_' => [0x40, 0x40, 0x40, 0x40, 0x40],
        b'+' => [0x08, 0x08, 0x3E, 0x08, 0x08],
        b'=' => [0x14, 0x14, 0x14, 0x14, 0x14],
        b'*' => [0x08, 0x2A, 0x1C, 0x2A, 0x08],
        b'^' => [0x04, 0x02, 0x01, 0x02, 0x04],
        b'~' => [0x10, 0x08, 0x08, 0x10, 0x08],
        _ => [0x00, 0x00, 0x00, 0x00, 0x00],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_and_high_bytes_draw_as_replacement() {
        assert_eq!(normalize_glyph_byte(b'\t'), b'?');
        assert_eq!(normalize_glyph_byte(0xC3), b'?');
        assert_eq!(glyph_5x7(0x7F), glyph_5x7(b'?'));
    }

    #[test]
    fn space_is_blank_and_letters_are_not() {
        assert_eq!(glyph_5x7(b' '), [0; GLYPH_COLUMNS]);
        for byte in (b'A'..=b'Z').chain(b'a'..=b'z').chain(b'0'..=b'9') {
            assert_ne!(glyph_5x7(byte), [0; GLYPH_COLUMNS], "{}", byte as char);
        }
    }
}
