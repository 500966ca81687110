//! # Character Buffer
//!
//! The character overlay draws 8×8 ASCII glyphs on top of the pixel buffer.
//! Only 80×60 cells are visible, but each row is 128 bytes wide in memory:
//!
//! ```text
//! offset = (row << 7) + col
//! ```
//!
//! The buffer is write-only from the CPU's point of view. There is no
//! wrapping and no bounds check; text that runs past column 79 lands in the
//! invisible tail of the row, and past that into the next row.
//!
//! ```ignore
//! let mut text = board.char_buffer();
//! text.write_text(1, 1, "Score:");
//! text.clear_text_area(1, 1, 6);
//! ```

pub const VISIBLE_COLS: u8 = 80;
pub const VISIBLE_ROWS: u8 = 60;
pub const ROW_SHIFT: u8 = 7;

/// Write access to the character overlay.
pub struct CharBuffer {
    base: *mut u8,
}

impl CharBuffer {
    /// # Safety
    ///
    /// `base` must point to a character buffer with a 128-byte row pitch that
    /// stays valid for the lifetime of the `CharBuffer`.
    pub unsafe fn from_raw(base: *mut u8) -> Self {
        Self { base }
    }

    #[inline(always)]
    fn offset(col: u8, row: u8) -> usize {
        ((row as usize) << ROW_SHIFT) + col as usize
    }

    #[inline(always)]
    fn put(&mut self, offset: usize, byte: u8) {
        unsafe { self.base.add(offset).write_volatile(byte) };
    }

    /// Write `text` starting at (`col`, `row`), one byte per cell.
    ///
    /// Stops at the end of the string or at the first NUL byte.
    pub fn write_text(&mut self, col: u8, row: u8, text: &str) {
        let start = Self::offset(col, row);
        for (i, byte) in text.bytes().take_while(|&b| b != 0).enumerate() {
            self.put(start + i, byte);
        }
    }

    /// Blank `width` cells starting at (`col`, `row`).
    pub fn clear_text_area(&mut self, col: u8, row: u8, width: usize) {
        let start = Self::offset(col, row);
        for i in 0..width {
            self.put(start + i, b' ');
        }
    }

    /// Blank every visible cell.
    pub fn clear_screen(&mut self) {
        for row in 0..VISIBLE_ROWS {
            self.clear_text_area(0, row, VISIBLE_COLS as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells() -> Vec<u8> {
        vec![0; 128 * 64]
    }

    fn text(buf: &mut [u8]) -> CharBuffer {
        unsafe { CharBuffer::from_raw(buf.as_mut_ptr()) }
    }

    #[test]
    fn write_lands_at_row_pitch_offset() {
        let mut buf = cells();
        text(&mut buf).write_text(1, 1, "Score:");
        assert_eq!(&buf[129..135], b"Score:");
        assert_eq!(buf[128], 0);
        assert_eq!(buf[135], 0);
    }

    #[test]
    fn write_then_clear_leaves_spaces() {
        let mut buf = cells();
        let mut t = text(&mut buf);
        t.write_text(1, 1, "Score:");
        t.clear_text_area(1, 1, 6);
        assert_eq!(&buf[129..135], b"      ");
        assert_eq!(buf[135], 0);
    }

    #[test]
    fn nul_terminates_text() {
        let mut buf = cells();
        text(&mut buf).write_text(0, 0, "AB\0CD");
        assert_eq!(&buf[0..4], b"AB\0\0");
    }

    #[test]
    fn no_wrap_past_visible_columns() {
        let mut buf = cells();
        text(&mut buf).write_text(78, 2, "WXYZ");
        let start = (2 << 7) + 78;
        assert_eq!(&buf[start..start + 4], b"WXYZ");
        assert_eq!(buf[3 << 7], 0);
    }

    #[test]
    fn game_over_banner_positions() {
        let mut buf = cells();
        let mut t = text(&mut buf);
        t.write_text(35, 29, "GAME OVER");
        t.write_text(32, 30, "Press KEY1 restart");
        t.clear_text_area(35, 29, 9);
        t.clear_text_area(32, 30, 18);

        let over = (29 << 7) + 35;
        let press = (30 << 7) + 32;
        assert!(buf[over..over + 9].iter().all(|&b| b == b' '));
        assert!(buf[press..press + 18].iter().all(|&b| b == b' '));
    }

    #[test]
    fn clear_screen_blanks_visible_cells_only() {
        let mut buf = cells();
        text(&mut buf).clear_screen();
        for row in 0..60usize {
            assert!(buf[row * 128..row * 128 + 80].iter().all(|&b| b == b' '), "row {row}");
            assert!(buf[row * 128 + 80..(row + 1) * 128].iter().all(|&b| b == 0), "row {row}");
        }
        assert_eq!(buf[60 * 128], 0);
    }
}
