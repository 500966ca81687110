//! # Pixel Buffer
//!
//! The pixel buffer DMA controller scans a framebuffer in memory out to VGA.
//! Its first register holds the buffer address; pixels are addressed as
//!
//! ```text
//! base + (row << row_shift) + (col << 1)
//! ```
//!
//! where `row_shift` is 10 for the standard 320×240×16bpp layout and drops by
//! one for each of half resolution and 8-bit color. Every pixel write is a
//! 16-bit store, even at 8-bit depth.
//!
//! ## Drawing
//!
//! ```ignore
//! let mut pixels = board.pixel_buffer(config);
//! let green = config.resample(Rgb::GREEN);
//!
//! // Logical 320x240 coordinates, inclusive on both ends
//! pixels.fill_rect(Rect::new(100, 0, 129, 79), green);
//! ```
//!
//! The rasterizer does **no clipping**. Rectangles must be inside the logical
//! screen with `x1 <= x2` and `y1 <= y2`; anything else writes wherever the
//! address math lands.

use volatile_register::{RO, RW};

use crate::display::{DisplayConfig, STANDARD_X, STANDARD_Y};

/// Pixel buffer DMA controller at `$FF20_3020`.
#[repr(C)]
pub struct PixelBufferControl {
    /// Address of the buffer being scanned out.
    pub buffer: RW<u32>,
    /// Address swapped in on the next write to `buffer`.
    pub back_buffer: RW<u32>,
    /// Width in bits 0-15, height in bits 16-31.
    pub resolution: RO<u32>,
    pub status: RO<u32>,
}

impl PixelBufferControl {
    /// # Safety
    ///
    /// Aliases the fixed MMIO address; only one owner should exist.
    pub unsafe fn new() -> &'static mut PixelBufferControl {
        unsafe { &mut *(crate::address_map::PIXEL_BUF_CTRL_BASE as *mut PixelBufferControl) }
    }
}

/// Rectangle in logical 320×240 coordinates, bounds inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}

impl Rect {
    /// The whole logical screen.
    pub const SCREEN: Rect = Rect::new(0, 0, STANDARD_X - 1, STANDARD_Y - 1);

    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Byte offsets of every physical pixel a logical rectangle covers, row-major.
#[derive(Debug, Clone)]
pub struct PixelOffsets {
    col_start: usize,
    col_end: usize,
    row_end: usize,
    row: usize,
    col: usize,
    row_shift: u8,
}

impl PixelOffsets {
    pub(crate) fn new(config: &DisplayConfig, rect: Rect) -> Self {
        let x_shift = config.x_shift();
        let y_shift = config.y_shift();

        let col_start = (rect.x1 >> x_shift) as usize;
        let col_end = (rect.x2 >> x_shift) as usize;
        let row_start = (rect.y1 >> y_shift) as usize;
        let row_end = (rect.y2 >> y_shift) as usize;

        Self {
            col_start,
            col_end,
            row_end,
            // an inverted rectangle starts past the end and yields nothing
            row: if col_start > col_end { row_end + 1 } else { row_start },
            col: col_start,
            row_shift: config.row_shift(),
        }
    }
}

impl Iterator for PixelOffsets {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        if self.row > self.row_end {
            return None;
        }

        let offset = (self.row << self.row_shift) + (self.col << 1);

        self.col += 1;
        if self.col > self.col_end {
            self.col = self.col_start;
            self.row += 1;
        }

        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.row > self.row_end {
            return (0, Some(0));
        }
        let width = self.col_end - self.col_start + 1;
        let remaining = (self.row_end - self.row + 1) * width - (self.col - self.col_start);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PixelOffsets {}

/// Write access to the framebuffer the controller is scanning out.
pub struct PixelBuffer {
    base: *mut u8,
    config: DisplayConfig,
}

impl PixelBuffer {
    /// # Safety
    ///
    /// `base` must point to a framebuffer laid out for `config` that stays
    /// valid for the lifetime of the `PixelBuffer`, and must be 2-byte aligned.
    pub unsafe fn from_raw(base: *mut u8, config: DisplayConfig) -> Self {
        Self { base, config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Fill a rectangle given in logical coordinates with a resampled color.
    ///
    /// Both corners are inclusive. No clipping is done.
    #[inline]
    pub fn fill_rect(&mut self, rect: Rect, color: u16) {
        for offset in self.config.pixel_offsets(rect) {
            unsafe { (self.base.add(offset) as *mut u16).write_volatile(color) };
        }
    }

    /// Fill the whole logical screen.
    pub fn clear(&mut self, color: u16) {
        self.fill_rect(Rect::SCREEN, color);
    }
}
