//! # Display Mode Detection
//!
//! The pixel buffer controller and the RGB resampler are configured in the
//! FPGA design, not by software. [`DisplayConfig::detect`] reads both status
//! registers once at startup and derives the two shift flags that all
//! rasterization uses afterwards.
//!
//! ```ignore
//! let config = DisplayConfig::detect(board.pixel_ctrl, board.resampler);
//! log::info!("{}x{} @ {}bpp", config.physical_width(), config.physical_height(), config.color_bits());
//! ```

use bit_field::BitField;
use log::{info, warn};
use volatile_register::RO;

use crate::{
    color::{Rgb, resample_rgb},
    pixel_buffer::{PixelBufferControl, PixelOffsets, Rect},
};

/// Width the logical coordinate space is written against.
pub const STANDARD_X: u16 = 320;
/// Height the logical coordinate space is written against.
pub const STANDARD_Y: u16 = 240;

/// Depth assumed when the resampler reports a mode we don't know.
pub const DEFAULT_COLOR_BITS: u8 = 16;

/// RGB resampler status register at `$FF20_3010`.
///
/// Bits 0-5 hold the output mode code of the resampler IP.
#[repr(C)]
pub struct RgbResampler {
    pub status: RO<u32>,
}

impl RgbResampler {
    /// # Safety
    ///
    /// Aliases the fixed MMIO address; only one owner should exist.
    pub unsafe fn new() -> &'static mut RgbResampler {
        unsafe { &mut *(crate::address_map::RGB_RESAMPLER_BASE as *mut RgbResampler) }
    }

    #[inline(always)]
    pub fn mode(&self) -> u8 {
        self.status.read().get_bits(0..6) as u8
    }
}

/// Maps a resampler mode code to its number of color data bits.
pub const fn color_bits(mode: u8) -> Option<u8> {
    match mode {
        0x00 => Some(1),
        0x07 => Some(8),
        0x11 => Some(8),
        0x12 => Some(9),
        0x14 => Some(16),
        0x17 => Some(24),
        0x19 => Some(30),
        0x31 => Some(8),
        0x32 => Some(12),
        0x33 => Some(16),
        0x37 => Some(32),
        0x39 => Some(40),
        _ => None,
    }
}

/// Physical resolution and color depth, detected once and never changed.
///
/// The two flags are 0 or 1 and are used directly as shift amounts:
/// `resolution_scale` is set for a 160-wide buffer, `depth_scale` for 8-bit
/// color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    physical_width: u16,
    physical_height: u16,
    color_bits: u8,
    resolution_scale: u8,
    depth_scale: u8,
}

impl DisplayConfig {
    /// Read the hardware status registers and build the configuration.
    pub fn detect(pixel_ctrl: &PixelBufferControl, resampler: &RgbResampler) -> Self {
        let config = Self::from_status(pixel_ctrl.resolution.read(), resampler.status.read());
        info!(
            "display {}x{}, {} color bits, scale flags res={} depth={}",
            config.physical_width,
            config.physical_height,
            config.color_bits,
            config.resolution_scale,
            config.depth_scale
        );
        config
    }

    /// Build the configuration from raw register words.
    ///
    /// `resolution` packs the width in bits 0-15 and the height in bits 16-31;
    /// `status` carries the resampler mode code in bits 0-5.
    pub fn from_status(resolution: u32, status: u32) -> Self {
        let physical_width = resolution.get_bits(0..16) as u16;
        let physical_height = resolution.get_bits(16..32) as u16;

        let mode = status.get_bits(0..6) as u8;
        let color_bits = color_bits(mode).unwrap_or_else(|| {
            warn!("unknown resampler mode {:#04x}, assuming {} bits", mode, DEFAULT_COLOR_BITS);
            DEFAULT_COLOR_BITS
        });

        Self {
            physical_width,
            physical_height,
            color_bits,
            resolution_scale: (physical_width == STANDARD_X / 2) as u8,
            depth_scale: (color_bits == 8) as u8,
        }
    }

    #[inline(always)]
    pub fn physical_width(&self) -> u16 {
        self.physical_width
    }

    #[inline(always)]
    pub fn physical_height(&self) -> u16 {
        self.physical_height
    }

    #[inline(always)]
    pub fn color_bits(&self) -> u8 {
        self.color_bits
    }

    #[inline(always)]
    pub fn resolution_scale(&self) -> u8 {
        self.resolution_scale
    }

    #[inline(always)]
    pub fn depth_scale(&self) -> u8 {
        self.depth_scale
    }

    /// Shift applied to logical x coordinates.
    #[inline(always)]
    pub fn x_shift(&self) -> u8 {
        self.resolution_scale + self.depth_scale
    }

    /// Shift applied to logical y coordinates.
    #[inline(always)]
    pub fn y_shift(&self) -> u8 {
        self.resolution_scale
    }

    /// log2 of the row pitch in bytes.
    #[inline(always)]
    pub fn row_shift(&self) -> u8 {
        10 - self.resolution_scale - self.depth_scale
    }

    /// Convert a source color to what the pixel buffer expects in this mode.
    #[inline]
    pub fn resample(&self, color: Rgb) -> u16 {
        resample_rgb(self.color_bits, color.0) as u16
    }

    /// Byte offsets, relative to the buffer base, covered by `rect`.
    #[inline]
    pub fn pixel_offsets(&self, rect: Rect) -> PixelOffsets {
        PixelOffsets::new(self, rect)
    }
}
