//! # DE1-SoC HAL
//!
//! Video, input and timing for bare-metal programs on the DE1-SoC's ARM
//! cores. Everything here talks straight to the FPGA peripherals; there is
//! no OS, driver or buffering layer underneath.
//!
//! ## Quick Start
//!
//! ```ignore
//! use de1soc::{board::Board, color::Rgb, pixel_buffer::Rect};
//!
//! let mut board = unsafe { Board::init() };
//! let config = board.display_config();
//! let mut pixels = board.pixel_buffer(config);
//! let mut text = board.char_buffer();
//!
//! let blue = config.resample(Rgb::INTEL_BLUE);
//! pixels.fill_rect(Rect::new(0, 0, 319, 239), blue);
//! text.write_text(1, 1, "Hello");
//! ```
//!
//! ## Logical vs Physical Coordinates
//!
//! All drawing is written against a fixed **320×240** logical screen. The
//! pixel buffer controller may be configured for 160×120, and the RGB
//! resampler for 8-bit color; both are detected once at startup into a
//! [`DisplayConfig`](display::DisplayConfig) and every rectangle is rescaled
//! with shifts:
//!
//! | Physical mode  | x divisor | y divisor | row pitch |
//! |----------------|-----------|-----------|-----------|
//! | 320×240, 16bpp | 1         | 1         | 1024 B    |
//! | 320×240, 8bpp  | 2         | 1         | 512 B     |
//! | 160×120, 16bpp | 2         | 2         | 512 B     |
//! | 160×120, 8bpp  | 4         | 2         | 256 B     |
//!
//! ## Character Overlay
//!
//! The character buffer sits on top of the pixels: 80×60 visible cells with
//! a row pitch of 128 bytes. See [`char_buffer`].
//!
//! ## Hardware Overview
//!
//! | Feature        | Detail                                 |
//! |----------------|----------------------------------------|
//! | CPU            | Dual Cortex-A9 @ 800 MHz               |
//! | Pixel buffer   | 320×240, 16bpp (RGB565) by default     |
//! | Char buffer    | 80×60 cells, 8×8 font                  |
//! | Private timer  | 32-bit down-counter @ 200 MHz          |
//! | Keys           | KEY0-KEY3 pushbuttons                  |
#![cfg_attr(not(test), no_std)]

pub mod address_map;
pub mod board;
pub mod char_buffer;
pub mod color;
pub mod display;
pub mod input;
pub mod jtag_uart;
pub mod pixel_buffer;
pub mod timer;

/// Overlays a register block on a word array so tests can poke "hardware"
/// that lives in host memory.
#[cfg(test)]
pub(crate) fn regs<T>(words: &mut [u32]) -> &mut T {
    assert!(words.len() * 4 >= core::mem::size_of::<T>());
    unsafe { &mut *(words.as_mut_ptr() as *mut T) }
}
