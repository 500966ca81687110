//! # DE1-SoC Address Map
//!
//! Physical addresses of the peripherals used by this crate, as seen from the
//! HPS ARM cores through the lightweight and heavyweight bridges.
//!
//! | Address       | Peripheral                         |
//! |---------------|------------------------------------|
//! | `$C800_0000`  | FPGA on-chip SRAM (pixel buffer)   |
//! | `$C900_0000`  | Character buffer                   |
//! | `$FF20_0050`  | KEY pushbuttons                    |
//! | `$FF20_1000`  | JTAG UART                          |
//! | `$FF20_3010`  | RGB resampler                      |
//! | `$FF20_3020`  | Pixel buffer DMA controller        |
//! | `$FFFE_C600`  | Cortex-A9 private timer            |

/// Default location of the pixel buffer in FPGA on-chip memory.
pub const FPGA_ONCHIP_BASE: usize = 0xC800_0000;
pub const FPGA_CHAR_BASE: usize = 0xC900_0000;

pub const KEY_BASE: usize = 0xFF20_0050;
pub const JTAG_UART_BASE: usize = 0xFF20_1000;
pub const RGB_RESAMPLER_BASE: usize = 0xFF20_3010;
pub const PIXEL_BUF_CTRL_BASE: usize = 0xFF20_3020;

pub const MPCORE_PRIV_TIMER: usize = 0xFFFE_C600;

/// Private timer input clock (PERIPHCLK, a quarter of the CPU clock).
pub const PRIV_TIMER_HZ: u32 = 200_000_000;
