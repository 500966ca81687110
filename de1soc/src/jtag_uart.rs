//! # JTAG UART Logging
//!
//! The JTAG UART at `$FF20_1000` shows up on the host through
//! `nios2-terminal`. [`init`] installs a [`log`] backend on it, so the rest of
//! the program just uses `info!`, `warn!` and friends.
//!
//! ```ignore
//! de1soc::jtag_uart::init(log::LevelFilter::Info).ok();
//! log::info!("hello from the HPS");
//! ```
//!
//! Output is never allowed to stall the program: when no host is attached the
//! 64-byte write FIFO fills up and further bytes are dropped.

use core::fmt::{self, Write};

use bit_field::BitField;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use volatile_register::RW;

/// JTAG UART registers.
#[repr(C)]
pub struct JtagUart {
    /// Bits 0-7 carry the character on write.
    pub data: RW<u32>,
    /// Bits 16-31 hold the free space in the write FIFO.
    pub control: RW<u32>,
}

impl JtagUart {
    /// # Safety
    ///
    /// Aliases the fixed MMIO address.
    pub unsafe fn new() -> &'static mut JtagUart {
        unsafe { &mut *(crate::address_map::JTAG_UART_BASE as *mut JtagUart) }
    }

    #[inline(always)]
    pub fn write_space(&self) -> u16 {
        self.control.read().get_bits(16..32) as u16
    }

    /// Queue one byte, dropping it if the FIFO is full.
    #[inline]
    pub fn put_byte(&mut self, byte: u8) {
        if self.write_space() > 0 {
            unsafe { self.data.write(byte as u32) };
        }
    }
}

impl Write for JtagUart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.put_byte(byte);
        }
        Ok(())
    }
}

/// `log` backend writing to the JTAG UART.
pub struct JtagUartLogger;

static LOGGER: JtagUartLogger = JtagUartLogger;

/// Install the JTAG UART logger with the given maximum level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// One line per record: level, target, message.
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> fmt::Result {
    writeln!(out, "{:5} {} - {}", record.level(), record.target(), record.args())
}

impl log::Log for JtagUartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let uart = unsafe { JtagUart::new() };
            let _ = write_record(uart, record);
        }
    }

    fn flush(&self) {}
}
