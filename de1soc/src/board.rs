use crate::{
    address_map::FPGA_CHAR_BASE,
    char_buffer::CharBuffer,
    display::{DisplayConfig, RgbResampler},
    input::Keys,
    pixel_buffer::{PixelBuffer, PixelBufferControl},
    timer::PrivateTimer,
};

/// Every peripheral the game touches, handed out once at boot.
pub struct Board {
    pub pixel_ctrl: &'static mut PixelBufferControl,
    pub resampler: &'static mut RgbResampler,
    pub keys: &'static mut Keys,
    pub timer: &'static mut PrivateTimer,
}

impl Board {
    /// # Safety
    ///
    /// Must be called once, on the DE1-SoC, with the default FPGA system
    /// loaded.
    pub unsafe fn init() -> Board {
        unsafe {
            Self {
                pixel_ctrl: PixelBufferControl::new(),
                resampler: RgbResampler::new(),
                keys: Keys::new(),
                timer: PrivateTimer::new(),
            }
        }
    }

    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig::detect(self.pixel_ctrl, self.resampler)
    }

    /// The framebuffer currently being scanned out.
    pub fn pixel_buffer(&self, config: DisplayConfig) -> PixelBuffer {
        let base = self.pixel_ctrl.buffer.read() as usize as *mut u8;
        unsafe { PixelBuffer::from_raw(base, config) }
    }

    pub fn char_buffer(&self) -> CharBuffer {
        unsafe { CharBuffer::from_raw(FPGA_CHAR_BASE as *mut u8) }
    }
}
