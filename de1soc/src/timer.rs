//! # Frame Pacing
//!
//! The Cortex-A9 private timer is a 32-bit down-counter clocked at
//! [`PRIV_TIMER_HZ`]. [`FrameClock`] runs it in auto-reload mode with a period
//! of one frame and spins on the timeout flag, so pacing no longer depends on
//! how fast a counting loop happens to run.
//!
//! ```ignore
//! let mut clock = FrameClock::start(board.timer, 30);
//! loop {
//!     update();
//!     draw();
//!     clock.wait_for_frame();
//! }
//! ```
//!
//! ## Control Register
//!
//! | Bit | Flag          | Effect                               |
//! |-----|---------------|--------------------------------------|
//! | 0   | `ENABLE`      | Counter runs                         |
//! | 1   | `AUTO_RELOAD` | Reload from `load` on reaching zero  |
//! | 2   | `IRQ_ENABLE`  | Raise the timer interrupt (unused)   |

use bit_field::BitField;
use volatile_register::RW;

use crate::address_map::PRIV_TIMER_HZ;

bitflags::bitflags! {
    /// Private timer control register flags.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct TimerControl: u32 {
        const ENABLE      = 0b001;
        const AUTO_RELOAD = 0b010;
        const IRQ_ENABLE  = 0b100;
    }
}

/// Cortex-A9 private timer at `$FFFE_C600`.
#[repr(C)]
pub struct PrivateTimer {
    pub load: RW<u32>,
    pub counter: RW<u32>,
    pub control: RW<u32>,
    /// Bit 0 is set when the counter reaches zero; write 1 to clear it.
    pub interrupt_status: RW<u32>,
}

impl PrivateTimer {
    /// # Safety
    ///
    /// Aliases the fixed MMIO address; only one owner should exist.
    pub unsafe fn new() -> &'static mut PrivateTimer {
        unsafe { &mut *(crate::address_map::MPCORE_PRIV_TIMER as *mut PrivateTimer) }
    }
}

/// Timer ticks in one frame at `frame_rate` Hz.
pub const fn frame_period(frame_rate: u32) -> u32 {
    let rate = if frame_rate == 0 { 1 } else { frame_rate };
    PRIV_TIMER_HZ / rate
}

/// Fixed-rate frame clock on top of the private timer.
pub struct FrameClock<'a> {
    timer: &'a mut PrivateTimer,
    frames: u32,
}

impl<'a> FrameClock<'a> {
    /// Program the timer for `frame_rate` Hz and start it.
    pub fn start(timer: &'a mut PrivateTimer, frame_rate: u32) -> Self {
        unsafe {
            timer.control.write(0);
            timer.load.write(frame_period(frame_rate));
            timer.interrupt_status.write(1);
            timer
                .control
                .write((TimerControl::ENABLE | TimerControl::AUTO_RELOAD).bits());
        }
        Self { timer, frames: 0 }
    }

    /// Block until the current frame period runs out.
    #[inline]
    pub fn wait_for_frame(&mut self) {
        while !self.timer.interrupt_status.read().get_bit(0) {
            core::hint::spin_loop();
        }
        unsafe { self.timer.interrupt_status.write(1) };
        self.frames = self.frames.wrapping_add(1);
    }

    pub fn wait_frames(&mut self, n: u32) {
        for _ in 0..n {
            self.wait_for_frame();
        }
    }

    /// Frames waited out since `start`.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Live value of the down-counter.
    pub fn counter(&self) -> u32 {
        self.timer.counter.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_matches_rate() {
        assert_eq!(frame_period(30), 6_666_666);
        assert_eq!(frame_period(60), 3_333_333);
        assert_eq!(frame_period(0), PRIV_TIMER_HZ);
    }

    #[test]
    fn start_programs_auto_reload() {
        let mut words = [0u32; 4];
        {
            let timer: &mut PrivateTimer = crate::regs(&mut words);
            let clock = FrameClock::start(timer, 30);
            assert_eq!(clock.frames(), 0);
        }
        assert_eq!(words[0], 6_666_666);
        assert_eq!(words[2], 0b011);
        assert_eq!(words[3], 1);
    }

    #[test]
    fn wait_acknowledges_and_counts() {
        let mut words = [0u32; 4];
        let timer: &mut PrivateTimer = crate::regs(&mut words);
        let mut clock = FrameClock::start(timer, 30);

        // host memory keeps the flag set, so every wait returns at once
        clock.wait_for_frame();
        clock.wait_frames(6);
        assert_eq!(clock.frames(), 7);
    }

    #[test]
    fn counter_reads_live_value() {
        let mut words = [0u32, 1234, 0, 0];
        let timer: &mut PrivateTimer = crate::regs(&mut words);
        let clock = FrameClock { timer, frames: 0 };
        assert_eq!(clock.counter(), 1234);
    }
}
