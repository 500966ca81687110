//! # Pushbuttons
//!
//! KEY0-KEY3 are read through one data register at `$FF20_0050`. The read is
//! a plain snapshot: no debouncing and no edge detection. What a set bit
//! means is up to the caller, since board revisions and game code disagree on
//! polarity.

use bit_field::BitField;
use volatile_register::RO;

#[derive(Debug, Copy, Clone)]
pub enum Key {
    Key0,
    Key1,
    Key2,
    Key3,
}

impl Key {
    const fn idx(&self) -> usize {
        match self {
            Key::Key0 => 0,
            Key::Key1 => 1,
            Key::Key2 => 2,
            Key::Key3 => 3,
        }
    }
}

/// KEY parallel port. Only the data register is used; the interrupt mask and
/// edge capture registers that follow it are left alone.
#[repr(C)]
pub struct Keys {
    pub data: RO<u32>,
}

impl Keys {
    /// # Safety
    ///
    /// Aliases the fixed MMIO address; only one owner should exist.
    pub unsafe fn new() -> &'static mut Keys {
        unsafe { &mut *(crate::address_map::KEY_BASE as *mut Keys) }
    }

    /// Raw key bitmask, bit n = KEYn.
    #[inline(always)]
    pub fn read_keys(&self) -> u32 {
        self.data.read()
    }

    #[inline(always)]
    pub fn state(&self) -> KeyState {
        KeyState(self.read_keys())
    }
}

/// One snapshot of the key register.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct KeyState(pub u32);

impl KeyState {
    /// Whether the key's bit reads as 1.
    #[inline]
    pub fn is_set(&self, key: Key) -> bool {
        self.0.get_bit(key.idx())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_keys_is_a_plain_snapshot() {
        let mut words = [0b1010u32];
        let keys: &mut Keys = crate::regs(&mut words);
        assert_eq!(keys.read_keys(), 0b1010);

        let state = keys.state();
        assert!(!state.is_set(Key::Key0));
        assert!(state.is_set(Key::Key1));
        assert!(!state.is_set(Key::Key2));
        assert!(state.is_set(Key::Key3));
    }

    #[test]
    fn upper_bits_do_not_leak_into_keys() {
        let state = KeyState(0xFFFF_FFF0);
        assert!(!state.is_set(Key::Key0));
        assert!(!state.is_set(Key::Key3));
    }
}
