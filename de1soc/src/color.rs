//! # Colors
//!
//! Source colors are written as 24-bit `0xRRGGBB` constants ([`Rgb`]). The
//! pixel buffer wants whatever the RGB resampler is configured for, so each
//! color is converted once with [`resample_rgb`] and the result is reused for
//! every frame.
//!
//! | Depth | Packing                                     |
//! |-------|---------------------------------------------|
//! | 8     | `RRRGGGBB`, duplicated into both bytes      |
//! | 16    | RGB565                                      |
//! | other | unchanged                                   |

/// A 24-bit `0xRRGGBB` source color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const INTEL_BLUE: Rgb = Rgb(0x0071C5);
    pub const GREEN: Rgb = Rgb(0x00FF00);
    pub const YELLOW: Rgb = Rgb(0xFFFF00);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const RED: Rgb = Rgb(0xFF0000);
}

/// Convert a 24-bit color to the encoding used at `num_bits` of depth.
///
/// At 8 bits the pixel buffer still takes 16-bit writes, so the packed byte
/// is placed in both halves.
pub const fn resample_rgb(num_bits: u8, color: u32) -> u32 {
    match num_bits {
        8 => {
            let packed = ((color >> 16) & 0x0000_00E0)
                | ((color >> 11) & 0x0000_001C)
                | ((color >> 6) & 0x0000_0003);
            (packed << 8) | packed
        }
        16 => ((color >> 8) & 0x0000_F800) | ((color >> 5) & 0x0000_07E0) | ((color >> 3) & 0x0000_001F),
        _ => color,
    }
}
