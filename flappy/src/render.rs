//! Scene drawing. Everything is redrawn every frame straight into the
//! scanned-out buffer; there is no back buffer.

use core::fmt::Write;

use de1soc::{
    char_buffer::CharBuffer,
    color::Rgb,
    display::{DisplayConfig, STANDARD_X, STANDARD_Y},
    pixel_buffer::{PixelBuffer, Rect},
};
use heapless::String;

use crate::{config::*, state::GameState};

/// Game colors, resampled once for the detected display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub sky: u16,
    pub pipe: u16,
    pub bird: u16,
    pub game_over: u16,
}

impl Palette {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            sky: config.resample(Rgb::INTEL_BLUE),
            pipe: config.resample(Rgb::GREEN),
            bird: config.resample(Rgb::YELLOW),
            game_over: config.resample(Rgb::RED),
        }
    }
}

/// The two video surfaces the game draws on.
pub struct Video {
    pub pixels: PixelBuffer,
    pub text: CharBuffer,
}

/// Clamp a signed rectangle to the logical screen. `None` if nothing is left.
pub fn clip(x1: i32, y1: i32, x2: i32, y2: i32) -> Option<Rect> {
    let x1 = x1.max(0);
    let y1 = y1.max(0);
    let x2 = x2.min(STANDARD_X as i32 - 1);
    let y2 = y2.min(STANDARD_Y as i32 - 1);
    if x1 > x2 || y1 > y2 {
        return None;
    }
    Some(Rect::new(x1 as u16, y1 as u16, x2 as u16, y2 as u16))
}

fn fill(pixels: &mut PixelBuffer, rect: Option<Rect>, color: u16) {
    if let Some(rect) = rect {
        pixels.fill_rect(rect, color);
    }
}

/// Decimal digits of `n`.
pub fn format_score(n: u32) -> String<SCORE_DIGITS> {
    let mut digits = String::new();
    // u32::MAX is ten digits, so this can't overflow the buffer
    let _ = write!(digits, "{n}");
    digits
}

pub fn draw_playing(state: &GameState, palette: &Palette, video: &mut Video) {
    let pixels = &mut video.pixels;
    pixels.clear(palette.sky);

    let pipe_x2 = state.pipe_x + PIPE_WIDTH - 1;
    if state.pipe_gap_y > 0 {
        fill(pixels, clip(state.pipe_x, 0, pipe_x2, state.pipe_gap_y - 1), palette.pipe);
    }
    let gap_bottom = state.pipe_gap_y + PIPE_GAP;
    if gap_bottom < STANDARD_Y as i32 {
        fill(pixels, clip(state.pipe_x, gap_bottom, pipe_x2, STANDARD_Y as i32 - 1), palette.pipe);
    }

    fill(
        pixels,
        clip(BIRD_X, state.bird_y, BIRD_X + BIRD_SIZE - 1, state.bird_y + BIRD_SIZE - 1),
        palette.bird,
    );

    let (col, row) = SCORE_LABEL;
    video.text.write_text(col, row, "Score:");
    let (col, row) = SCORE_VALUE;
    video.text.write_text(col, row, &format_score(state.score));
}

pub fn draw_game_over(palette: &Palette, video: &mut Video) {
    video.pixels.clear(palette.game_over);
    let (col, row) = GAME_OVER_POS;
    video.text.write_text(col, row, GAME_OVER_TEXT);
    let (col, row) = RESTART_POS;
    video.text.write_text(col, row, RESTART_TEXT);
}

/// Remove the game over banner and the previous score.
pub fn clear_banner(video: &mut Video) {
    let (col, row) = GAME_OVER_POS;
    video.text.clear_text_area(col, row, GAME_OVER_TEXT.len());
    let (col, row) = RESTART_POS;
    video.text.clear_text_area(col, row, RESTART_TEXT.len());
    let (col, row) = SCORE_VALUE;
    video.text.clear_text_area(col, row, SCORE_DIGITS);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const STANDARD_16: (u32, u32) = ((240 << 16) | 320, 0x14);

    /// Host-memory framebuffer and character buffer.
    pub(crate) struct HostVideo {
        pub fb: Vec<u16>,
        pub cells: Vec<u8>,
    }

    impl HostVideo {
        pub fn new() -> Self {
            Self { fb: vec![0; (240 << 10) / 2], cells: vec![0; 128 * 64] }
        }

        pub fn video(&mut self, config: DisplayConfig) -> Video {
            unsafe {
                Video {
                    pixels: PixelBuffer::from_raw(self.fb.as_mut_ptr() as *mut u8, config),
                    text: CharBuffer::from_raw(self.cells.as_mut_ptr()),
                }
            }
        }

        /// Pixel at logical (x, y) for the standard 320x240x16 layout.
        pub fn pixel(&self, x: usize, y: usize) -> u16 {
            self.fb[y * 512 + x]
        }

        pub fn text(&self, col: usize, row: usize, len: usize) -> &[u8] {
            let start = row * 128 + col;
            &self.cells[start..start + len]
        }
    }

    fn config() -> DisplayConfig {
        DisplayConfig::from_status(STANDARD_16.0, STANDARD_16.1)
    }

    #[test]
    fn palette_resamples_each_color() {
        let palette = Palette::new(&config());
        assert_eq!(palette.game_over, 0xF800);
        assert_eq!(palette.pipe, 0x07E0);
        assert_eq!(palette.bird, 0xFFE0);
        assert_eq!(palette.sky, 0x0398);

        let shallow = Palette::new(&DisplayConfig::from_status(STANDARD_16.0, 0x07));
        assert_eq!(shallow.game_over, 0xE0E0);
    }

    #[test]
    fn clip_keeps_inside_rects() {
        assert_eq!(clip(10, 20, 30, 40), Some(Rect::new(10, 20, 30, 40)));
    }

    #[test]
    fn clip_trims_partially_visible_rects() {
        assert_eq!(clip(-12, 0, 17, 79), Some(Rect::new(0, 0, 17, 79)));
        assert_eq!(clip(300, 200, 329, 260), Some(Rect::new(300, 200, 319, 239)));
    }

    #[test]
    fn clip_drops_offscreen_rects() {
        assert_eq!(clip(-40, 0, -11, 79), None);
        assert_eq!(clip(320, 0, 349, 79), None);
        assert_eq!(clip(80, -20, 89, -11), None);
    }

    #[test]
    fn score_is_formatted_generically() {
        assert_eq!(format_score(0).as_str(), "0");
        assert_eq!(format_score(5).as_str(), "5");
        assert_eq!(format_score(42).as_str(), "42");
        assert_eq!(format_score(u32::MAX).as_str(), "4294967295");
    }

    #[test]
    fn playing_scene() {
        let mut host = HostVideo::new();
        let palette = Palette::new(&config());
        let state = GameState { pipe_x: 200, pipe_gap_y: 100, score: 3, ..GameState::new() };
        draw_playing(&state, &palette, &mut host.video(config()));

        assert_eq!(host.pixel(0, 0), palette.sky);
        // upper pipe 200..229 x 0..99, lower pipe from 180 down
        assert_eq!(host.pixel(200, 0), palette.pipe);
        assert_eq!(host.pixel(229, 99), palette.pipe);
        assert_eq!(host.pixel(215, 100), palette.sky);
        assert_eq!(host.pixel(215, 179), palette.sky);
        assert_eq!(host.pixel(215, 180), palette.pipe);
        assert_eq!(host.pixel(229, 239), palette.pipe);
        assert_eq!(host.pixel(230, 239), palette.sky);
        // bird 80..89 x 120..129
        assert_eq!(host.pixel(80, 120), palette.bird);
        assert_eq!(host.pixel(89, 129), palette.bird);
        assert_eq!(host.pixel(90, 129), palette.sky);

        assert_eq!(host.text(1, 1, 7), b"Score:3");
    }

    #[test]
    fn pipe_sliding_off_the_left_edge_is_clipped() {
        let mut host = HostVideo::new();
        let palette = Palette::new(&config());
        let state = GameState { pipe_x: -20, pipe_gap_y: 100, ..GameState::new() };
        draw_playing(&state, &palette, &mut host.video(config()));

        assert_eq!(host.pixel(0, 0), palette.pipe);
        assert_eq!(host.pixel(9, 0), palette.pipe);
        assert_eq!(host.pixel(10, 0), palette.sky);
        assert_eq!(host.pixel(9, 239), palette.pipe);
        assert_eq!(host.pixel(319, 239), palette.sky);
        // negative columns would have landed in the hidden tail of the row above
        assert_eq!(host.fb[99 * 512 + 511], 0);
        assert_eq!(host.fb[199 * 512 + 511], 0);
    }

    #[test]
    fn bird_above_the_screen_is_clipped() {
        let mut host = HostVideo::new();
        let palette = Palette::new(&config());
        let state = GameState { bird_y: -4, ..GameState::new() };
        draw_playing(&state, &palette, &mut host.video(config()));

        assert_eq!(host.pixel(85, 0), palette.bird);
        assert_eq!(host.pixel(85, 5), palette.bird);
        assert_eq!(host.pixel(85, 6), palette.sky);
    }

    #[test]
    fn game_over_then_banner_cleared() {
        let mut host = HostVideo::new();
        let palette = Palette::new(&config());
        let mut video = host.video(config());
        draw_playing(&GameState { score: 17, ..GameState::new() }, &palette, &mut video);
        draw_game_over(&palette, &mut video);
        drop(video);

        assert_eq!(host.pixel(160, 120), palette.game_over);
        assert_eq!(host.text(35, 29, 9), b"GAME OVER");
        assert_eq!(host.text(32, 30, 18), b"Press KEY1 restart");

        let mut video = host.video(config());
        clear_banner(&mut video);
        drop(video);
        assert!(host.text(35, 29, 9).iter().all(|&b| b == b' '));
        assert!(host.text(32, 30, 18).iter().all(|&b| b == b' '));
        assert_eq!(host.text(1, 1, 6), b"Score:");
        assert!(host.text(7, 1, SCORE_DIGITS).iter().all(|&b| b == b' '));
    }
}
