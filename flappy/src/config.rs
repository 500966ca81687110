//! Game tuning. All distances are in logical 320×240 pixels, all times in
//! frames.

pub const BIRD_SIZE: i32 = 10;
pub const BIRD_X: i32 = 80;
pub const GRAVITY: i32 = -1;
pub const JUMP_STRENGTH: i32 = 8;

pub const PIPE_WIDTH: i32 = 30;
pub const PIPE_GAP: i32 = 80;
pub const PIPE_SPEED: i32 = 2;
pub const START_GAP_Y: i32 = 80;
/// A respawned pipe's gap starts somewhere in `GAP_MIN..GAP_MIN + GAP_RANGE`.
pub const GAP_MIN: i32 = 60;
pub const GAP_RANGE: i32 = 80;

pub const FRAME_RATE: u32 = 30;
/// Extra frames held after a jump so one press isn't read twice.
pub const JUMP_DEBOUNCE_FRAMES: u32 = 2;
/// Extra frames held after a restart.
pub const RESTART_DEBOUNCE_FRAMES: u32 = 7;

// Character cell positions (column, row)
pub const SCORE_LABEL: (u8, u8) = (1, 1);
pub const SCORE_VALUE: (u8, u8) = (7, 1);
/// Cells reserved for the score digits.
pub const SCORE_DIGITS: usize = 10;
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const GAME_OVER_POS: (u8, u8) = (35, 29);
pub const RESTART_TEXT: &str = "Press KEY1 restart";
pub const RESTART_POS: (u8, u8) = (32, 30);
