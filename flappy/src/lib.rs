//! # Flappy
//!
//! A one-pipe Flappy Bird for the DE1-SoC. KEY0 flaps, KEY1 restarts after a
//! crash. The game only knows the logical 320×240 screen; [`de1soc`] takes
//! care of the physical resolution and color depth.
//!
//! ## Frame
//!
//! ```ignore
//! let mut game = Game::new(Palette::new(&config), seed);
//! loop {
//!     let hold = game.frame(board.keys.state(), &mut video);
//!     clock.wait_for_frame();
//!     clock.wait_frames(hold);
//! }
//! ```
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod game;
pub mod render;
pub mod state;
