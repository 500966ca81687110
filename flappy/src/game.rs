use de1soc::input::KeyState;
use log::{debug, info};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    config::{JUMP_DEBOUNCE_FRAMES, RESTART_DEBOUNCE_FRAMES},
    render::{Palette, Video, clear_banner, draw_game_over, draw_playing},
    state::{Controls, GameState},
};

/// State, colors and randomness for one power-on session.
pub struct Game {
    pub state: GameState,
    palette: Palette,
    rng: SmallRng,
}

impl Game {
    pub fn new(palette: Palette, seed: u64) -> Self {
        Self {
            state: GameState::new(),
            palette,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Run one frame: read controls, step, draw.
    ///
    /// Returns how many extra frames the caller should wait before polling
    /// the keys again.
    pub fn frame(&mut self, keys: KeyState, video: &mut Video) -> u32 {
        let controls = Controls::from_keys(keys);

        if self.state.active {
            let step = self.state.step(controls, &mut self.rng);
            if step.scored {
                debug!("pipe passed, score {}, next gap at {}", self.state.score, self.state.pipe_gap_y);
            }
            if step.crashed {
                info!("game over, score {}", self.state.score);
            }

            draw_playing(&self.state, &self.palette, video);
            return if step.jumped { JUMP_DEBOUNCE_FRAMES } else { 0 };
        }

        draw_game_over(&self.palette, video);
        if controls.restart {
            clear_banner(video);
            self.state.restart();
            info!("restart");
            return RESTART_DEBOUNCE_FRAMES;
        }
        0
    }
}
