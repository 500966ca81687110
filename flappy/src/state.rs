use de1soc::{
    display::{STANDARD_X, STANDARD_Y},
    input::{Key, KeyState},
};
use rand::Rng;

use crate::config::*;

/// What the player asked for this frame.
///
/// KEY0 reads 0 while held and KEY1 reads 1 while held on the reference
/// board, so the two are decoded with opposite polarity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Controls {
    pub jump: bool,
    pub restart: bool,
}

impl Controls {
    pub fn from_keys(keys: KeyState) -> Self {
        Self {
            jump: !keys.is_set(Key::Key0),
            restart: keys.is_set(Key::Key1),
        }
    }
}

/// Events from one physics step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub jumped: bool,
    pub scored: bool,
    pub crashed: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Top edge of the bird, in logical rows.
    pub bird_y: i32,
    /// Added to `bird_y` each frame.
    pub bird_velocity: i32,
    /// Left edge of the pipe; negative while it slides off screen.
    pub pipe_x: i32,
    /// Top edge of the gap.
    pub pipe_gap_y: i32,
    pub score: u32,
    pub active: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            bird_y: STANDARD_Y as i32 / 2,
            bird_velocity: 0,
            pipe_x: STANDARD_X as i32,
            pipe_gap_y: START_GAP_Y,
            score: 0,
            active: true,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Advance one frame of physics. Does nothing once the game is over.
    pub fn step<R: Rng>(&mut self, controls: Controls, rng: &mut R) -> Step {
        let mut step = Step::default();
        if !self.active {
            return step;
        }

        if controls.jump {
            self.bird_velocity = JUMP_STRENGTH;
            step.jumped = true;
        }

        self.bird_velocity += GRAVITY;
        self.bird_y += self.bird_velocity;

        self.pipe_x -= PIPE_SPEED;
        if self.pipe_x < -PIPE_WIDTH {
            self.pipe_x = STANDARD_X as i32;
            self.pipe_gap_y = GAP_MIN + rng.gen_range(0..GAP_RANGE);
            self.score += 1;
            step.scored = true;
        }

        if self.out_of_bounds() || self.hits_pipe() {
            self.active = false;
            step.crashed = true;
        }

        step
    }

    fn out_of_bounds(&self) -> bool {
        self.bird_y < 0 || self.bird_y > STANDARD_Y as i32 - BIRD_SIZE
    }

    fn hits_pipe(&self) -> bool {
        let in_column = BIRD_X + BIRD_SIZE > self.pipe_x && BIRD_X < self.pipe_x + PIPE_WIDTH;
        let in_gap = self.bird_y >= self.pipe_gap_y && self.bird_y + BIRD_SIZE <= self.pipe_gap_y + PIPE_GAP;
        in_column && !in_gap
    }
}
