#![no_std]
#![no_main]

use de1soc::{board::Board, timer::FrameClock};
use flappy::{
    config::FRAME_RATE,
    game::Game,
    render::{Palette, Video},
};
use log::{LevelFilter, info};

mod boot;

#[cfg_attr(not(feature = "jtag-log"), allow(dead_code))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn main(board: Board) -> ! {
    #[cfg(feature = "jtag-log")]
    de1soc::jtag_uart::init(LOG_LEVEL).ok();

    let config = board.display_config();
    let palette = Palette::new(&config);

    let mut video = Video {
        pixels: board.pixel_buffer(config),
        text: board.char_buffer(),
    };
    // whatever the last program left on the overlay
    video.text.clear_screen();

    let mut clock = FrameClock::start(board.timer, FRAME_RATE);
    let mut game = Game::new(palette, clock.counter() as u64);
    info!("flappy running at {} fps", FRAME_RATE);

    loop {
        let hold = game.frame(board.keys.state(), &mut video);
        clock.wait_for_frame();
        clock.wait_frames(hold);
    }
}
