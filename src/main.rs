//! Brickout entry point
//!
//! Headless demo: runs the game against the software console at 60 Hz with
//! a small autopilot on the pad, logging score and life events. Run with
//! `RUST_LOG=info` to watch it play.

use std::time::Duration;

use brickout::consts::*;
use brickout::hal::{Console, SoftConsole};
use brickout::sim::{BallState, GameState};
use brickout::{Buttons, FrameLoop};

const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

fn main() {
    env_logger::init();
    log::info!("Brickout starting (headless demo, 60 Hz)");

    let console = SoftConsole::new();

    // The vsync "hardware": a pacing thread pulsing the frame-boundary signal
    let vsync = console.vsync().clone();
    std::thread::spawn(move || {
        loop {
            spin_sleep::sleep(FRAME_TIME);
            vsync.raise();
        }
    });

    let mut game = FrameLoop::new(console);
    let mut last_score = 0;
    let mut last_lives = START_LIVES;

    loop {
        let pad = autopilot(game.state());
        game.console_mut().set_pad(pad);
        game.run_frame();

        let state = game.state();
        if state.score != last_score {
            last_score = state.score;
            log::info!(
                "score {} ({} bricks standing)",
                state.score,
                state.bricks.remaining()
            );
        }
        if state.lives != last_lives {
            last_lives = state.lives;
            log::warn!("ball lost, {} lives left", state.lives);
        }
    }
}

/// Demo pilot, deliberately outside the core: launches the docked ball and
/// keeps the paddle under the free one. Just another input source as far as
/// the game is concerned.
fn autopilot(state: &GameState) -> Buttons {
    if state.ball.state == BallState::Docked {
        // Alternate press/release so every other frame is a fresh edge
        return if state.frame_count % 2 == 0 {
            Buttons::A
        } else {
            Buttons::empty()
        };
    }

    let ball_center = state.ball.x as i16 + (BALL_SIZE / 2) as i16;
    let paddle_center = state.paddle.x as i16 + (PADDLE_WIDTH / 2) as i16;
    if ball_center < paddle_center - 1 {
        Buttons::LEFT
    } else if ball_center > paddle_center + 1 {
        Buttons::RIGHT
    } else {
        Buttons::empty()
    }
}
