//! The frame loop
//!
//! One iteration: clear the back buffer, read the pad, advance the
//! simulation, draw, block on vsync, flip buffers, bump the frame counter.
//! The previous pad snapshot is retained here so the physics step can see
//! press edges. There is no exit and no terminal state; win and game-over
//! presentation belong to an outer layer.

use crate::hal::Console;
use crate::input::Buttons;
use crate::renderer;
use crate::sim::{GameState, TickInput, tick};

/// Owns the console and the session state, and runs them a frame at a time.
pub struct FrameLoop<C: Console> {
    console: C,
    state: GameState,
    prev_pad: Buttons,
}

impl<C: Console> FrameLoop<C> {
    pub fn new(console: C) -> Self {
        Self::with_state(console, GameState::new())
    }

    /// Resume from a state snapshot.
    pub fn with_state(console: C, state: GameState) -> Self {
        Self {
            console,
            state,
            prev_pad: Buttons::empty(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Run exactly one frame.
    pub fn run_frame(&mut self) {
        renderer::clear(&mut self.console);

        let held = self.console.read_pad();
        let input = TickInput {
            held,
            prev: self.prev_pad,
        };
        self.prev_pad = held;
        tick(&mut self.state, &input);

        renderer::draw(&self.state, &mut self.console);

        self.console.vsync().wait();
        self.console.flip();
        self.state.frame_count += 1;
    }

    /// Run forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_frame();
        }
    }
}
