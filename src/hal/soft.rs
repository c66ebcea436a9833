//! Software console
//!
//! A pure in-memory stand-in for the machine: two 128x128 row-major
//! framebuffer pages, a blitter that completes synchronously, and a
//! scriptable pad. The vsync signal is never raised from inside; whoever
//! owns the clock (a pacing thread, or a test) raises it.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::Buttons;

use super::signal::Signal;
use super::{BlitDevice, Console, RectFill};

const FB_BYTES: usize = SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize;

/// In-memory double-buffered console.
pub struct SoftConsole {
    pages: [Box<[u8; FB_BYTES]>; 2],
    draw_page: usize,
    pad: Buttons,
    vsync: Signal,
    blit_done: Signal,
}

impl Default for SoftConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftConsole {
    pub fn new() -> Self {
        Self {
            pages: [Box::new([0; FB_BYTES]), Box::new([0; FB_BYTES])],
            draw_page: 0,
            pad: Buttons::empty(),
            vsync: Signal::new(),
            blit_done: Signal::new(),
        }
    }

    /// Script the pad state returned by the next `read_pad`.
    pub fn set_pad(&mut self, pad: Buttons) {
        self.pad = pad;
    }

    /// The page currently on screen (the one not being drawn into).
    pub fn displayed(&self) -> &[u8; FB_BYTES] {
        &self.pages[self.draw_page ^ 1]
    }

    pub fn displayed_pixel(&self, x: u8, y: u8) -> u8 {
        self.displayed()[y as usize * SCREEN_WIDTH as usize + x as usize]
    }
}

impl BlitDevice for SoftConsole {
    fn submit(&mut self, rect: &RectFill) {
        // Hardware-style clipping at the right/bottom field edges; an
        // overhanging fill must not wrap onto the next row.
        let x0 = rect.x as usize;
        let y0 = rect.y as usize;
        let x1 = (x0 + rect.width as usize).min(SCREEN_WIDTH as usize);
        let y1 = (y0 + rect.height as usize).min(SCREEN_HEIGHT as usize);

        let page = &mut self.pages[self.draw_page];
        for y in y0..y1 {
            let row = y * SCREEN_WIDTH as usize;
            page[row + x0..row + x1].fill(rect.color);
        }
        self.blit_done.raise();
    }

    fn blit_done(&self) -> &Signal {
        &self.blit_done
    }
}

impl Console for SoftConsole {
    fn read_pad(&mut self) -> Buttons {
        self.pad
    }

    fn vsync(&self) -> &Signal {
        &self.vsync
    }

    fn flip(&mut self) {
        self.draw_page ^= 1;
    }
}
