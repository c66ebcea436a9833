//! The brick wall
//!
//! Owns the fixed 6x8 layout and per-brick destroyed state, and answers the
//! physics step's collision queries. Brick positions and color classes are
//! immutable after init; only `active` ever changes.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// A single brick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub x: u8,
    pub y: u8,
    /// Color class 1..=6, fixed by row
    pub color: u8,
    pub active: bool,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BRICK_WIDTH, BRICK_HEIGHT)
    }
}

/// All 48 bricks in row-major order (index 0 is the top-left brick).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
    remaining: u8,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// Build the full wall: for index i, row = i / 8 and col = i % 8,
    /// placed on the 16x7 grid pitch with color class row + 1.
    pub fn new() -> Self {
        let bricks = (0..TOTAL_BRICKS)
            .map(|idx| {
                let row = (idx / BRICK_COLS as usize) as u8;
                let col = (idx % BRICK_COLS as usize) as u8;
                Brick {
                    x: col * BRICK_SPACING_X + BRICK_START_X,
                    y: row * BRICK_SPACING_Y + BRICK_START_Y,
                    color: row + 1,
                    active: true,
                }
            })
            .collect();
        Self {
            bricks,
            remaining: TOTAL_BRICKS as u8,
        }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Count of bricks still standing.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// True if `y` lies in the vertical span covered by the wall; the physics
    /// step skips the brick scan entirely outside it.
    pub fn in_band(&self, y: u8) -> bool {
        y >= BRICK_START_Y && y < BRICK_START_Y + BRICK_ROWS * BRICK_SPACING_Y + BRICK_HEIGHT
    }

    /// Find the first active brick overlapping `rect`, scanning in ascending
    /// index order (lowest row, then lowest column, wins ties). Read-only;
    /// the caller decides what to do with the hit.
    pub fn find_hit(&self, rect: &Rect) -> Option<usize> {
        self.bricks
            .iter()
            .position(|brick| brick.active && brick.rect().overlaps(rect))
    }

    /// Knock out a brick. The caller has already matched a collision; the
    /// overlap is not re-checked.
    pub fn deactivate(&mut self, index: usize) {
        let brick = &mut self.bricks[index];
        if brick.active {
            brick.active = false;
            self.remaining -= 1;
        }
    }
}
