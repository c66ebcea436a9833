//! Brickout - a brick-breaking game core for blitter-based 8-bit consoles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Rectangle-fill draw submission
//! - `hal`: Hardware seams (blit device, vsync, pad, double buffering)
//! - `frame`: The per-frame loop tying everything together

pub mod frame;
pub mod hal;
pub mod input;
pub mod renderer;
pub mod sim;

pub use frame::FrameLoop;
pub use input::Buttons;

/// Game configuration constants
///
/// Everything here is fixed by the hardware and the board layout; there is
/// no runtime configuration.
pub mod consts {
    /// Playfield dimensions in pixels
    pub const SCREEN_WIDTH: u8 = 128;
    pub const SCREEN_HEIGHT: u8 = 128;

    /// Paddle geometry and movement
    pub const PADDLE_WIDTH: u8 = 24;
    pub const PADDLE_HEIGHT: u8 = 4;
    /// Fixed paddle top edge
    pub const PADDLE_Y: u8 = 115;
    /// Pixels moved per frame while a direction is held
    pub const PADDLE_SPEED: u8 = 2;

    /// Ball bounding box is BALL_SIZE x BALL_SIZE
    pub const BALL_SIZE: u8 = 3;
    /// Velocity magnitude on each axis while flying
    pub const BALL_SPEED: i8 = 2;

    /// Brick geometry: 6 rows x 8 columns on a 16x7 grid pitch
    pub const BRICK_WIDTH: u8 = 15;
    pub const BRICK_HEIGHT: u8 = 6;
    pub const BRICK_ROWS: u8 = 6;
    pub const BRICK_COLS: u8 = 8;
    pub const BRICK_START_X: u8 = 4;
    pub const BRICK_START_Y: u8 = 10;
    pub const BRICK_SPACING_X: u8 = 16;
    pub const BRICK_SPACING_Y: u8 = 7;
    pub const TOTAL_BRICKS: usize = (BRICK_ROWS as usize) * (BRICK_COLS as usize);

    /// The ball reflects off an invisible ceiling below the HUD strip
    pub const TOP_WALL_Y: u8 = 8;

    pub const START_LIVES: u8 = 3;
}
