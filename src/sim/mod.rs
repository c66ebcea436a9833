//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per displayed frame
//! - No randomness anywhere (the board layout is fixed)
//! - No rendering or hardware dependencies

pub mod bricks;
pub mod collision;
pub mod state;
pub mod tick;

pub use bricks::{Brick, BrickGrid};
pub use collision::Rect;
pub use state::{Ball, BallState, GameState, Paddle};
pub use tick::{TickInput, tick};
