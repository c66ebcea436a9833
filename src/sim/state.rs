//! Game state and core simulation types
//!
//! The session is a handful of owned value structures passed explicitly
//! between the frame loop, the physics step, and the renderer. Exactly one
//! writer (the physics step) mutates them per frame.

use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::collision::Rect;
use crate::consts::*;

/// Ball state - riding the paddle or free-flying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Ball sits on the paddle, waiting for launch input
    Docked,
    /// Ball moves under its own velocity and participates in collisions
    Active,
}

/// The player's paddle. Only `x` ever changes; width, height, and the
/// vertical position are fixed by the hardware layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: u8,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (SCREEN_WIDTH - PADDLE_WIDTH) / 2,
        }
    }
}

impl Paddle {
    /// Step right. The move is suppressed outright, not clamped to the edge,
    /// when it would reach the right bound.
    pub fn move_right(&mut self) {
        let new_x = self.x + PADDLE_SPEED;
        if new_x < SCREEN_WIDTH - PADDLE_WIDTH {
            self.x = new_x;
        }
    }

    /// Step left, suppressed on underflow.
    pub fn move_left(&mut self) {
        if self.x >= PADDLE_SPEED {
            self.x -= PADDLE_SPEED;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// X position that centers the ball over this paddle.
    pub fn ball_rest_x(&self) -> u8 {
        self.x + (PADDLE_WIDTH - BALL_SIZE) / 2
    }
}

/// The ball: a BALL_SIZE square addressed by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub x: u8,
    pub y: u8,
    pub vx: i8,
    pub vy: i8,
    pub state: BallState,
}

impl Ball {
    /// A ball at rest on the dock position: centered over the field, just
    /// above the paddle, zero velocity.
    pub fn docked() -> Self {
        Self {
            x: (SCREEN_WIDTH - BALL_SIZE) / 2,
            y: PADDLE_Y - BALL_SIZE - 1,
            vx: 0,
            vy: 0,
            state: BallState::Docked,
        }
    }

    /// While docked the x position is re-derived from the paddle every frame.
    pub fn follow(&mut self, paddle: &Paddle) {
        self.x = paddle.ball_rest_x();
    }

    /// Docked -> Active, launching up-right.
    pub fn launch(&mut self) {
        self.state = BallState::Active;
        self.vx = BALL_SPEED;
        self.vy = -BALL_SPEED;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BALL_SIZE, BALL_SIZE)
    }
}

/// Complete session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// +1 per brick, monotonic
    pub score: u16,
    pub lives: u8,
    /// Free-running frame counter, bumped by the frame loop
    pub frame_count: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            paddle: Paddle::default(),
            ball: Ball::docked(),
            bricks: BrickGrid::new(),
            score: 0,
            lives: START_LIVES,
            frame_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.paddle.x, 52);
        assert_eq!(state.ball.x, 62);
        assert_eq!(state.ball.y, 111);
        assert_eq!(state.ball.state, BallState::Docked);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.remaining(), 48);
    }

    #[test]
    fn test_paddle_suppresses_moves_at_edges() {
        let mut paddle = Paddle { x: 0 };
        paddle.move_left();
        assert_eq!(paddle.x, 0);

        let mut paddle = Paddle { x: 102 };
        paddle.move_right();
        // 104 would sit flush against the wall but movement never enters it
        assert_eq!(paddle.x, 102);

        let mut paddle = Paddle { x: 100 };
        paddle.move_right();
        assert_eq!(paddle.x, 102);
    }

    #[test]
    fn test_docked_ball_tracks_paddle() {
        let mut ball = Ball::docked();
        let paddle = Paddle { x: 30 };
        ball.follow(&paddle);
        assert_eq!(ball.x, 40);
        assert_eq!(ball.y, 111);
    }

    #[test]
    fn test_launch_velocity() {
        let mut ball = Ball::docked();
        ball.launch();
        assert_eq!(ball.state, BallState::Active);
        assert_eq!((ball.vx, ball.vy), (2, -2));
    }

    #[test]
    fn test_snapshot_restores_identically() {
        let mut state = GameState::new();
        state.paddle.x = 40;
        state.ball.launch();
        state.bricks.deactivate(3);
        state.score = 1;

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.paddle, state.paddle);
        assert_eq!(restored.ball, state.ball);
        assert_eq!(restored.score, state.score);
        assert_eq!(restored.bricks.remaining(), state.bricks.remaining());
    }
}
