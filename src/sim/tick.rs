//! Per-frame physics step
//!
//! Advances paddle and ball by exactly one frame. The staged checks run in a
//! fixed order (paddle, docked handling, integration, walls, bottom loss,
//! paddle bounce, brick scan) because the order decides which collision wins
//! when several could apply in the same frame; the loss branch returns early
//! and skips everything after it.

use super::state::{Ball, BallState, GameState};
use crate::consts::*;
use crate::input::Buttons;

/// Input for a single frame: the current pad snapshot plus the previous
/// frame's, retained by the frame loop so the step can detect press edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub held: Buttons,
    pub prev: Buttons,
}

impl TickInput {
    /// True when `buttons` are down this frame but were up the last.
    pub fn rising(&self, buttons: Buttons) -> bool {
        self.held.contains(buttons) && !self.prev.contains(buttons)
    }
}

/// Advance the whole simulation by one frame.
pub fn tick(state: &mut GameState, input: &TickInput) {
    update_paddle(state, input);
    update_ball(state, input);
}

fn update_paddle(state: &mut GameState, input: &TickInput) {
    if input.held.contains(Buttons::RIGHT) {
        state.paddle.move_right();
    }
    if input.held.contains(Buttons::LEFT) {
        state.paddle.move_left();
    }
}

fn update_ball(state: &mut GameState, input: &TickInput) {
    if state.ball.state == BallState::Docked {
        state.ball.follow(&state.paddle);
        if input.rising(Buttons::A) {
            state.ball.launch();
        }
        // The launch frame does not integrate; movement starts next frame.
        return;
    }

    // Integrate in widened signed space so a left-edge crossing cannot wrap
    // into a phantom right-wall hit.
    let new_x = state.ball.x as i16 + state.ball.vx as i16;
    let new_y = state.ball.y as i16 + state.ball.vy as i16;

    // Side walls. The clamp distances are asymmetric (1px inside on the
    // left, BALL_SIZE + 1 on the right), inherited from the board.
    if new_x <= 0 {
        state.ball.vx = -state.ball.vx;
        state.ball.x = 1;
    } else if new_x + BALL_SIZE as i16 >= SCREEN_WIDTH as i16 {
        state.ball.vx = -state.ball.vx;
        state.ball.x = SCREEN_WIDTH - BALL_SIZE - 1;
    } else {
        state.ball.x = new_x as u8;
    }

    // Ceiling, then the kill line two rows above the bottom.
    if new_y < TOP_WALL_Y as i16 {
        state.ball.vy = -state.ball.vy;
        state.ball.y = TOP_WALL_Y;
    } else if new_y >= (SCREEN_HEIGHT - 2) as i16 {
        state.lives = state.lives.saturating_sub(1);
        state.ball = Ball::docked();
        return;
    } else {
        state.ball.y = new_y as u8;
    }

    // Paddle. The test band is one pixel taller than the strict overlap box;
    // the bounce only resolves while the ball is still above the paddle top,
    // so a ball entering from the side passes through.
    if state.ball.y >= PADDLE_Y - BALL_SIZE && state.ball.y < PADDLE_Y + PADDLE_HEIGHT {
        let x_overlap = state.ball.x + BALL_SIZE > state.paddle.x
            && state.paddle.x + PADDLE_WIDTH > state.ball.x;
        if x_overlap && state.ball.y < PADDLE_Y {
            state.ball.y = PADDLE_Y - BALL_SIZE - 1;
            if state.ball.vy > 0 {
                state.ball.vy = -state.ball.vy;
            }
            // Never leave a dead straight-down ball stuck on the paddle
            if state.ball.vx == 0 {
                state.ball.vx = BALL_SPEED;
            }
        }
    }

    // Brick scan, gated on the wall's vertical span. At most one brick
    // resolves per frame, and only the vertical velocity reflects no matter
    // which face was struck.
    if !state.bricks.in_band(state.ball.y) {
        return;
    }
    if let Some(idx) = state.bricks.find_hit(&state.ball.rect()) {
        state.bricks.deactivate(idx);
        state.score += 1;
        state.ball.vy = -state.ball.vy;
    }
}
