//! Draw submission
//!
//! Turns read-only game state into the frame's ordered rectangle fills:
//! field clear first (issued by the frame loop before input), then active
//! bricks in index order, paddle, ball, and one small square per remaining
//! life. Each fill blocks on the blitter before the next is issued.

use crate::consts::*;
use crate::hal::color::*;
use crate::hal::{BlitDevice, RectFill};
use crate::sim::GameState;

/// Field clear color: low-luminance black.
pub const BACKGROUND: u8 = 8;

const PADDLE_COLOR: u8 = HUE_RED | SAT_FULL | 5;
/// Unsaturated, so the hue bits are moot: full-brightness white
const BALL_COLOR: u8 = HUE_GREEN | SAT_NONE | 7;
const LIFE_COLOR: u8 = HUE_RED | SAT_FULL | 5;

/// Row palette by color class 1..=6 (red through blue, top to bottom).
const BRICK_PALETTE: [u8; 6] = [
    HUE_RED | SAT_FULL | 4,
    HUE_ORANGE | SAT_FULL | 4,
    HUE_YELLOW | SAT_FULL | 4,
    HUE_GREEN | SAT_FULL | 4,
    HUE_CYAN | SAT_FULL | 4,
    HUE_BLUE | SAT_FULL | 4,
];

/// Color for a brick class; anything outside 1..=6 falls back to the last
/// palette entry.
pub fn brick_color(class: u8) -> u8 {
    match class {
        1..=6 => BRICK_PALETTE[class as usize - 1],
        _ => BRICK_PALETTE[BRICK_PALETTE.len() - 1],
    }
}

/// Clear the field.
pub fn clear(dev: &mut impl BlitDevice) {
    dev.fill_rect(&RectFill {
        x: 0,
        y: 0,
        width: SCREEN_WIDTH - 1,
        height: SCREEN_HEIGHT - 1,
        color: BACKGROUND,
    });
}

/// Draw one frame of game state. Read-only; never fails, whatever the state.
pub fn draw(state: &GameState, dev: &mut impl BlitDevice) {
    for brick in state.bricks.bricks().iter().filter(|b| b.active) {
        dev.fill_rect(&RectFill {
            x: brick.x,
            y: brick.y,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            color: brick_color(brick.color),
        });
    }

    dev.fill_rect(&RectFill {
        x: state.paddle.x,
        y: PADDLE_Y,
        width: PADDLE_WIDTH,
        height: PADDLE_HEIGHT,
        color: PADDLE_COLOR,
    });

    dev.fill_rect(&RectFill {
        x: state.ball.x,
        y: state.ball.y,
        width: BALL_SIZE,
        height: BALL_SIZE,
        color: BALL_COLOR,
    });

    // Lives as small squares along the top-left, 5px pitch
    let mut x = 2u8;
    for _ in 0..state.lives {
        dev.fill_rect(&RectFill {
            x,
            y: 2,
            width: 3,
            height: 3,
            color: LIFE_COLOR,
        });
        x = x.wrapping_add(5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{Console, SoftConsole};

    #[test]
    fn test_draw_order_and_placement() {
        let mut console = SoftConsole::new();
        let state = GameState::new();

        clear(&mut console);
        draw(&state, &mut console);
        console.flip();

        assert_eq!(console.displayed_pixel(0, 0), BACKGROUND);
        // Top-left brick, class 1
        assert_eq!(console.displayed_pixel(4, 10), brick_color(1));
        // Bottom row, class 6
        assert_eq!(console.displayed_pixel(4, 45), brick_color(6));
        // Paddle spans [52, 76) at y = 115
        assert_eq!(console.displayed_pixel(52, 115), PADDLE_COLOR);
        assert_eq!(console.displayed_pixel(75, 118), PADDLE_COLOR);
        // Docked ball rides just above the paddle
        assert_eq!(console.displayed_pixel(62, 111), BALL_COLOR);
        // Three life markers at 5px pitch
        assert_eq!(console.displayed_pixel(2, 2), LIFE_COLOR);
        assert_eq!(console.displayed_pixel(7, 2), LIFE_COLOR);
        assert_eq!(console.displayed_pixel(12, 2), LIFE_COLOR);
        assert_eq!(console.displayed_pixel(17, 2), BACKGROUND);
    }

    #[test]
    fn test_destroyed_brick_leaves_background() {
        let mut console = SoftConsole::new();
        let mut state = GameState::new();
        state.bricks.deactivate(0);

        clear(&mut console);
        draw(&state, &mut console);
        console.flip();

        assert_eq!(console.displayed_pixel(4, 10), BACKGROUND);
        // Its neighbor still stands
        assert_eq!(console.displayed_pixel(20, 10), brick_color(1));
    }

    #[test]
    fn test_no_life_markers_at_zero_lives() {
        let mut console = SoftConsole::new();
        let mut state = GameState::new();
        state.lives = 0;

        clear(&mut console);
        draw(&state, &mut console);
        console.flip();

        assert_eq!(console.displayed_pixel(2, 2), BACKGROUND);
    }

    #[test]
    fn test_brick_color_fallback() {
        assert_eq!(brick_color(1), BRICK_PALETTE[0]);
        assert_eq!(brick_color(6), BRICK_PALETTE[5]);
        assert_eq!(brick_color(7), BRICK_PALETTE[5]);
        assert_eq!(brick_color(200), BRICK_PALETTE[5]);
    }
}
