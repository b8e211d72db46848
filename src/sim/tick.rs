//! Per-tick simulation step
//!
//! The host invokes `tick` once per display frame. A tick moves the paddle
//! from the frame's input intent, then updates every ball independently:
//! wall deflection, paddle and brick contact, and the bottom-miss check
//! that rebuilds the whole round.

use serde::{Deserialize, Serialize};

use super::collision::{bounce_ratio, paddle_hit, sweep_bricks, wall_deflects};
use super::state::{Ball, Brick, Paddle, RoundState};

/// Normalized paddle input for a single tick
///
/// The host translates raw key state into one of these; the simulation
/// never reads input devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Left,
    Right,
    #[default]
    None,
}

/// What a single ball's update asked of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BallOutcome {
    InPlay,
    BottomMiss,
}

/// Advance the round by one tick.
///
/// A bottom-miss rebuilds the round mid-pass. Balls are taken out of the
/// round for the pass so the rebuild can repopulate it; later balls of the
/// same pass then collide against the freshly reset paddle and bricks, and
/// the pre-reset list is dropped wholesale. The pass never short-circuits:
/// every ball gets its update, reset or not.
pub fn tick(state: &mut RoundState, width: f32, height: f32, intent: PaddleIntent) {
    move_paddle(&mut state.paddle, width, intent);

    let mut balls = std::mem::take(&mut state.balls);
    let mut missed = false;
    for ball in &mut balls {
        let outcome = step_ball(ball, &state.paddle, &mut state.bricks, width, height);
        if outcome == BallOutcome::BottomMiss {
            state.reset(width, height);
            missed = true;
        }
    }
    if !missed {
        state.balls = balls;
    }
}

/// Apply the tick's intent, keeping the paddle inside the screen.
///
/// Moving right is gated on the post-move position fitting; moving left
/// moves first and clamps at zero.
fn move_paddle(paddle: &mut Paddle, width: f32, intent: PaddleIntent) {
    match intent {
        PaddleIntent::Right => {
            if paddle.pos.x + paddle.size.x + paddle.speed <= width {
                paddle.pos.x += paddle.speed;
            }
        }
        PaddleIntent::Left => {
            paddle.pos.x -= paddle.speed;
            if paddle.pos.x < 0.0 {
                paddle.pos.x = 0.0;
            }
        }
        PaddleIntent::None => {}
    }
}

fn step_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut Vec<Brick>,
    width: f32,
    height: f32,
) -> BallOutcome {
    // Walls first: flip, then commit the horizontal displacement
    if wall_deflects(ball, width) {
        ball.dir.x = -ball.dir.x;
    }
    ball.pos.x += ball.dir.x * ball.speed;

    let new_y = ball.pos.y + ball.dir.y * ball.speed;

    // Paddle and bricks are both evaluated: a sweep still clears bricks on
    // a tick that also bounces
    let hit_paddle = paddle_hit(ball, paddle);
    let hit_brick = sweep_bricks(ball, bricks);

    if new_y < 0.0 || hit_paddle || hit_brick {
        if hit_paddle {
            ball.dir.x += bounce_ratio(ball, paddle);
        }
        ball.dir.y = -ball.dir.y;
        ball.pos.y += ball.dir.y * ball.speed;
        BallOutcome::InPlay
    } else if new_y + 2.0 * ball.radius > height {
        // Ball passed below the paddle: the round is rebuilt by the caller
        // and this ball's vertical update is moot
        BallOutcome::BottomMiss
    } else {
        ball.pos.y = new_y;
        BallOutcome::InPlay
    }
}
