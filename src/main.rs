//! Breakwall entry point
//!
//! Headless host shell: drives the simulation for a fixed number of ticks
//! with a simple ball-tracking intent, then prints a JSON snapshot of the
//! final round state. A rendering shell would call `tick` the same way,
//! once per display frame, and read entity rectangles back for drawing.

use breakwall::consts::*;
use breakwall::sim::{PaddleIntent, RoundState, tick};

fn main() {
    env_logger::init();
    log::info!("breakwall (headless) starting");

    let mut state = RoundState::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    let ticks = 2000;
    for _ in 0..ticks {
        let intent = track_ball(&state);
        tick(&mut state, SCREEN_WIDTH, SCREEN_HEIGHT, intent);
    }

    log::info!(
        "after {} ticks: {} brick(s) remaining, {} ball(s) in play",
        ticks,
        state.bricks.len(),
        state.balls.len()
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot failed: {err}"),
    }
}

/// Keep the paddle under the first ball, the way a player would
fn track_ball(state: &RoundState) -> PaddleIntent {
    let Some(ball) = state.balls.first() else {
        return PaddleIntent::None;
    };
    let ball_center = ball.pos.x + ball.radius;
    let paddle_center = state.paddle.pos.x + state.paddle.size.x / 2.0;

    if ball_center < paddle_center - state.paddle.speed {
        PaddleIntent::Left
    } else if ball_center > paddle_center + state.paddle.speed {
        PaddleIntent::Right
    } else {
        PaddleIntent::None
    }
}
