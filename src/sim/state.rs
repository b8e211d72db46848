//! Round state and core simulation types
//!
//! All live entity state lives here. Every record is serializable so the
//! host can snapshot a round after any tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y is fixed after spawn
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal units moved per tick of input
    pub speed: f32,
    /// Opaque color tag for the renderer
    pub color: u32,
}

impl Paddle {
    /// Spawn centered near the bottom edge
    pub fn spawn(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(
                width / 2.0 - PADDLE_WIDTH / 2.0,
                height - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            color: PADDLE_COLOR,
        }
    }

    /// The paddle as an axis-aligned rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    pub radius: f32,
    /// Scalar units traveled per tick, per axis
    pub speed: f32,
    /// Per-axis travel multipliers. The sign of each component is the
    /// direction of travel; the magnitude scales displacement and is not
    /// kept at unit length, so paddle-zone nudges accumulate over a round.
    pub dir: Vec2,
    /// Opaque color tag for the renderer
    pub color: u32,
}

impl Ball {
    /// Spawn centered, below the brick field, moving straight down
    pub fn spawn(width: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0 - BALL_RADIUS, BALL_START_Y),
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            dir: Vec2::new(0.0, 1.0),
            color: BALL_COLOR,
        }
    }

    /// Bounding square used for all collision tests
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(2.0 * self.radius))
    }
}

/// A brick target. Immutable once placed; a hit brick is removed outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    /// Opaque color tag for the renderer
    pub color: u32,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub paddle: Paddle,
    /// Balls in play; the stock layout serves exactly one
    pub balls: Vec<Ball>,
    /// Remaining bricks, row-major grid order
    pub bricks: Vec<Brick>,
}

impl RoundState {
    /// Build the canonical layout for the given screen bounds: paddle
    /// centered near the bottom, one ball descending from above, and the
    /// full brick grid at its top-left origin.
    pub fn new(width: f32, height: f32) -> Self {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                bricks.push(Brick {
                    pos: Vec2::new(
                        BRICK_ORIGIN_X + col as f32 * (BRICK_WIDTH + BRICK_PADDING),
                        BRICK_ORIGIN_Y + row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
                    ),
                    size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
                    color: BRICK_ROW_COLORS[row],
                });
            }
        }

        Self {
            paddle: Paddle::spawn(width, height),
            balls: vec![Ball::spawn(width)],
            bricks,
        }
    }

    /// Rebuild the round from the layout constants.
    ///
    /// This is the only constructor of game state: a bottom-miss performs
    /// the same full rebuild, respawning the paddle and every brick along
    /// with the ball.
    pub fn reset(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
        log::debug!(
            "round reset: {} bricks, {} ball(s)",
            self.bricks.len(),
            self.balls.len()
        );
    }
}
