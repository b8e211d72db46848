//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, driven by the host
//! - No randomness (fixed layout, fixed serve)
//! - Stable iteration order (bricks in row-major grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, bounce_ratio, paddle_hit, sweep_bricks, wall_deflects};
pub use state::{Ball, Brick, Paddle, RoundState};
pub use tick::{PaddleIntent, tick};
