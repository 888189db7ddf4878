//! Enemy movement strategies
//!
//! A strategy is assigned once at spawn and dispatched through a single
//! `direction` capability. A missing player or a zero-length aim vector
//! yields no movement for the tick, never an error.

use glam::Vec2;

use super::player::Player;

/// Closed set of movement strategies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiStrategy {
    /// Head straight for the player's current position
    Seek,
    /// Lead the player by extrapolating along their acceleration
    Intercept { lookahead_secs: f32 },
    /// Constant heading; ignores the player entirely
    FixedDirection { dir: Vec2 },
}

impl AiStrategy {
    /// Default prediction window for `Intercept`
    pub const LOOKAHEAD_SECS: f32 = 0.5;

    /// Unit movement direction for this tick; `Vec2::ZERO` means hold still
    pub fn direction(&self, from: Vec2, player: Option<&Player>) -> Vec2 {
        match *self {
            AiStrategy::Seek => match player {
                Some(p) => (p.pos - from).normalize_or_zero(),
                None => Vec2::ZERO,
            },
            AiStrategy::Intercept { lookahead_secs } => match player {
                Some(p) => {
                    let predicted = p.pos + p.acceleration() * lookahead_secs;
                    (predicted - from).normalize_or_zero()
                }
                None => Vec2::ZERO,
            },
            AiStrategy::FixedDirection { dir } => dir.normalize_or_zero(),
        }
    }
}
