//! Space Fighter - a wave-based 2D arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Simulation core (entities, ballistics, collisions, progression)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio, asset loading and input devices are host concerns. A
//! host feeds [`sim::TickInput`] and a frame delta into [`sim::tick`] each
//! frame, then reads the public state back to draw whatever it wants.

pub mod sim;
pub mod tuning;

pub use tuning::{Difficulty, Tuning};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Target host frame pacing; `dt` is still treated as opaque
    pub const TARGET_DT: f32 = 1.0 / 60.0;

    /// Horizontal inset for enemy spawn positions
    pub const SPAWN_X_INSET: f32 = 30.0;
    /// Enemies enter just above the top edge
    pub const SPAWN_Y: f32 = -30.0;
    /// Margin past the bottom edge after which enemies despawn
    pub const ENEMY_DESPAWN_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_ACCEL: f32 = 60.0;
    /// Per-tick velocity damping factor
    pub const PLAYER_DAMPING: f32 = 0.75;
    pub const PLAYER_LIVES: u32 = 3;
    /// Invulnerability window after a hit (ms)
    pub const INVULN_DURATION_MS: f64 = 2000.0;

    /// Damage indicator lifespan (seconds)
    pub const INDICATOR_LIFESPAN: f32 = 1.0;
    /// Damage indicator drift (px/s, negative y is up)
    pub const INDICATOR_DRIFT: f32 = -50.0;
}
