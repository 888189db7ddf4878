//! Simulation core
//!
//! All gameplay logic lives here. The module has no rendering or platform
//! dependencies:
//! - One update pass per frame through [`tick::tick`], driven by a host-
//!   supplied `dt` and a [`tick::TickInput`] snapshot
//! - One monotonic clock; every cooldown and timer compares against it
//! - Seeded RNG owned by the state
//!
//! The host reads the public state back for drawing.

pub mod ai;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod upgrades;
pub mod weapon;

pub use ai::AiStrategy;
pub use enemy::{Enemy, EnemyArchetype};
pub use player::Player;
pub use projectile::{Projectile, ProjectileKind};
pub use state::{DamageIndicator, GamePhase, GameState, SpawnTimer};
pub use tick::{TickInput, tick};
pub use upgrades::{UpgradeKind, apply_upgrade};
pub use weapon::{Weapon, WeaponKind};
