//! Run state and cosmetic entities
//!
//! Everything the orchestrator owns lives here: the phase machine, the
//! entity collections, the spawn schedule, the upgrade-offer cache and the
//! one monotonic clock every timer compares against.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::{Enemy, EnemyArchetype};
use super::player::Player;
use super::projectile::Projectile;
use super::upgrades::UpgradeKind;
use crate::consts::*;
use crate::tuning::{Difficulty, Tuning};

/// Top-level state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    DifficultySelect,
    Playing,
    GameOver,
}

/// Floating damage number; purely cosmetic
#[derive(Debug, Clone)]
pub struct DamageIndicator {
    pub pos: Vec2,
    pub amount: f32,
    pub color: [u8; 3],
    pub age: f32,
    pub lifespan: f32,
    pub drift: Vec2,
}

impl DamageIndicator {
    pub fn new(pos: Vec2, amount: f32, color: [u8; 3]) -> Self {
        Self {
            pos,
            amount,
            color,
            age: 0.0,
            lifespan: INDICATOR_LIFESPAN,
            drift: Vec2::new(0.0, INDICATOR_DRIFT),
        }
    }

    /// Drift upward and age; `false` once the lifespan is spent
    pub fn update(&mut self, dt: f32) -> bool {
        self.age += dt;
        if self.age >= self.lifespan {
            return false;
        }
        self.pos += self.drift * dt;
        true
    }

    /// Remaining opacity fraction for the host renderer
    pub fn opacity(&self) -> f32 {
        if self.lifespan <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age / self.lifespan).clamp(0.0, 1.0)
    }
}

/// Per-archetype spawn schedule
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub archetype: EnemyArchetype,
    pub delay_ms: f64,
    pub last_spawn_ms: f64,
}

/// Complete game state; owned by the host, advanced by [`super::tick::tick`]
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub level: u32,
    pub score: u64,
    /// Monotonic simulation clock (ms); every timer compares against it
    pub clock_ms: f64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Cosmetic damage numbers, owned here rather than by any entity type
    pub indicators: Vec<DamageIndicator>,
    pub spawners: Vec<SpawnTimer>,
    /// Upgrade overlay open (level-up or manual toggle); pauses the sim
    pub upgrade_menu_open: bool,
    pub has_upgrade_available: bool,
    /// Offers drawn at the last level-up, cached until one is bought
    pub pending_offers: Vec<UpgradeKind>,
    pub tuning: Tuning,
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh session at the main menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            phase: GamePhase::Menu,
            difficulty: Difficulty::Normal,
            level: 1,
            score: 0,
            clock_ms: 0.0,
            player: Player::new(player_spawn()),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            indicators: Vec::new(),
            spawners: Vec::new(),
            upgrade_menu_open: false,
            has_upgrade_available: false,
            pending_offers: Vec::new(),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_run();
        state
    }

    /// Reinitialize the run (new game or restart), preserving the selected
    /// difficulty, the tuning table and the session clock
    pub fn reset_run(&mut self) {
        self.level = 1;
        self.score = 0;
        self.player = Player::new(player_spawn());
        self.enemies.clear();
        self.projectiles.clear();
        self.indicators.clear();
        self.upgrade_menu_open = false;
        self.has_upgrade_available = false;
        self.pending_offers.clear();

        let base_delay = self.tuning.profile(self.difficulty).spawn_delay_ms;
        self.spawners = EnemyArchetype::ALL
            .iter()
            .map(|&archetype| SpawnTimer {
                archetype,
                delay_ms: base_delay * archetype.spawn_delay_factor(),
                last_spawn_ms: self.clock_ms,
            })
            .collect();
    }

    /// Score needed to reach the next level
    pub fn next_level_threshold(&self) -> u64 {
        self.tuning.level_up_score * u64::from(self.level)
    }

    /// Progress toward the next level as a 0..=1 fraction for the host HUD
    pub fn level_progress(&self) -> f32 {
        let span = self.tuning.level_up_score;
        if span == 0 {
            return 1.0;
        }
        let previous = span * u64::from(self.level.saturating_sub(1));
        let gained = self.score.saturating_sub(previous);
        (gained as f32 / span as f32).clamp(0.0, 1.0)
    }
}

fn player_spawn() -> Vec2 {
    Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT - 50.0)
}
