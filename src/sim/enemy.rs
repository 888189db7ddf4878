//! Enemy archetypes and entities
//!
//! Stats are derived at spawn from the difficulty profile and the current
//! level; the assigned strategy never changes afterwards. An enemy is gone
//! the moment its health is depleted or it drifts past the bottom kill
//! line, whichever happens first.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::AiStrategy;
use super::player::Player;
use crate::consts::*;
use crate::tuning::DifficultyProfile;

/// Closed set of enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Small chaser
    Scout,
    /// Big and slow, drifts straight down
    Brute,
    /// Fast flanker that leads the player's movement
    Hunter,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 3] = [
        EnemyArchetype::Scout,
        EnemyArchetype::Brute,
        EnemyArchetype::Hunter,
    ];

    /// Collision radius (px)
    pub fn radius(&self) -> f32 {
        match self {
            EnemyArchetype::Scout => 15.0,
            EnemyArchetype::Brute => 30.0,
            EnemyArchetype::Hunter => 18.0,
        }
    }

    /// Level-scaled bonus on top of the profile's base health
    fn health_bonus(&self, level: u32) -> f32 {
        let base = level as f32 / 2.0;
        match self {
            EnemyArchetype::Scout | EnemyArchetype::Hunter => base,
            EnemyArchetype::Brute => base * 1.5,
        }
    }

    /// Scale on the profile's base speed
    fn speed_factor(&self) -> f32 {
        match self {
            EnemyArchetype::Scout => 1.0,
            EnemyArchetype::Brute => 0.75,
            EnemyArchetype::Hunter => 1.2,
        }
    }

    /// Scale on the profile's score multiplier
    pub fn score_factor(&self) -> u64 {
        match self {
            EnemyArchetype::Scout => 1,
            EnemyArchetype::Brute => 2,
            EnemyArchetype::Hunter => 3,
        }
    }

    /// First level at which this archetype enters the spawn pool
    pub fn unlock_level(&self) -> u32 {
        match self {
            EnemyArchetype::Scout => 1,
            EnemyArchetype::Brute => 4,
            EnemyArchetype::Hunter => 6,
        }
    }

    /// Scale on the profile's base spawn delay
    pub fn spawn_delay_factor(&self) -> f64 {
        match self {
            EnemyArchetype::Scout => 1.0,
            EnemyArchetype::Brute => 3.0,
            EnemyArchetype::Hunter => 5.0,
        }
    }

    /// Movement strategy assigned at spawn
    fn strategy(&self) -> AiStrategy {
        match self {
            EnemyArchetype::Scout => AiStrategy::Seek,
            EnemyArchetype::Brute => AiStrategy::FixedDirection { dir: Vec2::Y },
            EnemyArchetype::Hunter => AiStrategy::Intercept {
                lookahead_secs: AiStrategy::LOOKAHEAD_SECS,
            },
        }
    }

    /// Tint for this archetype's damage numbers (RGB)
    pub fn indicator_color(&self) -> [u8; 3] {
        match self {
            EnemyArchetype::Scout => [255, 255, 150],
            EnemyArchetype::Brute => [100, 200, 255],
            EnemyArchetype::Hunter => [255, 160, 80],
        }
    }
}

/// An enemy in play
#[derive(Debug, Clone)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    pub pos: Vec2,
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub score_value: u64,
    pub radius: f32,
    pub strategy: AiStrategy,
}

impl Enemy {
    /// Spawn at a random x along the top spawn line with level-scaled stats
    pub fn spawn(
        archetype: EnemyArchetype,
        profile: &DifficultyProfile,
        level: u32,
        rng: &mut Pcg32,
    ) -> Self {
        let x = rng.random_range(SPAWN_X_INSET..=PLAYFIELD_WIDTH - SPAWN_X_INSET);
        let health = profile.enemy_health + archetype.health_bonus(level);
        Self {
            archetype,
            pos: Vec2::new(x, SPAWN_Y),
            speed: profile.enemy_speed * archetype.speed_factor(),
            health,
            max_health: health,
            score_value: profile.score_multiplier * archetype.score_factor(),
            radius: archetype.radius(),
            strategy: archetype.strategy(),
        }
    }

    /// Advance along the assigned strategy
    pub fn advance(&mut self, player: Option<&Player>, dt: f32) {
        let dir = self.strategy.direction(self.pos, player);
        self.pos += dir * self.speed * dt;
    }

    /// Past the bottom kill line
    pub fn out_of_bounds(&self) -> bool {
        self.pos.y > PLAYFIELD_HEIGHT + ENEMY_DESPAWN_MARGIN
    }

    /// Apply damage; `true` once health is depleted
    pub fn take_damage(&mut self, damage: f32) -> bool {
        self.health -= damage;
        self.health <= 0.0
    }

    /// Health fraction for the host's health bar, clamped to [0, 1]
    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 1.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{Difficulty, Tuning};
    use rand::SeedableRng;

    fn normal_profile() -> DifficultyProfile {
        *Tuning::default().profile(Difficulty::Normal)
    }

    #[test]
    fn test_spawn_stats() {
        let mut rng = Pcg32::seed_from_u64(3);
        let profile = normal_profile();
        let enemy = Enemy::spawn(EnemyArchetype::Scout, &profile, 2, &mut rng);

        assert_eq!(enemy.pos.y, SPAWN_Y);
        assert!(enemy.pos.x >= SPAWN_X_INSET && enemy.pos.x <= PLAYFIELD_WIDTH - SPAWN_X_INSET);
        assert_eq!(enemy.health, profile.enemy_health + 1.0);
        assert_eq!(enemy.max_health, enemy.health);
        assert_eq!(enemy.score_value, profile.score_multiplier);
    }

    #[test]
    fn test_brute_scaling() {
        let mut rng = Pcg32::seed_from_u64(3);
        let profile = normal_profile();
        let brute = Enemy::spawn(EnemyArchetype::Brute, &profile, 4, &mut rng);

        assert_eq!(brute.health, profile.enemy_health + 2.0 * 1.5);
        assert_eq!(brute.speed, profile.enemy_speed * 0.75);
        assert_eq!(brute.score_value, profile.score_multiplier * 2);
        assert_eq!(brute.strategy, AiStrategy::FixedDirection { dir: Vec2::Y });
    }

    #[test]
    fn test_seek_approach_rate() {
        // Enemy straight above a stationary player closes at its full speed
        let player = Player::new(Vec2::new(400.0, 550.0));
        let mut enemy = Enemy {
            archetype: EnemyArchetype::Scout,
            pos: Vec2::new(400.0, 0.0),
            speed: 200.0,
            health: 1.0,
            max_health: 1.0,
            score_value: 3,
            radius: 15.0,
            strategy: AiStrategy::Seek,
        };
        let dt = 1.0 / 60.0;
        for _ in 0..60 {
            enemy.advance(Some(&player), dt);
        }
        assert!((enemy.pos.y - 200.0).abs() < 1.0);
        assert!((enemy.pos.x - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut enemy = Enemy::spawn(EnemyArchetype::Brute, &normal_profile(), 1, &mut rng);
        assert!(!enemy.out_of_bounds());
        enemy.pos.y = PLAYFIELD_HEIGHT + ENEMY_DESPAWN_MARGIN + 1.0;
        assert!(enemy.out_of_bounds());
    }

    #[test]
    fn test_health_ratio_guards_zero_max() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut enemy = Enemy::spawn(EnemyArchetype::Scout, &normal_profile(), 1, &mut rng);
        enemy.max_health = 0.0;
        assert_eq!(enemy.health_ratio(), 1.0);
    }

    #[test]
    fn test_take_damage() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut enemy = Enemy::spawn(EnemyArchetype::Scout, &normal_profile(), 1, &mut rng);
        let health = enemy.health;
        assert!(!enemy.take_damage(health - 0.5));
        assert!(enemy.health_ratio() > 0.0);
        assert!(enemy.take_damage(1.0));
    }
}
