//! The player ship
//!
//! Movement is acceleration-driven with per-tick damping and an edge clamp;
//! aim follows the pointer. A hit outside the invulnerability window costs
//! a life and opens a fresh window. The player entity survives the whole
//! run; losing the last life ends the run, not the entity.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::projectile::Projectile;
use super::upgrades::UpgradeLevels;
use super::weapon::{Weapon, WeaponKind};
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Aim angle (radians), derived from the pointer each tick
    pub rotation: f32,
    /// Movement acceleration baseline (per axis)
    pub base_accel: f32,
    pub lives: u32,
    pub radius: f32,
    pub invulnerable: bool,
    invuln_since_ms: f64,
    pub weapon: Weapon,
    pub upgrades: UpgradeLevels,
    pub upgrade_points: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: -std::f32::consts::FRAC_PI_2, // Aim up the playfield
            base_accel: PLAYER_ACCEL,
            lives: PLAYER_LIVES,
            radius: PLAYER_RADIUS,
            invulnerable: false,
            invuln_since_ms: 0.0,
            weapon: Weapon::new(WeaponKind::Standard),
            upgrades: UpgradeLevels::default(),
            upgrade_points: 0,
        }
    }

    /// Per-axis acceleration vector; also the intercept AI's lead input
    pub fn acceleration(&self) -> Vec2 {
        Vec2::splat(self.base_accel)
    }

    /// Apply held movement, damping and the bounds clamp. Each axis clamps
    /// independently so sliding along an edge still works.
    pub fn apply_movement(&mut self, axis: Vec2, dt: f32) {
        self.vel += axis * self.acceleration();
        let next = self.pos + self.vel * dt;
        if (self.radius..=PLAYFIELD_WIDTH - self.radius).contains(&next.x) {
            self.pos.x = next.x;
        }
        if (self.radius..=PLAYFIELD_HEIGHT - self.radius).contains(&next.y) {
            self.pos.y = next.y;
        }
        self.vel *= PLAYER_DAMPING;
    }

    /// Aim at the pointer; a pointer on the ship's center keeps the last angle
    pub fn aim_at(&mut self, pointer: Vec2) {
        let dir = pointer - self.pos;
        if dir.length_squared() > f32::EPSILON {
            self.rotation = dir.to_angle();
        }
    }

    /// Register a hit. Life is lost only outside the invulnerability window,
    /// which a successful hit opens.
    pub fn get_hit(&mut self, now_ms: f64) {
        if self.invulnerable {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invulnerable = true;
        self.invuln_since_ms = now_ms;
    }

    /// Expire the invulnerability window
    pub fn update_invulnerability(&mut self, now_ms: f64) {
        if self.invulnerable && now_ms - self.invuln_since_ms >= INVULN_DURATION_MS {
            self.invulnerable = false;
        }
    }

    /// Fire-rate multiplier fed into the weapon (1 + fire_rate level)
    pub fn fire_rate_mult(&self) -> f32 {
        1.0 + self.upgrades.fire_rate as f32
    }

    /// Damage multiplier fed into the weapon (1 + damage level)
    pub fn damage_mult(&self) -> f32 {
        1.0 + self.upgrades.damage as f32
    }

    /// Trigger the equipped weapon at the current aim
    pub fn fire(&mut self, now_ms: f64, rng: &mut Pcg32) -> Vec<Projectile> {
        let mult = self.fire_rate_mult();
        let damage = self.damage_mult();
        self.weapon.fire(self.pos, self.rotation, mult, damage, now_ms, rng)
    }
}
