//! Projectile archetypes and ballistics
//!
//! A projectile's velocity is fixed at creation from its firing angle and
//! archetype speed; afterwards it only advances, ages and spends its
//! pierce budget.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Closed set of projectile archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Balanced single-hit round
    Standard,
    /// High-velocity round that passes through two extra targets
    Sniper,
    /// Near-instant beam pulse; expires by lifetime, not bounds
    Beam,
    /// One pellet of the spread fan
    Spread,
}

impl ProjectileKind {
    /// Damage per hit for a given damage multiplier
    pub fn damage(&self, damage_mult: f32) -> f32 {
        match self {
            ProjectileKind::Standard => 1.0 * (damage_mult / 2.0),
            ProjectileKind::Sniper => 5.0 * (damage_mult / 2.0),
            ProjectileKind::Beam => 0.1 * damage_mult,
            ProjectileKind::Spread => 0.5 * (damage_mult / 2.0),
        }
    }

    /// Muzzle speed (px/s)
    pub fn speed(&self) -> f32 {
        match self {
            ProjectileKind::Standard => 500.0,
            ProjectileKind::Sniper => 1200.0,
            ProjectileKind::Beam => 5000.0,
            ProjectileKind::Spread => 800.0,
        }
    }

    /// Fixed lifetime (ms); `None` expires on bounds exit only
    pub fn lifetime_ms(&self) -> Option<f64> {
        match self {
            ProjectileKind::Standard | ProjectileKind::Sniper => None,
            ProjectileKind::Beam => Some(100.0),
            ProjectileKind::Spread => Some(400.0),
        }
    }

    /// Extra enemies the projectile may damage after the first hit
    pub fn pierce(&self) -> u32 {
        match self {
            ProjectileKind::Standard => 0,
            ProjectileKind::Sniper => 2,
            ProjectileKind::Beam => u32::MAX,
            ProjectileKind::Spread => 1,
        }
    }

    /// Hit-origin offset from the firing entity's center (px)
    pub fn offset_distance(&self) -> f32 {
        match self {
            ProjectileKind::Standard => 20.0,
            ProjectileKind::Sniper => 30.0,
            ProjectileKind::Beam => 520.0,
            ProjectileKind::Spread => 16.0,
        }
    }

    /// Collision radius (px)
    pub fn radius(&self) -> f32 {
        match self {
            ProjectileKind::Standard => 10.0,
            ProjectileKind::Sniper => 15.0,
            ProjectileKind::Beam => 10.0,
            ProjectileKind::Spread => 8.0,
        }
    }

    /// Beams sweep past the playfield within their lifetime; they skip the
    /// bounds check entirely
    fn expires_on_bounds(&self) -> bool {
        !matches!(self, ProjectileKind::Beam)
    }
}

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Firing angle (radians), fixed for the projectile's lifetime
    pub rotation: f32,
    /// Damage applied per hit
    pub damage: f32,
    /// Remaining extra targets
    pub pierce_remaining: u32,
    /// Clock time at creation (ms)
    pub spawned_at_ms: f64,
}

impl Projectile {
    pub fn new(
        kind: ProjectileKind,
        origin: Vec2,
        rotation: f32,
        damage_mult: f32,
        now_ms: f64,
    ) -> Self {
        Self {
            kind,
            pos: origin,
            vel: Vec2::from_angle(rotation) * kind.speed(),
            rotation,
            damage: kind.damage(damage_mult),
            pierce_remaining: kind.pierce(),
            spawned_at_ms: now_ms,
        }
    }

    /// Hit/render point: the muzzle offset ahead of the tracked position
    /// along the fixed firing direction
    pub fn hit_pos(&self) -> Vec2 {
        self.pos + Vec2::from_angle(self.rotation) * self.kind.offset_distance()
    }

    /// Advance one tick. Returns `false` once the projectile expired,
    /// testing bounds exit before lifetime.
    pub fn update(&mut self, dt: f32, now_ms: f64) -> bool {
        self.pos += self.vel * dt;
        if self.kind.expires_on_bounds() {
            let y = self.hit_pos().y;
            let margin = self.kind.radius();
            if y < -margin || y > PLAYFIELD_HEIGHT + margin {
                return false;
            }
        }
        if let Some(lifetime) = self.kind.lifetime_ms() {
            if now_ms - self.spawned_at_ms >= lifetime {
                return false;
            }
        }
        true
    }

    /// Spend one pierce unit. Returns `false` on the hit that exhausts the
    /// budget: a projectile with pierce `k` lands exactly `k + 1` hits.
    pub fn consume_pierce(&mut self) -> bool {
        if self.pierce_remaining == 0 {
            return false;
        }
        self.pierce_remaining -= 1;
        true
    }
}
