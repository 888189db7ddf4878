//! Weapon variants and fire gating
//!
//! A weapon is a cooldown gate in front of a projectile archetype. Firing
//! while the cooldown (scaled by the fire-rate multiplier) has not elapsed
//! produces nothing.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::projectile::{Projectile, ProjectileKind};

/// Pellets per spread trigger
pub const SPREAD_COUNT: usize = 7;
/// Max rotation jitter per pellet (degrees)
const SPREAD_JITTER_DEG: f32 = 6.0;
/// Max lateral pellet offset (px)
const SPREAD_LATERAL: f32 = 8.0;

/// Closed set of weapon variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    Standard,
    Beam,
    Sniper,
    Spread,
}

impl WeaponKind {
    /// Base cooldown between triggers (ms)
    pub fn cooldown_ms(&self) -> f64 {
        match self {
            WeaponKind::Standard => 500.0,
            WeaponKind::Beam => 100.0,
            WeaponKind::Sniper => 1500.0,
            WeaponKind::Spread => 800.0,
        }
    }

    /// Projectile archetype this weapon fires
    pub fn projectile(&self) -> ProjectileKind {
        match self {
            WeaponKind::Standard => ProjectileKind::Standard,
            WeaponKind::Beam => ProjectileKind::Beam,
            WeaponKind::Sniper => ProjectileKind::Sniper,
            WeaponKind::Spread => ProjectileKind::Spread,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponKind::Standard => "standard",
            WeaponKind::Beam => "beam",
            WeaponKind::Sniper => "sniper",
            WeaponKind::Spread => "spread",
        }
    }
}

/// Equipped weapon: the variant plus its cooldown clock
#[derive(Debug, Clone)]
pub struct Weapon {
    pub kind: WeaponKind,
    last_shot_ms: f64,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            // The first trigger of a fresh weapon always fires
            last_shot_ms: f64::NEG_INFINITY,
        }
    }

    /// Fire if `now - last_shot >= cooldown / fire_rate_mult`; otherwise
    /// returns no projectiles. A successful trigger resets the cooldown and
    /// yields one projectile, or a full jittered fan for spread weapons.
    pub fn fire(
        &mut self,
        origin: Vec2,
        rotation: f32,
        fire_rate_mult: f32,
        damage_mult: f32,
        now_ms: f64,
        rng: &mut Pcg32,
    ) -> Vec<Projectile> {
        let cooldown = self.kind.cooldown_ms() / f64::from(fire_rate_mult);
        if now_ms - self.last_shot_ms < cooldown {
            return Vec::new();
        }
        self.last_shot_ms = now_ms;

        let kind = self.kind.projectile();
        match self.kind {
            WeaponKind::Spread => {
                let lateral = Vec2::from_angle(rotation).perp();
                (0..SPREAD_COUNT)
                    .map(|_| {
                        let jitter = rng
                            .random_range(-SPREAD_JITTER_DEG..=SPREAD_JITTER_DEG)
                            .to_radians();
                        let slide = rng.random_range(-SPREAD_LATERAL..=SPREAD_LATERAL);
                        Projectile::new(
                            kind,
                            origin + lateral * slide,
                            rotation + jitter,
                            damage_mult,
                            now_ms,
                        )
                    })
                    .collect()
            }
            _ => vec![Projectile::new(kind, origin, rotation, damage_mult, now_ms)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_PI_2;

    const UP: f32 = -FRAC_PI_2;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_cooldown_gating() {
        let mut weapon = Weapon::new(WeaponKind::Standard);
        let mut rng = rng();
        let origin = Vec2::new(400.0, 550.0);

        assert_eq!(weapon.fire(origin, UP, 1.0, 1.0, 0.0, &mut rng).len(), 1);
        assert!(weapon.fire(origin, UP, 1.0, 1.0, 300.0, &mut rng).is_empty());
        assert_eq!(weapon.fire(origin, UP, 1.0, 1.0, 501.0, &mut rng).len(), 1);
    }

    #[test]
    fn test_fire_rate_mult_shortens_cooldown() {
        let mut weapon = Weapon::new(WeaponKind::Standard);
        let mut rng = rng();
        let origin = Vec2::new(400.0, 550.0);

        assert_eq!(weapon.fire(origin, UP, 2.0, 1.0, 0.0, &mut rng).len(), 1);
        // Half the base cooldown at mult 2
        assert!(weapon.fire(origin, UP, 2.0, 1.0, 200.0, &mut rng).is_empty());
        assert_eq!(weapon.fire(origin, UP, 2.0, 1.0, 251.0, &mut rng).len(), 1);
    }

    #[test]
    fn test_damage_mult_forwarded() {
        let mut weapon = Weapon::new(WeaponKind::Sniper);
        let mut rng = rng();
        let shots = weapon.fire(Vec2::ZERO, UP, 1.0, 3.0, 0.0, &mut rng);
        assert_eq!(shots[0].damage, ProjectileKind::Sniper.damage(3.0));
    }

    #[test]
    fn test_spread_fan() {
        let mut weapon = Weapon::new(WeaponKind::Spread);
        let mut rng = rng();
        let origin = Vec2::new(400.0, 550.0);
        let shots = weapon.fire(origin, UP, 1.0, 1.0, 0.0, &mut rng);

        assert_eq!(shots.len(), SPREAD_COUNT);
        for shot in &shots {
            assert!((shot.rotation - UP).abs() <= SPREAD_JITTER_DEG.to_radians() + 1e-6);
            assert!(shot.pos.distance(origin) <= SPREAD_LATERAL + 1e-3);
        }
        // One trigger, one cooldown: an immediate re-fire yields nothing
        assert!(weapon.fire(origin, UP, 1.0, 1.0, 1.0, &mut rng).is_empty());
    }

    proptest! {
        /// Two triggers inside one scaled cooldown window never both fire.
        #[test]
        fn prop_no_double_fire_within_cooldown(
            gap in 0.0f64..499.0,
            mult in 1.0f32..5.0,
        ) {
            let mut weapon = Weapon::new(WeaponKind::Standard);
            let mut rng = rng();
            let cooldown = WeaponKind::Standard.cooldown_ms() / f64::from(mult);

            let first = weapon.fire(Vec2::ZERO, UP, mult, 1.0, 0.0, &mut rng);
            prop_assert_eq!(first.len(), 1);
            let second = weapon.fire(Vec2::ZERO, UP, mult, 1.0, gap, &mut rng);
            prop_assert_eq!(second.is_empty(), gap < cooldown);
        }
    }
}
