//! Upgrade catalog and the point-purchase economy
//!
//! Level-ups award points; every purchase is gated by the catalog's max
//! level and the player's balance. Offers drawn at a level-up are cached
//! on the run state until one is bought, so the same three choices survive
//! any number of frames.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::weapon::{Weapon, WeaponKind};

/// Offers drawn per level-up
pub const OFFER_COUNT: usize = 3;
/// Chance one offer slot is a weapon unlock instead of a stat
const WEAPON_OFFER_CHANCE: f64 = 0.35;
/// Acceleration gained per speed level
const SPEED_ACCEL_STEP: f32 = 20.0;

/// Closed catalog of purchasable upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    FireRate,
    Speed,
    Health,
    Damage,
    /// Replaces the equipped weapon outright; not leveled
    Weapon(WeaponKind),
}

impl UpgradeKind {
    /// The stat kinds that level up
    pub const STATS: [UpgradeKind; 4] = [
        UpgradeKind::FireRate,
        UpgradeKind::Speed,
        UpgradeKind::Health,
        UpgradeKind::Damage,
    ];

    /// Weapons that can appear as unlock offers
    pub const WEAPON_UNLOCKS: [WeaponKind; 3] =
        [WeaponKind::Beam, WeaponKind::Sniper, WeaponKind::Spread];

    /// Point cost per purchase
    pub fn cost(&self) -> u32 {
        match self {
            UpgradeKind::FireRate => 100,
            UpgradeKind::Speed => 150,
            UpgradeKind::Health => 200,
            UpgradeKind::Damage => 150,
            UpgradeKind::Weapon(_) => 250,
        }
    }

    /// Maximum level; weapon unlocks are single-shot
    pub fn max_level(&self) -> u32 {
        match self {
            UpgradeKind::FireRate => 4,
            UpgradeKind::Speed => 3,
            UpgradeKind::Health => 2,
            UpgradeKind::Damage => 4,
            UpgradeKind::Weapon(_) => 1,
        }
    }

    /// Short description for the host's menu
    pub fn description(&self) -> &'static str {
        match self {
            UpgradeKind::FireRate => "Shorter weapon cooldown",
            UpgradeKind::Speed => "Faster acceleration",
            UpgradeKind::Health => "+1 life",
            UpgradeKind::Damage => "Heavier hits",
            UpgradeKind::Weapon(WeaponKind::Standard) => "Standard cannon",
            UpgradeKind::Weapon(WeaponKind::Beam) => "Rapid beam array",
            UpgradeKind::Weapon(WeaponKind::Sniper) => "Piercing sniper round",
            UpgradeKind::Weapon(WeaponKind::Spread) => "Seven-pellet spread",
        }
    }
}

/// Per-kind upgrade levels carried by the player
#[derive(Debug, Clone, Copy, Default)]
pub struct UpgradeLevels {
    pub fire_rate: u32,
    pub speed: u32,
    pub health: u32,
    pub damage: u32,
}

impl UpgradeLevels {
    /// Current level for a kind; weapon unlocks don't level
    pub fn level(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::FireRate => self.fire_rate,
            UpgradeKind::Speed => self.speed,
            UpgradeKind::Health => self.health,
            UpgradeKind::Damage => self.damage,
            UpgradeKind::Weapon(_) => 0,
        }
    }

    fn bump(&mut self, kind: UpgradeKind) {
        match kind {
            UpgradeKind::FireRate => self.fire_rate += 1,
            UpgradeKind::Speed => self.speed += 1,
            UpgradeKind::Health => self.health += 1,
            UpgradeKind::Damage => self.damage += 1,
            UpgradeKind::Weapon(_) => {}
        }
    }
}

/// Attempt a purchase. Fails (returning `false`, mutating nothing) when the
/// balance is short, the kind is at max level, or the weapon is already
/// equipped.
pub fn apply_upgrade(player: &mut Player, kind: UpgradeKind) -> bool {
    if player.upgrade_points < kind.cost() {
        return false;
    }
    if let UpgradeKind::Weapon(weapon_kind) = kind {
        if player.weapon.kind == weapon_kind {
            return false;
        }
        player.upgrade_points -= kind.cost();
        player.weapon = Weapon::new(weapon_kind);
        return true;
    }
    if player.upgrades.level(kind) >= kind.max_level() {
        return false;
    }
    player.upgrade_points -= kind.cost();
    player.upgrades.bump(kind);
    match kind {
        UpgradeKind::Speed => player.base_accel += SPEED_ACCEL_STEP,
        UpgradeKind::Health => player.lives += 1,
        // fire_rate and damage levels feed the weapon multipliers at fire time
        _ => {}
    }
    true
}

/// Draw the level-up offers: distinct stat kinds below their max level,
/// with one slot occasionally replaced by a weapon the player doesn't hold.
pub fn draw_offers(player: &Player, rng: &mut Pcg32) -> Vec<UpgradeKind> {
    let mut offers: Vec<UpgradeKind> = UpgradeKind::STATS
        .iter()
        .copied()
        .filter(|kind| player.upgrades.level(*kind) < kind.max_level())
        .collect();
    offers.shuffle(rng);
    offers.truncate(OFFER_COUNT);

    let mut weapons: Vec<WeaponKind> = UpgradeKind::WEAPON_UNLOCKS
        .iter()
        .copied()
        .filter(|kind| *kind != player.weapon.kind)
        .collect();
    if !weapons.is_empty() && rng.random_bool(WEAPON_OFFER_CHANCE) {
        weapons.shuffle(rng);
        if offers.len() == OFFER_COUNT {
            offers.pop();
        }
        offers.push(UpgradeKind::Weapon(weapons[0]));
    }
    offers
}
