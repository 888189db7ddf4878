//! Collision queries and damage resolution
//!
//! Everything is circle-on-circle. Projectile hits spend pierce budget and
//! feed the score; player contact trades the enemy for a life unless the
//! invulnerability window is open.

use glam::Vec2;

use super::enemy::Enemy;
use super::player::Player;
use super::projectile::Projectile;
use super::state::DamageIndicator;

/// Circle overlap test
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance_squared(b) < (ra + rb) * (ra + rb)
}

/// Resolve projectile-enemy hits for one tick.
///
/// Every enemy overlapping a projectile takes its full damage (no
/// splitting); the projectile spends one pierce unit per enemy and is
/// dropped on the hit that exhausts the budget. Kills award the enemy's
/// score value. Returns the score gained this tick.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    indicators: &mut Vec<DamageIndicator>,
) -> u64 {
    let mut scored = 0u64;
    projectiles.retain_mut(|projectile| {
        let hit_pos = projectile.hit_pos();
        let hit_radius = projectile.kind.radius();
        for enemy in enemies.iter_mut() {
            if enemy.health <= 0.0 {
                // Already killed earlier this tick
                continue;
            }
            if !circles_overlap(hit_pos, hit_radius, enemy.pos, enemy.radius) {
                continue;
            }
            indicators.push(DamageIndicator::new(
                enemy.pos,
                projectile.damage,
                enemy.archetype.indicator_color(),
            ));
            if enemy.take_damage(projectile.damage) {
                scored += enemy.score_value;
            }
            if !projectile.consume_pierce() {
                return false;
            }
        }
        true
    });
    enemies.retain(|enemy| enemy.health > 0.0);
    scored
}

/// Resolve player-enemy contact for one tick.
///
/// Contact destroys the enemy without scoring; the player loses a life
/// unless inside the invulnerability window. Returns `true` when the run
/// is over (lives exhausted).
pub fn resolve_player_hits(player: &mut Player, enemies: &mut Vec<Enemy>, now_ms: f64) -> bool {
    enemies.retain(|enemy| {
        if circles_overlap(player.pos, player.radius, enemy.pos, enemy.radius) {
            player.get_hit(now_ms);
            false
        } else {
            true
        }
    });
    player.lives == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ai::AiStrategy;
    use crate::sim::enemy::EnemyArchetype;
    use crate::sim::projectile::ProjectileKind;
    use std::f32::consts::FRAC_PI_2;

    const UP: f32 = -FRAC_PI_2;

    fn enemy_at(pos: Vec2, health: f32) -> Enemy {
        Enemy {
            archetype: EnemyArchetype::Scout,
            pos,
            speed: 200.0,
            health,
            max_health: health,
            score_value: 3,
            radius: 15.0,
            strategy: AiStrategy::Seek,
        }
    }

    /// A projectile whose hit point sits exactly at `hit_pos`
    fn projectile_hitting(kind: ProjectileKind, hit_pos: Vec2) -> Projectile {
        let origin = hit_pos - glam::Vec2::from_angle(UP) * kind.offset_distance();
        Projectile::new(kind, origin, UP, 1.0, 0.0)
    }

    #[test]
    fn test_single_hit_kills_and_scores() {
        let mut projectiles = vec![projectile_hitting(ProjectileKind::Standard, Vec2::new(100.0, 100.0))];
        let mut enemies = vec![enemy_at(Vec2::new(100.0, 100.0), 0.5)];
        let mut indicators = Vec::new();

        let scored = resolve_projectile_hits(&mut projectiles, &mut enemies, &mut indicators);
        assert_eq!(scored, 3);
        assert!(enemies.is_empty());
        assert!(projectiles.is_empty());
        assert_eq!(indicators.len(), 1);
        assert_eq!(indicators[0].amount, 0.5);
    }

    #[test]
    fn test_pierce_passes_through_three() {
        // Three 1-hp enemies stacked along the hit point; pierce 2 clears
        // all of them and the projectile dies on the third hit
        let hit = Vec2::new(200.0, 200.0);
        let mut projectiles = vec![projectile_hitting(ProjectileKind::Sniper, hit)];
        let mut enemies = vec![
            enemy_at(hit, 1.0),
            enemy_at(hit + Vec2::new(10.0, 0.0), 1.0),
            enemy_at(hit - Vec2::new(10.0, 0.0), 1.0),
        ];
        let mut indicators = Vec::new();

        let scored = resolve_projectile_hits(&mut projectiles, &mut enemies, &mut indicators);
        assert_eq!(scored, 9);
        assert!(enemies.is_empty());
        assert!(projectiles.is_empty());
        assert_eq!(indicators.len(), 3);
    }

    #[test]
    fn test_pierce_budget_stops_fourth_enemy() {
        let hit = Vec2::new(200.0, 200.0);
        let mut projectiles = vec![projectile_hitting(ProjectileKind::Sniper, hit)];
        let mut enemies = vec![
            enemy_at(hit, 1.0),
            enemy_at(hit, 1.0),
            enemy_at(hit, 1.0),
            enemy_at(hit, 1.0),
        ];
        let mut indicators = Vec::new();

        resolve_projectile_hits(&mut projectiles, &mut enemies, &mut indicators);
        // Exactly pierce + 1 hits landed
        assert_eq!(enemies.len(), 1);
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_same_tick_damage_accumulates() {
        // Two standard projectiles on one enemy in the same tick: it takes
        // the sum of both
        let hit = Vec2::new(300.0, 300.0);
        let mut projectiles = vec![
            projectile_hitting(ProjectileKind::Standard, hit),
            projectile_hitting(ProjectileKind::Standard, hit),
        ];
        let mut enemies = vec![enemy_at(hit, 1.0)];
        let mut indicators = Vec::new();

        let scored = resolve_projectile_hits(&mut projectiles, &mut enemies, &mut indicators);
        assert_eq!(scored, 3);
        assert!(enemies.is_empty());
        assert!(projectiles.is_empty());
        assert_eq!(indicators.len(), 2);
    }

    #[test]
    fn test_miss_leaves_everything() {
        let mut projectiles =
            vec![projectile_hitting(ProjectileKind::Standard, Vec2::new(100.0, 100.0))];
        let mut enemies = vec![enemy_at(Vec2::new(500.0, 500.0), 1.0)];
        let mut indicators = Vec::new();

        let scored = resolve_projectile_hits(&mut projectiles, &mut enemies, &mut indicators);
        assert_eq!(scored, 0);
        assert_eq!(enemies.len(), 1);
        assert_eq!(projectiles.len(), 1);
        assert!(indicators.is_empty());
    }

    #[test]
    fn test_player_contact_costs_life_not_score() {
        let mut player = Player::new(Vec2::new(400.0, 550.0));
        let mut enemies = vec![enemy_at(Vec2::new(400.0, 560.0), 5.0)];

        let over = resolve_player_hits(&mut player, &mut enemies, 1000.0);
        assert!(!over);
        assert!(enemies.is_empty());
        assert_eq!(player.lives, 2);
        assert!(player.invulnerable);
    }

    #[test]
    fn test_invulnerable_player_still_destroys_enemy() {
        let mut player = Player::new(Vec2::new(400.0, 550.0));
        player.get_hit(0.0);
        let lives = player.lives;
        let mut enemies = vec![enemy_at(Vec2::new(400.0, 560.0), 5.0)];

        resolve_player_hits(&mut player, &mut enemies, 100.0);
        assert!(enemies.is_empty());
        assert_eq!(player.lives, lives);
    }

    #[test]
    fn test_last_life_ends_run() {
        let mut player = Player::new(Vec2::new(400.0, 550.0));
        player.lives = 1;
        let mut enemies = vec![enemy_at(Vec2::new(400.0, 560.0), 5.0)];

        assert!(resolve_player_hits(&mut player, &mut enemies, 1000.0));
        assert_eq!(player.lives, 0);
    }
}
