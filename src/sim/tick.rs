//! Per-tick simulation advance
//!
//! One `tick` call applies input, advances every entity in a fixed order
//! and resolves collisions. The upgrade overlay short-circuits the update
//! for that tick instead of blocking.

use glam::Vec2;

use super::collision::{resolve_player_hits, resolve_projectile_hits};
use super::enemy::Enemy;
use super::state::{GamePhase, GameState};
use super::upgrades;
use crate::tuning::Difficulty;

/// Input signals for a single tick.
///
/// Movement and fire are "currently held" queries; the rest are discrete
/// press events, consumed the tick they arrive. The core never sees a
/// device API, only this snapshot.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer position in playfield coordinates
    pub pointer: Option<Vec2>,
    /// Primary action held (fire)
    pub fire: bool,
    /// Advance past the menu
    pub start: bool,
    /// Difficulty pick on the select screen
    pub select_difficulty: Option<Difficulty>,
    /// Toggle the upgrade overlay
    pub toggle_upgrades: bool,
    /// Buy the offer at this index while the overlay is open
    pub choose_upgrade: Option<usize>,
    /// Restart after game over
    pub restart: bool,
}

impl TickInput {
    /// Held movement as a per-axis direction
    pub fn move_axis(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f32,
            (self.down as i32 - self.up as i32) as f32,
        )
    }
}

/// Advance the game by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.clock_ms += f64::from(dt) * 1000.0;

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.phase = GamePhase::DifficultySelect;
            }
        }
        GamePhase::DifficultySelect => {
            if let Some(difficulty) = input.select_difficulty {
                state.difficulty = difficulty;
                state.reset_run();
                state.phase = GamePhase::Playing;
                log::info!(
                    "Run started: difficulty={}, seed={}",
                    difficulty.as_str(),
                    state.seed
                );
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset_run();
                state.phase = GamePhase::Playing;
                log::info!("Run restarted: difficulty={}", state.difficulty.as_str());
            }
        }
        GamePhase::Playing => update_playing(state, input, dt),
    }
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    // Upgrade overlay: only menu input is processed, the sim holds still
    if state.upgrade_menu_open {
        if input.toggle_upgrades {
            state.upgrade_menu_open = false;
            return;
        }
        if let Some(index) = input.choose_upgrade {
            if let Some(&kind) = state.pending_offers.get(index) {
                if upgrades::apply_upgrade(&mut state.player, kind) {
                    state.pending_offers.clear();
                    state.has_upgrade_available = false;
                    state.upgrade_menu_open = false;
                }
            }
        }
        return;
    }

    if input.toggle_upgrades {
        state.upgrade_menu_open = true;
        if state.pending_offers.is_empty() {
            state.pending_offers = upgrades::draw_offers(&state.player, &mut state.rng);
        }
        return;
    }

    let now = state.clock_ms;

    // (1) Level-up: exactly one step per tick even far past the threshold
    if state.score >= state.next_level_threshold() {
        level_up(state);
    }

    // (2) Fire input
    if input.fire {
        let shots = state.player.fire(now, &mut state.rng);
        state.projectiles.extend(shots);
    }

    // (3) Spawn scheduling, one timer per archetype
    spawn_enemies(state);

    // (4) Player movement and aim
    if let Some(pointer) = input.pointer {
        state.player.aim_at(pointer);
    }
    state.player.apply_movement(input.move_axis(), dt);
    state.player.update_invulnerability(now);

    // (5) Enemy AI
    for enemy in state.enemies.iter_mut() {
        enemy.advance(Some(&state.player), dt);
    }
    state.enemies.retain(|enemy| !enemy.out_of_bounds());

    // (6) Projectiles
    state.projectiles.retain_mut(|projectile| projectile.update(dt, now));

    // (7) Damage indicators
    state.indicators.retain_mut(|indicator| indicator.update(dt));

    // (8) Projectile-enemy collisions
    state.score += resolve_projectile_hits(
        &mut state.projectiles,
        &mut state.enemies,
        &mut state.indicators,
    );

    // (9) Player-enemy collisions
    if resolve_player_hits(&mut state.player, &mut state.enemies, now) {
        state.phase = GamePhase::GameOver;
        log::info!("Game over: level={}, score={}", state.level, state.score);
    }
}

fn level_up(state: &mut GameState) {
    state.level += 1;
    for spawner in &mut state.spawners {
        spawner.delay_ms = (spawner.delay_ms - state.tuning.spawn_delay_step_ms)
            .max(state.tuning.spawn_delay_floor_ms);
    }
    state.player.upgrade_points += state.tuning.points_per_level;
    state.has_upgrade_available = true;
    state.upgrade_menu_open = true;
    if state.pending_offers.is_empty() {
        state.pending_offers = upgrades::draw_offers(&state.player, &mut state.rng);
    }
    log::info!("Level {} reached: score={}", state.level, state.score);
}

fn spawn_enemies(state: &mut GameState) {
    let now = state.clock_ms;
    let profile = *state.tuning.profile(state.difficulty);
    for spawner in &mut state.spawners {
        if state.level < spawner.archetype.unlock_level() {
            continue;
        }
        if now - spawner.last_spawn_ms < spawner.delay_ms {
            continue;
        }
        spawner.last_spawn_ms = now;
        state.enemies.push(Enemy::spawn(
            spawner.archetype,
            &profile,
            state.level,
            &mut state.rng,
        ));
    }
}
