//! Space Fighter entry point
//!
//! Headless demo driver: runs the simulation core with a small autopilot
//! and logs run progress. Rendering hosts embed the library instead and
//! draw from the public state each frame.

use glam::Vec2;

use space_fighter::consts::*;
use space_fighter::sim::{GamePhase, GameState, TickInput, tick};
use space_fighter::tuning::{Difficulty, Tuning};

/// Demo length in simulated seconds
const DEMO_SECS: f32 = 120.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Space Fighter headless demo, seed={seed}");

    let mut state = GameState::new(seed, Tuning::default());
    let ticks = (DEMO_SECS / TARGET_DT) as u32;
    for _ in 0..ticks {
        let input = autopilot(&state);
        tick(&mut state, &input, TARGET_DT);
    }

    log::info!(
        "Demo finished: phase={:?}, level={}, score={}, lives={}",
        state.phase,
        state.level,
        state.score,
        state.player.lives
    );
}

/// Minimal bot: start the run, aim at the nearest enemy, keep firing, hold
/// the bottom-center lane, and buy the first affordable offer.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        GamePhase::Menu => input.start = true,
        GamePhase::DifficultySelect => input.select_difficulty = Some(Difficulty::Normal),
        GamePhase::GameOver => input.restart = true,
        GamePhase::Playing => {
            if state.upgrade_menu_open {
                let buyable = state.pending_offers.iter().position(|kind| {
                    kind.cost() <= state.player.upgrade_points
                        && state.player.upgrades.level(*kind) < kind.max_level()
                });
                match buyable {
                    Some(index) => input.choose_upgrade = Some(index),
                    None => input.toggle_upgrades = true,
                }
                return input;
            }

            let player = &state.player;
            let nearest = state.enemies.iter().min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            input.pointer = Some(match nearest {
                Some(enemy) => enemy.pos,
                None => Vec2::new(player.pos.x, 0.0),
            });
            input.fire = true;

            // Drift back toward the bottom-center lane
            input.left = player.pos.x > PLAYFIELD_WIDTH / 2.0 + 40.0;
            input.right = player.pos.x < PLAYFIELD_WIDTH / 2.0 - 40.0;
            input.down = player.pos.y < PLAYFIELD_HEIGHT - 80.0;
            input.up = player.pos.y > PLAYFIELD_HEIGHT - 40.0;
        }
    }
    input
}
