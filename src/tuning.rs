//! Data-driven game balance
//!
//! Difficulty profiles and progression constants, deserializable from JSON
//! so balance passes don't require a recompile.

use serde::{Deserialize, Serialize};

/// Difficulty tiers selectable before a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

/// Per-tier enemy and spawn baselines
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Base delay between spawns of the fastest-cycling archetype (ms)
    pub spawn_delay_ms: f64,
    /// Enemy base speed (px/s)
    pub enemy_speed: f32,
    /// Enemy base health
    pub enemy_health: f32,
    /// Score per kill, before archetype scaling
    pub score_multiplier: u64,
}

/// Complete balance table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub easy: DifficultyProfile,
    pub normal: DifficultyProfile,
    pub hard: DifficultyProfile,
    /// Score required for the next level is `level * level_up_score`
    pub level_up_score: u64,
    /// Spawn delay reduction per level-up (ms)
    pub spawn_delay_step_ms: f64,
    /// Spawn delays never drop below this (ms)
    pub spawn_delay_floor_ms: f64,
    /// Upgrade points awarded per level-up
    pub points_per_level: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile {
                spawn_delay_ms: 1500.0,
                enemy_speed: 150.0,
                enemy_health: 0.5,
                score_multiplier: 2,
            },
            normal: DifficultyProfile {
                spawn_delay_ms: 1000.0,
                enemy_speed: 200.0,
                enemy_health: 2.0,
                score_multiplier: 3,
            },
            hard: DifficultyProfile {
                spawn_delay_ms: 600.0,
                enemy_speed: 250.0,
                enemy_health: 3.0,
                score_multiplier: 4,
            },
            level_up_score: 20,
            spawn_delay_step_ms: 100.0,
            spawn_delay_floor_ms: 200.0,
            points_per_level: 150,
        }
    }
}

impl Tuning {
    /// Balance values for a difficulty tier
    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Parse a balance override; `None` if the JSON is malformed
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles() {
        let tuning = Tuning::default();
        assert_eq!(tuning.profile(Difficulty::Easy).score_multiplier, 2);
        assert_eq!(tuning.profile(Difficulty::Normal).enemy_speed, 200.0);
        assert_eq!(tuning.profile(Difficulty::Hard).spawn_delay_ms, 600.0);
    }

    #[test]
    fn test_from_json_override() {
        let tuning = Tuning::from_json(r#"{"level_up_score": 50}"#).unwrap();
        assert_eq!(tuning.level_up_score, 50);
        // Untouched fields keep their defaults
        assert_eq!(tuning.spawn_delay_floor_ms, 200.0);
        assert_eq!(tuning.normal.enemy_health, 2.0);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(Tuning::from_json("not json").is_none());
    }
}
