//! Generation parameters
//!
//! Every field has a default, so a partial TOML table (or none at all) is a
//! valid configuration.

use dungeon_engine::{DungeonError, Result};
use serde::{Deserialize, Serialize};

/// Deepest `max_depth` accepted by [`DungeonConfig::validate`]
///
/// A tree with no exits or hazards before the cap is a full ternary tree of
/// `(3^(max_depth + 1) - 1) / 2` rooms, so each extra level costs 3x memory.
pub const MAX_DEPTH_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Chance that the root call turns into an exit
    pub starting_exit_probability: f64,
    /// Multiplier applied to the exit chance at every level
    pub exit_probability_scaling: f64,
    /// Chance that a child slot is a known hazard
    pub hazard_probability: f64,
    /// Chance that a non-hazard slot gets a hidden-hazard overlay
    pub hidden_hazard_probability: f64,
    /// Calls at this depth become exits unconditionally
    pub max_depth: usize,
    /// Candidate trees built before giving up
    pub max_attempts: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        DungeonConfig {
            starting_exit_probability: 0.005,
            exit_probability_scaling: 1.5,
            hazard_probability: 0.2,
            hidden_hazard_probability: 0.1,
            max_depth: 15,
            max_attempts: 10_000,
        }
    }
}

impl DungeonConfig {
    /// Reject parameters that are out of range or that would make the
    /// regeneration loop unable to ever produce a playable root.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("starting_exit_probability", self.starting_exit_probability),
            ("hazard_probability", self.hazard_probability),
            ("hidden_hazard_probability", self.hidden_hazard_probability),
        ];
        for (name, value) in probabilities {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if self.starting_exit_probability >= 1.0 {
            return Err(invalid(
                "starting_exit_probability of 1 makes every root an exit".to_string(),
            ));
        }
        if self.hazard_probability >= 1.0 {
            return Err(invalid(
                "hazard_probability of 1 leaves no playable dungeon".to_string(),
            ));
        }
        if !self.exit_probability_scaling.is_finite() || self.exit_probability_scaling < 0.0 {
            return Err(invalid(format!(
                "exit_probability_scaling must be finite and non-negative, got {}",
                self.exit_probability_scaling
            )));
        }
        if !(1..=MAX_DEPTH_LIMIT).contains(&self.max_depth) {
            return Err(invalid(format!(
                "max_depth must be within 1..={MAX_DEPTH_LIMIT}, got {}",
                self.max_depth
            )));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> DungeonError {
    DungeonError::InvalidConfiguration { message }
}
