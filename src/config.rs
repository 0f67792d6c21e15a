use crate::error::{TeamForgeError, TfResult};
use crate::rank::{Score, MAX_RANK_SCORE};
use crate::team::TEAM_SIZE;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest real score a team of five can reach.
pub const MAX_TEAM_REAL_SCORE: Score = TEAM_SIZE as Score * MAX_RANK_SCORE;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub labels: TeamLabels,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchParams {
    /// Reject role placements where the player is unranked in that role.
    #[arg(long, default_value_t = false)]
    pub require_ranked_slots: bool,

    /// Evaluate all 126 splits even after a perfect one is found.
    #[arg(long, default_value_t = false)]
    pub exhaustive: bool,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Added when a player lands in a role they flagged preferred.
    #[arg(long, default_value_t = 100_000_000)]
    pub preference_bonus: Score,

    /// Subtracted when a player lands outside the role(s) they flagged.
    #[arg(long, default_value_t = 50_000_000)]
    pub preference_penalty: Score,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            preference_bonus: 100_000_000,
            preference_penalty: 50_000_000,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamLabels {
    #[arg(long, default_value = "TEAM 1")]
    pub team_a_name: String,
    #[arg(long, default_value = "TEAM 2")]
    pub team_b_name: String,
}

impl Default for TeamLabels {
    fn default() -> Self {
        Self {
            team_a_name: "TEAM 1".to_string(),
            team_b_name: "TEAM 2".to_string(),
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// One honored preference must outweigh one avoided violation, and both
    /// must outweigh any possible difference in raw team scores. The gap
    /// between the best and worst possible team must still fit in a `Score`.
    pub fn validate(&self) -> TfResult<()> {
        if self.preference_penalty <= MAX_TEAM_REAL_SCORE {
            return Err(TeamForgeError::Config(format!(
                "preference_penalty ({}) must exceed the max team score ({})",
                self.preference_penalty, MAX_TEAM_REAL_SCORE
            )));
        }
        if self.preference_bonus <= self.preference_penalty {
            return Err(TeamForgeError::Config(format!(
                "preference_bonus ({}) must exceed preference_penalty ({})",
                self.preference_bonus, self.preference_penalty
            )));
        }
        if self.team_score_span().is_none() {
            return Err(TeamForgeError::Config(format!(
                "preference_bonus ({}) and preference_penalty ({}) are too large to score a team of {}",
                self.preference_bonus, self.preference_penalty, TEAM_SIZE
            )));
        }
        Ok(())
    }

    /// Distance between an all-honored champion team and an all-violated
    /// unranked one, or `None` on overflow.
    fn team_score_span(&self) -> Option<Score> {
        self.preference_bonus
            .checked_add(MAX_RANK_SCORE)?
            .checked_add(self.preference_penalty)?
            .checked_mul(TEAM_SIZE as Score)
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(preference_bonus, "preference_bonus");
        update_if_present!(preference_penalty, "preference_penalty");
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.weights.validate()?;
        Ok(config)
    }
}
