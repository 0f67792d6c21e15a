pub mod preference;
pub mod types;

pub use self::preference::{Placement, PreferenceOutcome};
pub use self::types::{ScoreDetails, TeamScore};
use crate::config::{Config, ScoringWeights};
use crate::player::{Player, Role};
use crate::rank::Score;
use crate::team::RoleAssignment;

pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weights.clone())
    }

    pub fn placement(&self, player: &Player, role: Role) -> Placement {
        preference::calculate_placement(player, role, &self.weights)
    }

    /// Precomputes every (player, role) placement for one search run.
    pub fn placement_table(&self, players: &[Player]) -> PlacementTable {
        let rows = players
            .iter()
            .map(|p| Role::ALL.map(|role| self.placement(p, role)))
            .collect();
        PlacementTable { rows }
    }

    /// Fast path: algo/real sums only.
    pub fn score_team(&self, assignment: &RoleAssignment) -> TeamScore {
        let mut total = TeamScore::default();
        for (player, role) in assignment.placements() {
            total += self.placement(player, role);
        }
        total
    }

    /// Rich breakdown for reports.
    pub fn score_debug(&self, assignment: &RoleAssignment) -> ScoreDetails {
        let mut d = ScoreDetails {
            best_slot: Score::MIN,
            worst_slot: Score::MAX,
            ..Default::default()
        };

        for (player, role) in assignment.placements() {
            let p = self.placement(player, role);
            d.algo_score += p.algo;
            d.real_score += p.real;
            d.best_slot = d.best_slot.max(p.real);
            d.worst_slot = d.worst_slot.min(p.real);

            match p.outcome {
                PreferenceOutcome::Honored => d.honored += 1,
                PreferenceOutcome::Violated => d.violated += 1,
                PreferenceOutcome::Neutral => d.neutral += 1,
            }
            if !p.is_ranked() {
                d.unranked_slots += 1;
            }
        }
        d
    }
}

/// Per-run memo of placements, indexed by roster position then `Role as usize`.
/// Owned by a single search invocation and dropped with it.
#[derive(Debug, Clone)]
pub struct PlacementTable {
    rows: Vec<[Placement; 3]>,
}

impl PlacementTable {
    #[inline(always)]
    pub fn get(&self, player: usize, role: Role) -> Placement {
        self.rows[player][role as usize]
    }
}
