use crate::config::ScoringWeights;
use crate::player::{Player, Role};
use crate::rank::Score;
use serde::{Deserialize, Serialize};

/// How a placement relates to the player's flagged roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreferenceOutcome {
    /// No preference flagged anywhere, or nothing to honor.
    #[default]
    Neutral,
    Honored,
    /// Placed outside every flagged role.
    Violated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub real: Score,
    pub algo: Score,
    pub outcome: PreferenceOutcome,
}

impl Placement {
    /// Ranked in the role it was placed in.
    pub fn is_ranked(&self) -> bool {
        self.real > 0
    }
}

pub fn calculate_placement(player: &Player, role: Role, w: &ScoringWeights) -> Placement {
    let rank = player.rank(role);
    let real = rank.score;

    let outcome = if rank.is_preferred {
        PreferenceOutcome::Honored
    } else if player.prefers_other_than(role) {
        PreferenceOutcome::Violated
    } else {
        PreferenceOutcome::Neutral
    };

    let algo = match outcome {
        PreferenceOutcome::Honored => real + w.preference_bonus,
        PreferenceOutcome::Violated => real - w.preference_penalty,
        PreferenceOutcome::Neutral => real,
    };

    Placement { real, algo, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::{Rank, Tier};

    fn player(tank: Rank, dps: Rank, support: Rank) -> Player {
        Player::new(1, "p#1234", tank, dps, support)
    }

    #[test]
    fn test_outcomes() {
        let w = ScoringWeights::default();
        let p = player(
            Rank::new(Tier::Bronze, 5, false),
            Rank::new(Tier::Bronze, 5, false),
            Rank::new(Tier::Champion, 1, true),
        );

        let sup = calculate_placement(&p, Role::Support, &w);
        assert_eq!(sup.outcome, PreferenceOutcome::Honored);
        assert_eq!(sup.algo, 4700 + w.preference_bonus);

        let tank = calculate_placement(&p, Role::Tank, &w);
        assert_eq!(tank.outcome, PreferenceOutcome::Violated);
        assert_eq!(tank.algo, 100 - w.preference_penalty);

        let flat = player(Rank::default(), Rank::new(Tier::Gold, 3, false), Rank::default());
        let dps = calculate_placement(&flat, Role::Dps, &w);
        assert_eq!(dps.outcome, PreferenceOutcome::Neutral);
        assert_eq!(dps.algo, dps.real);
        assert!(!calculate_placement(&flat, Role::Tank, &w).is_ranked());
    }
}
