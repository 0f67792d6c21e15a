use crate::rank::Score;
use serde::{Deserialize, Serialize};

/// Algo/real pair for one team of five.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub algo: Score,
    pub real: Score,
}

impl std::ops::AddAssign<super::Placement> for TeamScore {
    fn add_assign(&mut self, p: super::Placement) {
        self.algo += p.algo;
        self.real += p.real;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDetails {
    // Top-line Scores
    pub algo_score: Score,
    pub real_score: Score,

    // Preference counters
    pub honored: usize,
    pub violated: usize,
    pub neutral: usize,

    // Slots filled by a player unranked in that role
    pub unranked_slots: usize,

    // Spread
    pub best_slot: Score,
    pub worst_slot: Score,
}

impl ScoreDetails {
    pub fn average(&self) -> Score {
        self.real_score / crate::team::TEAM_SIZE as Score
    }
}
