use crate::rank::Score;
use crate::scorer::TeamScore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Split-level selection key. Smaller is better; `algo_diff` decides first,
/// `real_diff` breaks ties (field order drives the derived `Ord`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub algo_diff: Score,
    pub real_diff: Score,
}

impl Objective {
    pub const PERFECT: Objective = Objective {
        algo_diff: 0,
        real_diff: 0,
    };

    pub fn between(a: &TeamScore, b: &TeamScore) -> Self {
        Self {
            algo_diff: (a.algo - b.algo).abs(),
            real_diff: (a.real - b.real).abs(),
        }
    }

    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "algo Δ{} / real Δ{}", self.algo_diff, self.real_diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        let a = Objective { algo_diff: 0, real_diff: 900 };
        let b = Objective { algo_diff: 1, real_diff: 0 };
        let c = Objective { algo_diff: 0, real_diff: 100 };
        assert!(a < b);
        assert!(c < a);
        assert!(Objective::PERFECT < c);
        assert!(Objective::default().is_perfect());
    }
}
