use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub type Score = i64;

/// Gap between two adjacent tiers.
pub const TIER_STEP: Score = 600;
/// Gap between two adjacent divisions inside a tier.
pub const DIVISION_STEP: Score = 100;

pub const MIN_DIVISION: u8 = 1;
pub const MAX_DIVISION: u8 = 5;

/// Highest score a single rank can carry (Champion 1).
pub const MAX_RANK_SCORE: Score = 7 * TIER_STEP + 5 * DIVISION_STEP;

/// "Average platinum 3". Only parsing collaborators use this, when a rank is
/// ambiguous; the balancing core never reads it.
pub const ESTIMATED_DEFAULT_SCORE: Score = 2250;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Champion,
    Unranked,
}

impl Tier {
    /// 0 (Bronze) ..= 7 (Champion). `None` for the unranked sentinel.
    pub fn index(self) -> Option<u8> {
        match self {
            Self::Unranked => None,
            t => Some(t as u8),
        }
    }

    /// Anything outside 0..=7 resolves to `Unranked`.
    pub fn from_index(idx: usize) -> Tier {
        Self::ranked().nth(idx).unwrap_or(Tier::Unranked)
    }

    pub fn ranked() -> impl Iterator<Item = Tier> {
        Tier::iter().filter(|t| *t != Tier::Unranked)
    }

    pub fn is_ranked(self) -> bool {
        self != Tier::Unranked
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bronze => "브론즈",
            Self::Silver => "실버",
            Self::Gold => "골드",
            Self::Platinum => "플레",
            Self::Diamond => "다이아",
            Self::Master => "마스터",
            Self::Grandmaster => "그마",
            Self::Champion => "챔피언",
            Self::Unranked => "미배치",
        }
    }

    /// First character of the label, used in compact badges.
    pub fn short_label(self) -> char {
        self.label().chars().next().unwrap_or('?')
    }
}

/// Score model: `tier * 600 + (6 - division) * 100`.
///
/// Division 1 is the best sub-rank (+500), division 5 the worst (+100), so
/// the spread inside one tier (400) never reaches the next tier (600).
/// Unranked always scores 0. Ranked divisions are clamped into 1..=5.
pub fn score(tier: Tier, division: u8) -> Score {
    match tier.index() {
        None => 0,
        Some(idx) => {
            let div = division.clamp(MIN_DIVISION, MAX_DIVISION) as Score;
            idx as Score * TIER_STEP + (6 - div) * DIVISION_STEP
        }
    }
}

/// One player's standing in one role.
///
/// Deserialization goes through [`RankRecord`], so a stored `score` is
/// ignored and recomputed, and unranked entries lose any preference flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RankRecord")]
pub struct Rank {
    pub tier: Tier,
    pub division: u8,
    pub score: Score,
    pub is_preferred: bool,
}

impl Rank {
    pub fn new(tier: Tier, division: u8, is_preferred: bool) -> Self {
        if !tier.is_ranked() {
            return Self::unranked();
        }
        let division = division.clamp(MIN_DIVISION, MAX_DIVISION);
        Self {
            tier,
            division,
            score: score(tier, division),
            is_preferred,
        }
    }

    pub fn unranked() -> Self {
        Self {
            tier: Tier::Unranked,
            division: 0,
            score: 0,
            is_preferred: false,
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.tier.is_ranked()
    }

    /// Token the roster parser reads back, e.g. `diamond3!` or `unranked`.
    pub fn to_token(&self) -> String {
        if !self.is_ranked() {
            return "unranked".to_string();
        }
        format!(
            "{}{}{}",
            self.tier.to_string().to_lowercase(),
            self.division,
            if self.is_preferred { "!" } else { "" }
        )
    }
}

/// Rank as it appears in stored or imported JSON.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRecord {
    pub tier: Tier,
    #[serde(default)]
    pub division: u8,
    #[serde(default)]
    pub is_preferred: bool,
}

impl From<RankRecord> for Rank {
    fn from(record: RankRecord) -> Self {
        Rank::new(record.tier, record.division, record.is_preferred)
    }
}

impl Default for Rank {
    fn default() -> Self {
        Self::unranked()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_ranked() {
            return write!(f, "-");
        }
        write!(f, "{}{}", self.tier.short_label(), self.division)?;
        if self.is_preferred {
            write!(f, "★")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_formula() {
        assert_eq!(score(Tier::Bronze, 5), 100);
        assert_eq!(score(Tier::Bronze, 1), 500);
        assert_eq!(score(Tier::Platinum, 3), 3 * 600 + 300);
        assert_eq!(score(Tier::Champion, 1), MAX_RANK_SCORE);
        assert_eq!(score(Tier::Unranked, 3), 0);
    }

    #[test]
    fn test_from_index_out_of_range_is_unranked() {
        assert_eq!(Tier::from_index(0), Tier::Bronze);
        assert_eq!(Tier::from_index(7), Tier::Champion);
        assert_eq!(Tier::from_index(8), Tier::Unranked);
        assert_eq!(Tier::from_index(42), Tier::Unranked);
    }

    #[test]
    fn test_unranked_is_never_preferred() {
        let r = Rank::new(Tier::Unranked, 3, true);
        assert_eq!(r, Rank::unranked());
        assert_eq!(r.to_string(), "-");
    }

    #[test]
    fn test_badge_and_token() {
        let r = Rank::new(Tier::Diamond, 3, true);
        assert_eq!(r.to_string(), "다3★");
        assert_eq!(r.to_token(), "diamond3!");
        assert_eq!(Rank::new(Tier::Grandmaster, 9, false).division, 5);
    }

    #[test]
    fn test_deserialize_rebuilds_derived_fields() {
        let forged: Rank = serde_json::from_str(
            r#"{"tier":"BRONZE","division":5,"score":900000000,"isPreferred":false}"#,
        )
        .unwrap();
        assert_eq!(forged, Rank::new(Tier::Bronze, 5, false));
        assert_eq!(forged.score, 100);

        let unranked: Rank =
            serde_json::from_str(r#"{"tier":"UNRANKED","division":3,"score":0,"isPreferred":true}"#)
                .unwrap();
        assert_eq!(unranked, Rank::unranked());

        let stored = Rank::new(Tier::Diamond, 2, true);
        let json = serde_json::to_string(&stored).unwrap();
        assert_eq!(serde_json::from_str::<Rank>(&json).unwrap(), stored);
    }
}
