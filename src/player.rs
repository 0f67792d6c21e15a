use crate::rank::Rank;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub type PlayerId = u64;

/// Role categories of the 1/2/2 team template.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[strum(to_string = "tank", serialize = "t")]
    Tank,
    #[strum(to_string = "dps", serialize = "d", serialize = "damage")]
    Dps,
    #[strum(to_string = "support", serialize = "sup", serialize = "s")]
    Support,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Tank, Role::Dps, Role::Support];

    /// Number of slots this role occupies in one team.
    pub const fn slots(self) -> usize {
        match self {
            Role::Tank => 1,
            Role::Dps | Role::Support => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Tank => "탱커",
            Role::Dps => "딜러",
            Role::Support => "힐러",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub tank: Rank,
    pub dps: Rank,
    #[serde(alias = "sup")]
    pub support: Rank,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, tank: Rank, dps: Rank, support: Rank) -> Self {
        Self {
            id,
            name: name.into(),
            tank,
            dps,
            support,
        }
    }

    pub fn rank(&self, role: Role) -> &Rank {
        match role {
            Role::Tank => &self.tank,
            Role::Dps => &self.dps,
            Role::Support => &self.support,
        }
    }

    pub fn preferred_roles(&self) -> impl Iterator<Item = Role> + '_ {
        Role::iter().filter(move |r| self.rank(*r).is_preferred)
    }

    /// True when some role other than `role` is flagged preferred.
    pub fn prefers_other_than(&self, role: Role) -> bool {
        self.preferred_roles().any(|r| r != role)
    }

    pub fn is_fully_unranked(&self) -> bool {
        Role::iter().all(|r| !self.rank(r).is_ranked())
    }
}
