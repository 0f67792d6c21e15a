use crate::error::{TeamForgeError, TfResult};
use crate::player::{Player, Role};
use crate::rank::Score;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TEAM_SIZE: usize = 5;
pub const ROSTER_SIZE: usize = 2 * TEAM_SIZE;

/// One team of five placed on the 1/2/2 role template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub tank: Player,
    pub dps: [Player; 2],
    pub support: [Player; 2],
}

impl RoleAssignment {
    pub fn slot(&self, role: Role, slot: usize) -> Option<&Player> {
        match role {
            Role::Tank if slot == 0 => Some(&self.tank),
            Role::Tank => None,
            Role::Dps => self.dps.get(slot),
            Role::Support => self.support.get(slot),
        }
    }

    pub fn slot_mut(&mut self, role: Role, slot: usize) -> Option<&mut Player> {
        match role {
            Role::Tank if slot == 0 => Some(&mut self.tank),
            Role::Tank => None,
            Role::Dps => self.dps.get_mut(slot),
            Role::Support => self.support.get_mut(slot),
        }
    }

    /// (player, role) in display order: tank, dps 0/1, support 0/1.
    pub fn placements(&self) -> impl Iterator<Item = (&Player, Role)> {
        std::iter::once((&self.tank, Role::Tank))
            .chain(self.dps.iter().map(|p| (p, Role::Dps)))
            .chain(self.support.iter().map(|p| (p, Role::Support)))
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.placements().map(|(p, _)| p)
    }

    /// Sum of every player's raw score in the role they occupy.
    pub fn real_score(&self) -> Score {
        self.placements().map(|(p, role)| p.rank(role).score).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub name: String,
    pub assignment: RoleAssignment,
    pub algo_score: Score,
    pub real_score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub team_a: TeamResult,
    pub team_b: TeamResult,
    pub diff: Score,
}

impl MatchResult {
    pub fn team(&self, index: usize) -> Option<&TeamResult> {
        match index {
            0 => Some(&self.team_a),
            1 => Some(&self.team_b),
            _ => None,
        }
    }

    pub fn team_mut(&mut self, index: usize) -> Option<&mut TeamResult> {
        match index {
            0 => Some(&mut self.team_a),
            1 => Some(&mut self.team_b),
            _ => None,
        }
    }

    pub fn slot(&self, at: SlotCoordinate) -> Option<&Player> {
        self.team(at.team)?.assignment.slot(at.role, at.slot)
    }

    /// All ten players, team A first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team_a
            .assignment
            .players()
            .chain(self.team_b.assignment.players())
    }

    pub fn recompute_real_scores(&mut self) {
        self.team_a.real_score = self.team_a.assignment.real_score();
        self.team_b.real_score = self.team_b.assignment.real_score();
        self.diff = (self.team_a.real_score - self.team_b.real_score).abs();
    }
}

/// Addresses one slot of a match result: `team` is 0 or 1, `slot` is
/// 0 for tank and 0..=1 for dps/support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotCoordinate {
    pub team: usize,
    pub role: Role,
    pub slot: usize,
}

impl SlotCoordinate {
    pub fn new(team: usize, role: Role, slot: usize) -> Self {
        Self { team, role, slot }
    }

    pub fn is_valid(&self) -> bool {
        self.team < 2 && self.slot < self.role.slots()
    }
}

impl fmt::Display for SlotCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.team, self.role, self.slot)
    }
}

impl FromStr for SlotCoordinate {
    type Err = TeamForgeError;

    /// Parses `team:role:slot`, e.g. `1:dps:0`. The slot may be omitted for tank.
    fn from_str(s: &str) -> TfResult<Self> {
        let invalid = || TeamForgeError::Validation(format!("Bad slot '{}', expected team:role:slot", s));
        let parts: Vec<&str> = s.trim().split(':').collect();

        let (team, role, slot) = match parts.as_slice() {
            [team, role] => (*team, *role, "0"),
            [team, role, slot] => (*team, *role, *slot),
            _ => return Err(invalid()),
        };

        let team = team.trim().parse::<usize>().map_err(|_| invalid())?;
        let role = Role::from_str(role.trim()).map_err(|_| invalid())?;
        let slot = slot.trim().parse::<usize>().map_err(|_| invalid())?;

        let coord = SlotCoordinate { team, role, slot };
        if !coord.is_valid() {
            return Err(TeamForgeError::InvalidSlot(coord));
        }
        Ok(coord)
    }
}
