pub mod objective;
pub mod runner;
pub mod split;

pub use self::objective::Objective;
pub use self::split::{team_splits, Split};
use crate::player::{Player, Role};
use crate::scorer::{PlacementTable, TeamScore};
use crate::team::{RoleAssignment, TEAM_SIZE};
use itertools::Itertools;
use once_cell::sync::Lazy;

/// Local indices (0..5) into one team, laid out on the 1/2/2 template.
/// Slot order inside the dps and support pairs is fixed ascending, so each
/// partition is counted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RolePartition {
    pub tank: usize,
    pub dps: [usize; 2],
    pub support: [usize; 2],
}

impl RolePartition {
    pub fn members(&self) -> [(usize, Role); TEAM_SIZE] {
        [
            (self.tank, Role::Tank),
            (self.dps[0], Role::Dps),
            (self.dps[1], Role::Dps),
            (self.support[0], Role::Support),
            (self.support[1], Role::Support),
        ]
    }
}

static ROLE_PARTITIONS: Lazy<Vec<RolePartition>> = Lazy::new(|| {
    let mut out = Vec::with_capacity(30);
    for tank in 0..TEAM_SIZE {
        let rest: Vec<usize> = (0..TEAM_SIZE).filter(|&i| i != tank).collect();
        for pair in rest.iter().copied().combinations(2) {
            let support: Vec<usize> = rest.iter().copied().filter(|i| !pair.contains(i)).collect();
            out.push(RolePartition {
                tank,
                dps: [pair[0], pair[1]],
                support: [support[0], support[1]],
            });
        }
    }
    out
});

/// All 30 ways to put five players on one tank, two dps and two support slots.
pub fn role_partitions() -> &'static [RolePartition] {
    &ROLE_PARTITIONS
}

/// The winning partition for one team, in roster indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamCandidate {
    pub members: [usize; TEAM_SIZE],
    pub partition: RolePartition,
    pub score: TeamScore,
}

impl TeamCandidate {
    pub fn assignment(&self, players: &[Player]) -> RoleAssignment {
        let pick = |local: usize| players[self.members[local]].clone();
        RoleAssignment {
            tank: pick(self.partition.tank),
            dps: self.partition.dps.map(pick),
            support: self.partition.support.map(pick),
        }
    }
}

/// Role-assignment search over one team of five roster indices.
///
/// Returns the partition with the highest algo score; on ties the first one
/// enumerated wins. With `require_ranked` set, partitions that place a player
/// in a role they are unranked in are skipped, and `None` means no partition
/// survived.
pub fn best_role_assignment(
    team: &[usize; TEAM_SIZE],
    table: &PlacementTable,
    require_ranked: bool,
) -> Option<TeamCandidate> {
    let mut best: Option<TeamCandidate> = None;

    'partitions: for partition in role_partitions() {
        let mut score = TeamScore::default();
        for (local, role) in partition.members() {
            let placement = table.get(team[local], role);
            if require_ranked && !placement.is_ranked() {
                continue 'partitions;
            }
            score += placement;
        }

        if best.map_or(true, |b| score.algo > b.score.algo) {
            best = Some(TeamCandidate {
                members: *team,
                partition: *partition,
                score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_partitions_cover_every_index() {
        let parts = role_partitions();
        assert_eq!(parts.len(), 30);

        let unique: HashSet<_> = parts.iter().collect();
        assert_eq!(unique.len(), 30);

        for p in parts {
            let mut seen: Vec<usize> = p.members().iter().map(|(i, _)| *i).collect();
            seen.sort_unstable();
            assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        }
    }
}
