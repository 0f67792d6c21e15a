use crate::team::{ROSTER_SIZE, TEAM_SIZE};
use itertools::Itertools;
use once_cell::sync::Lazy;

/// One unordered 5/5 split of the roster. Index 0 is always in `team_a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Split {
    pub team_a: [usize; TEAM_SIZE],
    pub team_b: [usize; TEAM_SIZE],
}

fn to_team(indices: impl IntoIterator<Item = usize>) -> [usize; TEAM_SIZE] {
    let mut out = [0; TEAM_SIZE];
    for (slot, idx) in out.iter_mut().zip(indices) {
        *slot = idx;
    }
    out
}

static SPLITS: Lazy<Vec<Split>> = Lazy::new(|| {
    (1..ROSTER_SIZE)
        .combinations(TEAM_SIZE - 1)
        .map(|rest| {
            let team_b = (1..ROSTER_SIZE).filter(|i| !rest.contains(i));
            Split {
                team_a: to_team(std::iter::once(0).chain(rest.iter().copied())),
                team_b: to_team(team_b),
            }
        })
        .collect()
});

/// The C(9,4) = 126 distinct splits, in lexicographic order of team A.
pub fn team_splits() -> &'static [Split] {
    &SPLITS
}
