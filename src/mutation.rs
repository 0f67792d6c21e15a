use crate::error::{TeamForgeError, TfResult};
use crate::team::{MatchResult, SlotCoordinate};
use tracing::debug;

fn check(at: SlotCoordinate) -> TfResult<()> {
    if at.is_valid() {
        Ok(())
    } else {
        Err(TeamForgeError::InvalidSlot(at))
    }
}

/// Exchanges the players at `from` and `to`, returning a new result.
///
/// Real scores and `diff` are recomputed. Algo scores keep the values the
/// search produced, so after a manual swap they describe the search's pick,
/// not the current lineup.
pub fn swap(result: &MatchResult, from: SlotCoordinate, to: SlotCoordinate) -> TfResult<MatchResult> {
    check(from)?;
    check(to)?;

    let mut next = result.clone();
    if from == to {
        return Ok(next);
    }

    let a = next.slot(from).cloned().ok_or(TeamForgeError::InvalidSlot(from))?;
    let b = next.slot(to).cloned().ok_or(TeamForgeError::InvalidSlot(to))?;

    for (at, player) in [(from, b), (to, a)] {
        let slot = next
            .team_mut(at.team)
            .and_then(|t| t.assignment.slot_mut(at.role, at.slot))
            .ok_or(TeamForgeError::InvalidSlot(at))?;
        *slot = player;
    }

    next.recompute_real_scores();
    debug!(%from, %to, diff = next.diff, "Swapped slots");
    Ok(next)
}
