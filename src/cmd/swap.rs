use crate::reports;
use clap::Args;
use teamforge::config::ScoringWeights;
use teamforge::scorer::Scorer;
use teamforge::store::{SnapshotStore, RESULT_KEY};
use teamforge::team::{MatchResult, SlotCoordinate};
use teamforge::{swap, TeamForgeError, TfResult};

#[derive(Args, Debug, Clone)]
pub struct SwapArgs {
    /// Slot as `team:role:slot`, e.g. `0:dps:1`.
    pub from: SlotCoordinate,
    pub to: SlotCoordinate,

    #[command(flatten)]
    pub weights: ScoringWeights,

    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SwapArgs, scorer: &Scorer, store: &SnapshotStore) -> TfResult<()> {
    let current: MatchResult = store.load(RESULT_KEY)?.ok_or_else(|| {
        TeamForgeError::Validation("No saved match. Run `teamforge balance` first".to_string())
    })?;

    let next = swap(&current, args.from, args.to)?;
    store.save(RESULT_KEY, &next)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&next)?);
    } else {
        reports::print_match(&next, scorer);
    }
    Ok(())
}
