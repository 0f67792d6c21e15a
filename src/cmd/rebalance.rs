use crate::reports;
use clap::Args;
use teamforge::config::Config;
use teamforge::optimizer::runner::Balancer;
use teamforge::player::Player;
use teamforge::scorer::Scorer;
use teamforge::store::{SnapshotStore, RESULT_KEY};
use teamforge::team::MatchResult;
use teamforge::{TeamForgeError, TfResult};

#[derive(Args, Debug, Clone)]
pub struct RebalanceArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &RebalanceArgs, config: Config, store: &SnapshotStore) -> TfResult<()> {
    let current: MatchResult = store.load(RESULT_KEY)?.ok_or_else(|| {
        TeamForgeError::Validation("No saved match. Run `teamforge balance` first".to_string())
    })?;

    let players: Vec<Player> = current.players().cloned().collect();
    let outcome = Balancer::from_config(&config).run(&players)?;
    store.save(RESULT_KEY, &outcome.result)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
    } else {
        reports::print_match(&outcome.result, &Scorer::from_config(&config));
        reports::print_search_summary(&outcome);
    }
    Ok(())
}
