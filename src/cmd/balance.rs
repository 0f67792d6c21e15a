use crate::reports;
use clap::Args;
use std::path::PathBuf;
use teamforge::config::Config;
use teamforge::optimizer::runner::Balancer;
use teamforge::roster::Roster;
use teamforge::scorer::Scorer;
use teamforge::store::{SnapshotStore, PLAYERS_KEY, RESULT_KEY};
use teamforge::team::ROSTER_SIZE;
use teamforge::{TeamForgeError, TfResult};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BalanceArgs {
    #[command(flatten)]
    pub config: Config,

    /// Read players from this file instead of the saved roster.
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &BalanceArgs, config: Config, store: &SnapshotStore) -> TfResult<()> {
    let roster = match &args.roster {
        Some(path) => {
            let roster = Roster::load_from_file(path)?;
            store.save(PLAYERS_KEY, &roster)?;
            roster
        }
        None => store.load::<Roster>(PLAYERS_KEY)?.ok_or_else(|| {
            TeamForgeError::Validation("No saved roster. Run `teamforge parse <file>` first".to_string())
        })?,
    };

    if roster.len() > ROSTER_SIZE {
        warn!(
            total = roster.len(),
            "Roster has more than ten players, balancing the first ten"
        );
    }
    let players = roster.take_ten()?;

    let outcome = Balancer::from_config(&config).run(&players)?;
    info!(
        splits = outcome.splits_evaluated,
        early_exit = outcome.early_exit,
        "Search finished"
    );

    store.save(RESULT_KEY, &outcome.result)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
    } else {
        let scorer = Scorer::from_config(&config);
        reports::print_match(&outcome.result, &scorer);
        reports::print_search_summary(&outcome);
    }
    Ok(())
}
