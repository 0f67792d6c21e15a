use crate::reports;
use clap::Args;
use std::path::PathBuf;
use teamforge::roster::Roster;
use teamforge::store::{SnapshotStore, PLAYERS_KEY};
use teamforge::TfResult;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Chat log (.txt), CSV (`name,tank,dps,support`) or JSON player list.
    pub file: PathBuf,

    /// Add to the saved roster instead of replacing it.
    #[arg(short, long, default_value_t = false)]
    pub append: bool,
}

pub fn run(args: &ParseArgs, store: &SnapshotStore) -> TfResult<()> {
    let parsed = Roster::load_from_file(&args.file)?;
    info!(file = %args.file.display(), players = parsed.len(), "Parsed roster file");

    let mut roster = if args.append {
        store.load::<Roster>(PLAYERS_KEY)?.unwrap_or_default()
    } else {
        Roster::new()
    };

    let before = roster.len();
    for player in parsed.players {
        roster.add(player);
    }
    let added = roster.len() - before;
    if added == 0 {
        warn!("No new players found in {}", args.file.display());
    }

    store.save(PLAYERS_KEY, &roster)?;
    reports::print_roster(&roster);
    println!("Added {} player(s), roster now holds {}.", added, roster.len());
    Ok(())
}
