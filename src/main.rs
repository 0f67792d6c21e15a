use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use teamforge::config::{Config, ScoringWeights};
use teamforge::scorer::Scorer;
use teamforge::store::SnapshotStore;
use teamforge::TfResult;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(name = "teamforge", author, version, about = "Balance ten players into two 1/2/2 teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the saved roster and match result.
    #[arg(global = true, long, default_value = ".teamforge")]
    state_dir: String,

    /// JSON file with scoring weights. Explicit flags still override it.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read players from a chat log, CSV or JSON file into the saved roster.
    Parse(cmd::parse::ParseArgs),
    /// Split the first ten roster players into two teams.
    Balance(cmd::balance::BalanceArgs),
    /// Swap two slots of the saved result, e.g. `swap 0:tank 1:dps:1`.
    Swap(cmd::swap::SwapArgs),
    /// Re-run the search on the ten players of the saved result.
    Rebalance(cmd::rebalance::RebalanceArgs),
}

/// Weight flags from the subcommand, optionally layered over a weights file.
fn resolve_weights(
    weights_path: Option<&str>,
    cli_weights: &ScoringWeights,
    matches: &ArgMatches,
    subcommand: &str,
) -> TfResult<ScoringWeights> {
    let mut weights = cli_weights.clone();

    if let Some(path) = weights_path {
        info!(path, "Loading weights");
        weights = ScoringWeights::load_from_file(path)?;
        if let Some(sub_matches) = matches.subcommand_matches(subcommand) {
            weights.merge_from_cli(cli_weights, sub_matches);
        }
    }

    weights.validate()?;
    Ok(weights)
}

fn resolve_config(
    weights_path: Option<&str>,
    cli_config: &Config,
    matches: &ArgMatches,
    subcommand: &str,
) -> TfResult<Config> {
    let weights = resolve_weights(weights_path, &cli_config.weights, matches, subcommand)?;
    Ok(Config {
        weights,
        ..cli_config.clone()
    })
}

fn main() {
    // Raw matches tell user input apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let store = SnapshotStore::new(&cli.state_dir);
    if let Err(e) = store.cleanup_expired() {
        warn!("Could not clean up saved state: {}", e);
    }

    let weights = cli.weights.as_deref();
    let outcome = match &cli.command {
        Commands::Parse(args) => cmd::parse::run(args, &store),
        Commands::Balance(args) => resolve_config(weights, &args.config, &matches, "balance")
            .and_then(|config| cmd::balance::run(args, config, &store)),
        Commands::Swap(args) => resolve_weights(weights, &args.weights, &matches, "swap")
            .and_then(|w| cmd::swap::run(args, &Scorer::new(w), &store)),
        Commands::Rebalance(args) => resolve_config(weights, &args.config, &matches, "rebalance")
            .and_then(|config| cmd::rebalance::run(args, config, &store)),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
