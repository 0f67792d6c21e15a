use crate::config::Config;
use crate::error::{TeamForgeError, TfResult};
use crate::optimizer::{best_role_assignment, team_splits, Objective, TeamCandidate};
use crate::player::Player;
use crate::scorer::Scorer;
use crate::team::{MatchResult, TeamResult, ROSTER_SIZE};
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone)]
pub struct BalanceOptions {
    pub require_ranked_slots: bool,
    pub exhaustive: bool,
    pub team_a_name: String,
    pub team_b_name: String,
}

impl From<&Config> for BalanceOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            require_ranked_slots: cfg.search.require_ranked_slots,
            exhaustive: cfg.search.exhaustive,
            team_a_name: cfg.labels.team_a_name.clone(),
            team_b_name: cfg.labels.team_b_name.clone(),
        }
    }
}

impl Default for BalanceOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    pub result: MatchResult,
    pub objective: Objective,
    pub splits_evaluated: usize,
    pub early_exit: bool,
}

/// A trait for receiving updates during the split search.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback {
    fn on_progress(&self, evaluated: usize, total: usize, best: Option<&Objective>) -> bool;
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _: usize, _: usize, _: Option<&Objective>) -> bool {
        true
    }
}

impl<F> ProgressCallback for F
where
    F: Fn(usize, usize, Option<&Objective>) -> bool,
{
    fn on_progress(&self, evaluated: usize, total: usize, best: Option<&Objective>) -> bool {
        self(evaluated, total, best)
    }
}

pub struct Balancer {
    scorer: Scorer,
    options: BalanceOptions,
}

impl Balancer {
    pub fn new(scorer: Scorer, options: BalanceOptions) -> Self {
        Self { scorer, options }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Scorer::from_config(config), BalanceOptions::from(config))
    }

    pub fn run(&self, players: &[Player]) -> TfResult<BalanceOutcome> {
        self.run_with(players, &NoProgress)
    }

    pub fn run_with<CB: ProgressCallback>(
        &self,
        players: &[Player],
        callback: &CB,
    ) -> TfResult<BalanceOutcome> {
        if players.len() != ROSTER_SIZE {
            return Err(TeamForgeError::InvalidRosterSize {
                found: players.len(),
            });
        }
        self.scorer.weights.validate()?;

        let opts = &self.options;
        let table = self.scorer.placement_table(players);
        let splits = team_splits();
        let total = splits.len();

        debug!(
            splits = total,
            require_ranked = opts.require_ranked_slots,
            exhaustive = opts.exhaustive,
            "Starting split search"
        );

        let mut best: Option<(Objective, TeamCandidate, TeamCandidate)> = None;
        let mut evaluated = 0;
        let mut early_exit = false;

        for split in splits {
            evaluated += 1;

            let a = best_role_assignment(&split.team_a, &table, opts.require_ranked_slots);
            let b = best_role_assignment(&split.team_b, &table, opts.require_ranked_slots);

            if let (Some(a), Some(b)) = (a, b) {
                let objective = Objective::between(&a.score, &b.score);
                if best.map_or(true, |(current, _, _)| objective < current) {
                    trace!(split = evaluated, %objective, "New best split");
                    best = Some((objective, a, b));
                }
            }

            let best_objective = best.as_ref().map(|(o, _, _)| o);
            if !callback.on_progress(evaluated, total, best_objective) {
                warn!(evaluated, "Split search aborted by observer");
                return Err(TeamForgeError::Aborted);
            }

            if !opts.exhaustive && best_objective.is_some_and(Objective::is_perfect) {
                early_exit = true;
                break;
            }
        }

        let Some((objective, a, b)) = best else {
            warn!(evaluated, "No split produced a valid role assignment on both sides");
            return Err(TeamForgeError::NoValidAssignment);
        };

        info!(
            evaluated,
            early_exit,
            algo_diff = objective.algo_diff,
            real_diff = objective.real_diff,
            "Balance complete"
        );

        let result = MatchResult {
            team_a: TeamResult {
                name: opts.team_a_name.clone(),
                assignment: a.assignment(players),
                algo_score: a.score.algo,
                real_score: a.score.real,
            },
            team_b: TeamResult {
                name: opts.team_b_name.clone(),
                assignment: b.assignment(players),
                algo_score: b.score.algo,
                real_score: b.score.real,
            },
            diff: objective.real_diff,
        };

        Ok(BalanceOutcome {
            result,
            objective,
            splits_evaluated: evaluated,
            early_exit,
        })
    }
}

/// Balances exactly ten players into two teams of five.
pub fn run_balance(players: &[Player], config: &Config) -> TfResult<MatchResult> {
    Balancer::from_config(config)
        .run(players)
        .map(|outcome| outcome.result)
}
