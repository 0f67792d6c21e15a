use clap::{CommandFactory, FromArgMatches, Parser};
use std::fs;
use teamforge::config::{Config, ScoringWeights, SearchParams, TeamLabels, MAX_TEAM_REAL_SCORE};
use teamforge::TeamForgeError;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

#[test]
fn test_defaults_match_clap_defaults() {
    let matches = TestCli::command().get_matches_from(["test"]);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    let default = Config::default();

    assert_eq!(cli.config.weights.preference_bonus, default.weights.preference_bonus);
    assert_eq!(cli.config.weights.preference_penalty, default.weights.preference_penalty);
    assert_eq!(cli.config.labels.team_a_name, "TEAM 1");
    assert_eq!(cli.config.labels.team_b_name, "TEAM 2");
    assert!(!cli.config.search.require_ranked_slots);
    assert!(!cli.config.search.exhaustive);
}

#[test]
fn test_default_weights_are_valid() {
    assert!(ScoringWeights::default().validate().is_ok());
}

#[test]
fn test_weights_must_keep_dominance_order() {
    let low_penalty = ScoringWeights {
        preference_penalty: MAX_TEAM_REAL_SCORE,
        ..Default::default()
    };
    assert!(matches!(low_penalty.validate(), Err(TeamForgeError::Config(_))));

    let bonus_not_above_penalty = ScoringWeights {
        preference_bonus: 60_000_000,
        preference_penalty: 60_000_000,
    };
    assert!(matches!(
        bonus_not_above_penalty.validate(),
        Err(TeamForgeError::Config(_))
    ));
}

#[test]
fn test_weights_too_large_to_score_are_rejected() {
    let huge = ScoringWeights {
        preference_bonus: i64::MAX / 2,
        preference_penalty: i64::MAX / 4,
    };
    assert!(matches!(huge.validate(), Err(TeamForgeError::Config(_))));

    let bonus_at_limit = ScoringWeights {
        preference_bonus: i64::MAX,
        ..Default::default()
    };
    assert!(matches!(bonus_at_limit.validate(), Err(TeamForgeError::Config(_))));

    // Large but representable weights are still fine.
    let large = ScoringWeights {
        preference_bonus: 1_000_000_000_000_000,
        preference_penalty: 500_000_000_000_000,
    };
    assert!(large.validate().is_ok());
}

#[test]
fn test_load_partial_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "search": { "exhaustive": true }, "labels": { "team_a_name": "Blue" } }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert!(config.search.exhaustive);
    assert!(!config.search.require_ranked_slots);
    assert_eq!(config.labels.team_a_name, "Blue");
    assert_eq!(config.labels.team_b_name, TeamLabels::default().team_b_name);
    assert_eq!(config.weights.preference_bonus, 100_000_000);
}

#[test]
fn test_load_rejects_bad_weights_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "preference_bonus": 10 }"#).unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(&path),
        Err(TeamForgeError::Config(_))
    ));

    fs::write(&path, "not json").unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(&path),
        Err(TeamForgeError::Json(_))
    ));

    assert!(matches!(
        ScoringWeights::load_from_file(dir.path().join("missing.json")),
        Err(TeamForgeError::Io(_))
    ));
}

#[test]
fn test_merge_only_overrides_typed_flags() {
    let matches =
        TestCli::command().get_matches_from(["test", "--preference-penalty", "70000000"]);
    let cli = TestCli::from_arg_matches(&matches).unwrap();

    let mut file_weights = ScoringWeights {
        preference_bonus: 200_000_000,
        preference_penalty: 90_000_000,
    };
    file_weights.merge_from_cli(&cli.config.weights, &matches);

    assert_eq!(file_weights.preference_bonus, 200_000_000);
    assert_eq!(file_weights.preference_penalty, 70_000_000);
}

#[test]
fn test_search_params_default() {
    let p = SearchParams::default();
    assert!(!p.require_ranked_slots && !p.exhaustive);
}
