mod common;

use common::mixed_roster;
use teamforge::config::Config;
use teamforge::player::Role;
use teamforge::team::{MatchResult, SlotCoordinate};
use teamforge::{run_balance, swap, TeamForgeError};

fn result() -> MatchResult {
    run_balance(&mixed_roster(), &Config::default()).unwrap()
}

#[test]
fn test_same_slot_is_identity() {
    let r = result();
    let at = SlotCoordinate::new(1, Role::Support, 1);
    assert_eq!(swap(&r, at, at).unwrap(), r);
}

#[test]
fn test_cross_team_tank_swap() {
    let r = result();
    let a = SlotCoordinate::new(0, Role::Tank, 0);
    let b = SlotCoordinate::new(1, Role::Tank, 0);

    let next = swap(&r, a, b).unwrap();
    assert_eq!(next.team_a.assignment.tank, r.team_b.assignment.tank);
    assert_eq!(next.team_b.assignment.tank, r.team_a.assignment.tank);

    // Input is untouched.
    assert_ne!(next.team_a.assignment.tank, r.team_a.assignment.tank);
}

#[test]
fn test_within_team_role_change_rescores() {
    let r = result();
    let from = SlotCoordinate::new(0, Role::Tank, 0);
    let to = SlotCoordinate::new(0, Role::Dps, 0);

    let next = swap(&r, from, to).unwrap();
    let old_tank = &r.team_a.assignment.tank;
    let old_dps = &r.team_a.assignment.dps[0];

    let expected = r.team_a.real_score - old_tank.tank.score - old_dps.dps.score
        + old_tank.dps.score
        + old_dps.tank.score;
    assert_eq!(next.team_a.real_score, expected);
    assert_eq!(next.team_b, r.team_b);
    assert_eq!(next.diff, (expected - r.team_b.real_score).abs());
}

#[test]
fn test_invalid_coordinates_are_rejected() {
    let r = result();
    let ok = SlotCoordinate::new(0, Role::Dps, 0);

    for bad in [
        SlotCoordinate::new(2, Role::Dps, 0),
        SlotCoordinate::new(0, Role::Tank, 1),
        SlotCoordinate::new(1, Role::Support, 2),
    ] {
        assert!(matches!(swap(&r, ok, bad), Err(TeamForgeError::InvalidSlot(c)) if c == bad));
        assert!(matches!(swap(&r, bad, ok), Err(TeamForgeError::InvalidSlot(c)) if c == bad));
    }
}
