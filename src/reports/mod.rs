use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use teamforge::optimizer::runner::BalanceOutcome;
use teamforge::player::Role;
use teamforge::rank::Rank;
use teamforge::roster::Roster;
use teamforge::scorer::Scorer;
use teamforge::team::{MatchResult, TeamResult, ROSTER_SIZE};

const TEAM_COLORS: [Color; 2] = [Color::Blue, Color::Red];

fn rank_cell(rank: &Rank) -> Cell {
    let cell = Cell::new(rank.to_string()).set_alignment(CellAlignment::Center);
    if rank.is_preferred {
        cell.fg(Color::Yellow)
    } else if !rank.is_ranked() {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

pub fn print_roster(roster: &Roster) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new(Role::Tank.label()),
        Cell::new(Role::Dps.label()),
        Cell::new(Role::Support.label()),
    ]);

    for (i, p) in roster.players.iter().enumerate() {
        // Players past the tenth wait for the next match.
        let idx = Cell::new(i + 1).fg(if i < ROSTER_SIZE { Color::Green } else { Color::DarkGrey });
        table.add_row(vec![
            idx,
            Cell::new(&p.name),
            rank_cell(&p.tank),
            rank_cell(&p.dps),
            rank_cell(&p.support),
        ]);
    }
    println!("\n{}", table);
}

fn team_rows(team: &TeamResult) -> Vec<(Role, String, Rank)> {
    team.assignment
        .placements()
        .map(|(p, role)| (role, p.name.clone(), *p.rank(role)))
        .collect()
}

pub fn print_match(result: &MatchResult, scorer: &Scorer) {
    let teams = [&result.team_a, &result.team_b];

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Role").add_attribute(Attribute::Bold)];
    for (team, color) in teams.iter().zip(TEAM_COLORS) {
        header.push(Cell::new(&team.name).fg(color).add_attribute(Attribute::Bold));
        header.push(Cell::new("Rank"));
    }
    table.add_row(header);

    let rows_a = team_rows(&result.team_a);
    let rows_b = team_rows(&result.team_b);
    for ((role, name_a, rank_a), (_, name_b, rank_b)) in rows_a.iter().zip(&rows_b) {
        table.add_row(vec![
            Cell::new(role.label()),
            Cell::new(name_a),
            rank_cell(rank_a),
            Cell::new(name_b),
            rank_cell(rank_b),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(result.team_a.real_score).fg(TEAM_COLORS[0]),
        Cell::new(""),
        Cell::new(result.team_b.real_score).fg(TEAM_COLORS[1]),
    ]);
    println!("\n{}", table);

    // Breakdown
    let mut details = Table::new();
    details
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    details.add_row(vec![
        Cell::new("Team").add_attribute(Attribute::Bold),
        Cell::new("Real"),
        Cell::new("Avg"),
        Cell::new("Best"),
        Cell::new("Worst"),
        Cell::new("Pref").fg(Color::Green),
        Cell::new("Off").fg(Color::Red),
        Cell::new("Unranked"),
    ]);

    for i in 1..=7 {
        if let Some(col) = details.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (team, color) in teams.iter().zip(TEAM_COLORS) {
        let d = scorer.score_debug(&team.assignment);
        details.add_row(vec![
            Cell::new(&team.name).fg(color),
            Cell::new(d.real_score),
            Cell::new(d.average()),
            Cell::new(d.best_slot),
            Cell::new(d.worst_slot),
            Cell::new(d.honored).fg(Color::Green),
            Cell::new(d.violated).fg(Color::Red),
            Cell::new(d.unranked_slots),
        ]);
    }
    println!("{}", details);

    println!("Score gap: {}", result.diff);
}

pub fn print_search_summary(outcome: &BalanceOutcome) {
    println!(
        "Evaluated {} split(s){} | {}",
        outcome.splits_evaluated,
        if outcome.early_exit { " (perfect split found early)" } else { "" },
        outcome.objective
    );
}
