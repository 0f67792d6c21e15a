use crate::error::{TeamForgeError, TfResult};
use crate::parser;
use crate::player::{Player, PlayerId};
use crate::team::ROSTER_SIZE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Waiting list of players, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub players: Vec<Player>,
    next_id: PlayerId,
}

/// One CSV row: `name,tank,dps,support` with rank tokens.
#[derive(Debug, Serialize, Deserialize)]
struct RosterRecord {
    name: String,
    tank: String,
    dps: String,
    support: String,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id + 1).max().unwrap_or(0);
        Self { players, next_id }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Exactly enough players for one match.
    pub fn is_full(&self) -> bool {
        self.players.len() == ROSTER_SIZE
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Adds a player under a fresh id. Returns `None` if the name is taken.
    pub fn add(&mut self, mut player: Player) -> Option<PlayerId> {
        if self.contains_name(&player.name) {
            debug!(name = %player.name, "Duplicate player skipped");
            return None;
        }
        player.id = self.next_id;
        self.next_id += 1;
        self.players.push(player);
        Some(self.next_id - 1)
    }

    /// Parses a chat log and adds every new player. Returns how many were added.
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let parsed = parser::parse_roster(text, self.next_id);
        let total = parsed.len();
        let added = parsed.into_iter().filter_map(|p| self.add(p)).count();
        info!(parsed = total, added, "Roster updated from text");
        added
    }

    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// The first ten players in insertion order.
    pub fn take_ten(&self) -> TfResult<Vec<Player>> {
        if self.players.len() < ROSTER_SIZE {
            return Err(TeamForgeError::InvalidRosterSize {
                found: self.players.len(),
            });
        }
        Ok(self.players[..ROSTER_SIZE].to_vec())
    }

    // --- CSV ---

    pub fn read_csv<R: Read>(reader: R) -> TfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut roster = Self::new();

        for record in rdr.deserialize() {
            let record: RosterRecord = record?;
            let player = Player::new(
                0,
                record.name,
                parser::parse_rank(&record.tank),
                parser::parse_rank(&record.dps),
                parser::parse_rank(&record.support),
            );
            roster.add(player);
        }
        Ok(roster)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> TfResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for p in &self.players {
            wtr.serialize(RosterRecord {
                name: p.name.clone(),
                tank: p.tank.to_token(),
                dps: p.dps.to_token(),
                support: p.support.to_token(),
            })?;
        }
        wtr.flush()?;
        Ok(())
    }

    // --- Files ---

    /// Loads a roster from `.csv`, `.json` or free chat text, by extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TfResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Self::read_csv(File::open(path)?),
            Some("json") => {
                let content = std::fs::read_to_string(path)?;
                let players: Vec<Player> = serde_json::from_str(&content)?;
                Ok(Self::from_players(players))
            }
            _ => {
                let content = std::fs::read_to_string(path)?;
                let mut roster = Self::new();
                roster.extend_from_text(&content);
                Ok(roster)
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TfResult<()> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) == Some("csv") {
            return self.write_csv(File::create(path)?);
        }
        let json = serde_json::to_string_pretty(&self.players)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
