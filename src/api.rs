use crate::config::Config;
use crate::error::{TeamForgeError, TfResult};
use crate::mutation;
use crate::optimizer::runner::run_balance;
use crate::player::Player;
use crate::roster::Roster;
use crate::team::{MatchResult, SlotCoordinate};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{info, warn};

/// What a slot click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotClick {
    Selected(SlotCoordinate),
    Cleared,
    Swapped {
        from: SlotCoordinate,
        to: SlotCoordinate,
    },
}

/// One interactive match: the waiting list, the current result and a
/// pending slot selection for click-to-swap.
#[derive(Debug, Clone, Default)]
pub struct MatchSession {
    pub config: Config,
    pub roster: Roster,
    result: Option<MatchResult>,
    selection: Option<SlotCoordinate>,
}

impl MatchSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn selection(&self) -> Option<SlotCoordinate> {
        self.selection
    }

    /// Replaces the current result, e.g. when restoring a saved snapshot.
    pub fn set_result(&mut self, result: Option<MatchResult>) {
        self.result = result;
        self.selection = None;
    }

    /// Balances the first ten roster players.
    pub fn balance(&mut self) -> TfResult<&MatchResult> {
        let players = self.roster.take_ten()?;
        self.run(&players)
    }

    /// Re-runs the search from scratch on the ten players of the current result.
    pub fn rebalance(&mut self) -> TfResult<&MatchResult> {
        let players: Vec<Player> = self
            .result
            .as_ref()
            .ok_or_else(|| TeamForgeError::Validation("No match to rebalance".to_string()))?
            .players()
            .cloned()
            .collect();
        self.run(&players)
    }

    fn run(&mut self, players: &[Player]) -> TfResult<&MatchResult> {
        // A failed run leaves the previous result in place.
        let result = run_balance(players, &self.config)?;
        self.selection = None;
        Ok(&*self.result.insert(result))
    }

    /// First click selects a slot, clicking it again clears the selection,
    /// clicking another slot swaps the two players.
    pub fn click_slot(&mut self, at: SlotCoordinate) -> TfResult<SlotClick> {
        if !at.is_valid() {
            return Err(TeamForgeError::InvalidSlot(at));
        }
        let current = self
            .result
            .as_ref()
            .ok_or_else(|| TeamForgeError::Validation("No match to edit".to_string()))?;

        match self.selection.take() {
            None => {
                self.selection = Some(at);
                Ok(SlotClick::Selected(at))
            }
            Some(from) if from == at => Ok(SlotClick::Cleared),
            Some(from) => {
                let next = mutation::swap(current, from, at)?;
                self.result = Some(next);
                Ok(SlotClick::Swapped { from, to: at })
            }
        }
    }

    pub fn reset(&mut self) {
        self.roster.clear();
        self.result = None;
        self.selection = None;
    }
}

pub struct TeamForgeState {
    pub sessions: RwLock<HashMap<String, MatchSession>>,
}

impl Default for TeamForgeState {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

fn poisoned<E>(_: E) -> TeamForgeError {
    TeamForgeError::Validation("Session store lock poisoned".to_string())
}

impl TeamForgeState {
    pub fn open_session(&self, session_id: &str, config: Config) -> TfResult<()> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        if sessions
            .insert(session_id.to_string(), MatchSession::new(config))
            .is_some()
        {
            warn!(session_id, "Session replaced");
        } else {
            info!(session_id, "Session opened");
        }
        Ok(())
    }

    pub fn close_session(&self, session_id: &str) -> TfResult<bool> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        Ok(sessions.remove(session_id).is_some())
    }

    /// Runs `f` against one session while holding the write lock, so
    /// searches and swaps on the same session never interleave.
    pub fn with_session<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut MatchSession) -> TfResult<R>,
    ) -> TfResult<R> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| TeamForgeError::Validation(format!("Unknown session '{}'", session_id)))?;
        f(session)
    }

    /// Read-only snapshot of a session's current result.
    pub fn current_result(&self, session_id: &str) -> TfResult<Option<MatchResult>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(session_id).and_then(|s| s.result().cloned()))
    }
}

/// Service: add pasted chat lines to a session's roster.
pub fn add_players(state: &TeamForgeState, session_id: &str, text: &str) -> TfResult<usize> {
    state.with_session(session_id, |s| Ok(s.roster.extend_from_text(text)))
}

/// Service: balance a session's roster and return the new result.
pub fn balance(state: &TeamForgeState, session_id: &str) -> TfResult<MatchResult> {
    state.with_session(session_id, |s| s.balance().cloned())
}

/// Service: forward a slot click to a session.
pub fn click_slot(state: &TeamForgeState, session_id: &str, at: SlotCoordinate) -> TfResult<SlotClick> {
    state.with_session(session_id, |s| s.click_slot(at))
}
