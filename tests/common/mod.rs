#![allow(dead_code)]

use teamforge::player::{Player, PlayerId, Role};
use teamforge::rank::{Rank, Tier};

/// Builder for Player to clean up tests
pub struct PlayerBuilder {
    player: Player,
}

impl PlayerBuilder {
    /// Starts with every role unranked.
    pub fn new(id: PlayerId) -> Self {
        Self {
            player: Player::new(
                id,
                format!("player{}#{:04}", id, 1000 + id),
                Rank::unranked(),
                Rank::unranked(),
                Rank::unranked(),
            ),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.player.name = name.to_string();
        self
    }

    pub fn rank(mut self, role: Role, tier: Tier, division: u8) -> Self {
        let rank = Rank::new(tier, division, false);
        self.set(role, rank);
        self
    }

    pub fn preferred(mut self, role: Role, tier: Tier, division: u8) -> Self {
        let rank = Rank::new(tier, division, true);
        self.set(role, rank);
        self
    }

    /// Same rank in all three roles.
    pub fn flat(self, tier: Tier, division: u8) -> Self {
        self.rank(Role::Tank, tier, division)
            .rank(Role::Dps, tier, division)
            .rank(Role::Support, tier, division)
    }

    fn set(&mut self, role: Role, rank: Rank) {
        match role {
            Role::Tank => self.player.tank = rank,
            Role::Dps => self.player.dps = rank,
            Role::Support => self.player.support = rank,
        }
    }

    pub fn build(self) -> Player {
        self.player
    }
}

/// Ten players with the same flat rank.
pub fn uniform_roster(tier: Tier, division: u8) -> Vec<Player> {
    (0..10)
        .map(|id| PlayerBuilder::new(id).flat(tier, division).build())
        .collect()
}

/// Ten players spread over several tiers, no preferences.
pub fn mixed_roster() -> Vec<Player> {
    let specs = [
        (Tier::Bronze, 2),
        (Tier::Silver, 4),
        (Tier::Gold, 1),
        (Tier::Gold, 5),
        (Tier::Platinum, 3),
        (Tier::Diamond, 2),
        (Tier::Diamond, 5),
        (Tier::Master, 4),
        (Tier::Grandmaster, 1),
        (Tier::Champion, 3),
    ];
    specs
        .iter()
        .enumerate()
        .map(|(i, (tier, div))| {
            PlayerBuilder::new(i as PlayerId)
                .rank(Role::Tank, *tier, *div)
                .rank(Role::Dps, Tier::from_index((tier.index().unwrap_or(0) as usize + 1) % 8), *div)
                .rank(Role::Support, *tier, 5)
                .build()
        })
        .collect()
}

/// Every player's name across both teams, sorted.
pub fn sorted_names<'a>(players: impl Iterator<Item = &'a Player>) -> Vec<String> {
    let mut names: Vec<String> = players.map(|p| p.name.clone()).collect();
    names.sort();
    names
}
