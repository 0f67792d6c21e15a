//! Chat-log roster parsing.
//!
//! Accepts lines such as
//! `Name#1234 다5/다1!/다5`, `Name #1234 탱 실3 / 딜 브1 / 힐 골3`,
//! `Name#1234 탱커 다이아3 딜러 플레4 힐러 마스터5` or
//! `Name#1234 diamond3 plat4! unranked(gold)`.
//! Unlabeled ranks fill tank, dps, support in that order.

use crate::player::{Player, PlayerId, Role};
use crate::rank::{Rank, Tier};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

/// Division assumed when a rank omits it or is only estimated.
pub const DEFAULT_DIVISION: u8 = 3;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\S+\s*#\s*\d+)").expect("name pattern is valid"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4,}").expect("tag pattern is valid"));

static NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(배치\s*중\)|\(예상\)").expect("noise pattern is valid"));

static UNRANKED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:미배치|unranked)").expect("unranked pattern is valid"));

static ESTIMATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([가-힣a-zA-Z]+)\)").expect("estimate pattern is valid"));

// Groups: 1 korean role, 2 english role, 3 leading `!`, 4 tier token,
// 5 division, 6 trailing `!`. Leading whitespace is consumed before the role
// so a role word after a gap is never taken for a tier. English role words
// need whitespace after them so `diamond3` is never read as role `d`.
static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\s*(?:(탱커|탱|딜러|딜|힐러|힐)\s*|\b(tank|dps|support|sup|t|d|s)\s+)?(!)?\s*((?:미배치|unranked)\s*(?:\([가-힣a-z]+\))?|[가-힣a-z]+)\s*(\d)?\s*(!)?",
    )
    .expect("segment pattern is valid")
});

// Exact names first, then abbreviations. Order matters for prefix lookups.
const TIER_ALIASES: &[(&str, Tier)] = &[
    ("브론즈", Tier::Bronze),
    ("브론", Tier::Bronze),
    ("브", Tier::Bronze),
    ("bronze", Tier::Bronze),
    ("br", Tier::Bronze),
    ("실버", Tier::Silver),
    ("실", Tier::Silver),
    ("silver", Tier::Silver),
    ("si", Tier::Silver),
    ("골드", Tier::Gold),
    ("골", Tier::Gold),
    ("gold", Tier::Gold),
    ("go", Tier::Gold),
    ("플래티넘", Tier::Platinum),
    ("플레티넘", Tier::Platinum),
    ("플래", Tier::Platinum),
    ("플레", Tier::Platinum),
    ("플", Tier::Platinum),
    ("platinum", Tier::Platinum),
    ("plat", Tier::Platinum),
    ("pl", Tier::Platinum),
    ("다이아몬드", Tier::Diamond),
    ("다이아", Tier::Diamond),
    ("다이", Tier::Diamond),
    ("다", Tier::Diamond),
    ("diamond", Tier::Diamond),
    ("dia", Tier::Diamond),
    ("di", Tier::Diamond),
    ("마스터", Tier::Master),
    ("마스", Tier::Master),
    ("마", Tier::Master),
    ("master", Tier::Master),
    ("ma", Tier::Master),
    ("그랜드마스터", Tier::Grandmaster),
    ("그마", Tier::Grandmaster),
    ("그", Tier::Grandmaster),
    ("grandmaster", Tier::Grandmaster),
    ("gm", Tier::Grandmaster),
    ("챔피언", Tier::Champion),
    ("챔피", Tier::Champion),
    ("챔", Tier::Champion),
    ("champion", Tier::Champion),
    ("champ", Tier::Champion),
    ("ch", Tier::Champion),
];

/// Resolves a tier word: exact alias first, then a prefix match in either
/// direction (`diamonds` and `dia` both land on Diamond).
pub fn find_tier(word: &str) -> Option<Tier> {
    let normalized = word.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if let Some((_, tier)) = TIER_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        return Some(*tier);
    }

    TIER_ALIASES
        .iter()
        .find(|(alias, _)| normalized.starts_with(alias) || alias.starts_with(normalized.as_str()))
        .map(|(_, tier)| *tier)
}

fn role_from_word(word: &str) -> Option<Role> {
    match word.chars().next()? {
        '탱' => Some(Role::Tank),
        '딜' => Some(Role::Dps),
        '힐' => Some(Role::Support),
        _ => Role::from_str(word).ok(),
    }
}

/// `미배치(골)` is an unplaced player estimated at Gold. Annotations such as
/// `(배치중)` carry no tier.
fn estimated_tier(token: &str) -> Option<Tier> {
    let inner = ESTIMATE_RE.captures(token)?.get(1)?.as_str();
    if inner.contains("배치") || inner.contains("예상") || inner.contains('중') {
        return None;
    }
    find_tier(inner)
}

struct Segment {
    role: Option<Role>,
    rank: Rank,
}

fn segment_from(caps: &Captures) -> Option<Segment> {
    let role = caps
        .get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| role_from_word(m.as_str()));
    let preferred = caps.get(3).is_some() || caps.get(6).is_some();
    let token = caps.get(4)?.as_str();

    let rank = if UNRANKED_RE.is_match(token) {
        estimated_tier(token)
            .map(|tier| Rank::new(tier, DEFAULT_DIVISION, preferred))
            .unwrap_or_else(Rank::unranked)
    } else {
        let tier = find_tier(token)?;
        let division = caps
            .get(5)
            .and_then(|m| m.as_str().parse::<u8>().ok())
            .unwrap_or(DEFAULT_DIVISION);
        Rank::new(tier, division, preferred)
    };

    Some(Segment { role, rank })
}

/// Tank, dps, support slots being filled for one line.
struct RankSlots {
    ranks: [Rank; 3],
    auto: usize,
}

impl RankSlots {
    fn new() -> Self {
        Self {
            ranks: [Rank::unranked(); 3],
            auto: 0,
        }
    }

    fn place(&mut self, role: Option<Role>, rank: Rank) {
        match role {
            Some(role) => self.ranks[role as usize] = rank,
            None => {
                if let Some(slot) = self.ranks.get_mut(self.auto) {
                    *slot = rank;
                }
                self.auto += 1;
            }
        }
    }
}

/// Parses one `name#tag ranks...` line. Returns `None` when there is no
/// name tag or when every role ends up unranked.
pub fn parse_line(line: &str, id: PlayerId) -> Option<Player> {
    let line = line.trim();
    let name_match = NAME_RE.find(line)?;
    let name: String = name_match.as_str().split_whitespace().collect();

    let rest = NOISE_RE.replace_all(&line[name_match.end()..], "");
    let rest = rest.replace(',', " ");
    let rest = rest.trim();

    let mut slots = RankSlots::new();
    let parts: Vec<&str> = rest.split('/').map(str::trim).filter(|p| !p.is_empty()).collect();

    if parts.len() >= 2 {
        // One segment per part; an unreadable unlabeled part still uses up its slot.
        for part in parts {
            match SEGMENT_RE.captures(part).and_then(|c| segment_from(&c)) {
                Some(seg) => slots.place(seg.role, seg.rank),
                None => slots.place(None, Rank::unranked()),
            }
        }
    } else {
        for caps in SEGMENT_RE.captures_iter(rest) {
            if let Some(seg) = segment_from(&caps) {
                slots.place(seg.role, seg.rank);
            }
        }
    }

    let [tank, dps, support] = slots.ranks;
    let player = Player::new(id, name, tank, dps, support);
    if player.is_fully_unranked() {
        debug!(line, "Skipping line without any ranked role");
        return None;
    }
    Some(player)
}

/// Parses a pasted chat log. Only lines with a `#` and a 4+ digit tag are
/// considered, chat metadata lines are skipped, and repeated names keep their
/// first occurrence. Ids are handed out sequentially from `first_id`.
pub fn parse_roster(text: &str, first_id: PlayerId) -> Vec<Player> {
    let mut players = Vec::new();
    let mut seen = HashSet::new();
    let mut next_id = first_id;

    for line in text.lines() {
        if !line.contains('#') || !TAG_RE.is_match(line) {
            continue;
        }
        if line.contains("역할 아이콘") || line.contains('—') {
            continue;
        }

        if let Some(player) = parse_line(line, next_id) {
            if seen.insert(player.name.clone()) {
                players.push(player);
                next_id += 1;
            }
        }
    }

    players
}

/// Reads a single rank token such as `diamond3!`, `다3` or `unranked`.
/// Anything unrecognised is unranked.
pub fn parse_rank(token: &str) -> Rank {
    SEGMENT_RE
        .captures(token.trim())
        .and_then(|c| segment_from(&c))
        .map(|seg| seg.rank)
        .unwrap_or_else(Rank::unranked)
}
