use serde::{Deserialize, Serialize};

/// Stat identifier whose entries feed the bonus tally. Other stat blocks
/// (goals, assists, cards) ride along in the payload but are not consumed.
pub const BONUS_STAT_IDENTIFIER: &str = "bonus";

/// One (player, value) pair inside a fixture stat block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatEntry {
    pub element: u32,
    pub value: i64,
}

/// One per-stat breakdown for a fixture, split into home and away sides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureStat {
    pub identifier: String,
    #[serde(default)]
    pub h: Vec<StatEntry>,
    #[serde(default)]
    pub a: Vec<StatEntry>,
}

/// One scheduled or played match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u64,
    #[serde(default)]
    pub event: Option<u32>,
    pub team_h: u32,
    pub team_a: u32,
    #[serde(default)]
    pub team_h_score: Option<i64>,
    #[serde(default)]
    pub team_a_score: Option<i64>,
    #[serde(default)]
    pub kickoff_time: Option<String>,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub finished_provisional: bool,
    #[serde(default)]
    pub team_h_difficulty: Option<u8>,
    #[serde(default)]
    pub team_a_difficulty: Option<u8>,
    #[serde(default)]
    pub stats: Vec<FixtureStat>,
}

impl Fixture {
    /// The bonus stat block for this fixture, if present
    pub fn bonus_stat(&self) -> Option<&FixtureStat> {
        self.stats
            .iter()
            .find(|stat| stat.identifier == BONUS_STAT_IDENTIFIER)
    }

    /// Score line as "2–1", or "vs" while no score exists
    pub fn score_line(&self) -> String {
        match (self.team_h_score, self.team_a_score) {
            (Some(h), Some(a)) => format!("{h}\u{2013}{a}"),
            _ => "vs".to_string(),
        }
    }
}
