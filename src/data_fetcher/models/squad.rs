use super::catalog::Position;
use serde::{Deserialize, Serialize};

/// One roster slot in a manager's squad for a given gameweek.
///
/// This is the canonical record shape. The field names double as the first
/// entry of each alias list in the normalizer, so normalizing an
/// already-canonical pick is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pick {
    pub id: u32,
    pub web_name: String,
    pub position: Position,
    #[serde(default)]
    pub team: Option<u32>,
    #[serde(default)]
    pub gw_points: Option<i64>,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default = "default_multiplier")]
    pub multiplier: i64,
}

fn default_multiplier() -> i64 {
    1
}

/// A manager's squad for one gameweek plus its header metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadPayload {
    pub entry_id: u64,
    pub team_name: String,
    pub manager_name: String,
    pub gw: u32,
    pub picks: Vec<Pick>,
}

/// Raw shape of the public entry (manager) profile resource. Only the
/// fields the squad view needs; everything else rides along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryProfile {
    pub id: u64,
    /// The entry's team name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub player_first_name: Option<String>,
    #[serde(default)]
    pub player_last_name: Option<String>,
    #[serde(default)]
    pub current_event: Option<u32>,
}

impl EntryProfile {
    /// Manager display name assembled from the profile's name parts
    pub fn manager_name(&self) -> Option<String> {
        match (&self.player_first_name, &self.player_last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}

/// Summary of an entry's participation history across past seasons.
/// Derived from the upstream entry-history resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryHistory {
    pub entry_id: u64,
    pub seasons_played: usize,
    pub first_season: Option<String>,
    pub playing_since_year: Option<i32>,
    pub seasons: Vec<String>,
}

impl EntryHistory {
    /// Builds the summary from the raw list of season names ("2019/20" style).
    /// Lexicographic sort is chronological for that format.
    pub fn from_seasons(entry_id: u64, mut seasons: Vec<String>) -> Self {
        seasons.sort();

        let first_season = seasons.first().cloned();
        let playing_since_year = first_season.as_ref().and_then(|season| {
            season
                .split_once('/')
                .and_then(|(start, _)| start.parse::<i32>().ok())
        });

        EntryHistory {
            entry_id,
            seasons_played: seasons.len(),
            first_season,
            playing_since_year,
            seasons,
        }
    }
}
