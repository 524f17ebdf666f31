use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw shape of the live per-gameweek points resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveResponse {
    #[serde(default)]
    pub elements: Vec<LiveElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveElement {
    pub id: u32,
    #[serde(default)]
    pub stats: LiveStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveStats {
    #[serde(default)]
    pub total_points: i64,
}

/// Per-gameweek raw point totals keyed by player id.
/// A player absent from the live feed scores 0.
#[derive(Debug, Clone)]
pub struct LivePoints {
    gw: u32,
    points: HashMap<u32, i64>,
}

impl LivePoints {
    pub fn new(gw: u32, response: &LiveResponse) -> Self {
        let points = response
            .elements
            .iter()
            .map(|element| (element.id, element.stats.total_points))
            .collect();
        LivePoints { gw, points }
    }

    /// The gameweek these totals belong to
    pub fn gameweek(&self) -> u32 {
        self.gw
    }

    /// Raw live points for a player, defaulting to 0 when absent
    pub fn raw_points(&self, player_id: u32) -> i64 {
        self.points.get(&player_id).copied().unwrap_or(0)
    }
}
