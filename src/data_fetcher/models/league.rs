use serde::{Deserialize, Serialize};

/// One team's row in a classic-league table.
///
/// `rank` and `last_rank` are preserved as sent by the source so the
/// presentation layer can show rank movement; `event_total` is optional
/// because some sources omit current-gameweek points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingRow {
    pub entry: u64,
    pub entry_name: String,
    pub player_name: String,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub last_rank: Option<u32>,
    pub total: i64,
    #[serde(default)]
    pub event_total: Option<i64>,
}

impl StandingRow {
    /// Rank movement since the previous gameweek: positive means the entry
    /// climbed. None when either rank is missing.
    pub fn rank_movement(&self) -> Option<i64> {
        match (self.rank, self.last_rank) {
            (Some(rank), Some(last_rank)) => Some(i64::from(last_rank) - i64::from(rank)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_movement_up() {
        let row = StandingRow {
            entry: 1,
            entry_name: "Lobster XI".to_string(),
            player_name: "Niko".to_string(),
            rank: Some(2),
            last_rank: Some(5),
            total: 312,
            event_total: Some(61),
        };
        assert_eq!(row.rank_movement(), Some(3));
    }

    #[test]
    fn test_rank_movement_down() {
        let row = StandingRow {
            entry: 1,
            entry_name: "Lobster XI".to_string(),
            player_name: "Niko".to_string(),
            rank: Some(8),
            last_rank: Some(4),
            total: 280,
            event_total: None,
        };
        assert_eq!(row.rank_movement(), Some(-4));
    }

    #[test]
    fn test_rank_movement_missing_rank() {
        let row = StandingRow {
            entry: 1,
            entry_name: "Lobster XI".to_string(),
            player_name: "Niko".to_string(),
            rank: None,
            last_rank: Some(4),
            total: 280,
            event_total: None,
        };
        assert_eq!(row.rank_movement(), None);
    }

    #[test]
    fn test_standing_row_deserializes_canonical_shape() {
        let json = r#"{
            "entry": 123,
            "entry_name": "Lobster XI",
            "player_name": "Niko",
            "rank": 1,
            "last_rank": 2,
            "total": 312,
            "event_total": 61
        }"#;

        let row: StandingRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.entry, 123);
        assert_eq!(row.rank, Some(1));
        assert_eq!(row.event_total, Some(61));
    }
}
