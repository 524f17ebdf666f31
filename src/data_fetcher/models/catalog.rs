use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Roster position codes. The upstream catalog constrains every player to
/// exactly one of these four codes (1 through 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Resolves a raw numeric position code. Anything outside 1..=4 is unknown.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Position::Goalkeeper),
            2 => Some(Position::Defender),
            3 => Some(Position::Midfielder),
            4 => Some(Position::Forward),
            _ => None,
        }
    }

    /// The upstream numeric code for this position
    pub fn code(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    /// Three-letter display label
    pub fn short_label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    /// Section heading used when grouping a squad by position
    pub fn group_label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeepers",
            Position::Defender => "Defenders",
            Position::Midfielder => "Midfielders",
            Position::Forward => "Forwards",
        }
    }

    /// All positions in display order
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.code()
    }
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Position::from_code(i64::from(code)).ok_or_else(|| format!("invalid position code {code}"))
    }
}

/// One gameweek descriptor from the reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub deadline_time: Option<String>,
}

/// One club from the reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    /// Stable external asset code, used only for presentation
    #[serde(default)]
    pub code: Option<u64>,
}

/// One player from the reference catalog. `element_type` is kept raw here;
/// resolution to [`Position`] happens at index-build time so a single bad
/// element cannot fail the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: u32,
    pub web_name: String,
    pub team: u32,
    pub element_type: u8,
}

/// Snapshot of all known competition entities at a point in time.
/// Fetched fresh per request, never mutated, discarded afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl ReferenceCatalog {
    /// Builds the request-scoped lookup index over this catalog.
    pub fn index(&self) -> CatalogIndex<'_> {
        CatalogIndex::new(self)
    }
}

/// Request-scoped immutable lookup maps over a [`ReferenceCatalog`].
/// Built once per request and passed explicitly through the normalizer and
/// enricher; there is no process-global player or team state.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    players: HashMap<u32, (&'a Element, Position)>,
    teams: HashMap<u32, &'a Team>,
}

impl<'a> CatalogIndex<'a> {
    /// Indexes players and teams by id. Elements whose position code does not
    /// resolve to one of the four valid codes are skipped, matching upstream
    /// payloads that occasionally carry non-player rows.
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        let mut players = HashMap::with_capacity(catalog.elements.len());
        for element in &catalog.elements {
            if let Some(position) = Position::from_code(i64::from(element.element_type)) {
                players.insert(element.id, (element, position));
            }
        }

        let teams = catalog.teams.iter().map(|t| (t.id, t)).collect();

        CatalogIndex { players, teams }
    }

    /// Looks up a player by id, returning the element and its resolved position
    pub fn player(&self, id: u32) -> Option<(&'a Element, Position)> {
        self.players.get(&id).copied()
    }

    /// Looks up a club by id
    pub fn team(&self, id: u32) -> Option<&'a Team> {
        self.teams.get(&id).copied()
    }

    /// Display name for a player, falling back to a placeholder when the
    /// catalog has no entry. Lookup failure must never fail the request.
    pub fn player_name(&self, id: u32) -> String {
        match self.player(id) {
            Some((element, _)) => element.web_name.clone(),
            None => format!("Player {id}"),
        }
    }

    /// Display name for a club, falling back to a placeholder when the
    /// catalog has no entry
    pub fn team_name(&self, id: u32) -> String {
        match self.team(id) {
            Some(team) => {
                if team.short_name.is_empty() {
                    team.name.clone()
                } else {
                    team.short_name.clone()
                }
            }
            None => format!("Team {id}"),
        }
    }

    /// Number of indexed players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> ReferenceCatalog {
        ReferenceCatalog {
            events: vec![
                Event {
                    id: 1,
                    is_current: false,
                    finished: true,
                    deadline_time: Some("2025-08-15T17:30:00Z".to_string()),
                },
                Event {
                    id: 2,
                    is_current: true,
                    finished: false,
                    deadline_time: None,
                },
            ],
            teams: vec![Team {
                id: 3,
                name: "Arsenal".to_string(),
                short_name: "ARS".to_string(),
                code: Some(3),
            }],
            elements: vec![
                Element {
                    id: 7,
                    web_name: "Saka".to_string(),
                    team: 3,
                    element_type: 3,
                },
                Element {
                    id: 99,
                    web_name: "Manager Row".to_string(),
                    team: 3,
                    element_type: 5, // not a real position
                },
            ],
        }
    }

    #[test]
    fn test_position_from_code() {
        assert_eq!(Position::from_code(1), Some(Position::Goalkeeper));
        assert_eq!(Position::from_code(2), Some(Position::Defender));
        assert_eq!(Position::from_code(3), Some(Position::Midfielder));
        assert_eq!(Position::from_code(4), Some(Position::Forward));
        assert_eq!(Position::from_code(0), None);
        assert_eq!(Position::from_code(5), None);
        assert_eq!(Position::from_code(-1), None);
    }

    #[test]
    fn test_position_serde_round_trip() {
        let json = serde_json::to_string(&Position::Midfielder).unwrap();
        assert_eq!(json, "3");
        let parsed: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Position::Midfielder);
    }

    #[test]
    fn test_position_rejects_invalid_code() {
        let result = serde_json::from_str::<Position>("7");
        assert!(result.is_err());
    }

    #[test]
    fn test_index_skips_unresolvable_positions() {
        let catalog = create_test_catalog();
        let index = catalog.index();

        assert_eq!(index.player_count(), 1);
        assert!(index.player(7).is_some());
        assert!(index.player(99).is_none());
    }

    #[test]
    fn test_index_player_lookup() {
        let catalog = create_test_catalog();
        let index = catalog.index();

        let (element, position) = index.player(7).unwrap();
        assert_eq!(element.web_name, "Saka");
        assert_eq!(element.team, 3);
        assert_eq!(position, Position::Midfielder);
    }

    #[test]
    fn test_placeholder_names_on_missing_entries() {
        let catalog = create_test_catalog();
        let index = catalog.index();

        assert_eq!(index.player_name(7), "Saka");
        assert_eq!(index.player_name(1234), "Player 1234");
        assert_eq!(index.team_name(3), "ARS");
        assert_eq!(index.team_name(55), "Team 55");
    }

    #[test]
    fn test_catalog_deserializes_with_missing_sections() {
        let catalog: ReferenceCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.events.is_empty());
        assert!(catalog.teams.is_empty());
        assert!(catalog.elements.is_empty());
    }

    #[test]
    fn test_catalog_deserializes_upstream_shape() {
        let json = r#"{
            "events": [{"id": 1, "is_current": true, "finished": false}],
            "teams": [{"id": 3, "name": "Arsenal", "short_name": "ARS", "code": 3}],
            "elements": [{"id": 7, "web_name": "Saka", "team": 3, "element_type": 3}]
        }"#;

        let catalog: ReferenceCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.events.len(), 1);
        assert!(catalog.events[0].is_current);
        assert_eq!(catalog.teams[0].short_name, "ARS");
        assert_eq!(catalog.elements[0].web_name, "Saka");
    }
}
