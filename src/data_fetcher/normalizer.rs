//! Coercion of loosely-shaped upstream JSON into canonical records.
//!
//! The upstream API has changed shape several times: the same logical
//! resource has been served as a bare array, under different container
//! fields, and with different field names per element. Everything here works
//! on [`serde_json::Value`], probes known shapes in a fixed priority order,
//! and never panics on a shape mismatch - unusable elements are counted and
//! skipped, and a document with no recognizable container yields None, which
//! callers map to a distinguishable "no usable data" outcome.

use serde_json::Value;
use tracing::debug;

use crate::constants::normalizer::DEEP_SEARCH_MAX_DEPTH;
use crate::data_fetcher::models::{Fixture, StandingRow};

/// Container field names probed, in priority order, for a squad payload
const SQUAD_CONTAINERS: [&str; 6] = ["picks", "squad", "results", "players", "data", "team.picks"];

/// Container field names probed, in priority order, for a standings payload
const STANDINGS_CONTAINERS: [&str; 4] = ["standings", "standings.results", "results", "data"];

/// Container field names probed, in priority order, for a fixtures payload
const FIXTURES_CONTAINERS: [&str; 3] = ["fixtures", "results", "data"];

/// Keys that make an object "look like" a squad pick to the deep-search
/// fallback. A guess about unknown future upstream shapes, not a contract.
const PICK_SIGNAL_KEYS: [&str; 4] = ["element", "id", "player_id", "code"];

/// Strategy for the last-resort object-graph search used when no known
/// container field matches. Kept separate from the alias-based path so it
/// can be disabled and tested independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepSearch {
    Disabled,
    Bounded { max_depth: usize },
}

/// Normalization policy knobs.
///
/// `drop_invalid` names the silent-drop behavior explicitly: elements that
/// fail a required-field check are skipped and counted rather than failing
/// the document. Turning it off keeps nothing extra - invalid elements have
/// no canonical form - but the flag makes the policy visible at call sites
/// and in tests.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub drop_invalid: bool,
    pub deep_search: DeepSearch,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            drop_invalid: true,
            deep_search: DeepSearch::Bounded {
                max_depth: DEEP_SEARCH_MAX_DEPTH,
            },
        }
    }
}

/// A pick as far as it can be resolved without the reference catalog.
/// Only the player id is required; the enricher backfills the rest and
/// applies the position requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickDraft {
    pub id: u32,
    pub web_name: Option<String>,
    pub position_code: Option<i64>,
    pub team: Option<u32>,
    pub gw_points: Option<i64>,
    pub is_captain: bool,
    pub multiplier: Option<i64>,
}

/// Result of normalizing a squad document
#[derive(Debug, Clone)]
pub struct NormalizedSquad {
    pub drafts: Vec<PickDraft>,
    /// Elements skipped for lacking a resolvable player id
    pub dropped: usize,
    pub meta: SquadMeta,
}

/// Header fields recovered from the squad container object
#[derive(Debug, Clone, Default)]
pub struct SquadMeta {
    pub entry_id: Option<u64>,
    pub team_name: Option<String>,
    pub manager_name: Option<String>,
    pub gw: Option<u32>,
}

/// Result of normalizing a fixtures document
#[derive(Debug, Clone)]
pub struct NormalizedFixtures {
    pub fixtures: Vec<Fixture>,
    pub dropped: usize,
}

// ---------------------------------------------------------------------------
// Value coercion helpers
// ---------------------------------------------------------------------------

/// Numeric coercion matching the upstream's loose typing: JSON numbers pass
/// through, and numeric strings parse. Everything else is None.
fn coerce_num(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// String coercion: only actual JSON strings qualify
fn coerce_str(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Truthiness in the upstream's sense: false, 0, "", and null are falsy
fn coerce_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First alias present on the object with a non-null value
fn first_alias<'a>(obj: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let map = obj.as_object()?;
    aliases
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

fn alias_num(obj: &Value, aliases: &[&str]) -> Option<i64> {
    first_alias(obj, aliases).and_then(coerce_num)
}

fn alias_str(obj: &Value, aliases: &[&str]) -> Option<String> {
    first_alias(obj, aliases)
        .and_then(coerce_str)
        .map(str::to_string)
}

fn alias_truthy(obj: &Value, aliases: &[&str]) -> bool {
    first_alias(obj, aliases).is_some_and(coerce_truthy)
}

// ---------------------------------------------------------------------------
// Container probing
// ---------------------------------------------------------------------------

/// Resolves a possibly-dotted container path ("team.picks") on an object
fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Probes the named container fields in order, returning the first
/// non-empty array found
fn probe_containers<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Vec<Value>> {
    for name in names {
        if let Some(candidate) = lookup_path(value, name)
            && let Some(items) = candidate.as_array()
            && !items.is_empty()
        {
            debug!("Container probe matched field '{name}'");
            return Some(items);
        }
    }
    None
}

/// Like [`probe_containers`] but accepts empty arrays. Used to distinguish
/// a recognizable-but-empty document (zero items legitimately) from one with
/// no usable container at all.
fn probe_any_container<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Vec<Value>> {
    names
        .iter()
        .filter_map(|name| lookup_path(value, name))
        .find_map(Value::as_array)
}

/// Breadth-first search through the object graph for any non-empty array
/// whose elements all satisfy the shape predicate. Depth is bounded so a
/// pathological document cannot turn this into a full tree walk.
pub fn deep_find_array<'a>(
    root: &'a Value,
    max_depth: usize,
    looks_like: &dyn Fn(&Value) -> bool,
) -> Option<&'a Vec<Value>> {
    let mut queue: Vec<(&Value, usize)> = vec![(root, 0)];
    let mut cursor = 0;

    while cursor < queue.len() {
        let (value, depth) = queue[cursor];
        cursor += 1;

        if let Some(items) = value.as_array()
            && !items.is_empty()
            && items.iter().all(looks_like)
        {
            debug!("Deep search found candidate array at depth {depth}");
            return Some(items);
        }

        if depth >= max_depth {
            continue;
        }

        match value {
            Value::Object(map) => {
                for child in map.values() {
                    queue.push((child, depth + 1));
                }
            }
            Value::Array(items) => {
                for child in items {
                    queue.push((child, depth + 1));
                }
            }
            _ => {}
        }
    }

    None
}

/// Default deep-search predicate for squad picks: an object exposing at
/// least one of the known id-carrying keys
pub fn looks_like_pick(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| PICK_SIGNAL_KEYS.iter().any(|key| map.contains_key(*key)))
}

// ---------------------------------------------------------------------------
// Squad normalization
// ---------------------------------------------------------------------------

/// Maps one raw element to a [`PickDraft`]. None when no player id resolves.
fn normalize_pick_element(raw: &Value) -> Option<PickDraft> {
    if !raw.is_object() {
        return None;
    }

    let id = alias_num(raw, &["id", "element", "player_id", "code"])?;
    let id = u32::try_from(id).ok()?;

    Some(PickDraft {
        id,
        web_name: alias_str(raw, &["web_name", "name", "player_name"]),
        position_code: alias_num(raw, &["position", "element_type", "pos"]),
        team: alias_num(raw, &["team", "team_id", "team_code"])
            .and_then(|t| u32::try_from(t).ok()),
        gw_points: alias_num(raw, &["gw_points", "event_points", "points"]),
        is_captain: alias_truthy(raw, &["is_captain", "captain"]),
        multiplier: alias_num(raw, &["multiplier"]),
    })
}

/// Extracts squad header metadata from the container object
fn normalize_squad_meta(container: &Value) -> SquadMeta {
    SquadMeta {
        entry_id: alias_num(container, &["entry_id", "entry"]).and_then(|v| u64::try_from(v).ok()),
        team_name: alias_str(container, &["team_name", "entry_name"]),
        manager_name: alias_str(container, &["manager_name", "player_name"]),
        gw: alias_num(container, &["gw", "event"]).and_then(|v| u32::try_from(v).ok()),
    }
}

/// Normalizes a raw squad document of uncertain shape.
///
/// Probing order: the known container fields, then - when enabled - the
/// bounded deep search, then the raw value itself if it is already an array.
/// Elements without a resolvable player id are dropped and counted; the
/// position requirement is applied later by the enricher, which can consult
/// the reference catalog.
///
/// Returns None when the document carries no recognizable picks container at
/// all, which callers report differently from a container that normalized to
/// zero picks.
pub fn normalize_squad(raw: &Value, opts: &NormalizeOptions) -> Option<NormalizedSquad> {
    let items: &[Value] = if let Some(items) = probe_containers(raw, &SQUAD_CONTAINERS) {
        items
    } else if let DeepSearch::Bounded { max_depth } = opts.deep_search
        && let Some(items) = deep_find_array(raw, max_depth, &looks_like_pick)
    {
        items
    } else if let Some(items) = raw.as_array() {
        items
    } else if let Some(items) = probe_any_container(raw, &SQUAD_CONTAINERS) {
        items
    } else {
        return None;
    };

    let mut drafts = Vec::with_capacity(items.len());
    let mut dropped = 0;
    for element in items {
        match normalize_pick_element(element) {
            Some(draft) => drafts.push(draft),
            None => {
                if opts.drop_invalid {
                    dropped += 1;
                }
            }
        }
    }

    if dropped > 0 {
        debug!("Dropped {dropped} squad elements without a resolvable player id");
    }

    Some(NormalizedSquad {
        drafts,
        dropped,
        meta: normalize_squad_meta(raw),
    })
}

// ---------------------------------------------------------------------------
// Standings normalization
// ---------------------------------------------------------------------------

/// Maps one raw standings element to a [`StandingRow`].
///
/// Unlike picks, standings rows have no required field beyond being an
/// object: missing fields fall back to neutral defaults so a sparse backend
/// row still renders. Rank fields are preserved as-is when numeric.
fn normalize_standing_element(raw: &Value) -> Option<StandingRow> {
    if !raw.is_object() {
        return None;
    }

    Some(StandingRow {
        entry: alias_num(raw, &["entry", "id", "entry_id"])
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(0),
        entry_name: alias_str(raw, &["entry_name", "team_name", "name"])
            .unwrap_or_else(|| "Team".to_string()),
        player_name: alias_str(raw, &["player_name", "manager_name"])
            .unwrap_or_else(|| "Manager".to_string()),
        rank: alias_num(raw, &["rank"]).and_then(|v| u32::try_from(v).ok()),
        last_rank: alias_num(raw, &["last_rank"]).and_then(|v| u32::try_from(v).ok()),
        total: alias_num(raw, &["total", "total_points"]).unwrap_or(0),
        event_total: alias_num(raw, &["event_total", "gw_points"]),
    })
}

/// Normalizes a raw standings document of uncertain shape.
///
/// The document may be a bare array of rows, or carry them under
/// `standings`, `standings.results`, `results`, or `data`. Returns None when
/// no recognizable container exists; an empty Vec means the league table is
/// legitimately empty.
pub fn normalize_standings(raw: &Value) -> Option<Vec<StandingRow>> {
    let items: &[Value] = if let Some(items) = raw.as_array() {
        items
    } else if let Some(items) = probe_containers(raw, &STANDINGS_CONTAINERS) {
        items
    } else if let Some(items) = probe_any_container(raw, &STANDINGS_CONTAINERS) {
        items
    } else {
        return None;
    };

    Some(items.iter().filter_map(normalize_standing_element).collect())
}

// ---------------------------------------------------------------------------
// Fixtures normalization
// ---------------------------------------------------------------------------

/// Normalizes a raw fixtures document of uncertain shape.
///
/// Fixture elements have kept a stable field vocabulary across upstream
/// revisions, so each candidate element goes through the typed model;
/// elements that do not fit are dropped and counted. Returns None when no
/// recognizable container exists.
pub fn normalize_fixtures(raw: &Value, opts: &NormalizeOptions) -> Option<NormalizedFixtures> {
    let items: &[Value] = if let Some(items) = raw.as_array() {
        items
    } else if let Some(items) = probe_containers(raw, &FIXTURES_CONTAINERS) {
        items
    } else if let Some(items) = probe_any_container(raw, &FIXTURES_CONTAINERS) {
        items
    } else {
        return None;
    };

    let mut fixtures = Vec::with_capacity(items.len());
    let mut dropped = 0;
    for element in items {
        match serde_json::from_value::<Fixture>(element.clone()) {
            Ok(fixture) => fixtures.push(fixture),
            Err(e) => {
                if opts.drop_invalid {
                    dropped += 1;
                    debug!("Dropped unparseable fixture element: {e}");
                }
            }
        }
    }

    Some(NormalizedFixtures { fixtures, dropped })
}
