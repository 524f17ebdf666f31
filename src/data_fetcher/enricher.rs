//! Completion of normalized records against the reference catalog, plus the
//! derived per-gameweek values (live points, bonus tallies, current-gameweek
//! resolution).
//!
//! Enrichment never fails on a missing catalog entry - it degrades to
//! placeholder labels. Only an unobtainable catalog is an error, and that is
//! raised by the fetch layer before anything here runs.

use tracing::debug;

use crate::constants::FALLBACK_GAMEWEEK;
use crate::data_fetcher::models::{
    CatalogIndex, Event, Fixture, LivePoints, Pick, Position,
};
use crate::data_fetcher::normalizer::PickDraft;

/// Result of enriching a list of pick drafts
#[derive(Debug, Clone)]
pub struct EnrichedPicks {
    pub picks: Vec<Pick>,
    /// Drafts discarded because no position could be resolved from either
    /// the raw payload or the catalog
    pub dropped: usize,
}

/// Resolves the current gameweek from the catalog's event list.
///
/// Selection order, which several call sites depend on sharing exactly:
/// the event flagged current, else the first unfinished event in catalog
/// order, else the first event, else gameweek 1.
pub fn resolve_current_gw(events: &[Event]) -> u32 {
    events
        .iter()
        .find(|event| event.is_current)
        .or_else(|| events.iter().find(|event| !event.finished))
        .or_else(|| events.first())
        .map(|event| event.id)
        .unwrap_or(FALLBACK_GAMEWEEK)
}

/// Captaincy multiplier for a draft: an explicit upstream multiplier wins,
/// otherwise captaincy doubles, otherwise 1.
fn resolve_multiplier(draft: &PickDraft) -> i64 {
    match draft.multiplier {
        Some(multiplier) => multiplier,
        None if draft.is_captain => 2,
        None => 1,
    }
}

/// Completes pick drafts using the catalog index and, when available, the
/// live points feed for the gameweek.
///
/// Per-field policy:
/// - position: raw payload first, catalog second; unresolvable drops the pick
/// - name/team: raw payload first, catalog second, placeholder last
/// - points: raw payload value wins; otherwise the live feed's raw total
///   multiplied by the captaincy multiplier, 0 when the player is absent
pub fn enrich_picks(
    drafts: &[PickDraft],
    index: &CatalogIndex<'_>,
    live: Option<&LivePoints>,
) -> EnrichedPicks {
    let mut picks = Vec::with_capacity(drafts.len());
    let mut dropped = 0;

    for draft in drafts {
        let catalog_entry = index.player(draft.id);

        let position = draft
            .position_code
            .and_then(Position::from_code)
            .or(catalog_entry.map(|(_, position)| position));

        let Some(position) = position else {
            dropped += 1;
            continue;
        };

        let web_name = draft
            .web_name
            .clone()
            .or_else(|| catalog_entry.map(|(element, _)| element.web_name.clone()))
            .unwrap_or_else(|| format!("Player {}", draft.id));

        let team = draft
            .team
            .or(catalog_entry.map(|(element, _)| element.team));

        let multiplier = resolve_multiplier(draft);
        let gw_points = match draft.gw_points {
            Some(points) => Some(points),
            None => live.map(|live| live.raw_points(draft.id) * multiplier),
        };

        picks.push(Pick {
            id: draft.id,
            web_name,
            position,
            team,
            gw_points,
            is_captain: draft.is_captain,
            multiplier,
        });
    }

    if dropped > 0 {
        debug!("Dropped {dropped} picks without a resolvable position");
    }

    EnrichedPicks { picks, dropped }
}

/// Per-gameweek bonus totals keyed by player id, preserving first-seen
/// order. Rebuilt from scratch every request; order stability is the only
/// tie guarantee the tally itself makes.
#[derive(Debug, Clone, Default)]
pub struct BonusTally {
    entries: Vec<(u32, i64)>,
}

impl BonusTally {
    fn add(&mut self, player_id: u32, value: i64) {
        match self.entries.iter_mut().find(|(id, _)| *id == player_id) {
            Some((_, total)) => *total += value,
            None => self.entries.push((player_id, value)),
        }
    }

    /// Total bonus for a player, 0 when absent
    pub fn total(&self, player_id: u32) -> i64 {
        self.entries
            .iter()
            .find(|(id, _)| *id == player_id)
            .map(|(_, total)| *total)
            .unwrap_or(0)
    }

    /// (player id, total) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (u32, i64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sums every fixture's bonus stat block across both home and away sides.
/// A simple grouped sum with no weighting.
pub fn build_bonus_tally(fixtures: &[Fixture]) -> BonusTally {
    let mut tally = BonusTally::default();

    for fixture in fixtures {
        if let Some(bonus) = fixture.bonus_stat() {
            for entry in bonus.h.iter().chain(bonus.a.iter()) {
                tally.add(entry.element, entry.value);
            }
        }
    }

    tally
}
