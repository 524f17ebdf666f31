//! One-shot page rendering: each view is assembled into a [`CompanionPage`]
//! of preformatted lines and written to the terminal in a single buffered
//! operation. Pure presentation; all ordering policy lives in the
//! processors module.

pub mod colors;

use std::io::Write;

use crate::data_fetcher::models::{CatalogIndex, Fixture, Position, SquadPayload, StandingRow};
use crate::data_fetcher::processors::{BonusRank, group_picks_by_position};
use crate::error::AppError;
use colors::*;

/// A renderable page: a header bar, a subheader and preformatted content
/// rows. Built fully in memory, then written once.
#[derive(Debug)]
pub struct CompanionPage {
    title: String,
    subheader: String,
    rows: Vec<String>,
}

fn fg(color: crossterm::style::Color, text: &str) -> String {
    format!("\x1b[38;5;{}m{}\x1b[0m", get_ansi_code(color, 231), text)
}

impl CompanionPage {
    pub fn new(title: impl Into<String>, subheader: impl Into<String>) -> Self {
        CompanionPage {
            title: title.into(),
            subheader: subheader.into(),
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, row: String) {
        self.rows.push(row);
    }

    /// Content rows without styling, for tests and plain output
    pub fn plain_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| strip_ansi(row))
            .collect()
    }

    /// Renders the whole page into the writer in one buffered write
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let mut buffer = String::with_capacity(1024 + self.rows.len() * 80);

        let header_bg_code = get_ansi_code(header_bg(), 21);
        let header_fg_code = get_ansi_code(header_fg(), 231);
        buffer.push_str(&format!(
            "\x1b[48;5;{}m\x1b[38;5;{}m {:<78}\x1b[0m\n",
            header_bg_code, header_fg_code, self.title
        ));
        buffer.push_str(&fg(subheader_fg(), &format!(" {}", self.subheader)));
        buffer.push('\n');
        buffer.push('\n');

        for row in &self.rows {
            buffer.push(' ');
            buffer.push_str(row);
            buffer.push('\n');
        }

        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the terminating 'm' of the escape sequence
            for e in chars.by_ref() {
                if e == 'm' {
                    break;
                }
            }
        } else {
            output.push(c);
        }
    }
    output
}

/// Rank movement marker derived from last_rank
fn movement_marker(row: &StandingRow) -> String {
    match row.rank_movement() {
        Some(m) if m > 0 => fg(up_fg(), "\u{25b2}"),
        Some(m) if m < 0 => fg(down_fg(), "\u{25bc}"),
        _ => fg(dim_fg(), "\u{00b7}"),
    }
}

/// Builds the league standings table
pub fn standings_page(league_id: u64, rows: &[StandingRow]) -> CompanionPage {
    let mut page = CompanionPage::new("LEAGUE TABLE", format!("League {league_id}"));

    if rows.is_empty() {
        page.push_row(fg(dim_fg(), "No league data yet."));
        return page;
    }

    page.push_row(fg(
        label_fg(),
        &format!(
            "{:>3}   {:<24}{:<20}{:>4}{:>7}",
            "#", "Team", "Manager", "GW", "Total"
        ),
    ));

    for row in rows {
        let rank = row
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let event_total = row
            .event_total
            .map(|p| p.to_string())
            .unwrap_or_else(|| "\u{2014}".to_string());

        let line = format!(
            "{rank:>3} {} {:<24}{:<20}{:>4}{}",
            movement_marker(row),
            truncate(&row.entry_name, 23),
            truncate(&row.player_name, 19),
            event_total,
            fg(points_fg(), &format!("{:>7}", row.total)),
        );
        page.push_row(line);
    }

    page
}

/// Builds the squad view, grouped by position
pub fn squad_page(payload: &SquadPayload, index: &CatalogIndex<'_>) -> CompanionPage {
    let mut page = CompanionPage::new(
        "SQUAD",
        format!(
            "{} \u{2022} {} \u{2022} GW {}",
            payload.team_name, payload.manager_name, payload.gw
        ),
    );

    let groups = group_picks_by_position(&payload.picks);

    for position in Position::ALL {
        let Some(picks) = groups.get(&position) else {
            continue;
        };

        page.push_row(fg(subheader_fg(), position.group_label()));
        for pick in picks {
            let team = pick
                .team
                .map(|id| index.team_name(id))
                .unwrap_or_default();
            let points = pick
                .gw_points
                .map(|p| p.to_string())
                .unwrap_or_else(|| "\u{2014}".to_string());
            let captain = if pick.is_captain {
                fg(captain_fg(), " (C)")
            } else {
                String::new()
            };

            page.push_row(format!(
                "  {:<22}{:<6}{}{}",
                truncate(&pick.web_name, 21),
                team,
                fg(points_fg(), &format!("{points:>4}")),
                captain,
            ));
        }
    }

    page
}

/// Status column for a fixture: kickoff time while upcoming, LIVE while in
/// play, FT when finished
fn fixture_status(fixture: &Fixture) -> String {
    if fixture.finished {
        fg(dim_fg(), "FT")
    } else if fixture.started {
        fg(live_fg(), "LIVE")
    } else {
        let kickoff = fixture
            .kickoff_time
            .as_deref()
            .and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.format("%a %H:%M").to_string())
            .unwrap_or_default();
        fg(label_fg(), &kickoff)
    }
}

/// Builds the fixtures view. Expects the caller to have sorted the list.
pub fn fixtures_page(gw: u32, fixtures: &[Fixture], index: &CatalogIndex<'_>) -> CompanionPage {
    let mut page = CompanionPage::new("FIXTURES", format!("Gameweek {gw}"));

    if fixtures.is_empty() {
        page.push_row(fg(dim_fg(), "No fixtures for this gameweek."));
        return page;
    }

    for fixture in fixtures {
        page.push_row(format!(
            "{:>4} {} {:<4}  {}",
            index.team_name(fixture.team_h),
            fg(points_fg(), &fixture.score_line()),
            index.team_name(fixture.team_a),
            fixture_status(fixture),
        ));
    }

    page
}

/// Builds the bonus leaderboard view
pub fn bonus_page(gw: u32, rows: &[BonusRank]) -> CompanionPage {
    let mut page = CompanionPage::new("BONUS POINTS", format!("Gameweek {gw}"));

    if rows.is_empty() {
        page.push_row(fg(dim_fg(), "No bonus data available yet."));
        return page;
    }

    page.push_row(fg(label_fg(), &format!("{:<24}{:>6}", "Player", "Bonus")));
    for row in rows {
        page.push_row(format!(
            "{:<24}{}",
            truncate(&row.web_name, 23),
            fg(points_fg(), &format!("{:>6}", format!("+{}", row.total_bonus))),
        ));
    }

    page
}

/// Friendly failure page; diagnostics go on a dim row so they never block
/// the rest of the output
pub fn error_page(view: &str, error: &AppError) -> CompanionPage {
    let mut page = CompanionPage::new(view.to_uppercase(), "Unavailable");

    let message = if matches!(error, AppError::NetworkTimeout { .. }) {
        "The upstream service timed out. Try again in a moment."
    } else if error.is_rejection() {
        "The upstream service rejected the request."
    } else {
        "Could not load this view right now."
    };
    page.push_row(message.to_string());
    page.push_row(fg(dim_fg(), &error.to_string()));
    page
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('\u{2026}');
        truncated
    }
}
