//! Stats gateway
//!
//! Projects raw leaderboard rows into the flat stat shapes served by the
//! API: a games-descending team roster, or one player's full season line.
//! Rows pass through the injected disk cache so repeat lookups within a
//! season don't refetch the provider.

use crate::catalog;
use crate::error::{DugoutError, Result};
use crate::stats::cache::StatsCache;
use crate::stats::types::{
    round_to, BatterStats, BatterSummary, PitcherStats, PitcherSummary, PlayerRole, PlayerStats,
    StatValue, TeamRoster,
};
use crate::stats::StatsSource;
use serde_json::Value;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::debug;

pub struct StatsGateway {
    source: Arc<dyn StatsSource>,
    cache: Option<StatsCache>,
}

impl StatsGateway {
    pub fn new(source: Arc<dyn StatsSource>, cache: Option<StatsCache>) -> Self {
        Self { source, cache }
    }

    /// Leaderboard rows for one (role, season), read through the cache.
    async fn rows(&self, role: PlayerRole, season: i32) -> Result<Vec<Value>> {
        if let Some(cache) = &self.cache {
            if let Some(rows) = cache.load(role, season) {
                return Ok(rows);
            }
        }

        let rows = match role {
            PlayerRole::Batter => self.source.batting(season).await?,
            PlayerRole::Pitcher => self.source.pitching(season).await?,
        };

        if let Some(cache) = &self.cache {
            cache.store(role, season, &rows);
        }
        Ok(rows)
    }

    /// Both rosters for a team/season, each sorted descending by games.
    pub async fn team_roster(&self, team_code: &str, year: i32) -> Result<TeamRoster> {
        if !catalog::is_known_code(team_code) {
            return Err(DugoutError::Validation(format!(
                "Unknown team code '{team_code}'"
            )));
        }
        validate_year(year)?;

        let batting = self.rows(PlayerRole::Batter, year).await?;
        let pitching = self.rows(PlayerRole::Pitcher, year).await?;

        let mut batters: Vec<BatterSummary> = batting
            .iter()
            .filter(|row| row_team(row) == Some(team_code))
            .map(batter_summary)
            .collect();
        let mut pitchers: Vec<PitcherSummary> = pitching
            .iter()
            .filter(|row| row_team(row) == Some(team_code))
            .map(pitcher_summary)
            .collect();

        batters.sort_by_key(|b| Reverse(b.games));
        pitchers.sort_by_key(|p| Reverse(p.games));

        debug!(
            "Roster for {} {}: {} batters, {} pitchers",
            team_code,
            year,
            batters.len(),
            pitchers.len()
        );

        Ok(TeamRoster {
            team: catalog::display_name(team_code).to_string(),
            year,
            batters,
            pitchers,
        })
    }

    /// Full season line for one player, or None when no row matches.
    ///
    /// Matching is exact on the dataset's name string; absence is an
    /// explicit not-found signal, not an error.
    pub async fn player_stats(
        &self,
        name: &str,
        year: i32,
        role: PlayerRole,
    ) -> Result<Option<PlayerStats>> {
        validate_year(year)?;

        let rows = self.rows(role, year).await?;
        let row = match rows.iter().find(|row| row_name(row) == Some(name)) {
            Some(row) => row,
            None => return Ok(None),
        };

        let stats = match role {
            PlayerRole::Batter => PlayerStats::Batter(batter_stats(row, name, year)),
            PlayerRole::Pitcher => PlayerStats::Pitcher(pitcher_stats(row, name, year)),
        };
        Ok(Some(stats))
    }
}

fn validate_year(year: i32) -> Result<()> {
    if !catalog::is_supported_year(year) {
        return Err(DugoutError::Validation(format!(
            "Season {year} is outside the supported range {}-{}",
            catalog::EARLIEST_SEASON,
            catalog::LATEST_SEASON
        )));
    }
    Ok(())
}

// Row projection helpers. The leaderboard schema has drifted over the
// years (PlayerName vs Name, TeamName vs Team), so each field checks the
// known aliases in order.

fn field<'a>(row: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let obj = row.as_object()?;
    keys.iter()
        .find_map(|k| obj.get(*k))
        .filter(|v| !v.is_null())
}

fn row_name(row: &Value) -> Option<&str> {
    field(row, &["Name", "PlayerName"]).and_then(Value::as_str)
}

fn row_team(row: &Value) -> Option<&str> {
    field(row, &["Team", "TeamName", "TeamNameAbb"]).and_then(Value::as_str)
}

fn int_stat(row: &Value, keys: &[&str]) -> i64 {
    field(row, keys)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0)
}

fn float_stat(row: &Value, keys: &[&str], places: u32) -> f64 {
    round_to(
        field(row, keys).and_then(Value::as_f64).unwrap_or(0.0),
        places,
    )
}

/// Stat that is absent from the source schema in some seasons
fn opt_float_stat(row: &Value, keys: &[&str], places: u32) -> StatValue {
    match field(row, keys).and_then(Value::as_f64) {
        Some(v) => StatValue::Float(round_to(v, places)),
        None => StatValue::na(),
    }
}

fn opt_int_stat(row: &Value, keys: &[&str]) -> StatValue {
    match field(row, keys).and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))) {
        Some(v) => StatValue::Int(v),
        None => StatValue::na(),
    }
}

fn team_or_na(row: &Value) -> String {
    row_team(row).unwrap_or("N/A").to_string()
}

fn batter_summary(row: &Value) -> BatterSummary {
    BatterSummary {
        name: row_name(row).unwrap_or_default().to_string(),
        player_type: PlayerRole::Batter.as_str().to_string(),
        games: int_stat(row, &["G"]),
        avg: float_stat(row, &["AVG"], 3),
        hr: int_stat(row, &["HR"]),
        rbi: int_stat(row, &["RBI"]),
        ops: float_stat(row, &["OPS"], 3),
    }
}

fn pitcher_summary(row: &Value) -> PitcherSummary {
    PitcherSummary {
        name: row_name(row).unwrap_or_default().to_string(),
        player_type: PlayerRole::Pitcher.as_str().to_string(),
        games: int_stat(row, &["G"]),
        era: float_stat(row, &["ERA"], 2),
        wins: int_stat(row, &["W"]),
        strikeouts: int_stat(row, &["SO"]),
        whip: float_stat(row, &["WHIP"], 2),
    }
}

fn batter_stats(row: &Value, name: &str, year: i32) -> BatterStats {
    BatterStats {
        name: name.to_string(),
        year,
        player_type: PlayerRole::Batter.as_str().to_string(),
        team: team_or_na(row),
        games: int_stat(row, &["G"]),
        at_bats: int_stat(row, &["AB"]),
        hits: int_stat(row, &["H"]),
        doubles: int_stat(row, &["2B"]),
        triples: int_stat(row, &["3B"]),
        home_runs: int_stat(row, &["HR"]),
        rbi: int_stat(row, &["RBI"]),
        stolen_bases: int_stat(row, &["SB"]),
        walks: int_stat(row, &["BB"]),
        strikeouts: int_stat(row, &["SO"]),
        avg: float_stat(row, &["AVG"], 3),
        obp: float_stat(row, &["OBP"], 3),
        slg: float_stat(row, &["SLG"], 3),
        ops: float_stat(row, &["OPS"], 3),
        war: float_stat(row, &["WAR"], 1),
        wrc_plus: opt_int_stat(row, &["wRC+"]),
    }
}

fn pitcher_stats(row: &Value, name: &str, year: i32) -> PitcherStats {
    PitcherStats {
        name: name.to_string(),
        year,
        player_type: PlayerRole::Pitcher.as_str().to_string(),
        team: team_or_na(row),
        games: int_stat(row, &["G"]),
        games_started: int_stat(row, &["GS"]),
        wins: int_stat(row, &["W"]),
        losses: int_stat(row, &["L"]),
        saves: int_stat(row, &["SV"]),
        innings_pitched: float_stat(row, &["IP"], 1),
        strikeouts: int_stat(row, &["SO"]),
        walks: int_stat(row, &["BB"]),
        era: float_stat(row, &["ERA"], 2),
        whip: float_stat(row, &["WHIP"], 2),
        k9: opt_float_stat(row, &["K/9"], 1),
        bb9: opt_float_stat(row, &["BB/9"], 1),
        fip: opt_float_stat(row, &["FIP"], 2),
        war: float_stat(row, &["WAR"], 1),
    }
}
