use crate::error::{DugoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player role, selecting which leaderboard and which stat schema applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Batter,
    Pitcher,
}

impl PlayerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerRole::Batter => "Batter",
            PlayerRole::Pitcher => "Pitcher",
        }
    }

    /// Leaderboard query key for this role
    pub fn stats_key(&self) -> &'static str {
        match self {
            PlayerRole::Batter => "bat",
            PlayerRole::Pitcher => "pit",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerRole {
    type Err = DugoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            s if s.eq_ignore_ascii_case("batter") => Ok(PlayerRole::Batter),
            s if s.eq_ignore_ascii_case("pitcher") => Ok(PlayerRole::Pitcher),
            other => Err(DugoutError::Validation(format!(
                "type must be Batter or Pitcher, got '{other}'"
            ))),
        }
    }
}

/// A stat that may be absent from the source schema for a given season.
/// Absent values serialize as the literal "N/A" marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    pub fn na() -> Self {
        StatValue::Text("N/A".to_string())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(v) => write!(f, "{v}"),
            StatValue::Float(v) => write!(f, "{v}"),
            StatValue::Text(v) => f.write_str(v),
        }
    }
}

/// Roster summary line for a batter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub player_type: String,
    pub games: i64,
    pub avg: f64,
    pub hr: i64,
    pub rbi: i64,
    pub ops: f64,
}

/// Roster summary line for a pitcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitcherSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub player_type: String,
    pub games: i64,
    pub era: f64,
    pub wins: i64,
    pub strikeouts: i64,
    pub whip: f64,
}

/// Full team roster for one season, each list games-descending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team: String,
    pub year: i32,
    pub batters: Vec<BatterSummary>,
    pub pitchers: Vec<PitcherSummary>,
}

/// Full single-season batting line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterStats {
    pub name: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub player_type: String,
    pub team: String,
    pub games: i64,
    pub at_bats: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub rbi: i64,
    pub stolen_bases: i64,
    pub walks: i64,
    pub strikeouts: i64,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub ops: f64,
    pub war: f64,
    pub wrc_plus: StatValue,
}

/// Full single-season pitching line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitcherStats {
    pub name: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub player_type: String,
    pub team: String,
    pub games: i64,
    pub games_started: i64,
    pub wins: i64,
    pub losses: i64,
    pub saves: i64,
    pub innings_pitched: f64,
    pub strikeouts: i64,
    pub walks: i64,
    pub era: f64,
    pub whip: f64,
    pub k9: StatValue,
    pub bb9: StatValue,
    pub fip: StatValue,
    pub war: f64,
}

/// Role-specific detailed stat record
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PlayerStats {
    Batter(BatterStats),
    Pitcher(PitcherStats),
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("Batter".parse::<PlayerRole>().unwrap(), PlayerRole::Batter);
        assert_eq!("pitcher".parse::<PlayerRole>().unwrap(), PlayerRole::Pitcher);
        assert!("Catcher".parse::<PlayerRole>().is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.29849, 3), 0.298);
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(6.449, 1), 6.4);
        assert_eq!(round_to(0.2995, 3), 0.3);
    }

    #[test]
    fn test_stat_value_serializes_na_as_string() {
        let v = serde_json::to_value(StatValue::na()).unwrap();
        assert_eq!(v, serde_json::json!("N/A"));
        let v = serde_json::to_value(StatValue::Int(132)).unwrap();
        assert_eq!(v, serde_json::json!(132));
    }

    #[test]
    fn test_stat_value_display() {
        assert_eq!(StatValue::Int(12).to_string(), "12");
        assert_eq!(StatValue::Float(8.9).to_string(), "8.9");
        assert_eq!(StatValue::na().to_string(), "N/A");
    }
}
