//! Prompt assembly for the grading pipeline
//!
//! Renders the role-specific stat lines in a fixed order, attaches the
//! grade benchmark table for that role, and wraps both in the analyst
//! instruction preamble with a strict two-section output directive.

use crate::stats::PlayerRole;
use serde_json::{Map, Value};

/// Batter stat fields as (request key, prompt label), in render order
pub const BATTER_FIELDS: &[(&str, &str)] = &[
    ("games", "Games"),
    ("at_bats", "At-Bats"),
    ("hits", "Hits"),
    ("avg", "Batting Average (AVG)"),
    ("obp", "On-Base Percentage (OBP)"),
    ("slg", "Slugging Percentage (SLG)"),
    ("ops", "OPS"),
    ("home_runs", "Home Runs (HR)"),
    ("rbi", "RBI"),
    ("stolen_bases", "Stolen Bases (SB)"),
    ("walks", "Walks (BB)"),
    ("strikeouts", "Strikeouts (SO)"),
    ("doubles", "Doubles (2B)"),
    ("triples", "Triples (3B)"),
    ("war", "WAR"),
    ("wrc_plus", "wRC+"),
];

/// Pitcher stat fields as (request key, prompt label), in render order
pub const PITCHER_FIELDS: &[(&str, &str)] = &[
    ("games", "Games"),
    ("games_started", "Games Started (GS)"),
    ("wins", "Wins"),
    ("losses", "Losses"),
    ("saves", "Saves"),
    ("innings_pitched", "Innings Pitched (IP)"),
    ("era", "ERA"),
    ("whip", "WHIP"),
    ("strikeouts", "Strikeouts (K)"),
    ("walks", "Walks (BB)"),
    ("k9", "K/9"),
    ("bb9", "BB/9"),
    ("fip", "FIP"),
    ("war", "WAR"),
];

const BATTER_BENCHMARKS: &str = "\
Use these grade benchmarks for a position player:
  A+ = MVP-caliber (WAR 7+, OPS 1.000+)
  A  = All-Star level (WAR 5-7, OPS .900-.999)
  B  = Above average starter (WAR 3-5, OPS .800-.899)
  C  = Average MLB starter (WAR 1-3, OPS .700-.799)
  D  = Below average / fringe starter (WAR 0-1, OPS .600-.699)
  F  = Replacement level or worse (WAR < 0, OPS below .600)";

const PITCHER_BENCHMARKS: &str = "\
Use these grade benchmarks for a pitcher:
  A+ = Cy Young-caliber (WAR 7+, ERA sub-2.50)
  A  = Top-of-rotation / elite closer (WAR 4-7, ERA 2.50-3.25)
  B  = Solid starter or high-leverage reliever (WAR 2-4, ERA 3.25-3.75)
  C  = League-average (WAR 1-2, ERA 3.75-4.50)
  D  = Below average (WAR 0-1, ERA 4.50-5.50)
  F  = Replacement level or worse (WAR < 0, ERA 5.50+)";

pub fn fields_for(role: PlayerRole) -> &'static [(&'static str, &'static str)] {
    match role {
        PlayerRole::Batter => BATTER_FIELDS,
        PlayerRole::Pitcher => PITCHER_FIELDS,
    }
}

pub fn benchmarks_for(role: PlayerRole) -> &'static str {
    match role {
        PlayerRole::Batter => BATTER_BENCHMARKS,
        PlayerRole::Pitcher => PITCHER_BENCHMARKS,
    }
}

fn role_context(role: PlayerRole) -> &'static str {
    match role {
        PlayerRole::Batter => "position player (batter)",
        PlayerRole::Pitcher => "pitcher",
    }
}

/// Render one stat value for the prompt; absent or null fields show N/A
fn render_value(stats: &Map<String, Value>, key: &str) -> String {
    match stats.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => "N/A".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Role-specific "Label: value" lines in fixed order
pub fn stat_lines(role: PlayerRole, stats: &Map<String, Value>) -> String {
    fields_for(role)
        .iter()
        .map(|(key, label)| format!("{label}: {}", render_value(stats, key)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full grading prompt for one player season
pub fn build_prompt(name: &str, year: i64, role: PlayerRole, stats: &Map<String, Value>) -> String {
    let benchmarks = benchmarks_for(role);
    let stats_block = stat_lines(role, stats);
    let context = role_context(role);

    format!(
        "You are an expert MLB baseball analyst with deep knowledge of sabermetrics and historical player performance.\n\
        \n\
        Analyze the following {year} season statistics for {name}, a {context}.\n\
        \n\
        {benchmarks}\n\
        \n\
        {year} Season Stats:\n\
        {stats_block}\n\
        \n\
        Your response MUST follow this exact format with these two sections:\n\
        \n\
        SUMMARY:\n\
        Write 2-3 paragraphs evaluating the player's season. Discuss their strengths, weaknesses, and how their numbers compare to league averages and position-adjusted expectations. Reference specific stats to support your analysis. Keep the tone professional but engaging, like a baseball analyst writing for a knowledgeable audience.\n\
        \n\
        GRADE:\n\
        Assign a single letter grade (A+, A, A-, B+, B, B-, C+, C, C-, D+, D, D-, or F) based on the benchmarks above. Then write one sentence explaining the grade.\n\
        \n\
        Do not include any other sections or commentary outside of SUMMARY and GRADE."
    )
}
