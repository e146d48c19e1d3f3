//! Static team and season catalog
//!
//! Team codes follow the FanGraphs leaderboard abbreviations, which is what
//! the stats gateway filters on.

/// All 30 MLB teams as (code, display name) pairs, code-sorted.
pub const MLB_TEAMS: &[(&str, &str)] = &[
    ("ARI", "Arizona Diamondbacks"),
    ("ATL", "Atlanta Braves"),
    ("BAL", "Baltimore Orioles"),
    ("BOS", "Boston Red Sox"),
    ("CHC", "Chicago Cubs"),
    ("CHW", "Chicago White Sox"),
    ("CIN", "Cincinnati Reds"),
    ("CLE", "Cleveland Guardians"),
    ("COL", "Colorado Rockies"),
    ("DET", "Detroit Tigers"),
    ("HOU", "Houston Astros"),
    ("KCR", "Kansas City Royals"),
    ("LAA", "Los Angeles Angels"),
    ("LAD", "Los Angeles Dodgers"),
    ("MIA", "Miami Marlins"),
    ("MIL", "Milwaukee Brewers"),
    ("MIN", "Minnesota Twins"),
    ("NYM", "New York Mets"),
    ("NYY", "New York Yankees"),
    ("OAK", "Oakland Athletics"),
    ("PHI", "Philadelphia Phillies"),
    ("PIT", "Pittsburgh Pirates"),
    ("SDP", "San Diego Padres"),
    ("SFG", "San Francisco Giants"),
    ("SEA", "Seattle Mariners"),
    ("STL", "St. Louis Cardinals"),
    ("TBR", "Tampa Bay Rays"),
    ("TEX", "Texas Rangers"),
    ("TOR", "Toronto Blue Jays"),
    ("WSN", "Washington Nationals"),
];

/// Most recent season selectable in the UI
pub const LATEST_SEASON: i32 = 2025;

/// Oldest season selectable in the UI
pub const EARLIEST_SEASON: i32 = 2015;

/// Supported seasons, most recent first
pub fn supported_years() -> Vec<i32> {
    (EARLIEST_SEASON..=LATEST_SEASON).rev().collect()
}

pub fn is_supported_year(year: i32) -> bool {
    (EARLIEST_SEASON..=LATEST_SEASON).contains(&year)
}

pub fn is_known_code(code: &str) -> bool {
    MLB_TEAMS.iter().any(|(c, _)| *c == code)
}

/// Display name for a team code, falling back to the code itself.
pub fn display_name(code: &str) -> &str {
    MLB_TEAMS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Teams sorted by display name, for UI listings.
pub fn teams_by_display_name() -> Vec<(&'static str, &'static str)> {
    let mut teams: Vec<_> = MLB_TEAMS.to_vec();
    teams.sort_by_key(|(_, name)| *name);
    teams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_teams() {
        assert_eq!(MLB_TEAMS.len(), 30);
    }

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(display_name("NYY"), "New York Yankees");
        assert_eq!(display_name("XYZ"), "XYZ");
    }

    #[test]
    fn test_known_codes() {
        assert!(is_known_code("SEA"));
        assert!(!is_known_code("sea"));
        assert!(!is_known_code(""));
    }

    #[test]
    fn test_years_most_recent_first() {
        let years = supported_years();
        assert_eq!(years.first(), Some(&LATEST_SEASON));
        assert_eq!(years.last(), Some(&EARLIEST_SEASON));
        assert!(years.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_teams_sorted_by_display_name() {
        let teams = teams_by_display_name();
        assert_eq!(teams.first().map(|(c, _)| *c), Some("ARI"));
        assert!(teams.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_supported_year_bounds() {
        assert!(is_supported_year(2023));
        assert!(!is_supported_year(2014));
        assert!(!is_supported_year(2026));
    }
}
