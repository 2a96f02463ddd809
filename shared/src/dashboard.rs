use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Section of `/dashboard`, chosen by the `tab` query parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Leagues,
    Tournaments,
    Matches,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::Leagues, DashboardTab::Tournaments, DashboardTab::Matches];

    /// Unknown or missing values fall back to the leagues tab.
    pub fn from_query(tab: Option<&str>) -> Self {
        tab.and_then(|tab| tab.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Leagues => "leagues",
            DashboardTab::Tournaments => "tournaments",
            DashboardTab::Matches => "matches",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Leagues => "Chess Leagues",
            DashboardTab::Tournaments => "Tournaments",
            DashboardTab::Matches => "My Matches",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            DashboardTab::Leagues => "Browse and join local leagues",
            DashboardTab::Tournaments => "Find events to compete in",
            DashboardTab::Matches => "View and manage your games",
        }
    }

    /// Label used by the navigation bars
    pub fn nav_label(&self) -> &'static str {
        match self {
            DashboardTab::Leagues => "Leagues",
            DashboardTab::Tournaments => "Tournaments",
            DashboardTab::Matches => "Matches",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardTab {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "leagues" => Ok(DashboardTab::Leagues),
            "tournaments" => Ok(DashboardTab::Tournaments),
            "matches" => Ok(DashboardTab::Matches),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("leagues") => DashboardTab::Leagues)]
    #[test_case(Some("tournaments") => DashboardTab::Tournaments)]
    #[test_case(Some("matches") => DashboardTab::Matches)]
    #[test_case(Some("Matches") => DashboardTab::Leagues ; "case sensitive")]
    #[test_case(Some("bogus") => DashboardTab::Leagues ; "unknown")]
    #[test_case(None => DashboardTab::Leagues ; "missing")]
    fn test_from_query(tab: Option<&str>) -> DashboardTab {
        DashboardTab::from_query(tab)
    }

    #[test]
    fn test_headers() {
        assert_eq!(DashboardTab::Leagues.title(), "Chess Leagues");
        assert_eq!(DashboardTab::Tournaments.subtitle(), "Find events to compete in");
        assert_eq!(DashboardTab::Matches.title(), "My Matches");
    }

    #[test]
    fn test_display_round_trips_through_query() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_query(Some(&tab.to_string())), tab);
        }
    }
}
