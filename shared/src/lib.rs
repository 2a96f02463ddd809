pub mod models {
    pub mod availability;
    pub mod community;
    pub mod league;
    pub mod matches;
    pub mod profile;
    pub mod tournament;
}

pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod registration;
pub mod schedule;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    availability::{PlayerAvailability, WeeklySlot},
    community::{Announcement, ForumPost, PostAuthor},
    league::{DivisionDetail, LeaderboardEntry, League, LeagueBucket, LeagueStatus},
    matches::{Match, MatchBucket, MatchResult, MatchStatus, Opponent},
    profile::{FormatCount, PlayerProfile, ProfileStats},
    tournament::{ProgrammeDay, Section, Tournament, TournamentBucket, TournamentStatus},
};

pub use auth::{LoginRequest, MockCredentials, RegisterRequest};
pub use booking::{validate_post, BookingForm, Notice};
pub use dashboard::DashboardTab;
pub use filter::{filter_by_bucket, filter_by_status, filter_by_text, HasStatus, Searchable, StatusBucket};
pub use schedule::{SlotId, SlotSelector, SlotTime, SlotWindow};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dashboard_leagues_flow() {
        let leagues = fixtures::leagues();
        let upcoming = filter_by_bucket(&leagues, LeagueBucket::Upcoming);
        let hits = filter_by_text(&upcoming, "campuses");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "University Chess Championship");
    }

    #[test]
    fn test_match_filter_by_exact_status() {
        let matches = fixtures::matches();
        let awaiting = filter_by_status(&matches, MatchStatus::PendingResult);
        assert_eq!(awaiting.len(), 1);
        assert_eq!(awaiting[0].opponent.name, "Olivia Parker");
    }
}
