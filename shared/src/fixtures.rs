//! Mock data backing every view. Regenerated freely; nothing reads it back
//! from storage.

use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::models::availability::{PlayerAvailability, WeeklySlot};
use crate::models::community::{Announcement, ForumPost, PostAuthor};
use crate::models::league::{DivisionDetail, LeaderboardEntry, League, LeagueStatus};
use crate::models::matches::{Match, MatchResult, MatchStatus, Opponent};
use crate::models::profile::{FormatCount, PlayerProfile, ProfileStats};
use crate::models::tournament::{Section, Tournament, TournamentStatus};
use crate::schedule::SlotTime;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn division(name: &str, rating_range: &str, players: u32) -> DivisionDetail {
    DivisionDetail {
        name: name.to_string(),
        rating_range: rating_range.to_string(),
        players,
    }
}

fn standing(rank: u32, player: &str, half_points: u32, record: (u32, u32, u32), rating: u32) -> LeaderboardEntry {
    let (wins, draws, losses) = record;
    LeaderboardEntry {
        rank,
        player: player.to_string(),
        half_points,
        wins,
        draws,
        losses,
        rating,
    }
}

fn section(name: &str, rating_min: Option<u32>, rating_max: Option<u32>, entry_fee: u32) -> Section {
    Section {
        name: name.to_string(),
        rating_min,
        rating_max,
        entry_fee,
    }
}

fn slot(day: Weekday, hour: u8, minute: u8) -> WeeklySlot {
    WeeklySlot {
        day,
        time: SlotTime::from_hm(hour, minute),
    }
}

pub fn leagues() -> Vec<League> {
    vec![
        League {
            id: 1,
            name: "Wanderers Chess Club League".to_string(),
            description: "Weekly casual matches for club members with automated division assignments.".to_string(),
            divisions: 4,
            players: 48,
            status: LeagueStatus::Active,
            registration_open: true,
            start_date: ymd(2023, 6, 1),
            end_date: ymd(2023, 12, 15),
            registration_close: ymd(2023, 6, 15),
            match_schedule: "Wednesdays, 18:00-21:00".to_string(),
            venue: "Wanderers Club, Illovo".to_string(),
            format: "Round robin within divisions, promotion/relegation between seasons".to_string(),
            entry_fee: 250,
            prizes: "Trophies and chess equipment for division winners".to_string(),
            division_details: vec![
                division("Division 1", "1800+", 8),
                division("Division 2", "1500-1799", 12),
                division("Division 3", "1200-1499", 16),
                division("Division 4", "0-1199", 12),
            ],
            leaderboard: vec![
                standing(1, "Thandi Mokoena", 13, (6, 1, 1), 1912),
                standing(2, "Daniel Smith", 12, (5, 2, 1), 1856),
                standing(3, "James Anderson", 10, (4, 2, 2), 1790),
                standing(4, "Michael Brown", 7, (3, 1, 4), 1645),
            ],
        },
        League {
            id: 2,
            name: "Johannesburg City League".to_string(),
            description: "Competitive regional league with matches played across the city.".to_string(),
            divisions: 6,
            players: 72,
            status: LeagueStatus::Active,
            registration_open: true,
            start_date: ymd(2023, 7, 15),
            end_date: ymd(2023, 11, 30),
            registration_close: ymd(2023, 7, 10),
            match_schedule: "Saturdays, 10:00-14:00".to_string(),
            venue: "Various venues across Johannesburg".to_string(),
            format: "Team-based competition with 4 players per team".to_string(),
            entry_fee: 600,
            prizes: "R10,000 prize fund distributed among top teams".to_string(),
            division_details: vec![
                division("Premier Division", "Team average 1700+", 12),
                division("Division 1", "Team average 1500-1699", 12),
                division("Division 2", "Team average 1300-1499", 12),
                division("Division 3", "Team average 1100-1299", 12),
                division("Division 4", "Team average 900-1099", 12),
                division("Division 5", "Team average 0-899", 12),
            ],
            leaderboard: vec![
                standing(1, "Emma Wilson", 11, (5, 1, 0), 1932),
                standing(2, "Sarah Johnson", 9, (4, 1, 1), 1723),
                standing(3, "Olivia Parker", 6, (3, 0, 3), 1677),
            ],
        },
        League {
            id: 3,
            name: "Beginners Friendly League".to_string(),
            description: "Perfect for new players looking to gain experience in a supportive environment.".to_string(),
            divisions: 2,
            players: 24,
            status: LeagueStatus::Active,
            registration_open: true,
            start_date: ymd(2023, 8, 5),
            end_date: ymd(2023, 10, 28),
            registration_close: ymd(2023, 8, 1),
            match_schedule: "Sundays, 14:00-17:00".to_string(),
            venue: "Sandton Chess Club".to_string(),
            format: "Swiss system with coaching after games".to_string(),
            entry_fee: 150,
            prizes: "Certificates and chess books for all participants".to_string(),
            division_details: vec![
                division("Newcomers", "Unrated or <900", 12),
                division("Improvers", "900-1200", 12),
            ],
            leaderboard: Vec::new(),
        },
        League {
            id: 4,
            name: "Masters Challenge".to_string(),
            description: "High-level competition for experienced players rated 1800+.".to_string(),
            divisions: 1,
            players: 16,
            status: LeagueStatus::Active,
            registration_open: false,
            start_date: ymd(2023, 5, 20),
            end_date: ymd(2023, 12, 10),
            registration_close: ymd(2023, 5, 15),
            match_schedule: "Monthly weekend events".to_string(),
            venue: "Pretoria Chess Centre".to_string(),
            format: "Double round robin with classical time controls".to_string(),
            entry_fee: 400,
            prizes: "R15,000 prize fund plus qualification spots for national championship".to_string(),
            division_details: vec![division("Masters", "1800+", 16)],
            leaderboard: Vec::new(),
        },
        League {
            id: 5,
            name: "University Chess Championship".to_string(),
            description: "Inter-university competition across multiple campuses.".to_string(),
            divisions: 3,
            players: 36,
            status: LeagueStatus::Upcoming,
            registration_open: true,
            start_date: ymd(2023, 9, 15),
            end_date: ymd(2023, 11, 15),
            registration_close: ymd(2023, 9, 10),
            match_schedule: "Bi-weekly matches, arranged between teams".to_string(),
            venue: "Rotating between university campuses".to_string(),
            format: "Team-based competition with 3 players per team".to_string(),
            entry_fee: 300,
            prizes: "Trophy and chess equipment for winning university".to_string(),
            division_details: vec![
                division("Premier Division", "Open", 12),
                division("First Division", "Open", 12),
                division("Women's Division", "Open (women only)", 12),
            ],
            leaderboard: Vec::new(),
        },
        League {
            id: 6,
            name: "Autumn Rapid League".to_string(),
            description: "Rapid games over six evenings with a single open division.".to_string(),
            divisions: 1,
            players: 20,
            status: LeagueStatus::Completed,
            registration_open: false,
            start_date: ymd(2023, 3, 1),
            end_date: ymd(2023, 5, 10),
            registration_close: ymd(2023, 2, 25),
            match_schedule: "Tuesdays, 19:00-21:00".to_string(),
            venue: "Rosebank Mall Chess Corner".to_string(),
            format: "Swiss system, 15+10 time control".to_string(),
            entry_fee: 120,
            prizes: "Medals for the top three".to_string(),
            division_details: vec![division("Open", "Open", 20)],
            leaderboard: vec![
                standing(1, "Sarah Johnson", 10, (5, 0, 1), 1723),
                standing(2, "Olivia Parker", 9, (4, 1, 1), 1677),
                standing(3, "Michael Brown", 8, (3, 2, 1), 1645),
            ],
        },
        League {
            id: 7,
            name: "Pretoria Winter League 2022".to_string(),
            description: "Last season's winter league, kept for the record.".to_string(),
            divisions: 2,
            players: 28,
            status: LeagueStatus::Archived,
            registration_open: false,
            start_date: ymd(2022, 6, 4),
            end_date: ymd(2022, 8, 27),
            registration_close: ymd(2022, 5, 30),
            match_schedule: "Saturdays, 09:00-13:00".to_string(),
            venue: "Pretoria Chess Centre".to_string(),
            format: "Round robin within divisions".to_string(),
            entry_fee: 200,
            prizes: "Trophies for division winners".to_string(),
            division_details: vec![
                division("Division A", "1500+", 14),
                division("Division B", "0-1499", 14),
            ],
            leaderboard: Vec::new(),
        },
    ]
}

pub fn tournaments() -> Vec<Tournament> {
    vec![
        Tournament {
            id: 1,
            name: "Johannesburg Open Championship".to_string(),
            description: "Official CHESSA rated tournament with multiple sections based on rating.".to_string(),
            venue: "Sandton Convention Centre".to_string(),
            start_date: ymd(2023, 10, 15),
            end_date: ymd(2023, 10, 17),
            registration_close: ymd(2023, 10, 10),
            sections: vec![
                section("Open Section", Some(1800), None, 350),
                section("A Section", Some(1500), Some(1799), 300),
                section("B Section", Some(1200), Some(1499), 250),
                section("C Section", Some(0), Some(1199), 200),
            ],
            status: TournamentStatus::Upcoming,
        },
        Tournament {
            id: 2,
            name: "Junior Chess Championship".to_string(),
            description: "Tournament for players under 18 with age categories and rating sections.".to_string(),
            venue: "Pretoria High School".to_string(),
            start_date: ymd(2023, 9, 23),
            end_date: ymd(2023, 9, 24),
            registration_close: ymd(2023, 9, 18),
            sections: vec![
                section("Under 18", None, None, 150),
                section("Under 14", None, None, 120),
                section("Under 10", None, None, 100),
            ],
            status: TournamentStatus::Upcoming,
        },
        Tournament {
            id: 3,
            name: "Wanderers Rapid Tournament".to_string(),
            description: "One-day rapid tournament with 15-minute games plus 10-second increment.".to_string(),
            venue: "Wanderers Club".to_string(),
            start_date: ymd(2023, 8, 12),
            end_date: ymd(2023, 8, 12),
            registration_close: ymd(2023, 8, 10),
            sections: vec![section("Open Section", None, None, 180)],
            status: TournamentStatus::Active,
        },
        Tournament {
            id: 4,
            name: "Gauteng Blitz Cup".to_string(),
            description: "Evening blitz event, 3 minutes plus 2 seconds per move.".to_string(),
            venue: "City Chess Club".to_string(),
            start_date: ymd(2023, 6, 17),
            end_date: ymd(2023, 6, 17),
            registration_close: ymd(2023, 6, 15),
            sections: vec![section("Open Section", None, None, 80)],
            status: TournamentStatus::Completed,
        },
    ]
}

pub fn matches() -> Vec<Match> {
    let opponent = |name: &str, rating: u32| Opponent {
        name: name.to_string(),
        rating,
    };
    vec![
        Match {
            id: 1,
            opponent: opponent("Daniel Smith", 1856),
            league: "Wanderers Chess Club League".to_string(),
            division: "Division 1".to_string(),
            status: MatchStatus::Scheduled,
            date: Some(at(ymd(2023, 8, 15), 18, 0)),
            venue: Some("Wanderers Club".to_string()),
            result: None,
            confirmed: false,
        },
        Match {
            id: 2,
            opponent: opponent("Sarah Johnson", 1723),
            league: "Johannesburg City League".to_string(),
            division: "Division 2".to_string(),
            status: MatchStatus::Pending,
            date: None,
            venue: None,
            result: None,
            confirmed: false,
        },
        Match {
            id: 3,
            opponent: opponent("Michael Brown", 1645),
            league: "Wanderers Chess Club League".to_string(),
            division: "Division 1".to_string(),
            status: MatchStatus::PendingConfirmation,
            date: Some(at(ymd(2023, 8, 18), 19, 30)),
            venue: Some("Sandton Library".to_string()),
            result: None,
            confirmed: false,
        },
        Match {
            id: 4,
            opponent: opponent("Emma Wilson", 1932),
            league: "Johannesburg City League".to_string(),
            division: "Division 2".to_string(),
            status: MatchStatus::Completed,
            date: Some(at(ymd(2023, 8, 2), 17, 0)),
            venue: Some("City Chess Club".to_string()),
            result: Some(MatchResult::Loss),
            confirmed: true,
        },
        Match {
            id: 5,
            opponent: opponent("James Anderson", 1790),
            league: "Wanderers Chess Club League".to_string(),
            division: "Division 1".to_string(),
            status: MatchStatus::Completed,
            date: Some(at(ymd(2023, 7, 28), 18, 30)),
            venue: Some("Wanderers Club".to_string()),
            result: Some(MatchResult::Win),
            confirmed: true,
        },
        Match {
            id: 6,
            opponent: opponent("Olivia Parker", 1677),
            league: "Johannesburg City League".to_string(),
            division: "Division 2".to_string(),
            status: MatchStatus::PendingResult,
            date: Some(at(ymd(2023, 8, 9), 19, 0)),
            venue: Some("Rosebank Mall Chess Corner".to_string()),
            result: None,
            confirmed: false,
        },
    ]
}

/// Venues offered by the Book Match dialog
pub fn venues() -> Vec<String> {
    ["Wanderers Club", "Sandton Library", "City Chess Club", "Rosebank Mall Chess Corner"]
        .iter()
        .map(|venue| venue.to_string())
        .collect()
}

pub fn player_availability() -> Vec<PlayerAvailability> {
    vec![
        PlayerAvailability {
            id: "player1".to_string(),
            name: "Daniel Smith".to_string(),
            rating: 1856,
            available_slots: vec![
                slot(Weekday::Mon, 18, 0),
                slot(Weekday::Mon, 19, 0),
                slot(Weekday::Wed, 18, 30),
                slot(Weekday::Fri, 19, 0),
            ],
        },
        PlayerAvailability {
            id: "player2".to_string(),
            name: "Sarah Johnson".to_string(),
            rating: 1723,
            available_slots: vec![
                slot(Weekday::Tue, 17, 30),
                slot(Weekday::Thu, 18, 0),
                slot(Weekday::Sat, 14, 0),
            ],
        },
        PlayerAvailability {
            id: "player3".to_string(),
            name: "Michael Brown".to_string(),
            rating: 1645,
            available_slots: vec![
                slot(Weekday::Mon, 19, 30),
                slot(Weekday::Wed, 18, 0),
                slot(Weekday::Fri, 17, 30),
            ],
        },
    ]
}

/// The demo account's profile
pub fn player_profile() -> PlayerProfile {
    let formats = [("Round Robin", 8), ("Swiss System", 4), ("Knockout", 3), ("Team Events", 2)];
    PlayerProfile {
        name: "Player Name".to_string(),
        email: crate::auth::DEMO_EMAIL.to_string(),
        rating: 1782,
        chessa_id: "SA10076542".to_string(),
        fide_id: None,
        club: "Wanderers Chess Club".to_string(),
        member_since: "January 2023".to_string(),
        address: "123 Chess Street, Johannesburg, 2000".to_string(),
        stats: ProfileStats {
            matches_played: 47,
            wins: 32,
            draws: 3,
            losses: 12,
            tournaments_played: 12,
            tournament_wins: 3,
            runner_up: 2,
            tournament_rating: 1820,
            streak: 4,
            event_formats: formats
                .iter()
                .map(|(format, events)| FormatCount {
                    format: format.to_string(),
                    events: *events,
                })
                .collect(),
        },
    }
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "App Launch: Welcome to Chess Connect".to_string(),
            date: ymd(2023, 10, 10),
            content: "We're excited to announce the launch of Chess Connect, your new platform for organizing and participating in chess tournaments, leagues, and connecting with players.".to_string(),
            author: "Chess Connect Team".to_string(),
        },
        Announcement {
            id: 2,
            title: "New Tournament Season Starting".to_string(),
            date: ymd(2023, 10, 5),
            content: "Registration for the new tournament season is now open. Check the Tournaments tab for more details on upcoming events.".to_string(),
            author: "Tournament Director".to_string(),
        },
        Announcement {
            id: 3,
            title: "Rating Update".to_string(),
            date: ymd(2023, 9, 30),
            content: "All player ratings have been updated based on recent tournament and league results. Check your profile to see your new rating.".to_string(),
            author: "Ratings Administrator".to_string(),
        },
    ]
}

pub fn forum_posts() -> Vec<ForumPost> {
    let author = |name: &str, rating: u32| PostAuthor {
        name: name.to_string(),
        rating,
    };
    vec![
        ForumPost {
            id: 1,
            title: "Sicilian Defense Study Group".to_string(),
            author: author("Magnus J.", 2145),
            date: ymd(2023, 10, 9),
            content: "I'm looking to form a study group focusing on the Sicilian Defense. If you're interested in analyzing games, sharing resources, and improving together, please comment below!".to_string(),
            replies: 8,
            likes: 15,
        },
        ForumPost {
            id: 2,
            title: "Recommended Chess Books for Beginners?".to_string(),
            author: author("Emma W.", 950),
            date: ymd(2023, 10, 7),
            content: "I'm fairly new to chess and looking for book recommendations. What books helped you improve when you were just starting out?".to_string(),
            replies: 12,
            likes: 7,
        },
        ForumPost {
            id: 3,
            title: "Analysis of my recent tournament game".to_string(),
            author: author("David K.", 1920),
            date: ymd(2023, 10, 6),
            content: "I played an interesting game last weekend that resulted in a tactical middlegame with sacrifices. I'd appreciate some feedback on my play and suggestions for improvement.".to_string(),
            replies: 5,
            likes: 10,
        },
        ForumPost {
            id: 4,
            title: "Chess Clubs in Johannesburg?".to_string(),
            author: author("Sarah K.", 1876),
            date: ymd(2023, 10, 4),
            content: "I recently moved to Johannesburg and I'm looking for chess clubs in the area. Does anyone have recommendations for active clubs with regular meetups?".to_string(),
            replies: 6,
            likes: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{bucket_counts, StatusBucket};
    use crate::models::league::LeagueBucket;
    use crate::models::matches::MatchBucket;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let league_ids: HashSet<u32> = leagues().iter().map(|l| l.id).collect();
        assert_eq!(league_ids.len(), leagues().len());
        let match_ids: HashSet<u32> = matches().iter().map(|m| m.id).collect();
        assert_eq!(match_ids.len(), matches().len());
    }

    #[test]
    fn test_every_tab_has_content() {
        for (bucket, count) in bucket_counts::<_, LeagueBucket>(&leagues()) {
            assert!(count > 0, "no leagues in {}", bucket.label());
        }
        for (bucket, count) in bucket_counts::<_, MatchBucket>(&matches()) {
            assert!(count > 0, "no matches in {}", bucket.label());
        }
    }

    #[test]
    fn test_completed_matches_have_results() {
        for m in matches() {
            assert_eq!(m.result.is_some(), m.status == crate::models::matches::MatchStatus::Completed);
        }
    }

    #[test]
    fn test_profile_record_adds_up() {
        let stats = player_profile().stats;
        assert_eq!(stats.wins + stats.draws + stats.losses, stats.matches_played);
        assert_eq!(stats.win_rate(), 68);
        assert_eq!(stats.streak_label(), "4W");
    }

    #[test]
    fn test_fixtures_serialize() {
        let json = serde_json::to_string(&leagues()).unwrap();
        assert!(json.contains("\"status\":\"archived\""));
        let json = serde_json::to_string(&player_availability()).unwrap();
        assert!(json.contains("\"18:30\""));
    }
}
