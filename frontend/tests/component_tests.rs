#[cfg(test)]
mod component_tests {
    use frontend::components::nav::NavTarget;
    use frontend::pages::dashboard::DashboardQuery;
    use frontend::Route;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared::booking::{book_match, save_availability};
    use shared::schedule::suggest_partners;
    use shared::{fixtures, BookingForm, DashboardTab, SharedError, SlotSelector, SlotTime};
    use yew_router::Routable;

    #[test]
    fn test_dashboard_query_serialization() {
        let query = DashboardQuery::for_tab(DashboardTab::Tournaments);
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({ "tab": "tournaments" }));

        let empty = serde_json::to_value(DashboardQuery::default()).unwrap();
        assert_eq!(empty, json!({}));

        let parsed: DashboardQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.dashboard_tab(), DashboardTab::Leagues);
    }

    #[test]
    fn test_booking_query_carries_opponent() {
        let query = DashboardQuery::book_with("player1");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({ "tab": "matches", "opponent": "player1" }));

        let parsed: DashboardQuery = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, query);

        let form = BookingForm::for_player(parsed.opponent.unwrap_or_default());
        assert_eq!(form.player, "player1");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_every_nav_entry_has_a_route() {
        let labels: Vec<&str> = NavTarget::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Home", "Leagues", "Tournaments", "Matches", "Profile"]);

        for path in ["/", "/register", "/home", "/dashboard", "/profile"] {
            let route = Route::recognize(path);
            assert!(route.is_some() && route != Some(Route::NotFound), "{} not routed", path);
        }
    }

    #[test]
    fn test_availability_to_booking_flow() {
        // 2024-01-08 is a Monday; Daniel Smith offers Mondays at 18:00
        let monday = chrono::NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let mut selector = SlotSelector::new();
        selector.select_day(monday);
        assert_eq!(selector.toggle_slot(SlotTime::new(18, 0).unwrap()), Ok(true));

        let notice = save_availability(&selector);
        assert_eq!(notice.title, "Availability saved");

        let players = fixtures::player_availability();
        let partners = suggest_partners(&selector, &players);
        assert!(!partners.is_empty());

        let partner = &partners[0];
        let mut form = BookingForm::default();
        form.set_player(partner.player.id.clone());
        assert_eq!(book_match(&form, &players), Err(SharedError::MissingFields));

        form.time_slot = partner.shared_slots[0].to_string();
        form.venue = fixtures::venues()[0].clone();
        let booked = book_match(&form, &players).unwrap();
        assert_eq!(booked.title, "Match booked successfully");
        assert!(booked.description.contains(&partner.player.name));
    }
}
