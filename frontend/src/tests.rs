use std::rc::Rc;

use pretty_assertions::assert_eq;
use shared::{fixtures, validate_post, DashboardTab, League, LeagueBucket, Match, MatchBucket, Notice, SharedError, SlotTime};
use yew::functional::Reducible;
use yew::AttrValue;
use yew_router::Routable;

use crate::components::common_toast::{Toast, ToastAction, ToastStack, ToastType};
use crate::components::nav::NavTarget;
use crate::components::tabs::bucket_tabs;
use crate::config::Config;
use crate::pages::dashboard::DashboardQuery;
use crate::Route;

#[test]
fn test_route_paths() {
    assert_eq!(Route::Login.to_path(), "/");
    assert_eq!(Route::Register.to_path(), "/register");
    assert_eq!(Route::Home.to_path(), "/home");
    assert_eq!(Route::Dashboard.to_path(), "/dashboard");
    assert_eq!(Route::Profile.to_path(), "/profile");
}

#[test]
fn test_unknown_path_is_not_found() {
    assert_eq!(Route::recognize("/leaderboards"), Some(Route::NotFound));
    assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
}

#[test]
fn test_chrome_hidden_on_sign_in_screens() {
    assert!(!Route::Login.shows_chrome());
    assert!(!Route::Register.shows_chrome());
    assert!(Route::Home.shows_chrome());
    assert!(Route::Dashboard.shows_chrome());
    assert!(Route::NotFound.shows_chrome());
}

#[test]
fn test_config_defaults() {
    assert_eq!(Config::simulated_latency_ms(), 1000);
    assert_eq!(Config::toast_duration_ms(), 5000);

    let slots = Config::slot_window().slots();
    assert_eq!(slots.first().map(ToString::to_string), Some("08:00".to_string()));
    assert_eq!(slots.last().map(ToString::to_string), Some("21:30".to_string()));
    assert!(slots.contains(&SlotTime::new(13, 30).unwrap()));
}

#[test]
fn test_toast_from_notice() {
    let toast = Toast::from_notice(Notice::new("Joined League", "Welcome"), ToastType::Success);
    assert_eq!(toast.title, "Joined League");
    assert_eq!(toast.description.as_deref(), Some("Welcome"));
    assert_eq!(toast.duration, Some(Config::toast_duration_ms()));

    let short = Toast::new("Post shared", ToastType::Info).with_duration(3000);
    assert_eq!(short.duration, Some(3000));
    assert_ne!(short.id, toast.id);
}

#[test]
fn test_toast_stack_removes_by_id() {
    let first = Toast::new("Joined League", ToastType::Success);
    let second = Toast::new("Post shared", ToastType::Info);
    let first_id = first.id;

    let stack = Rc::new(ToastStack::default())
        .reduce(ToastAction::Add(first))
        .reduce(ToastAction::Add(second.clone()))
        .reduce(ToastAction::Remove(first_id));
    assert_eq!(stack.toasts, vec![second]);

    let unchanged = stack.clone().reduce(ToastAction::Remove(first_id));
    assert_eq!(unchanged.toasts.len(), 1);
}

#[test]
fn test_bucket_tab_labels() {
    let labels: Vec<String> = bucket_tabs::<League, LeagueBucket>(&fixtures::leagues())
        .into_iter()
        .map(|(_, label)| label.to_string())
        .collect();
    assert_eq!(labels, vec!["Active (4)", "Upcoming (1)", "Completed (2)"]);

    let matches = bucket_tabs::<Match, MatchBucket>(&fixtures::matches());
    assert_eq!(matches[1], (MatchBucket::Pending, AttrValue::from("Pending (3)")));
}

#[test]
fn test_dashboard_query_picks_tab() {
    assert_eq!(DashboardQuery::default().dashboard_tab(), DashboardTab::Leagues);
    assert_eq!(DashboardQuery::for_tab(DashboardTab::Matches).dashboard_tab(), DashboardTab::Matches);

    let bogus = DashboardQuery {
        tab: Some("standings".to_string()),
        opponent: None,
    };
    assert_eq!(bogus.dashboard_tab(), DashboardTab::Leagues);
}

#[test]
fn test_book_with_opens_matches_for_opponent() {
    let query = DashboardQuery::book_with("player2");
    assert_eq!(query.dashboard_tab(), DashboardTab::Matches);
    assert_eq!(query.opponent.as_deref(), Some("player2"));
    assert!(fixtures::player_availability().iter().any(|p| p.id == "player2"));
}

#[test]
fn test_new_post_requires_title_and_content() {
    let err = validate_post("Endgame clinic", "  ").unwrap_err();
    assert_eq!(err, SharedError::MissingFields);
    assert_eq!(err.to_string(), "Please fill in all fields");
    assert_eq!(validate_post("Endgame clinic", "Saturday at 10"), Ok(()));
}

#[test]
fn test_nav_highlights_current_tab() {
    let matches = NavTarget::Dashboard(DashboardTab::Matches);
    assert!(matches.is_current(Some(&Route::Dashboard), DashboardTab::Matches));
    assert!(!matches.is_current(Some(&Route::Dashboard), DashboardTab::Leagues));
    assert!(!matches.is_current(Some(&Route::Home), DashboardTab::Matches));
    assert!(NavTarget::Home.is_current(Some(&Route::Home), DashboardTab::Leagues));
    assert!(!NavTarget::Profile.is_current(None, DashboardTab::Leagues));
}
