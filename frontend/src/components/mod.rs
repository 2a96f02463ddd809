pub mod common_modal;
pub mod common_toast;
pub mod mobile_nav;
pub mod nav;
pub mod tabs;
pub mod dashboard {
    pub mod booking_modal;
    pub mod league_details;
    pub mod leagues_tab;
    pub mod matches_tab;
    pub mod tournament_details;
    pub mod tournaments_tab;
}
pub mod profile {
    pub mod general_tab;
    pub mod profile_tabs;
    pub mod schedule_tab;
}
