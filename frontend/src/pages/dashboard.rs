use log::debug;
use serde::{Deserialize, Serialize};
use shared::DashboardTab;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::leagues_tab::LeaguesTab;
use crate::components::dashboard::matches_tab::MatchesTab;
use crate::components::dashboard::tournaments_tab::TournamentsTab;

/// `?tab=` on `/dashboard`, plus `&opponent=` to open the booking dialog
/// with that player picked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
}

impl DashboardQuery {
    pub fn for_tab(tab: DashboardTab) -> Self {
        Self {
            tab: Some(tab.as_str().to_string()),
            opponent: None,
        }
    }

    pub fn book_with(opponent: &str) -> Self {
        Self {
            opponent: Some(opponent.to_string()),
            ..Self::for_tab(DashboardTab::Matches)
        }
    }

    pub fn dashboard_tab(&self) -> DashboardTab {
        DashboardTab::from_query(self.tab.as_deref())
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let location = use_location();
    let query = location
        .and_then(|location| location.query::<DashboardQuery>().ok())
        .unwrap_or_default();
    let tab = query.dashboard_tab();
    debug!("Dashboard showing {} tab", tab);

    let body = match tab {
        DashboardTab::Leagues => html! { <LeaguesTab /> },
        DashboardTab::Tournaments => html! { <TournamentsTab /> },
        DashboardTab::Matches => html! { <MatchesTab opponent={query.opponent.clone().map(AttrValue::from)} /> },
    };

    html! {
        <div class="max-w-3xl mx-auto px-4 py-6 pb-24 md:pb-6">
            <div class="mb-4">
                <h1 class="text-2xl font-bold text-blue-950">{tab.title()}</h1>
                <p class="text-sm text-gray-500">{tab.subtitle()}</p>
            </div>
            {body}
        </div>
    }
}
