use log::debug;
use shared::fixtures;
use yew::prelude::*;

use crate::components::profile::general_tab::GeneralTab;
use crate::components::profile::profile_tabs::ProfileTabs;
use crate::components::profile::schedule_tab::ScheduleTab;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProfileTab {
    General,
    Schedule,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 2] = [ProfileTab::General, ProfileTab::Schedule];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::General => "General",
            ProfileTab::Schedule => "Schedule",
        }
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let current_tab = use_state(|| ProfileTab::General);
    let profile = use_memo((), |_| fixtures::player_profile());

    let on_tab_click = {
        let current_tab = current_tab.clone();
        Callback::from(move |tab: ProfileTab| {
            debug!("Profile tab switched to {:?}", tab);
            current_tab.set(tab);
        })
    };

    html! {
        <div class="max-w-3xl mx-auto px-4 py-6 pb-24 md:pb-6">
            <div class="mb-4">
                <h1 class="text-2xl font-bold text-blue-950">{"Profile"}</h1>
                <p class="text-sm text-gray-500">{"Manage your chess player profile"}</p>
            </div>

            <ProfileTabs current_tab={*current_tab} {on_tab_click} />

            <div class="mt-4">
                {match *current_tab {
                    ProfileTab::General => html! { <GeneralTab profile={(*profile).clone()} /> },
                    ProfileTab::Schedule => html! { <ScheduleTab /> },
                }}
            </div>
        </div>
    }
}
