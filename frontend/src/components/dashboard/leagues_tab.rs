use log::debug;
use shared::booking::join_league;
use shared::format::format_date;
use shared::{filter_by_bucket, filter_by_text, fixtures, League, LeagueBucket, LeagueStatus, StatusBucket};
use yew::prelude::*;

use crate::components::common_toast::ToastContext;
use crate::components::dashboard::league_details::LeagueDetails;
use crate::components::tabs::{bucket_tabs, SearchBox, TabBar};

fn badge_classes(status: LeagueStatus) -> &'static str {
    match status {
        LeagueStatus::Active => "bg-green-100 text-green-700",
        LeagueStatus::Upcoming => "bg-amber-100 text-amber-700",
        LeagueStatus::Completed | LeagueStatus::Archived => "bg-red-100 text-red-700",
    }
}

#[function_component(LeaguesTab)]
pub fn leagues_tab() -> Html {
    let leagues = use_memo((), |_| fixtures::leagues());
    let query = use_state(String::new);
    let bucket = use_state(|| LeagueBucket::Active);
    let open_league = use_state(|| None::<u32>);
    let toasts = use_context::<ToastContext>().unwrap_or_default();

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_bucket = {
        let bucket = bucket.clone();
        Callback::from(move |b: LeagueBucket| bucket.set(b))
    };

    let on_close = {
        let open_league = open_league.clone();
        Callback::from(move |_: ()| open_league.set(None))
    };

    let on_join = {
        let open_league = open_league.clone();
        Callback::from(move |league: League| {
            debug!("Joining league {}", league.id);
            open_league.set(None);
            toasts.success(join_league(&league));
        })
    };

    let visible = filter_by_text(&filter_by_bucket(&leagues, *bucket), &query);

    html! {
        <div>
            <div class="mb-4">
                <SearchBox value={(*query).clone()} placeholder="Search leagues..." on_change={on_query} />
            </div>
            <TabBar<LeagueBucket> tabs={bucket_tabs::<League, LeagueBucket>(&leagues)} current={*bucket} on_select={on_bucket} />
            <div class="mt-4 space-y-3">
                if visible.is_empty() {
                    <p class="text-center py-4 text-sm text-gray-500">
                        {format!("No {} leagues found.", bucket.label().to_lowercase())}
                    </p>
                }
                {for visible.into_iter().map(|league| {
                    let on_open = {
                        let open_league = open_league.clone();
                        let id = league.id;
                        Callback::from(move |_: MouseEvent| open_league.set(Some(id)))
                    };
                    html! {
                        <div key={league.id} class="bg-white rounded-lg shadow-sm border border-blue-950/10 p-4">
                            <div class="flex justify-between items-start">
                                <h3 class="text-lg font-semibold text-blue-950">{&league.name}</h3>
                                <span class={classes!("text-xs", "font-medium", "px-2", "py-0.5", "rounded-full", badge_classes(league.status))}>
                                    {league.status.label()}
                                </span>
                            </div>
                            <p class="text-sm text-gray-700 mt-1">{&league.description}</p>
                            <div class="flex flex-wrap gap-3 text-xs mt-3">
                                <div><span class="text-gray-500">{"Divisions:"}</span><span class="font-medium ml-1">{league.divisions}</span></div>
                                <div><span class="text-gray-500">{"Players:"}</span><span class="font-medium ml-1">{league.players}</span></div>
                                <div>
                                    <span class="text-gray-500">{"Period:"}</span>
                                    <span class="font-medium ml-1">{format!("{} - {}", format_date(league.start_date), format_date(league.end_date))}</span>
                                </div>
                            </div>
                            <button class="mt-3 px-3 py-1.5 text-sm rounded-md border border-blue-950 text-blue-950 hover:bg-blue-950 hover:text-white" onclick={on_open}>
                                {"View Details"}
                            </button>
                            <LeagueDetails
                                is_open={*open_league == Some(league.id)}
                                league={league.clone()}
                                on_close={on_close.clone()}
                                on_join={on_join.clone()}
                            />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
