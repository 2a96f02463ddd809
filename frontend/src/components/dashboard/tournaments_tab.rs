use log::debug;
use shared::booking::enter_tournament;
use shared::format::format_date;
use shared::registration::registration_label;
use shared::{filter_by_bucket, filter_by_text, fixtures, StatusBucket, Tournament, TournamentBucket};
use yew::prelude::*;

use crate::components::common_toast::ToastContext;
use crate::components::dashboard::tournament_details::TournamentDetails;
use crate::components::tabs::{bucket_tabs, SearchBox, TabBar};

#[function_component(TournamentsTab)]
pub fn tournaments_tab() -> Html {
    let tournaments = use_memo((), |_| fixtures::tournaments());
    let query = use_state(String::new);
    let bucket = use_state(|| TournamentBucket::Upcoming);
    let open_tournament = use_state(|| None::<u32>);
    let toasts = use_context::<ToastContext>().unwrap_or_default();

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_bucket = {
        let bucket = bucket.clone();
        Callback::from(move |b: TournamentBucket| bucket.set(b))
    };
    let on_close = {
        let open_tournament = open_tournament.clone();
        Callback::from(move |_: ()| open_tournament.set(None))
    };
    let on_enter = {
        let open_tournament = open_tournament.clone();
        Callback::from(move |tournament: Tournament| {
            debug!("Entering tournament {}", tournament.id);
            open_tournament.set(None);
            toasts.success(enter_tournament(&tournament));
        })
    };

    let visible = filter_by_text(&filter_by_bucket(&tournaments, *bucket), &query);

    html! {
        <div>
            <div class="mb-4">
                <SearchBox value={(*query).clone()} placeholder="Search tournaments..." on_change={on_query} />
            </div>
            <TabBar<TournamentBucket>
                tabs={bucket_tabs::<Tournament, TournamentBucket>(&tournaments)}
                current={*bucket}
                on_select={on_bucket}
            />
            <div class="mt-4 space-y-3">
                if visible.is_empty() {
                    <p class="text-center py-4 text-sm text-gray-500">
                        {format!("No {} tournaments found.", bucket.label().to_lowercase())}
                    </p>
                }
                {for visible.into_iter().map(|tournament| {
                    let on_open = {
                        let open_tournament = open_tournament.clone();
                        let id = tournament.id;
                        Callback::from(move |_: MouseEvent| open_tournament.set(Some(id)))
                    };
                    html! {
                        <div key={tournament.id} class="bg-white rounded-lg shadow-sm border border-blue-950/10 p-4">
                            <h3 class="text-lg font-bold text-blue-950">{&tournament.name}</h3>
                            <p class="text-sm text-gray-700">{&tournament.description}</p>
                            <div class="grid grid-cols-2 gap-2 text-sm mt-3">
                                <div><span class="font-medium text-blue-950">{"Venue: "}</span>{&tournament.venue}</div>
                                <div>
                                    <span class="font-medium text-blue-950">{"Dates: "}</span>
                                    {format!("{} - {}", format_date(tournament.start_date), format_date(tournament.end_date))}
                                </div>
                                <div><span class="font-medium text-blue-950">{"Registration: "}</span>{registration_label(tournament.registration_close)}</div>
                            </div>
                            <div class="mt-3">
                                <h4 class="text-sm font-medium text-blue-950 mb-1">{"Sections"}</h4>
                                <ul class="space-y-1">
                                    {for tournament.sections.iter().map(|s| html! {
                                        <li key={s.name.clone()} class="flex justify-between items-center text-sm border-b border-gray-100 pb-1">
                                            <span>
                                                <span class="font-medium">{&s.name}</span>
                                                <span class="text-xs text-gray-500 ml-2">{s.rating_label()}</span>
                                            </span>
                                            <span class="font-medium">{s.fee_label()}</span>
                                        </li>
                                    })}
                                </ul>
                            </div>
                            <div class="flex justify-end mt-3">
                                <button class="px-3 py-1.5 text-sm rounded-md border border-blue-950 text-blue-950 hover:bg-blue-950 hover:text-white" onclick={on_open}>
                                    {"View Details"}
                                </button>
                            </div>
                            <TournamentDetails
                                is_open={*open_tournament == Some(tournament.id)}
                                tournament={tournament.clone()}
                                on_close={on_close.clone()}
                                on_enter={on_enter.clone()}
                            />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
