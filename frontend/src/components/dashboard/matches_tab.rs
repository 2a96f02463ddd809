use shared::format::format_date_time;
use shared::models::matches::outcome_label;
use shared::{filter_by_bucket, filter_by_text, fixtures, Match, MatchBucket, MatchResult, MatchStatus};
use yew::prelude::*;

use crate::components::dashboard::booking_modal::BookingModal;
use crate::components::tabs::{bucket_tabs, SearchBox, TabBar};

fn outcome_classes(result: Option<MatchResult>) -> &'static str {
    match result {
        Some(MatchResult::Win) => "text-green-600",
        Some(MatchResult::Loss) => "text-red-600",
        None => "text-amber-500",
    }
}

fn venue_label(m: &Match) -> &str {
    m.venue.as_deref().unwrap_or("Not specified")
}

fn upcoming_card(m: &Match) -> Html {
    html! {
        <div key={m.id} class="bg-white rounded-lg shadow-sm p-3">
            <div class="flex justify-between items-start mb-1">
                <div>
                    <h3 class="font-medium text-blue-950 text-sm">{&m.opponent.name}</h3>
                    <p class="text-xs text-gray-500">{format!("Rating: {}", m.opponent.rating)}</p>
                </div>
                <div class="text-right">
                    <p class="text-xs font-medium">{format_date_time(m.date)}</p>
                    <p class="text-xs text-gray-500">{venue_label(m)}</p>
                </div>
            </div>
            <p class="text-xs text-gray-500">{format!("{} - {}", m.league, m.division)}</p>
        </div>
    }
}

fn pending_card(m: &Match) -> Html {
    html! {
        <div key={m.id} class="bg-white rounded-lg shadow-sm p-3 border-l-4 border-amber-400">
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-medium text-blue-950 text-sm">{format!("Match against {}", m.opponent.name)}</h3>
                    <p class="text-xs text-gray-500">{format!("{} - {}", m.league, m.division)}</p>
                </div>
                if let Some(action) = m.status.action_label() {
                    <span class="px-3 py-1 text-xs font-medium rounded-md bg-amber-500 text-blue-950">{action}</span>
                }
            </div>
            if m.status == MatchStatus::PendingConfirmation {
                <p class="mt-1 text-xs text-gray-500">
                    {format!("Proposed: {} at {}", format_date_time(m.date), venue_label(m))}
                </p>
            }
        </div>
    }
}

fn completed_card(m: &Match) -> Html {
    let (confirmation, confirmation_classes) = if m.confirmed {
        ("✓ Result confirmed", "text-green-600")
    } else {
        ("Awaiting confirmation", "text-amber-500")
    };
    html! {
        <div key={m.id} class="bg-white rounded-lg shadow-sm p-3">
            <div class="flex justify-between items-start mb-1">
                <div>
                    <h3 class="font-medium text-blue-950 text-sm">{&m.opponent.name}</h3>
                    <p class="text-xs text-gray-500">{format!("Rating: {}", m.opponent.rating)}</p>
                </div>
                <div class="text-right">
                    <span class={classes!("font-medium", "text-sm", outcome_classes(m.result))}>{outcome_label(m.result)}</span>
                    if let Some(result) = m.result {
                        <p class="text-xs text-gray-500">{result.score()}</p>
                    }
                </div>
            </div>
            <p class="text-xs text-gray-500">{format!("{} - {}", m.league, m.division)}</p>
            <p class="text-xs text-gray-500">{format!("{} at {}", format_date_time(m.date), venue_label(m))}</p>
            <p class={classes!("text-xs", "mt-1", confirmation_classes)}>{confirmation}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MatchesTabProps {
    /// Player to book against straight away
    #[prop_or_default]
    pub opponent: Option<AttrValue>,
}

#[function_component(MatchesTab)]
pub fn matches_tab(props: &MatchesTabProps) -> Html {
    let matches = use_memo((), |_| fixtures::matches());
    let query = use_state(String::new);
    let bucket = use_state(|| MatchBucket::Upcoming);
    let booking_open = use_state(|| false);

    {
        let booking_open = booking_open.clone();
        use_effect_with(props.opponent.clone(), move |opponent| {
            if opponent.is_some() {
                booking_open.set(true);
            }
        });
    }

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_bucket = {
        let bucket = bucket.clone();
        Callback::from(move |b: MatchBucket| bucket.set(b))
    };
    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| booking_open.set(true))
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| booking_open.set(false))
    };

    let visible = filter_by_text(&filter_by_bucket(&matches, *bucket), &query);
    let card: fn(&Match) -> Html = match *bucket {
        MatchBucket::Upcoming => upcoming_card,
        MatchBucket::Pending => pending_card,
        MatchBucket::Completed => completed_card,
    };

    html! {
        <div>
            <div class="flex items-center gap-3 mb-4">
                <div class="flex-1">
                    <SearchBox value={(*query).clone()} placeholder="Search matches..." on_change={on_query} />
                </div>
                <button class="px-3 py-2 text-sm font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400" onclick={open_booking}>
                    {"+ Book Match"}
                </button>
            </div>
            <BookingModal is_open={*booking_open} on_close={close_booking} opponent={props.opponent.clone()} />
            <TabBar<MatchBucket> tabs={bucket_tabs::<Match, MatchBucket>(&matches)} current={*bucket} on_select={on_bucket} />
            <div class="mt-4 space-y-2">
                if visible.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-3 text-center">
                        <p class="text-sm">{bucket.empty_message()}</p>
                    </div>
                }
                {for visible.iter().map(card)}
            </div>
        </div>
    }
}
