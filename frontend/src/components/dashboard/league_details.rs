use shared::format::format_date;
use shared::registration::{is_open, registration_label};
use shared::{League, LeagueStatus};
use yew::prelude::*;

use crate::components::common_modal::Modal;
use crate::components::tabs::TabBar;

#[derive(Clone, Copy, Debug, PartialEq)]
enum LeagueSection {
    Information,
    Divisions,
    Schedule,
    Standings,
}

impl LeagueSection {
    fn label(&self) -> &'static str {
        match self {
            LeagueSection::Information => "Information",
            LeagueSection::Divisions => "Divisions",
            LeagueSection::Schedule => "Schedule",
            LeagueSection::Standings => "Standings",
        }
    }
}

pub fn status_text_classes(status: LeagueStatus) -> &'static str {
    match status {
        LeagueStatus::Active => "text-green-600",
        LeagueStatus::Upcoming => "text-amber-500",
        LeagueStatus::Completed | LeagueStatus::Archived => "text-red-600",
    }
}

#[derive(Properties, PartialEq)]
pub struct LeagueDetailsProps {
    pub league: League,
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_join: Callback<League>,
}

#[function_component(LeagueDetails)]
pub fn league_details(props: &LeagueDetailsProps) -> Html {
    let section = use_state(|| LeagueSection::Information);
    let league = &props.league;

    let mut sections = vec![LeagueSection::Information, LeagueSection::Divisions, LeagueSection::Schedule];
    if !league.leaderboard.is_empty() {
        sections.push(LeagueSection::Standings);
    }
    let tabs = sections
        .into_iter()
        .map(|s| (s, AttrValue::from(s.label())))
        .collect::<Vec<_>>();

    let on_select = {
        let section = section.clone();
        Callback::from(move |s: LeagueSection| section.set(s))
    };

    let on_join = {
        let on_join = props.on_join.clone();
        let league = league.clone();
        Callback::from(move |_: MouseEvent| on_join.emit(league.clone()))
    };

    let period = format!("{} - {}", format_date(league.start_date), format_date(league.end_date));
    let window_open = is_open(league.registration_close);

    let body = match *section {
        LeagueSection::Information => html! {
            <div class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {detail("Venue", html! { {&league.venue} })}
                    {detail("Dates", html! { {&period} })}
                    <div class="space-y-1">
                        <h4 class="text-sm font-medium text-blue-950">{"Registration Closes"}</h4>
                        <p class={classes!("text-sm", (!window_open).then_some("text-red-600"))}>
                            {format_date(league.registration_close)}
                        </p>
                    </div>
                    <div class="space-y-1">
                        <h4 class="text-sm font-medium text-blue-950">{"Status"}</h4>
                        <p class={classes!("text-sm", status_text_classes(league.status))}>{league.status.label()}</p>
                    </div>
                </div>
                {detail("Format", html! { {&league.format} })}
                {detail("Match Schedule", html! { {&league.match_schedule} })}
                {detail("Entry Fee", html! { {format!("R{}", league.entry_fee)} })}
                {detail("Prizes", html! { {&league.prizes} })}
            </div>
        },
        LeagueSection::Divisions => html! {
            <div class="space-y-3">
                {for league.division_details.iter().map(|division| html! {
                    <div class="p-3 border border-blue-950/10 rounded-md">
                        <div class="flex justify-between items-center">
                            <h4 class="font-medium text-blue-950">{&division.name}</h4>
                            <span class="text-sm font-medium">{format!("{} players", division.players)}</span>
                        </div>
                        <p class="text-xs text-gray-500 mt-1">{format!("Rating range: {}", division.rating_range)}</p>
                    </div>
                })}
            </div>
        },
        LeagueSection::Schedule => html! {
            <div class="space-y-3">
                {panel("League Period", html! { {&period} })}
                {panel("Registration", html! {
                    {format!("Closes on {} ({})", format_date(league.registration_close), registration_label(league.registration_close))}
                })}
                {panel("Match Days", html! { {&league.match_schedule} })}
                {panel("Additional Information", html! {
                    {"Players are responsible for arranging their matches within the scheduled timeframes. All results must be submitted via the app or to the league coordinator."}
                })}
            </div>
        },
        LeagueSection::Standings => html! {
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-xs text-gray-500 border-b">
                        <th class="py-1">{"#"}</th>
                        <th class="py-1">{"Player"}</th>
                        <th class="py-1 text-right">{"Pts"}</th>
                        <th class="py-1 text-right">{"W-D-L"}</th>
                        <th class="py-1 text-right">{"Rating"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for league.leaderboard.iter().map(|entry| html! {
                        <tr class="border-b border-gray-100">
                            <td class="py-1">{entry.rank}</td>
                            <td class="py-1 font-medium">{&entry.player}</td>
                            <td class="py-1 text-right">{entry.points()}</td>
                            <td class="py-1 text-right">{format!("{}-{}-{}", entry.wins, entry.draws, entry.losses)}</td>
                            <td class="py-1 text-right">{entry.rating}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        },
    };

    html! {
        <Modal
            is_open={props.is_open}
            title={league.name.clone()}
            description={Some(AttrValue::from(league.description.clone()))}
            on_close={props.on_close.clone()}
        >
            <TabBar<LeagueSection> {tabs} current={*section} {on_select} />
            <div class="mt-4">{body}</div>
            <div class="mt-6 flex justify-end gap-2">
                if league.registration_open {
                    <button class="px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-950 hover:bg-blue-900" onclick={on_join}>
                        {"Join League"}
                    </button>
                } else {
                    <button class="px-4 py-2 text-sm font-medium rounded-md border border-gray-300 text-gray-400" disabled=true>
                        {"Registration Closed"}
                    </button>
                }
            </div>
        </Modal>
    }
}

fn detail(heading: &'static str, value: Html) -> Html {
    html! {
        <div class="space-y-1">
            <h4 class="text-sm font-medium text-blue-950">{heading}</h4>
            <p class="text-sm">{value}</p>
        </div>
    }
}

fn panel(heading: &'static str, value: Html) -> Html {
    html! {
        <div class="p-3 border border-blue-950/10 rounded-md">
            <h4 class="font-medium text-blue-950">{heading}</h4>
            <p class="text-sm mt-1">{value}</p>
        </div>
    }
}
