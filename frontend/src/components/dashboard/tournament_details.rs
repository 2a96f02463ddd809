use shared::format::format_date;
use shared::registration::is_open;
use shared::{Tournament, TournamentStatus};
use yew::prelude::*;

use crate::components::common_modal::Modal;
use crate::components::tabs::TabBar;

#[derive(Clone, Copy, Debug, PartialEq)]
enum TournamentSection {
    Information,
    Sections,
    Schedule,
}

impl TournamentSection {
    const ALL: [TournamentSection; 3] = [
        TournamentSection::Information,
        TournamentSection::Sections,
        TournamentSection::Schedule,
    ];

    fn label(&self) -> &'static str {
        match self {
            TournamentSection::Information => "Information",
            TournamentSection::Sections => "Sections",
            TournamentSection::Schedule => "Schedule",
        }
    }
}

fn status_text_classes(status: TournamentStatus) -> &'static str {
    match status {
        TournamentStatus::Active => "text-green-600",
        TournamentStatus::Upcoming => "text-amber-500",
        TournamentStatus::Completed | TournamentStatus::Archived => "text-red-600",
    }
}

#[derive(Properties, PartialEq)]
pub struct TournamentDetailsProps {
    pub tournament: Tournament,
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_enter: Callback<Tournament>,
}

#[function_component(TournamentDetails)]
pub fn tournament_details(props: &TournamentDetailsProps) -> Html {
    let section = use_state(|| TournamentSection::Information);
    let tournament = &props.tournament;
    let window_open = is_open(tournament.registration_close);

    let tabs = TournamentSection::ALL
        .iter()
        .map(|s| (*s, AttrValue::from(s.label())))
        .collect::<Vec<_>>();
    let on_select = {
        let section = section.clone();
        Callback::from(move |s: TournamentSection| section.set(s))
    };
    let on_enter = {
        let on_enter = props.on_enter.clone();
        let tournament = tournament.clone();
        Callback::from(move |_: MouseEvent| on_enter.emit(tournament.clone()))
    };

    let body = match *section {
        TournamentSection::Information => html! {
            <div class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="space-y-1">
                        <h4 class="text-sm font-medium text-blue-950">{"Venue"}</h4>
                        <p class="text-sm">{&tournament.venue}</p>
                    </div>
                    <div class="space-y-1">
                        <h4 class="text-sm font-medium text-blue-950">{"Dates"}</h4>
                        <p class="text-sm">{format!("{} - {}", format_date(tournament.start_date), format_date(tournament.end_date))}</p>
                    </div>
                    <div class="space-y-1">
                        <h4 class="text-sm font-medium text-blue-950">{"Registration Closes"}</h4>
                        <p class={classes!("text-sm", (!window_open).then_some("text-red-600"))}>
                            {format_date(tournament.registration_close)}
                        </p>
                    </div>
                    <div class="space-y-1">
                        <h4 class="text-sm font-medium text-blue-950">{"Status"}</h4>
                        <p class={classes!("text-sm", status_text_classes(tournament.status))}>{tournament.status.label()}</p>
                    </div>
                </div>
                <div class="space-y-1">
                    <h4 class="text-sm font-medium text-blue-950">{"Additional Information"}</h4>
                    <p class="text-sm">{"Please bring your own chess equipment and clock if possible. Refreshments will be available at the venue."}</p>
                </div>
            </div>
        },
        TournamentSection::Sections => html! {
            <div class="space-y-3">
                {for tournament.sections.iter().map(|s| html! {
                    <div class="p-3 border border-blue-950/10 rounded-md">
                        <div class="flex justify-between items-center">
                            <h4 class="font-medium text-blue-950">{&s.name}</h4>
                            <span class="text-sm font-medium">{s.fee_label()}</span>
                        </div>
                        <p class="text-xs text-gray-500 mt-1">{s.rating_label()}</p>
                    </div>
                })}
            </div>
        },
        TournamentSection::Schedule => html! {
            <div class="space-y-2">
                {for tournament.programme().into_iter().map(|day| html! {
                    <div class="p-2 border-b border-blue-950/10 last:border-b-0">
                        <p class="font-medium text-blue-950">{format_date(day.date)}</p>
                        <div class="ml-4 mt-1 space-y-1">
                            {for day.sessions.iter().map(|session| html! {
                                <p class="text-sm text-gray-500">{*session}</p>
                            })}
                        </div>
                    </div>
                })}
            </div>
        },
    };

    html! {
        <Modal
            is_open={props.is_open}
            title={tournament.name.clone()}
            description={Some(AttrValue::from(tournament.description.clone()))}
            on_close={props.on_close.clone()}
        >
            <TabBar<TournamentSection> {tabs} current={*section} {on_select} />
            <div class="mt-4">{body}</div>
            if window_open {
                <div class="mt-6 flex justify-end">
                    <button class="px-4 py-2 text-sm font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400" onclick={on_enter}>
                        {"Register Now"}
                    </button>
                </div>
            }
        </Modal>
    }
}
