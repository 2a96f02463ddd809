use shared::PlayerProfile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GeneralTabProps {
    pub profile: PlayerProfile,
}

fn info(label: &'static str, value: String) -> Html {
    html! {
        <div>
            <p class="text-xs text-gray-500">{label}</p>
            <p class="text-sm font-medium">{value}</p>
        </div>
    }
}

fn stat(label: String, value: String) -> Html {
    html! {
        <div class="p-2 bg-blue-950/5 rounded-md">
            <p class="text-xs text-gray-500">{label}</p>
            <p class="text-lg font-semibold text-blue-950">{value}</p>
        </div>
    }
}

fn stat_group(heading: &'static str, stats: Vec<Html>) -> Html {
    html! {
        <div class="mb-3">
            <h4 class="text-xs font-medium text-blue-950 mb-2">{heading}</h4>
            <div class="grid grid-cols-2 gap-2">{for stats}</div>
        </div>
    }
}

#[function_component(GeneralTab)]
pub fn general_tab(props: &GeneralTabProps) -> Html {
    let profile = &props.profile;
    let stats = &profile.stats;

    html! {
        <>
            <div class="bg-white rounded-lg shadow-md p-3 mb-3">
                <div class="flex items-center mb-3">
                    <div class="w-16 h-16 bg-blue-950/10 rounded-full flex items-center justify-center mr-4 text-2xl text-blue-950">
                        {"♟"}
                    </div>
                    <div>
                        <h2 class="text-lg font-semibold text-blue-950">{&profile.name}</h2>
                        <p class="text-xs text-gray-600">{format!("Current rating: {}", profile.rating)}</p>
                    </div>
                </div>
                <div class="border-t border-blue-950/10 pt-2">
                    <h3 class="text-sm font-medium text-blue-950 mb-2">{"Player Information"}</h3>
                    <div class="grid grid-cols-2 gap-x-4 gap-y-2">
                        {info("Email", profile.email.clone())}
                        {info("CHESSA ID", profile.chessa_id.clone())}
                        if let Some(fide_id) = &profile.fide_id {
                            {info("FIDE ID", fide_id.clone())}
                        }
                        {info("Club", profile.club.clone())}
                        {info("Member Since", profile.member_since.clone())}
                        {info("Address", profile.address.clone())}
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-md p-3">
                <h3 class="text-sm font-medium text-blue-950 mb-2">{"Statistics"}</h3>
                {stat_group("Overall Performance", vec![
                    stat("Matches Played".into(), stats.matches_played.to_string()),
                    stat("Win Rate".into(), format!("{}%", stats.win_rate())),
                ])}
                {stat_group("Tournament Statistics", vec![
                    stat("Tournaments".into(), stats.tournaments_played.to_string()),
                    stat("Tournament Wins".into(), stats.tournament_wins.to_string()),
                    stat("Tournament Runner-up".into(), stats.runner_up.to_string()),
                    stat("Tournament Rating".into(), stats.tournament_rating.to_string()),
                ])}
                {stat_group("Game Types", stats.event_formats.iter()
                    .map(|f| stat(f.format.clone(), f.events.to_string()))
                    .collect())}
                {stat_group("Match Results", vec![
                    stat("Wins".into(), stats.wins.to_string()),
                    stat("Losses".into(), stats.losses.to_string()),
                    stat("Draws".into(), stats.draws.to_string()),
                    stat("Current Streak".into(), stats.streak_label()),
                ])}
            </div>
        </>
    }
}
