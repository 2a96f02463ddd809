use log::{debug, error};
use shared::booking::save_availability;
use shared::format::format_long_day;
use shared::registration::today;
use shared::schedule::{current_week, suggest_partners};
use shared::{fixtures, SlotSelector, SlotTime};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common_modal::Modal;
use crate::components::common_toast::ToastContext;
use crate::config::Config;
use crate::pages::dashboard::DashboardQuery;
use crate::Route;

#[function_component(ScheduleTab)]
pub fn schedule_tab() -> Html {
    let selector = use_state(SlotSelector::new);
    let partners_open = use_state(|| false);
    let week = use_memo((), |_| current_week(today()));
    let slots = use_memo((), |_| Config::slot_window().slots());
    let players = use_memo((), |_| fixtures::player_availability());
    let toasts = use_context::<ToastContext>().unwrap_or_default();
    let navigator = use_navigator();

    let on_toggle = {
        let selector = selector.clone();
        Callback::from(move |time: SlotTime| {
            let mut next = (*selector).clone();
            // The grid only renders once a day is picked
            if next.toggle_slot(time).is_ok() {
                selector.set(next);
            }
        })
    };

    let on_save = {
        let selector = selector.clone();
        Callback::from(move |_: MouseEvent| toasts.success(save_availability(&selector)))
    };

    let on_clear = {
        let selector = selector.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selector).clone();
            next.clear();
            selector.set(next);
        })
    };

    let open_partners = {
        let partners_open = partners_open.clone();
        Callback::from(move |_: MouseEvent| partners_open.set(true))
    };
    let close_partners = {
        let partners_open = partners_open.clone();
        Callback::from(move |_: ()| partners_open.set(false))
    };
    let on_close_click = {
        let close_partners = close_partners.clone();
        Callback::from(move |_: MouseEvent| close_partners.emit(()))
    };

    let on_book = Callback::from(move |player_id: String| {
        debug!("Booking from availability with {}", player_id);
        let Some(navigator) = navigator.clone() else {
            return;
        };
        let query = DashboardQuery::book_with(&player_id);
        if let Err(e) = navigator.push_with_query(&Route::Dashboard, &query) {
            error!("Failed to open booking for {}: {:?}", player_id, e);
        }
    });

    let suggestions = suggest_partners(&selector, &players);
    let selected_day = selector.selected_day();

    let day_strip = week.iter().map(|day| {
        let is_selected = selected_day == Some(day.date);
        let has_slots = !selector.slots_for_day(day.date).is_empty();
        let onclick = {
            let selector = selector.clone();
            let date = day.date;
            Callback::from(move |_: MouseEvent| {
                let mut next = (*selector).clone();
                next.select_day(date);
                selector.set(next);
            })
        };
        html! {
            <button
                key={day.date.to_string()}
                class={classes!(
                    "flex", "flex-col", "items-center", "p-2", "rounded-md", "text-xs",
                    if is_selected {
                        classes!("bg-blue-950", "text-white")
                    } else {
                        classes!("bg-blue-950/5", "text-blue-950", "hover:bg-blue-950/10")
                    },
                    has_slots.then_some("ring-2 ring-amber-400")
                )}
                {onclick}
            >
                <span class="font-medium">{&day.day_name}</span>
                <span class="text-lg font-semibold">{day.day_number}</span>
                <span>{&day.month}</span>
            </button>
        }
    });

    let slot_grid = match selected_day {
        Some(day) => html! {
            <>
                <p class="text-sm text-gray-600 mb-2">
                    {format!("Select available time slots for {}", format_long_day(day))}
                </p>
                <div class="grid grid-cols-4 gap-2">
                    {for slots.iter().map(|time| {
                        let time = *time;
                        let active = selector.is_slot_selected(time);
                        let on_toggle = on_toggle.clone();
                        html! {
                            <button
                                key={time.to_string()}
                                class={classes!(
                                    "py-1.5", "text-xs", "rounded-md", "border",
                                    if active {
                                        classes!("bg-amber-500", "border-amber-500", "text-blue-950", "font-medium")
                                    } else {
                                        classes!("border-gray-300", "text-gray-700", "hover:bg-gray-50")
                                    }
                                )}
                                onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(time))}
                            >
                                {time.to_string()}
                            </button>
                        }
                    })}
                </div>
                <div class="mt-4 flex justify-end gap-2">
                    <button class="px-4 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50" onclick={on_clear}>
                        {"Clear"}
                    </button>
                    <button class="px-4 py-2 text-sm font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400" onclick={on_save}>
                        {"Save Availability"}
                    </button>
                </div>
            </>
        },
        None => html! {
            <p class="text-center py-6 text-sm text-gray-500">{"Select a day to set your available time slots"}</p>
        },
    };

    html! {
        <>
            <div class="bg-white rounded-lg shadow-md p-3 mb-3">
                <h3 class="text-lg font-semibold text-blue-950">{"My Availability"}</h3>
                <p class="text-xs text-gray-600 mb-3">
                    {"Set your available time slots for match scheduling. Players with matching availability will be suggested to you for quick match booking."}
                </p>
                <h4 class="text-sm font-medium text-blue-950 mb-2">{"Weekly Schedule"}</h4>
                <div class="grid grid-cols-7 gap-1 mb-4">{for day_strip}</div>
                {slot_grid}
            </div>

            <div class="bg-white rounded-lg shadow-md p-3">
                <h3 class="text-sm font-medium text-blue-950 mb-2">{"Schedule Stats"}</h3>
                <div class="grid grid-cols-2 gap-2 mb-3">
                    <div class="p-2 bg-blue-950/5 rounded-md">
                        <p class="text-xs text-gray-500">{"Available Time Slots"}</p>
                        <p class="text-lg font-semibold text-blue-950">{selector.len()}</p>
                    </div>
                    <div class="p-2 bg-blue-950/5 rounded-md">
                        <p class="text-xs text-gray-500">{"Available Days"}</p>
                        <p class="text-lg font-semibold text-blue-950">{selector.distinct_day_count()}</p>
                    </div>
                </div>
                <button class="w-full py-2 text-sm rounded-md border border-blue-950 text-blue-950 hover:bg-blue-950 hover:text-white" onclick={open_partners}>
                    {"View Potential Match Partners"}
                </button>
            </div>

            <Modal
                is_open={*partners_open}
                title="Potential Match Partners"
                description={Some(AttrValue::from("Players with similar availability to yours"))}
                on_close={close_partners}
            >
                if suggestions.is_empty() {
                    <p class="text-center py-4 text-sm text-gray-500">{"Set your availability to see potential match partners"}</p>
                }
                <div class="space-y-2">
                    {for suggestions.iter().map(|suggestion| {
                        let on_book = on_book.clone();
                        let player_id = suggestion.player.id.clone();
                        let shared = suggestion.shared_slots
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", ");
                        html! {
                            <div key={suggestion.player.id.clone()} class="flex justify-between items-center p-2 border border-blue-950/10 rounded-md">
                                <div>
                                    <p class="text-sm font-medium text-blue-950">{suggestion.player.display_name()}</p>
                                    <p class="text-xs text-gray-500">{shared}</p>
                                </div>
                                <button
                                    class="px-3 py-1 text-xs font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400"
                                    onclick={Callback::from(move |_: MouseEvent| on_book.emit(player_id.clone()))}
                                >
                                    {"Book Match"}
                                </button>
                            </div>
                        }
                    })}
                </div>
                <div class="mt-4 flex justify-end">
                    <button class="px-4 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50" onclick={on_close_click}>
                        {"Close"}
                    </button>
                </div>
            </Modal>
        </>
    }
}
