use log::{debug, info};
use shared::booking::{book_match, missing_fields_notice};
use shared::{fixtures, BookingForm, SharedError};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::common_modal::Modal;
use crate::components::common_toast::{Toast, ToastContext, ToastType};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub opponent: Option<AttrValue>,
}

/// Book Match dialog: opponent, one of that opponent's weekly slots, venue.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let players = use_memo((), |_| fixtures::player_availability());
    let venues = use_memo((), |_| fixtures::venues());
    let form = use_state(BookingForm::default);
    let toasts = use_context::<ToastContext>().unwrap_or_default();

    {
        let form = form.clone();
        use_effect_with(props.opponent.clone(), move |opponent| {
            if let Some(player) = opponent {
                debug!("Booking preselected opponent {}", player);
                form.set(BookingForm::for_player(player.to_string()));
            }
        });
    }

    let on_player = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_player(select.value());
            form.set(next);
        })
    };

    let on_slot = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(BookingForm {
                time_slot: select.value(),
                ..(*form).clone()
            });
        })
    };

    let on_venue = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(BookingForm {
                venue: select.value(),
                ..(*form).clone()
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_book = {
        let form = form.clone();
        let players = players.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| match book_match(&form, &players) {
            Ok(notice) => {
                info!("Match booked with {}", form.player);
                toasts.success(notice);
                form.set(BookingForm::default());
                on_close.emit(());
            }
            Err(SharedError::MissingFields) => {
                debug!("Booking form incomplete: {:?}", *form);
                toasts.error(missing_fields_notice());
            }
            Err(e) => toasts.add_toast.emit(Toast::new(e.to_string(), ToastType::Error)),
        })
    };

    let selected_player = players.iter().find(|p| p.id == form.player);

    html! {
        <Modal
            is_open={props.is_open}
            title="Book a Match"
            description={Some(AttrValue::from("Schedule a new match with another player. Fill in the details below."))}
            on_close={props.on_close.clone()}
        >
            <div class="grid gap-4 py-2">
                <label class="grid grid-cols-4 items-center gap-4 text-sm">
                    <span class="text-right font-medium">{"Opponent"}</span>
                    <select class="col-span-3 border border-gray-300 rounded-md px-2 py-1.5" onchange={on_player}>
                        <option value="" selected={form.player.is_empty()} disabled=true>{"Select opponent"}</option>
                        {for players.iter().map(|player| html! {
                            <option value={player.id.clone()} selected={form.player == player.id}>
                                {player.display_name()}
                            </option>
                        })}
                    </select>
                </label>
                if let Some(player) = selected_player {
                    <label class="grid grid-cols-4 items-center gap-4 text-sm">
                        <span class="text-right font-medium">{"Time Slot"}</span>
                        <select class="col-span-3 border border-gray-300 rounded-md px-2 py-1.5" onchange={on_slot}>
                            <option value="" selected={form.time_slot.is_empty()} disabled=true>{"Select available time"}</option>
                            {for player.available_slots.iter().map(|slot| {
                                let label = slot.to_string();
                                html! {
                                    <option value={label.clone()} selected={form.time_slot == label}>{label.clone()}</option>
                                }
                            })}
                        </select>
                    </label>
                }
                <label class="grid grid-cols-4 items-center gap-4 text-sm">
                    <span class="text-right font-medium">{"Venue"}</span>
                    <select class="col-span-3 border border-gray-300 rounded-md px-2 py-1.5" onchange={on_venue}>
                        <option value="" selected={form.venue.is_empty()} disabled=true>{"Select venue"}</option>
                        {for venues.iter().map(|venue| html! {
                            <option value={venue.clone()} selected={form.venue == *venue}>{venue}</option>
                        })}
                    </select>
                </label>
            </div>
            <div class="mt-4 flex justify-end gap-2">
                <button class="px-4 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50" onclick={on_cancel}>
                    {"Cancel"}
                </button>
                <button class="px-4 py-2 text-sm font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400" onclick={on_book}>
                    {"Book Match"}
                </button>
            </div>
        </Modal>
    }
}
