use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::components::nav::{use_nav_position, NavTarget};
use crate::Route;

/// Bottom tab bar shown below the `md` breakpoint
#[function_component(MobileNav)]
pub fn mobile_nav() -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let navigator = use_navigator();
    let (route, tab) = use_nav_position();

    let on_sign_out = {
        let navigator = navigator.clone();
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <nav class="md:hidden fixed bottom-0 inset-x-0 z-40 bg-blue-950 text-white border-t border-white/10">
            <div class="grid grid-cols-6">
                {for NavTarget::ALL.iter().map(|target| {
                    let target = *target;
                    let onclick = {
                        let navigator = navigator.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(navigator) = &navigator {
                                target.go(navigator);
                            }
                        })
                    };
                    html! {
                        <button
                            class={classes!(
                                "flex", "flex-col", "items-center", "py-2", "text-[10px]",
                                if target.is_current(route.as_ref(), tab) { "text-amber-400" } else { "text-white/70" }
                            )}
                            {onclick}
                        >
                            <span class="text-lg leading-none">{target.icon()}</span>
                            <span>{target.label()}</span>
                        </button>
                    }
                })}
                <button class="flex flex-col items-center py-2 text-[10px] text-white/70" onclick={on_sign_out}>
                    <span class="text-lg leading-none">{"⏻"}</span>
                    <span>{"Sign Out"}</span>
                </button>
            </div>
        </nav>
    }
}
