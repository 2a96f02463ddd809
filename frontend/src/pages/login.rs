use log::debug;
use shared::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use shared::LoginRequest;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember_me = use_state(|| false);

    let auth = use_context::<AuthContext>().unwrap_or_default();
    let navigator = use_navigator();

    {
        let clear_error = auth.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    // Leave for the dashboard once the delayed check succeeds
    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.is_signed_in(), move |signed_in| {
            if *signed_in {
                debug!("Signed in, redirecting to dashboard");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let remember_me = remember_me.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login.emit(LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                remember_me: *remember_me,
            });
        })
    };

    let onemailchange = {
        let email = email.clone();
        let clear_error = auth.clear_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            clear_error.emit(());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        let clear_error = auth.clear_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            clear_error.emit(());
        })
    };

    let onrememberchange = {
        let remember_me = remember_me.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            remember_me.set(input.checked());
        })
    };

    let loading = auth.state.loading;

    html! {
        <div class="min-h-screen flex items-center justify-center bg-blue-950 py-12 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-6">
                <div class="text-center mb-6">
                    <div class="text-4xl mb-2">{"♞"}</div>
                    <h2 class="text-2xl font-bold text-blue-950">{"Chess League"}</h2>
                    <p class="text-sm text-gray-500">{"Sign in to manage your leagues, tournaments and matches"}</p>
                </div>
                <form class="space-y-4" {onsubmit}>
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-amber-400"
                            placeholder="player@example.com"
                            value={(*email).clone()}
                            oninput={onemailchange}
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-amber-400"
                            value={(*password).clone()}
                            oninput={onpasswordchange}
                        />
                    </div>
                    <label class="flex items-center gap-2 text-sm text-gray-700">
                        <input type="checkbox" checked={*remember_me} onchange={onrememberchange} />
                        {"Remember me"}
                    </label>

                    if let Some(error) = &auth.state.error {
                        <div class="text-red-600 text-sm text-center">{error}</div>
                    }

                    <button
                        type="submit"
                        disabled={loading}
                        class="w-full py-2 px-4 text-sm font-medium rounded-md text-blue-950 bg-amber-500 hover:bg-amber-400 disabled:opacity-50"
                    >
                        if loading {
                            {"Signing in..."}
                        } else {
                            {"Sign In"}
                        }
                    </button>
                </form>
                <p class="mt-4 text-xs text-center text-gray-500">
                    {format!("Demo account: {} / {}", DEMO_EMAIL, DEMO_PASSWORD)}
                </p>
                <p class="mt-2 text-sm text-center text-gray-600">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register} classes="font-medium text-blue-950 hover:underline">{"Register"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
