use log::debug;
use shared::RegisterRequest;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

/// Text input bound to one field of the sign-up form
fn text_field(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    placeholder: &'static str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div>
            <label for={id} class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input
                id={id}
                type={input_type}
                class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-amber-400"
                {placeholder}
                {value}
                {oninput}
            />
        </div>
    }
}

#[function_component(Register)]
pub fn register() -> Html {
    let form = use_state(RegisterRequest::default);
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let navigator = use_navigator();

    {
        let clear_error = auth.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.is_signed_in(), move |signed_in| {
            if *signed_in {
                debug!("Account created, redirecting to dashboard");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    let update = |apply: fn(&mut RegisterRequest, String)| {
        let form = form.clone();
        let clear_error = auth.clear_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
            clear_error.emit(());
        })
    };

    let on_name = update(|f, v| f.name = v);
    let on_email = update(|f, v| f.email = v);
    let on_chessa = update(|f, v| f.chessa_id = Some(v));
    let on_fide = update(|f, v| f.fide_id = Some(v));
    let on_password = update(|f, v| f.password = v);
    let on_confirm = update(|f, v| f.confirm_password = v);

    let on_terms = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(RegisterRequest {
                agree_to_terms: input.checked(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let register = auth.register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            register.emit((*form).clone());
        })
    };

    let loading = auth.state.loading;

    html! {
        <div class="min-h-screen flex items-center justify-center bg-blue-950 py-12 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-6">
                <div class="text-center mb-6">
                    <h2 class="text-2xl font-bold text-blue-950">{"Create an Account"}</h2>
                    <p class="text-sm text-gray-500">{"Join the league and start playing rated games"}</p>
                </div>
                <form class="space-y-4" {onsubmit}>
                    {text_field("name", "Full Name", "text", form.name.clone(), "John Doe", on_name)}
                    {text_field("email", "Email", "email", form.email.clone(), "you@example.com", on_email)}
                    <div class="grid grid-cols-2 gap-3">
                        {text_field("chessa", "CHESSA ID (optional)", "text", form.chessa_id.clone().unwrap_or_default(), "SA10076542", on_chessa)}
                        {text_field("fide", "FIDE ID (optional)", "text", form.fide_id.clone().unwrap_or_default(), "14109603", on_fide)}
                    </div>
                    {text_field("password", "Password", "password", form.password.clone(), "", on_password)}
                    {text_field("confirm", "Confirm Password", "password", form.confirm_password.clone(), "", on_confirm)}
                    <label class="flex items-center gap-2 text-sm text-gray-700">
                        <input type="checkbox" checked={form.agree_to_terms} onchange={on_terms} />
                        {"I agree to the terms and conditions"}
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
                            {"Creating account..."}
                        } else {
                            {"Register"}
                        }
                    </button>
                </form>
                <p class="mt-4 text-sm text-center text-gray-600">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="font-medium text-blue-950 hover:underline">{"Sign In"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
