use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center px-4 text-center">
            <h1 class="text-4xl font-bold text-blue-950 mb-2">{"404"}</h1>
            <p class="text-gray-600 mb-4">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="px-4 py-2 text-sm font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
