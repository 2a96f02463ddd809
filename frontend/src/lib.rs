use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthProvider;
use crate::components::common_toast::ToastProvider;
use crate::components::mobile_nav::MobileNav;
use crate::components::nav::Nav;

pub mod auth;
pub mod components;
pub mod config;
pub mod pages {
    pub mod dashboard;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod profile;
    pub mod register;
}

use pages::{
    dashboard::Dashboard, home::Home, login::Login, not_found::NotFound, profile::ProfilePage,
    register::Register,
};

#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/register")]
    Register,
    #[at("/home")]
    Home,
    /// Section picked by `?tab=`
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Sign-in screens are shown without navigation bars.
    pub fn shows_chrome(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <Layout />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[function_component(Layout)]
fn layout() -> Html {
    let chrome = use_route::<Route>()
        .map(|route| route.shows_chrome())
        .unwrap_or(true);

    html! {
        <div class="app-container min-h-screen bg-gray-50">
            if chrome {
                <Nav />
            }
            <main class="flex-1">
                <Switch<Route> render={switch} />
            </main>
            if chrome {
                <MobileNav />
            }
        </div>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Home => html! { <Home /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    Ok(())
}

// Entry point Trunk calls once the wasm module loads
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
