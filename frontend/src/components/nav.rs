use log::{debug, error};
use shared::DashboardTab;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::pages::dashboard::DashboardQuery;
use crate::Route;

/// Where a navigation entry leads
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavTarget {
    Home,
    Dashboard(DashboardTab),
    Profile,
}

impl NavTarget {
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::Dashboard(DashboardTab::Leagues),
        NavTarget::Dashboard(DashboardTab::Tournaments),
        NavTarget::Dashboard(DashboardTab::Matches),
        NavTarget::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Dashboard(tab) => tab.nav_label(),
            NavTarget::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavTarget::Home => "⌂",
            NavTarget::Dashboard(DashboardTab::Leagues) => "♜",
            NavTarget::Dashboard(DashboardTab::Tournaments) => "♛",
            NavTarget::Dashboard(DashboardTab::Matches) => "♞",
            NavTarget::Profile => "♟",
        }
    }

    /// Whether this entry is the page currently shown
    pub fn is_current(&self, route: Option<&Route>, tab: DashboardTab) -> bool {
        match (self, route) {
            (NavTarget::Home, Some(Route::Home)) => true,
            (NavTarget::Profile, Some(Route::Profile)) => true,
            (NavTarget::Dashboard(target), Some(Route::Dashboard)) => *target == tab,
            _ => false,
        }
    }

    pub fn go(&self, navigator: &Navigator) {
        debug!("Navigating to {:?}", self);
        match self {
            NavTarget::Home => navigator.push(&Route::Home),
            NavTarget::Profile => navigator.push(&Route::Profile),
            NavTarget::Dashboard(tab) => {
                if let Err(e) = navigator.push_with_query(&Route::Dashboard, &DashboardQuery::for_tab(*tab)) {
                    error!("Failed to open dashboard tab {}: {:?}", tab, e);
                }
            }
        }
    }
}

/// Current route and dashboard tab, for highlighting nav entries
#[hook]
pub fn use_nav_position() -> (Option<Route>, DashboardTab) {
    let route = use_route::<Route>();
    let tab = use_location()
        .and_then(|location| location.query::<DashboardQuery>().ok())
        .unwrap_or_default()
        .dashboard_tab();
    (route, tab)
}

#[function_component(Nav)]
pub fn nav() -> Html {
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
        <nav class={classes!(
            "hidden", "md:block", "sticky", "top-0", "z-40", "bg-blue-950", "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-5xl", "mx-auto", "px-4")}>
                <div class={classes!("flex", "justify-between", "h-14", "items-center")}>
                    <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "gap-2", "font-semibold")}>
                        <span class={classes!("text-xl", "text-amber-400")}>{"♞"}</span>
                        <span>{"Chess League"}</span>
                    </Link<Route>>

                    <div class={classes!("flex", "items-center", "space-x-2")}>
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
                                        "px-3", "py-2", "rounded-md", "text-sm", "font-medium", "transition-colors",
                                        if target.is_current(route.as_ref(), tab) {
                                            classes!("bg-white/20", "text-white")
                                        } else {
                                            classes!("text-white/80", "hover:bg-white/10", "hover:text-white")
                                        }
                                    )}
                                    {onclick}
                                >
                                    {target.label()}
                                </button>
                            }
                        })}
                        <button
                            class={classes!("ml-2", "px-3", "py-2", "rounded-md", "text-sm", "font-medium", "text-amber-400", "hover:bg-white/10")}
                            onclick={on_sign_out}
                        >
                            {"Sign Out"}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
