use crate::pages::profile::ProfileTab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileTabsProps {
    pub current_tab: ProfileTab,
    pub on_tab_click: Callback<ProfileTab>,
}

#[function_component(ProfileTabs)]
pub fn profile_tabs(props: &ProfileTabsProps) -> Html {
    html! {
        <div class="w-full grid grid-cols-2 border border-blue-950/20 bg-blue-950/5 rounded-md p-1">
            {ProfileTab::ALL.iter().map(|tab| {
                let is_active = props.current_tab == *tab;
                let tab_click = props.on_tab_click.clone();
                let tab = *tab;

                html! {
                    <button
                        class={classes!(
                            "py-1.5", "rounded", "font-medium", "text-sm",
                            if is_active {
                                classes!("bg-white", "text-blue-950")
                            } else {
                                classes!("text-gray-500", "hover:text-gray-700")
                            }
                        )}
                        onclick={Callback::from(move |_: MouseEvent| tab_click.emit(tab))}
                    >
                        {tab.label()}
                    </button>
                }
            }).collect::<Html>()}
        </div>
    }
}
