use shared::filter::bucket_counts;
use shared::{HasStatus, StatusBucket};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps<T: Clone + PartialEq + 'static> {
    pub tabs: Vec<(T, AttrValue)>,
    pub current: T,
    pub on_select: Callback<T>,
}

/// Row of equal-width tab triggers; the caller owns the selected tab.
#[function_component(TabBar)]
pub fn tab_bar<T: Clone + PartialEq + 'static>(props: &TabBarProps<T>) -> Html {
    html! {
        <div class="w-full grid grid-flow-col auto-cols-fr border border-blue-950/20 bg-blue-950/5 rounded-md p-1">
            {props.tabs.iter().map(|(tab, label)| {
                let is_active = props.current == *tab;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let tab = tab.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab.clone()))
                };
                html! {
                    <button
                        class={classes!(
                            "py-1.5", "px-2", "rounded", "text-sm", "font-medium", "transition-colors",
                            if is_active {
                                classes!("bg-white", "text-blue-950", "shadow-sm")
                            } else {
                                classes!("text-gray-600", "hover:text-blue-950")
                            }
                        )}
                        {onclick}
                    >
                        {label}
                    </button>
                }
            }).collect::<Html>()}
        </div>
    }
}

/// Bucket tabs labelled with how many records each one holds.
pub fn bucket_tabs<T, B>(items: &[T]) -> Vec<(B, AttrValue)>
where
    T: HasStatus,
    B: StatusBucket<Status = T::Status>,
{
    bucket_counts::<T, B>(items)
        .into_iter()
        .map(|(bucket, count)| (bucket, AttrValue::from(format!("{} ({})", bucket.label(), count))))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
}

/// Text input feeding a dashboard text filter on every keystroke.
#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="relative">
            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{"⌕"}</span>
            <input
                type="search"
                class="w-full pl-9 pr-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-900"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
