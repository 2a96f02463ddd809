use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub on_close: Callback<()>,
    /// Form body and buttons, supplied by the caller
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog. Clicking the backdrop or the close button closes it;
/// clicks inside the panel do not.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div class="absolute inset-0 bg-black bg-opacity-50" onclick={on_overlay_click}></div>
            <div
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4 max-h-[90vh] overflow-y-auto"
                onclick={on_panel_click}
            >
                <div class="flex items-start justify-between mb-4">
                    <div>
                        <h3 class="text-lg font-semibold text-blue-950">{&props.title}</h3>
                        if let Some(description) = &props.description {
                            <p class="text-sm text-gray-600 mt-1">{description}</p>
                        }
                    </div>
                    <button onclick={on_close_click} class="text-gray-400 hover:text-gray-600 focus:outline-none">
                        <span class="text-xl">{"×"}</span>
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
