use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::Notice;
use uuid::Uuid;
use yew::prelude::*;

use crate::config::Config;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-white border-green-600 text-gray-900",
            ToastType::Error => "bg-red-600 border-red-700 text-white",
            ToastType::Info => "bg-white border-blue-900 text-gray-900",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub toast_type: ToastType,
    /// Milliseconds before it disappears on its own
    pub duration: Option<u32>,
}

impl Toast {
    pub fn new(title: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            toast_type,
            duration: Some(Config::toast_duration_ms()),
        }
    }

    pub fn from_notice(notice: Notice, toast_type: ToastType) -> Self {
        Self::new(notice.title, toast_type).with_description(notice.description)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn success(&self, notice: Notice) {
        self.add_toast.emit(Toast::from_notice(notice, ToastType::Success));
    }

    pub fn error(&self, notice: Notice) {
        self.add_toast.emit(Toast::from_notice(notice, ToastType::Error));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Visible toasts. Updates go through the reducer so a timer firing after
/// later toasts were added still sees the current list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let add_toast = {
        let stack = stack.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            stack.dispatch(ToastAction::Add(toast));

            if let Some(duration_ms) = duration {
                let stack = stack.clone();
                Timeout::new(duration_ms, move || stack.dispatch(ToastAction::Remove(toast_id))).forget();
            }
        })
    };

    let remove_toast = {
        let stack = stack.clone();
        Callback::from(move |id: Uuid| stack.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: stack.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().unwrap_or_default();

    html! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2 md:bottom-4">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().unwrap_or_default();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            Timeout::new(10, move || visible.set(true)).forget();
            || {}
        });
    }

    let on_close = {
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| toast_context.remove_toast.emit(toast_id))
    };

    html! {
        <div class={classes!(
            "transform", "transition-all", "duration-300", "ease-in-out",
            if *visible { "translate-x-0 opacity-100" } else { "translate-x-full opacity-0" }
        )}>
            <div class={classes!(
                "flex", "items-start", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "min-w-80", "max-w-md",
                props.toast.toast_type.classes()
            )}>
                <div class="flex-shrink-0 mr-3">
                    <span class="text-lg font-bold">{props.toast.toast_type.icon()}</span>
                </div>
                <div class="flex-1">
                    <p class="text-sm font-semibold">{&props.toast.title}</p>
                    if let Some(description) = &props.toast.description {
                        <p class="text-sm opacity-80 mt-1">{description}</p>
                    }
                </div>
                <button onclick={on_close} class="flex-shrink-0 ml-3 opacity-70 hover:opacity-100 focus:outline-none">
                    <span class="text-lg">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
