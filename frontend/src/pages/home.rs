use log::{debug, info};
use shared::format::format_date;
use shared::{fixtures, validate_post, Announcement, ForumPost};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::common_modal::Modal;
use crate::components::common_toast::{Toast, ToastContext, ToastType};
use crate::components::tabs::TabBar;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HomeTab {
    General,
    Community,
}

impl HomeTab {
    pub const ALL: [HomeTab; 2] = [HomeTab::General, HomeTab::Community];

    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::General => "General",
            HomeTab::Community => "Community",
        }
    }
}

fn announcement_card(announcement: &Announcement) -> Html {
    html! {
        <div key={announcement.id} class="bg-white rounded-lg shadow-sm p-4">
            <h3 class="font-semibold text-blue-950">{&announcement.title}</h3>
            <p class="text-xs text-gray-500 mb-2">
                {format!("{} · {}", announcement.author, format_date(announcement.date))}
            </p>
            <p class="text-sm text-gray-700">{&announcement.content}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: ForumPost,
}

/// Forum thread with its body folded until clicked
#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let expanded = use_state(|| false);
    let post = &props.post;

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <div class="bg-white rounded-lg shadow-sm p-4">
            <button class="w-full text-left" onclick={on_toggle}>
                <div class="flex items-start gap-3">
                    <div class="w-9 h-9 shrink-0 rounded-full bg-blue-950 text-white text-xs font-semibold flex items-center justify-center">
                        {post.author.initials()}
                    </div>
                    <div class="flex-1">
                        <h3 class="font-medium text-blue-950 text-sm">{&post.title}</h3>
                        <p class="text-xs text-gray-500">
                            {format!("{} ({}) · {}", post.author.name, post.author.rating, format_date(post.date))}
                        </p>
                    </div>
                    <span class="text-gray-400 text-xs">{if *expanded { "▲" } else { "▼" }}</span>
                </div>
            </button>
            if *expanded {
                <p class="mt-3 text-sm text-gray-700">{&post.content}</p>
            }
            <div class="mt-3 flex gap-4 text-xs text-gray-500">
                <span>{format!("{} replies", post.replies)}</span>
                <span>{format!("{} likes", post.likes)}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NewPostModalProps {
    is_open: bool,
    on_close: Callback<()>,
}

#[function_component(NewPostModal)]
fn new_post_modal(props: &NewPostModalProps) -> Html {
    let title = use_state(String::new);
    let content = use_state(String::new);
    let toasts = use_context::<ToastContext>().unwrap_or_default();

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(input.value());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Posts are not stored; the form just clears
    let on_post = {
        let title = title.clone();
        let content = content.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = validate_post(&title, &content) {
                debug!("New post rejected: {}", e);
                toasts.add_toast.emit(
                    Toast::new(e.to_string(), ToastType::Error)
                        .with_description("A post needs both a title and some content."),
                );
                return;
            }
            info!("Shared post \"{}\"", *title);
            toasts.add_toast.emit(
                Toast::new("Post shared", ToastType::Info)
                    .with_description("Your post is now visible to the community.")
                    .with_duration(3000),
            );
            title.set(String::new());
            content.set(String::new());
            on_close.emit(());
        })
    };

    html! {
        <Modal
            is_open={props.is_open}
            title="Create New Post"
            description={Some(AttrValue::from("Share something with the chess community."))}
            on_close={props.on_close.clone()}
        >
            <div class="space-y-3">
                <input
                    type="text"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                    placeholder="Post title..."
                    value={(*title).clone()}
                    oninput={on_title}
                />
                <textarea
                    rows="5"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                    placeholder="Share your thoughts, questions, or analysis..."
                    value={(*content).clone()}
                    oninput={on_content}
                />
            </div>
            <div class="mt-4 flex justify-end gap-2">
                <button class="px-4 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50" onclick={on_cancel}>
                    {"Cancel"}
                </button>
                <button class="px-4 py-2 text-sm font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400" onclick={on_post}>
                    {"Post"}
                </button>
            </div>
        </Modal>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let tab = use_state(|| HomeTab::General);
    let new_post_open = use_state(|| false);
    let announcements = use_memo((), |_| fixtures::announcements());
    let posts = use_memo((), |_| fixtures::forum_posts());

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |t: HomeTab| tab.set(t))
    };
    let open_new_post = {
        let new_post_open = new_post_open.clone();
        Callback::from(move |_: MouseEvent| new_post_open.set(true))
    };
    let close_new_post = {
        let new_post_open = new_post_open.clone();
        Callback::from(move |_: ()| new_post_open.set(false))
    };

    let tabs = HomeTab::ALL
        .iter()
        .map(|t| (*t, AttrValue::from(t.label())))
        .collect::<Vec<_>>();

    let body = match *tab {
        HomeTab::General => html! {
            <div class="space-y-3">
                <h2 class="text-lg font-semibold text-blue-950">{"Announcements"}</h2>
                {for announcements.iter().map(announcement_card)}
            </div>
        },
        HomeTab::Community => html! {
            <div class="space-y-3">
                <div class="flex justify-between items-center">
                    <h2 class="text-lg font-semibold text-blue-950">{"Community Forum"}</h2>
                    <button class="px-3 py-1.5 text-sm font-medium rounded-md bg-amber-500 text-blue-950 hover:bg-amber-400" onclick={open_new_post}>
                        {"New Post"}
                    </button>
                </div>
                {for posts.iter().map(|post| html! { <PostCard key={post.id} post={post.clone()} /> })}
            </div>
        },
    };

    html! {
        <div class="max-w-3xl mx-auto px-4 py-6 pb-24 md:pb-6">
            <div class="mb-4">
                <h1 class="text-2xl font-bold text-blue-950">{"Home"}</h1>
                <p class="text-sm text-gray-500">{"News and discussion from your chess community"}</p>
            </div>
            <TabBar<HomeTab> {tabs} current={*tab} on_select={on_tab} />
            <div class="mt-4">{body}</div>
            <NewPostModal is_open={*new_post_open} on_close={close_new_post} />
        </div>
    }
}
