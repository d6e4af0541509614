//! Building blocks shared by the listing pages.

use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use juststream_api::ContentItem;
use juststream_catalog::{
    format::format_duration,
    pagination::InfiniteScroll,
    store::ContentAction,
};

use crate::app::Route;
use crate::browser::VisibilityObserver;
use crate::context::{use_services, use_store};

const SKELETON_CARDS: usize = 12;
const PREFETCH_MARGIN: &str = "200px";

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! { <div class="spinner" aria-label="Loading"></div> }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<MouseEvent>>,
}

#[function_component(ErrorMessage)]
pub fn error_message(ErrorMessageProps { message, on_retry }: &ErrorMessageProps) -> Html {
    html! {
        <div class="error-message">
            <p>{ message }</p>
            if let Some(on_retry) = on_retry {
                <button class="button" onclick={on_retry.clone()}>{ "Try again" }</button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentCardProps {
    pub item: ContentItem,
}

#[function_component(ContentCard)]
pub fn content_card(ContentCardProps { item }: &ContentCardProps) -> Html {
    let navigator = use_navigator();

    let onclick = {
        let id = item.id.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Watch { id: id.clone() });
            }
        })
    };

    html! {
        <div {onclick} class="card content-card">
            <img src={item.thumbnail.clone()} alt={item.title.clone()} loading="lazy" />
            <span class="badge">{ item.content_type.as_str() }</span>
            <div class="details">
                <h3>{ &item.title }</h3>
                <span>
                    { format!("{} \u{2022} {} \u{2022} {}", item.year, item.rating, format_duration(item.duration)) }
                </span>
            </div>
        </div>
    }
}

#[function_component(CardSkeleton)]
fn card_skeleton() -> Html {
    html! { <div class="card content-card skeleton"></div> }
}

/// Genre selector for the shared list. Selecting a genre, or "All", resets the list.
#[function_component(CategoryFilter)]
pub fn category_filter() -> Html {
    let store = use_store();
    let services = use_services();

    {
        let store = store.clone();
        let services = services.clone();
        use_effect_with((), move |_| {
            if store.content.categories.is_empty() {
                services.spawn_load_categories(&store, false);
            }
            || ()
        });
    }

    let select = |filter: Option<String>| {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(ContentAction::SetCategoryFilter(filter.clone()).into());
        })
    };

    let selected = store.content.category_filter.as_deref();
    html! {
        <div class="category-filter">
            <button
                class={classes!("chip", selected.is_none().then_some("active"))}
                onclick={select(None)}
            >
                { "All" }
            </button>
            {
                store.content.categories.iter().map(|category| {
                    let active = selected == Some(category.name.as_str());
                    html! {
                        <button
                            key={category.id.clone()}
                            class={classes!("chip", active.then_some("active"))}
                            onclick={select(Some(category.name.clone()))}
                        >
                            { &category.name }
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

/// The shared content list with infinite scrolling.
#[function_component(ContentGrid)]
pub fn content_grid() -> Html {
    let store = use_store();
    let services = use_services();
    let scroll = use_mut_ref(InfiniteScroll::new);
    let sentinel = use_node_ref();
    let sentinel_visible = use_state_eq(|| false);
    let content = &store.content;
    let blocked = content.error.is_some() && content.items.is_empty();
    let sentinel_rendered = content.has_more && !blocked;

    {
        let store = store.clone();
        let services = services.clone();
        let scroll = scroll.clone();
        use_effect_with(
            (content.session, content.loading, content.items.is_empty()),
            move |_| {
                if let Some(request) = scroll.borrow_mut().initial_fetch(&store.content) {
                    services.spawn_load(&store, request);
                }
                || ()
            },
        );
    }

    {
        let store = store.clone();
        let services = services.clone();
        let scroll = scroll.clone();
        use_effect_with(
            (
                *sentinel_visible,
                content.session,
                content.current_page,
                content.loading,
                content.has_more,
                content.error.is_some(),
            ),
            move |(visible, ..)| {
                if let Some(request) = scroll.borrow().next_page(&store.content, *visible) {
                    services.spawn_load(&store, request);
                }
                || ()
            },
        );
    }

    {
        let sentinel = sentinel.clone();
        let sentinel_visible = sentinel_visible.clone();
        use_effect_with(sentinel_rendered, move |rendered| {
            let observer = if *rendered {
                sentinel.cast::<Element>().and_then(|element| {
                    let visible = sentinel_visible.clone();
                    VisibilityObserver::observe(&element, PREFETCH_MARGIN, move |v| visible.set(v))
                        .inspect_err(|e| log::error!("Infinite scroll is unavailable: {e:#}"))
                        .ok()
                })
            } else {
                sentinel_visible.set(false);
                None
            };
            move || drop(observer)
        });
    }

    let retry = {
        let store = store.clone();
        let services = services.clone();
        Callback::from(move |_: MouseEvent| {
            services.spawn_load(&store, InfiniteScroll::retry(&store.content));
        })
    };

    if let Some(error) = &content.error
        && blocked
    {
        return html! { <ErrorMessage message={error.clone()} on_retry={retry} /> };
    }

    let empty = !content.loading && content.items.is_empty() && !content.has_more;
    html! {
        <div class="content-grid-container">
            <div class="content-grid">
                {
                    content.items.iter().map(|item| html! {
                        <ContentCard key={item.id.clone()} item={item.clone()} />
                    }).collect::<Html>()
                }
                if content.loading {
                    { (0..SKELETON_CARDS).map(|_| html! { <CardSkeleton /> }).collect::<Html>() }
                }
            </div>
            if empty {
                <p class="empty">{ "No content found." }</p>
            }
            if let Some(error) = &content.error {
                <ErrorMessage message={error.clone()} on_retry={retry} />
            }
            if sentinel_rendered {
                <div class="sentinel" ref={sentinel}></div>
            }
        </div>
    }
}
