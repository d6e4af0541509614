use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use juststream_catalog::store::{Theme, UiAction};

use crate::app::Route;
use crate::context::use_store;

#[function_component(Header)]
pub fn header() -> Html {
    let store = use_store();
    let navigator = use_navigator();

    let toggle_sidebar = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(UiAction::ToggleSidebar.into()))
    };

    let oninput = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let query = e.target_unchecked_into::<HtmlInputElement>().value();
            store.dispatch(UiAction::SetSearchQuery(query).into());
        })
    };

    let onsubmit = {
        let query = store.ui.search_query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !query.trim().is_empty()
                && let Some(navigator) = &navigator
            {
                navigator.push(&Route::Search);
            }
        })
    };

    let toggle_theme = {
        let store = store.clone();
        let next = match store.ui.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        Callback::from(move |_: MouseEvent| store.dispatch(UiAction::SetTheme(next).into()))
    };

    html! {
        <header class="app-header">
            <button class="icon-button" aria-label="Toggle menu" onclick={toggle_sidebar}>
                { "\u{2630}" }
            </button>
            <Link<Route> to={Route::Home} classes="brand">{ "JustStream" }</Link<Route>>
            <form class="search-form" {onsubmit}>
                <input
                    type="search"
                    placeholder="Search titles, genres..."
                    value={store.ui.search_query.clone()}
                    {oninput}
                />
            </form>
            <button class="icon-button" aria-label="Toggle theme" onclick={toggle_theme}>
                { if store.ui.theme == Theme::Dark { "\u{263C}" } else { "\u{263E}" } }
            </button>
        </header>
    }
}

const NAV_ITEMS: [(&str, &str, Route); 3] = [
    ("\u{2302}", "Home", Route::Home),
    ("\u{25A6}", "Browse", Route::Browse),
    ("\u{2315}", "Search", Route::Search),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let store = use_store();
    let route = use_route::<Route>();

    if !store.ui.sidebar_open {
        return html! {};
    }

    html! {
        <nav class="sidebar">
            {
                NAV_ITEMS.iter().map(|(icon, label, target)| {
                    let active = route.as_ref() == Some(target);
                    html! {
                        <Link<Route> to={target.clone()} classes={classes!("nav-item", active.then_some("active"))}>
                            <span class="nav-icon">{ icon }</span>
                            <span>{ label }</span>
                        </Link<Route>>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let store = use_store();

    html! {
        <div class={classes!("app", store.ui.theme.as_str())}>
            <Header />
            <div class="app-body">
                <Sidebar />
                <main class="content">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
