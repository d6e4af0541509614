use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use juststream_api::{ContentItem, api::content::id::get as by_id};
use juststream_catalog::{
    format::format_duration,
    lookup::LatestLookup,
    store::{ContentAction, PlayerAction},
};

use crate::context::{use_services, use_store};
use crate::pages::catalog::{ErrorMessage, Spinner};
use crate::player::VideoPlayer;

#[derive(Clone, PartialEq)]
enum Lookup {
    Loading,
    Found(Rc<ContentItem>),
    Missing,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct WatchProps {
    pub id: String,
}

#[function_component(Watch)]
pub fn watch(WatchProps { id }: &WatchProps) -> Html {
    let store = use_store();
    let services = use_services();
    let navigator = use_navigator();
    let lookup = use_state(|| Lookup::Loading);
    let attempt = use_state(|| 0u32);
    let latest = use_memo((), |_| LatestLookup::new());

    {
        let lookup = lookup.clone();
        let dispatcher = store.dispatcher();
        use_effect_with((id.clone(), *attempt), move |(content_id, _)| {
            lookup.set(Lookup::Loading);

            let content_id = content_id.clone();
            spawn_local(async move {
                // A newer id or retry owns the page now
                let Some(result) = latest.fetch(services.catalog.service(), &content_id).await
                else {
                    return;
                };

                match result {
                    Ok(by_id::Response { item: Some(item) }) => {
                        dispatcher.dispatch(PlayerAction::PlayContent(item.clone()).into());
                        dispatcher
                            .dispatch(ContentAction::SetSelectedContent(Some(item.clone())).into());
                        lookup.set(Lookup::Found(Rc::new(item)));
                    }
                    Ok(by_id::Response { item: None }) => {
                        log::warn!("Content {content_id} does not exist");
                        lookup.set(Lookup::Missing);
                    }
                    Err(e) => {
                        log::error!("Failed to look up content {content_id}: {e}");
                        lookup.set(Lookup::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let go_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    let body = match &*lookup {
        Lookup::Loading => html! { <Spinner /> },
        Lookup::Missing => html! { <ErrorMessage message="Content not found" {on_retry} /> },
        Lookup::Failed(message) => html! { <ErrorMessage message={message.clone()} {on_retry} /> },
        Lookup::Found(item) => html! {
            <>
                <VideoPlayer />
                <section class="content-details">
                    <h1>{ &item.title }</h1>
                    <div class="meta">
                        <span>{ item.year }</span>
                        <span class="rating">{ &item.rating }</span>
                        <span>{ format_duration(item.duration) }</span>
                        <span class="badge">{ item.content_type.as_str() }</span>
                    </div>
                    <div class="genres">
                        { item.genres.iter().map(|genre| html! { <span class="chip">{ genre }</span> }).collect::<Html>() }
                    </div>
                    <p>{ &item.description }</p>
                </section>
            </>
        },
    };

    html! {
        <div class="page watch-page">
            <button class="button back" onclick={go_back}>{ "\u{2190} Back" }</button>
            { body }
        </div>
    }
}
