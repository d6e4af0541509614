use yew::prelude::*;

use crate::context::use_store;
use crate::pages::catalog::{CategoryFilter, ContentGrid, Spinner};

#[function_component(Home)]
pub fn home() -> Html {
    let store = use_store();

    let waiting = store.content.loading && store.content.items.is_empty();
    html! {
        <div class="page home-page">
            <header class="header">
                <h1>{ "Featured Content" }</h1>
            </header>
            <CategoryFilter />
            if waiting && store.content.categories.is_empty() {
                <Spinner />
            }
            <ContentGrid />
        </div>
    }
}
