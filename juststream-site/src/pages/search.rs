use yew::prelude::*;

use juststream_catalog::search::search;

use crate::context::use_store;
use crate::pages::catalog::ContentCard;

/// Filters the items loaded so far against the header's search query.
#[function_component(SearchResults)]
pub fn search_results() -> Html {
    let store = use_store();
    let query = store.ui.search_query.trim();

    if query.is_empty() {
        return html! {
            <div class="page search-page">
                <p class="empty">{ "Type in the search box to find something to watch." }</p>
            </div>
        };
    }

    let results = search(&store.content.items, query);
    html! {
        <div class="page search-page">
            <header class="header">
                <h1>{ format!("Results for \"{query}\"") }</h1>
                <span>{ format!("{} found", results.len()) }</span>
            </header>
            if results.is_empty() {
                <p class="empty">{ "Nothing matched. Only content loaded so far is searched." }</p>
            } else {
                <div class="content-grid">
                    {
                        results.into_iter().map(|item| html! {
                            <ContentCard key={item.id.clone()} item={item.clone()} />
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
