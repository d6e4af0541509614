use yew::prelude::*;

use crate::pages::catalog::{CategoryFilter, ContentGrid};

#[function_component(Browse)]
pub fn browse() -> Html {
    html! {
        <div class="page browse-page">
            <header class="header">
                <h1>{ "Browse All Content" }</h1>
            </header>
            <CategoryFilter />
            <ContentGrid />
        </div>
    }
}
