use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

pub mod browse;
pub mod catalog;
pub mod home;
pub mod search;
pub mod watch;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <h1>{ "Page not found" }</h1>
            <Link<Route> to={Route::Home}>{ "Back to home" }</Link<Route>>
        </div>
    }
}
