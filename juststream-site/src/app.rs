use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::StoreProvider;
use crate::layout::Layout;
use crate::pages::NotFound;
use crate::pages::browse::Browse;
use crate::pages::home::Home;
use crate::pages::search::SearchResults;
use crate::pages::watch::Watch;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/browse")]
    Browse,

    #[at("/watch/:id")]
    Watch { id: String },

    #[at("/search")]
    Search,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Browse => html! { <Browse /> },
        Route::Watch { id } => html! { <Watch {id} /> },
        Route::Search => html! { <SearchResults /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <StoreProvider>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </StoreProvider>
    }
}
