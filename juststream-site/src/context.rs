use std::{ops::Deref, rc::Rc, time::Duration};

use async_trait::async_trait;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use juststream_catalog::{
    CatalogConfig,
    actions::ContentActions,
    pagination::FetchRequest,
    service::{Latency, MockContentService},
    store::{Action, AppState, ContentAction},
};

const CATALOG_CONFIG: &str = include_str!("../catalog.toml");

/// Simulated network delay backed by browser timers.
pub struct TimerLatency;

#[async_trait(?Send)]
impl Latency for TimerLatency {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

pub type Catalog = ContentActions<MockContentService<TimerLatency>>;

/// Application-wide state shared by every page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    state: AppState,
}

impl Deref for Store {
    type Target = AppState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Reducible for Store {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.state.apply(action);
        Rc::new(next)
    }
}

pub type StoreHandle = UseReducerHandle<Store>;

/// Services created once per application instance.
#[derive(Clone)]
pub struct Services {
    pub catalog: Rc<Catalog>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl Services {
    fn new() -> Self {
        let config = CatalogConfig::from_toml(CATALOG_CONFIG).unwrap_or_else(|e| {
            log::error!("Invalid embedded catalog configuration, using defaults: {e}");
            CatalogConfig::default()
        });
        let service = MockContentService::new(config, TimerLatency);
        Self {
            catalog: Rc::new(ContentActions::new(service)),
        }
    }

    /// Runs a list load in the background, committing its result to `store`.
    pub fn spawn_load(&self, store: &StoreHandle, request: FetchRequest) {
        let catalog = self.catalog.clone();
        let dispatch = content_dispatcher(store);
        spawn_local(async move { catalog.load(request, dispatch).await });
    }

    pub fn spawn_load_categories(&self, store: &StoreHandle, force: bool) {
        let catalog = self.catalog.clone();
        let state = store.content.clone();
        let dispatch = content_dispatcher(store);
        spawn_local(async move { catalog.load_categories(&state, force, dispatch).await });
    }
}

pub fn content_dispatcher(store: &StoreHandle) -> impl Fn(ContentAction) + 'static {
    let dispatcher = store.dispatcher();
    move |action| dispatcher.dispatch(action.into())
}

#[hook]
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().expect("Store context not found")
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context not found")
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_reducer(Store::default);
    let services = use_memo((), |_| Services::new());

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <ContextProvider<StoreHandle> context={store}>
                { props.children.clone() }
            </ContextProvider<StoreHandle>>
        </ContextProvider<Services>>
    }
}
