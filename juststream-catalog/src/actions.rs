//! Asynchronous content actions.
//!
//! Each load runs in three phases against a dispatch callback: `LoadPending` before the request,
//! then `LoadFulfilled` or `LoadRejected` once the service answers. Every load carries a fresh
//! [`RequestToken`], so a response that arrives after a newer request was issued is dropped by
//! the content reducer.

use std::cell::Cell;

use juststream_api::{Category, ContentItem, api::content};

use crate::{
    pagination::FetchRequest,
    service::ContentService,
    store::{ContentAction, ContentState, RequestToken},
};

pub struct ContentActions<S> {
    service: S,
    last_token: Cell<u64>,
    categories_loading: Cell<bool>,
}

impl<S: ContentService> ContentActions<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            last_token: Cell::new(0),
            categories_loading: Cell::new(false),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn issue_token(&self) -> RequestToken {
        let token = self.last_token.get() + 1;
        self.last_token.set(token);
        RequestToken(token)
    }

    pub async fn load(&self, request: FetchRequest, dispatch: impl Fn(ContentAction)) {
        let token = self.issue_token();
        log::debug!("Loading {request:?} as request {token:?}");
        dispatch(ContentAction::LoadPending { token });

        let result = match request {
            FetchRequest::All { page } => {
                self.service
                    .fetch_content(&content::get::Query { page })
                    .await
            }
            FetchRequest::Category { category, page } => {
                self.service
                    .fetch_content_by_category(&content::category::get::Query { category, page })
                    .await
            }
        };

        match result {
            Ok(response) => dispatch(ContentAction::LoadFulfilled { token, response }),
            Err(e) => {
                if e.is_retryable() {
                    log::warn!("Request {token:?} failed, waiting for a retry: {e}");
                } else {
                    log::error!("Failed to load content for request {token:?}: {e}");
                }
                dispatch(ContentAction::LoadRejected {
                    token,
                    message: e.to_string(),
                });
            }
        }
    }

    pub async fn load_content(&self, page: u32, dispatch: impl Fn(ContentAction)) {
        self.load(FetchRequest::All { page }, dispatch).await
    }

    pub async fn load_content_by_category(
        &self,
        category: &str,
        page: u32,
        dispatch: impl Fn(ContentAction),
    ) {
        let request = FetchRequest::Category {
            category: category.to_string(),
            page,
        };
        self.load(request, dispatch).await
    }

    /// Derives the category list from the first unfiltered page.
    ///
    /// Cached categories are kept unless `force` is set. Only one derivation runs at a time.
    pub async fn load_categories(
        &self,
        state: &ContentState,
        force: bool,
        dispatch: impl Fn(ContentAction),
    ) {
        if (!force && !state.categories.is_empty()) || self.categories_loading.get() {
            return;
        }

        self.categories_loading.set(true);
        let result = self
            .service
            .fetch_content(&content::get::Query { page: 1 })
            .await;
        self.categories_loading.set(false);

        match result {
            Ok(response) => {
                let categories = derive_categories(&response.items);
                log::debug!("Derived {} categories", categories.len());
                dispatch(ContentAction::CategoriesLoaded(categories));
            }
            Err(e) => {
                log::warn!("Failed to load categories: {e}");
            }
        }
    }
}

/// Unique genres of `items`, in the order they are first seen.
pub fn derive_categories(items: &[ContentItem]) -> Vec<Category> {
    let mut categories: Vec<Category> = vec![];
    for genre in items.iter().flat_map(|item| &item.genres) {
        if !categories.iter().any(|c| &c.name == genre) {
            categories.push(Category::from_genre(genre));
        }
    }
    categories
}
