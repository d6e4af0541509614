//! Infinite scroll policy of the content grid.

use crate::store::ContentState;

/// A page request for the content list, filter-aware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    All { page: u32 },
    Category { category: String, page: u32 },
}

impl FetchRequest {
    pub fn for_filter(filter: Option<&str>, page: u32) -> Self {
        match filter {
            Some(category) => Self::Category {
                category: category.to_string(),
                page,
            },
            None => Self::All { page },
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            Self::All { page } | Self::Category { page, .. } => *page,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::All { .. } => None,
            Self::Category { category, .. } => Some(category),
        }
    }
}

/// Decides when the grid fetches pages.
///
/// One instance lives per mounted grid. The initial fetch is issued at most once per filter
/// session of that mount; every other page is requested when the sentinel becomes visible.
#[derive(Debug, Default)]
pub struct InfiniteScroll {
    started_session: Option<u64>,
}

impl InfiniteScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first page request of the current filter session, if it is still due.
    ///
    /// Nothing is requested while a load is running. A grid mounted over a list that already
    /// holds items continues from there instead of reloading it.
    pub fn initial_fetch(&mut self, state: &ContentState) -> Option<FetchRequest> {
        if self.started_session == Some(state.session) || state.loading {
            return None;
        }

        self.started_session = Some(state.session);
        state
            .items
            .is_empty()
            .then(|| FetchRequest::for_filter(state.category_filter.as_deref(), 1))
    }

    /// Returns the next page request when the sentinel is visible and another page may be loaded.
    /// Errors are not retried here, they wait for an explicit [`InfiniteScroll::retry`].
    /// An empty list is owned by the initial fetch.
    pub fn next_page(&self, state: &ContentState, sentinel_visible: bool) -> Option<FetchRequest> {
        let ready = sentinel_visible
            && state.has_more
            && !state.loading
            && state.error.is_none()
            && !state.items.is_empty()
            && self.started_session == Some(state.session);

        ready.then(|| {
            FetchRequest::for_filter(state.category_filter.as_deref(), state.current_page + 1)
        })
    }

    /// Request that repeats the last failed load of the list.
    pub fn retry(state: &ContentState) -> FetchRequest {
        let page = if state.items.is_empty() {
            1
        } else {
            state.current_page + 1
        };
        FetchRequest::for_filter(state.category_filter.as_deref(), page)
    }
}
