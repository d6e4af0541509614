use std::rc::Rc;

use juststream_api::{Category, ContentItem, ContentResponse};

/// Identifies one content request. Tokens are issued in increasing order and only the token
/// currently in flight may commit its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ContentState {
    /// Items accumulated across the pages of the current filter session
    pub items: Rc<Vec<ContentItem>>,
    pub categories: Vec<Category>,
    pub selected_content: Option<ContentItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
    /// Last page merged into `items`
    pub current_page: u32,
    pub category_filter: Option<String>,
    /// Incremented every time the list is reset by a filter change
    pub session: u64,
    pub in_flight: Option<RequestToken>,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            items: Rc::default(),
            categories: vec![],
            selected_content: None,
            loading: false,
            error: None,
            has_more: true,
            current_page: 1,
            category_filter: None,
            session: 0,
            in_flight: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentAction {
    LoadPending {
        token: RequestToken,
    },
    LoadFulfilled {
        token: RequestToken,
        response: ContentResponse,
    },
    LoadRejected {
        token: RequestToken,
        message: String,
    },
    CategoriesLoaded(Vec<Category>),
    SetCategoryFilter(Option<String>),
    SetSelectedContent(Option<ContentItem>),
    ClearError,
}

impl ContentState {
    pub fn apply(&mut self, action: ContentAction) {
        match action {
            ContentAction::LoadPending { token } => {
                self.loading = true;
                self.error = None;
                self.in_flight = Some(token);
            }
            ContentAction::LoadFulfilled { token, response } => {
                if !self.accepts(token) {
                    return;
                }
                self.loading = false;
                self.in_flight = None;
                if response.page == 1 {
                    self.items = Rc::new(response.items);
                } else {
                    Rc::make_mut(&mut self.items).extend(response.items);
                }
                self.has_more = response.has_more;
                self.current_page = response.page;
            }
            ContentAction::LoadRejected { token, message } => {
                if !self.accepts(token) {
                    return;
                }
                self.loading = false;
                self.in_flight = None;
                self.error = Some(message);
            }
            ContentAction::CategoriesLoaded(categories) => {
                self.categories = categories;
            }
            ContentAction::SetCategoryFilter(filter) => {
                self.category_filter = filter;
                self.current_page = 1;
                self.items = Rc::default();
                self.has_more = true;
                self.session += 1;
                // Whatever is still in flight belongs to the previous list
                self.in_flight = None;
                self.loading = false;
                self.error = None;
            }
            ContentAction::SetSelectedContent(content) => {
                self.selected_content = content;
            }
            ContentAction::ClearError => {
                self.error = None;
            }
        }
    }

    fn accepts(&self, token: RequestToken) -> bool {
        let accepted = self.in_flight == Some(token);
        if !accepted {
            log::debug!(
                "Dropping stale response for request {token:?}, in flight: {:?}",
                self.in_flight
            );
        }
        accepted
    }
}
