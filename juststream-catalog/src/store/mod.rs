//! Application state, split in three independently addressable slices.
//!
//! Every slice is a plain struct with a synchronous `apply` reducer. [`AppState`] groups them and
//! routes an [`Action`] to the slice it addresses. Asynchronous work lives in
//! [`crate::actions`], which only talks to the store through dispatched actions.

mod content;
mod player;
mod ui;

pub use content::{ContentAction, ContentState, RequestToken};
pub use player::{MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE, PlayerAction, PlayerState};
pub use ui::{Theme, UiAction, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub content: ContentState,
    pub player: PlayerState,
    pub ui: UiState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Content(ContentAction),
    Player(PlayerAction),
    Ui(UiAction),
}

impl From<ContentAction> for Action {
    fn from(action: ContentAction) -> Self {
        Self::Content(action)
    }
}

impl From<PlayerAction> for Action {
    fn from(action: PlayerAction) -> Self {
        Self::Player(action)
    }
}

impl From<UiAction> for Action {
    fn from(action: UiAction) -> Self {
        Self::Ui(action)
    }
}

impl AppState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Content(action) => self.content.apply(action),
            Action::Player(action) => self.player.apply(action),
            Action::Ui(action) => self.ui.apply(action),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;

    #[googletest::test]
    fn test_actions_only_touch_their_slice() {
        let mut state = AppState::default();

        state.apply(UiAction::SetSearchQuery("comedy".to_string()).into());
        state.apply(PlayerAction::SetVolume(0.25).into());
        state.apply(ContentAction::SetCategoryFilter(Some("Comedy".to_string())).into());

        expect_that!(state.ui.search_query, eq("comedy"));
        expect_that!(state.player.volume, eq(0.25));
        expect_that!(state.content.category_filter, some(eq("Comedy")));

        let mut expected = AppState::default();
        expected.ui.search_query = "comedy".to_string();
        expected.player.volume = 0.25;
        expected.content.category_filter = Some("Comedy".to_string());
        expected.content.session = 1;
        expect_that!(state, eq(&expected));
    }

    #[googletest::test]
    fn test_playback_updates_share_the_loaded_list() {
        let mut state = AppState::default();
        state.apply(
            ContentAction::LoadPending {
                token: RequestToken(1),
            }
            .into(),
        );
        state.apply(
            ContentAction::LoadFulfilled {
                token: RequestToken(1),
                response: juststream_api::ContentResponse {
                    items: crate::generator::Catalog::new(5, 20).slice(0, 20),
                    page: 1,
                    has_more: false,
                    total: 20,
                },
            }
            .into(),
        );

        let before = state.clone();
        state.apply(PlayerAction::SetCurrentTime(12.5).into());
        state.apply(UiAction::ToggleSidebar.into());

        expect_true!(std::rc::Rc::ptr_eq(&before.content.items, &state.content.items));
        expect_that!(state.content.items.len(), eq(20));
    }
}
