#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub sidebar_open: bool,
    pub search_query: String,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleSidebar,
    SetSearchQuery(String),
    SetTheme(Theme),
}

impl UiState {
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            UiAction::SetSearchQuery(query) => self.search_query = query,
            UiAction::SetTheme(theme) => self.theme = theme,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;

    #[googletest::test]
    fn test_ui_actions() {
        let mut state = UiState::default();
        expect_that!(state.theme, eq(Theme::Dark));

        state.apply(UiAction::ToggleSidebar);
        expect_true!(state.sidebar_open);
        state.apply(UiAction::ToggleSidebar);
        expect_false!(state.sidebar_open);

        state.apply(UiAction::SetSearchQuery("drama".to_string()));
        expect_that!(state.search_query, eq("drama"));

        state.apply(UiAction::SetTheme(Theme::Light));
        expect_that!(state.theme.as_str(), eq("light"));
    }
}
