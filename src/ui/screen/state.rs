//! State for the user list screen.

use crate::config::ViewConfig;
use crate::pipeline::{compute_visible_page, country_options, ViewState, VisiblePage};
use crate::ui::mvi::UiState;
use crate::ui::pagination::Pagination;
use crate::users::UserRecord;

/// Which control receives arrow keys and typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Country,
    Sort,
    Search,
    PageSize,
    Pages,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Country,
        Focus::Sort,
        Focus::Search,
        Focus::PageSize,
        Focus::Pages,
    ];

    pub fn next(self) -> Focus {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// View settings that come from configuration rather than interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub reset_page_on_change: bool,
}

impl From<&ViewConfig> for ViewSettings {
    fn from(config: &ViewConfig) -> Self {
        Self {
            page_size: config.page_size,
            page_size_options: config.page_size_options.clone(),
            reset_page_on_change: config.reset_page_on_change,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&ViewConfig::default())
    }
}

/// Everything the screen needs once users have arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyScreen {
    /// Raw data, written once on load and never modified.
    pub users: Vec<UserRecord>,
    pub view: ViewState,
    pub settings: ViewSettings,
    pub focus: Focus,
    /// Page indicator under the keyboard cursor, 1-based.
    pub page_cursor: usize,
}

impl ReadyScreen {
    pub fn new(users: Vec<UserRecord>, settings: ViewSettings) -> Self {
        Self {
            users,
            view: ViewState::new(settings.page_size),
            settings,
            focus: Focus::default(),
            page_cursor: 1,
        }
    }

    pub fn visible_page(&self) -> VisiblePage<'_> {
        compute_visible_page(&self.users, &self.view)
    }

    pub fn country_options(&self) -> Vec<&str> {
        country_options(&self.users)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.view.page, self.visible_page().total_pages)
    }

    /// Keyboard cursor over the page indicators, shown only while they have
    /// focus.
    pub fn focused_page_cursor(&self) -> Option<usize> {
        (self.focus == Focus::Pages).then_some(self.page_cursor)
    }
}

/// Screen lifecycle: no controls exist until the fetch resolves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Loading,
    Ready(ReadyScreen),
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&ReadyScreen> {
        match self {
            Self::Ready(screen) => Some(screen),
            Self::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_default() {
        assert_eq!(ScreenState::default(), ScreenState::Loading);
        assert!(ScreenState::default().ready().is_none());
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Country.next(), Focus::Sort);
        assert_eq!(Focus::Pages.next(), Focus::Country);
        assert_eq!(Focus::Country.prev(), Focus::Pages);
        assert_eq!(Focus::Search.prev(), Focus::Sort);
    }

    #[test]
    fn ready_screen_starts_from_configured_page_size() {
        let settings = ViewSettings {
            page_size: 50,
            page_size_options: vec![10, 50],
            reset_page_on_change: false,
        };
        let screen = ReadyScreen::new(Vec::new(), settings);
        assert_eq!(screen.view.page_size, 50);
        assert_eq!(screen.view.page, 1);
        assert_eq!(screen.pagination().total(), 1);
    }
}
