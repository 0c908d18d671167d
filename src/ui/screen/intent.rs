//! Intents for the user list screen.

use crate::ui::mvi::Intent;
use crate::ui::screen::state::ViewSettings;
use crate::users::UserRecord;

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    /// The one-shot fetch resolved. Ignored once the screen is ready.
    Loaded {
        users: Vec<UserRecord>,
        settings: ViewSettings,
    },
    FocusNext,
    FocusPrev,
    CycleCountry { forward: bool },
    CycleSort { forward: bool },
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    CyclePageSize { forward: bool },
    /// Move the keyboard cursor across page indicators.
    MoveCursor { forward: bool },
    /// A page indicator was activated.
    SelectPage(usize),
}

impl Intent for ScreenIntent {}
