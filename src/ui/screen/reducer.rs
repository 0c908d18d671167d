//! Reducer for the user list screen.

use crate::pipeline::{cycle_page_size, shape, total_pages};
use crate::ui::mvi::Reducer;

use super::intent::ScreenIntent;
use super::state::{ReadyScreen, ScreenState};

/// Pure transitions for [`ScreenState`]. Rendering recomputes the visible
/// page from the resulting state; nothing derived is stored here.
pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state {
            ScreenState::Loading => match intent {
                ScreenIntent::Loaded { users, settings } => {
                    ScreenState::Ready(ReadyScreen::new(users, settings))
                }
                // Controls are absent while loading.
                _ => ScreenState::Loading,
            },
            ScreenState::Ready(screen) => ScreenState::Ready(reduce_ready(screen, intent)),
        }
    }
}

fn reduce_ready(mut screen: ReadyScreen, intent: ScreenIntent) -> ReadyScreen {
    match intent {
        ScreenIntent::Loaded { .. } => {
            tracing::debug!("Ignoring repeated load, raw data is already set");
            return screen;
        }
        ScreenIntent::FocusNext => {
            screen.focus = screen.focus.next();
            return screen;
        }
        ScreenIntent::FocusPrev => {
            screen.focus = screen.focus.prev();
            return screen;
        }
        ScreenIntent::CycleCountry { forward } => {
            let next = screen
                .view
                .country_filter
                .cycle(&screen.country_options(), forward);
            screen.view.country_filter = next;
        }
        ScreenIntent::CycleSort { forward } => {
            screen.view.sort_mode = screen.view.sort_mode.cycle(forward);
        }
        ScreenIntent::SearchInput(ch) => {
            screen.view.search_text.push(ch);
        }
        ScreenIntent::SearchBackspace => {
            if screen.view.search_text.pop().is_none() {
                return screen;
            }
        }
        ScreenIntent::SearchClear => {
            if screen.view.search_text.is_empty() {
                return screen;
            }
            screen.view.search_text.clear();
        }
        ScreenIntent::CyclePageSize { forward } => {
            screen.view.page_size = cycle_page_size(
                screen.view.page_size,
                &screen.settings.page_size_options,
                forward,
            );
        }
        ScreenIntent::MoveCursor { forward } => {
            let total = screen.pagination().total();
            let cursor = screen.page_cursor.clamp(1, total);
            screen.page_cursor = if forward {
                if cursor >= total {
                    1
                } else {
                    cursor + 1
                }
            } else if cursor <= 1 {
                total
            } else {
                cursor - 1
            };
            return screen;
        }
        ScreenIntent::SelectPage(page) => {
            let total = screen.pagination().total();
            if page == 0 || page > total {
                tracing::debug!(page, total, "Ignoring selection of a page that does not exist");
                return screen;
            }
            screen.view.page = page;
            screen.page_cursor = page;
            return screen;
        }
    }

    after_view_change(screen)
}

/// Filter, sort, search or page size changed.
///
/// The current page is left alone unless `reset_page_on_change` is set, so
/// it can point past the last page. The cursor is kept on a real indicator.
fn after_view_change(mut screen: ReadyScreen) -> ReadyScreen {
    if screen.settings.reset_page_on_change {
        screen.view.page = 1;
    }
    let matched = shape(&screen.users, &screen.view).len();
    let total = total_pages(matched, screen.view.page_size);
    screen.page_cursor = screen.view.page.clamp(1, total);
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{CountryFilter, SortMode};
    use crate::ui::screen::state::{Focus, ViewSettings};
    use crate::users::UserRecord;

    fn users(count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|i| {
                UserRecord::new(
                    i.to_string(),
                    format!("user{i}"),
                    if i % 2 == 0 { "US" } else { "DE" },
                    "2024-01-01",
                )
            })
            .collect()
    }

    fn settings(reset: bool) -> ViewSettings {
        ViewSettings {
            page_size: 10,
            page_size_options: vec![10, 20],
            reset_page_on_change: reset,
        }
    }

    fn ready(count: usize, reset: bool) -> ScreenState {
        ScreenReducer::reduce(
            ScreenState::Loading,
            ScreenIntent::Loaded {
                users: users(count),
                settings: settings(reset),
            },
        )
    }

    fn screen(state: &ScreenState) -> &ReadyScreen {
        state.ready().expect("expected Ready")
    }

    #[test]
    fn loading_ignores_everything_but_loaded() {
        let state = ScreenReducer::reduce(ScreenState::Loading, ScreenIntent::FocusNext);
        assert!(state.is_loading());
        let state = ScreenReducer::reduce(state, ScreenIntent::SearchInput('a'));
        assert!(state.is_loading());
    }

    #[test]
    fn second_load_is_ignored() {
        let state = ready(3, false);
        let state = ScreenReducer::reduce(
            state,
            ScreenIntent::Loaded {
                users: users(30),
                settings: settings(false),
            },
        );
        assert_eq!(screen(&state).users.len(), 3);
    }

    #[test]
    fn cursor_wraps_across_indicators() {
        let state = ready(25, false);
        assert_eq!(screen(&state).page_cursor, 1);
        let state = ScreenReducer::reduce(state, ScreenIntent::MoveCursor { forward: false });
        assert_eq!(screen(&state).page_cursor, 3);
        let state = ScreenReducer::reduce(state, ScreenIntent::MoveCursor { forward: true });
        assert_eq!(screen(&state).page_cursor, 1);
    }

    #[test]
    fn select_page_rejects_missing_pages() {
        let state = ready(25, false);
        let state = ScreenReducer::reduce(state, ScreenIntent::SelectPage(4));
        assert_eq!(screen(&state).view.page, 1);
        let state = ScreenReducer::reduce(state, ScreenIntent::SelectPage(0));
        assert_eq!(screen(&state).view.page, 1);
        let state = ScreenReducer::reduce(state, ScreenIntent::SelectPage(3));
        assert_eq!(screen(&state).view.page, 3);
        assert_eq!(screen(&state).page_cursor, 3);
    }

    #[test]
    fn page_is_kept_when_filter_shrinks_results() {
        let state = ready(25, false);
        let state = ScreenReducer::reduce(state, ScreenIntent::SelectPage(3));
        let state = ScreenReducer::reduce(state, ScreenIntent::CycleCountry { forward: false });
        let screen = screen(&state);
        assert_eq!(
            screen.view.country_filter,
            CountryFilter::Only("DE".to_string())
        );
        assert_eq!(screen.view.page, 3);
        assert_eq!(screen.page_cursor, 2);
        assert!(screen.visible_page().records.is_empty());
    }

    #[test]
    fn page_resets_when_configured() {
        let state = ready(25, true);
        let state = ScreenReducer::reduce(state, ScreenIntent::SelectPage(3));
        let state = ScreenReducer::reduce(state, ScreenIntent::SearchInput('1'));
        assert_eq!(screen(&state).view.page, 1);
    }

    #[test]
    fn search_editing() {
        let state = ready(5, false);
        let state = ScreenReducer::reduce(state, ScreenIntent::SearchInput('u'));
        let state = ScreenReducer::reduce(state, ScreenIntent::SearchInput('3'));
        assert_eq!(screen(&state).view.search_text, "u3");
        let state = ScreenReducer::reduce(state, ScreenIntent::SearchBackspace);
        assert_eq!(screen(&state).view.search_text, "u");
        let state = ScreenReducer::reduce(state, ScreenIntent::SearchClear);
        assert!(screen(&state).view.search_text.is_empty());
    }

    #[test]
    fn selectors_cycle() {
        let state = ready(4, false);
        let state = ScreenReducer::reduce(state, ScreenIntent::CycleCountry { forward: true });
        assert_eq!(
            screen(&state).view.country_filter,
            CountryFilter::Only("US".to_string())
        );
        let state = ScreenReducer::reduce(state, ScreenIntent::CycleSort { forward: true });
        assert_eq!(screen(&state).view.sort_mode, SortMode::CreationTimeAscending);
        let state = ScreenReducer::reduce(state, ScreenIntent::CyclePageSize { forward: true });
        assert_eq!(screen(&state).view.page_size, 20);
    }

    #[test]
    fn focus_moves_without_touching_view() {
        let state = ready(4, false);
        let before = screen(&state).view.clone();
        let state = ScreenReducer::reduce(state, ScreenIntent::FocusNext);
        assert_eq!(screen(&state).focus, Focus::Sort);
        assert_eq!(screen(&state).view, before);
    }
}
