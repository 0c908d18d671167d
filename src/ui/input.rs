use crate::ui::app::App;
use crate::ui::screen::{Focus, ScreenIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let Some(focus) = app.focus() else {
        // Loading: no controls yet.
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            app.request_quit();
        }
        return;
    };

    match key.code {
        KeyCode::Tab => {
            app.dispatch(ScreenIntent::FocusNext);
            return;
        }
        KeyCode::BackTab => {
            app.dispatch(ScreenIntent::FocusPrev);
            return;
        }
        _ => {}
    }

    if focus == Focus::Search {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch(ScreenIntent::SearchInput(ch));
            }
            KeyCode::Backspace => app.dispatch(ScreenIntent::SearchBackspace),
            KeyCode::Esc if !app.search_is_empty() => app.dispatch(ScreenIntent::SearchClear),
            KeyCode::Esc => app.request_quit(),
            _ => {}
        }
        return;
    }

    let forward = match key.code {
        KeyCode::Right => Some(true),
        KeyCode::Left => Some(false),
        _ => None,
    };

    if let Some(forward) = forward {
        let intent = match focus {
            Focus::Country => ScreenIntent::CycleCountry { forward },
            Focus::Sort => ScreenIntent::CycleSort { forward },
            Focus::PageSize => ScreenIntent::CyclePageSize { forward },
            Focus::Pages => ScreenIntent::MoveCursor { forward },
            Focus::Search => return,
        };
        app.dispatch(intent);
        return;
    }

    match key.code {
        KeyCode::Enter if focus == Focus::Pages => {
            app.activate_page_cursor();
        }
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
