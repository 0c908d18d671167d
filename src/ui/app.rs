use crate::ui::layout::{layout_regions, pages_line_rect};
use crate::ui::mvi::Reducer;
use crate::ui::screen::{Focus, ScreenIntent, ScreenReducer, ScreenState, ViewSettings};
use crate::users::UserRecord;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Screen state (MVI pattern).
    screen: ScreenState,
    /// Applied when the fetched users arrive.
    settings: ViewSettings,
}

impl App {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            should_quit: false,
            size: None,
            screen: ScreenState::default(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    /// Focused control, or `None` while loading.
    pub fn focus(&self) -> Option<Focus> {
        self.screen.ready().map(|screen| screen.focus)
    }

    pub fn search_is_empty(&self) -> bool {
        self.screen
            .ready()
            .map(|screen| screen.view.search_text.is_empty())
            .unwrap_or(true)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_users_loaded(&mut self, users: Vec<UserRecord>) {
        tracing::info!(count = users.len(), "Users loaded");
        self.dispatch(ScreenIntent::Loaded {
            users,
            settings: self.settings.clone(),
        });
    }

    /// Dispatch an intent to the screen reducer.
    pub fn dispatch(&mut self, intent: ScreenIntent) {
        dispatch_mvi!(self, screen, ScreenReducer, intent);
    }

    /// Page selector callback target.
    pub fn on_page_selected(&mut self, page: usize) {
        tracing::debug!(page, "Page selected");
        self.dispatch(ScreenIntent::SelectPage(page));
    }

    /// Activate the indicator for `number` through the pagination control.
    pub fn activate_page(&mut self, number: usize) -> bool {
        let Some(pagination) = self.screen.ready().map(|screen| screen.pagination()) else {
            return false;
        };
        let mut selected = None;
        pagination.activate(number, |page| selected = Some(page));
        match selected {
            Some(page) => {
                self.on_page_selected(page);
                true
            }
            None => false,
        }
    }

    /// Activate the indicator under the keyboard cursor.
    pub fn activate_page_cursor(&mut self) -> bool {
        let Some(cursor) = self.screen.ready().map(|screen| screen.page_cursor) else {
            return false;
        };
        self.activate_page(cursor)
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        let Some(screen) = self.screen.ready() else {
            return;
        };
        let regions = layout_regions(Rect::new(0, 0, cols, rows));
        let line = pages_line_rect(regions.pages);
        let hit = screen.pagination().indicator_at(
            line,
            screen.focused_page_cursor(),
            mouse.column,
            mouse.row,
        );
        if let Some(number) = hit {
            self.activate_page(number);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn users(count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|i| UserRecord::new(i.to_string(), format!("user{i}"), "US", "2024-01-01"))
            .collect()
    }

    fn make_app(count: usize) -> App {
        let mut app = App::new(ViewSettings {
            page_size: 10,
            page_size_options: vec![10, 20],
            reset_page_on_change: false,
        });
        app.on_users_loaded(users(count));
        app
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn current_page(app: &App) -> usize {
        app.screen().ready().unwrap().view.page
    }

    #[test]
    fn starts_loading() {
        let app = App::new(ViewSettings::default());
        assert!(app.screen().is_loading());
        assert!(app.focus().is_none());
    }

    #[test]
    fn activating_another_page_selects_it() {
        let mut app = make_app(25);
        assert!(app.activate_page(2));
        assert_eq!(current_page(&app), 2);
    }

    #[test]
    fn activating_current_page_is_a_noop() {
        let mut app = make_app(25);
        assert!(!app.activate_page(1));
        assert_eq!(current_page(&app), 1);
    }

    #[test]
    fn activate_page_while_loading_does_nothing() {
        let mut app = App::new(ViewSettings::default());
        assert!(!app.activate_page(2));
        assert!(!app.activate_page_cursor());
    }

    #[test]
    fn click_on_indicator_selects_page() {
        let mut app = make_app(25);
        app.on_resize(100, 40);
        // pages block at y=34, line at y=35 starting x=2: " 1 " " " " 2 "
        app.on_mouse(click(7, 35));
        assert_eq!(current_page(&app), 2);
    }

    #[test]
    fn click_before_resize_is_ignored() {
        let mut app = make_app(25);
        app.on_mouse(click(7, 35));
        assert_eq!(current_page(&app), 1);
    }

    #[test]
    fn cursor_activation_uses_pagination() {
        let mut app = make_app(25);
        app.dispatch(ScreenIntent::MoveCursor { forward: true });
        assert!(app.activate_page_cursor());
        assert_eq!(current_page(&app), 2);
    }

    #[test]
    fn click_hits_scrolled_indicator() {
        let mut app = make_app(400);
        app.on_resize(100, 40);
        app.dispatch(ScreenIntent::FocusPrev);
        app.dispatch(ScreenIntent::MoveCursor { forward: false });
        // window is 22..=40, page 40 drawn at x=92..96 on the pages line
        app.on_mouse(click(93, 35));
        assert_eq!(current_page(&app), 40);
    }
}
