use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::screen::ViewSettings;
use crate::ui::terminal_guard::setup_terminal;
use crate::users::UserSource;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Start the one-shot user fetch.
///
/// On success the users are posted as [`AppEvent::UsersLoaded`]. On failure
/// nothing is posted and the screen stays on its loading state.
pub fn spawn_fetch(
    handle: &Handle,
    source: Arc<dyn UserSource>,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    handle.spawn(async move {
        match source.fetch_users().await {
            Ok(users) => {
                if events.send(AppEvent::UsersLoaded(users)).is_err() {
                    tracing::debug!("Users arrived after the screen closed");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch users");
            }
        }
    })
}

pub fn run(source: Arc<dyn UserSource>, settings: ViewSettings, handle: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(settings);
    let events = EventHandler::new(tick_rate);
    let fetch = spawn_fetch(handle, source, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, app.screen()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::UsersLoaded(users)) => app.on_users_loaded(users),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if !fetch.is_finished() {
        tracing::debug!("Cancelling pending user fetch");
    }
    fetch.abort();
    drop(guard);
    Ok(())
}
