//! Runtime: terminal lifecycle and the event loop.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and periodic ticks.
//! - Route events through the main view and execute returned `Effect`s.
//!
//! A dedicated task blocks on `crossterm::event` polling and forwards events
//! over a channel, keeping `poll()` and `read()` together so resize delivery
//! stays reliable across terminals.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use navrail_types::{Effect, Msg};
use navrail_util::UserPreferences;
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use std::time::Duration;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::app::App;
use crate::ui::main_component::MainView;

/// Spawn a dedicated task that blocks on terminal input and forwards
/// `crossterm` events over a channel. Mouse-move events are dropped at the
/// source; nothing in the UI tracks hover.
async fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let poll_window = Duration::from_millis(16);
        loop {
            match event::poll(poll_window) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        let is_mouse_move = event
                            .as_mouse_event()
                            .is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                        if is_mouse_move {
                            continue;
                        }
                        if sender.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!("Failed to read event: {}", error);
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!("Failed to poll for events: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame, rebuilding the focus tree first so structure changes are
/// reflected.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        app.focus.first();
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes effects reported by the components. Returns `true` when the
/// application should exit.
fn process_effects(app: &mut App, effects: &mut Vec<Effect>) -> bool {
    let mut exit = false;
    for effect in effects.drain(..) {
        match effect {
            Effect::Navigate(path) => app.navigate(path),
            Effect::Exit => exit = true,
        }
    }
    exit
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producer, runs the event loop, and performs cleanup on exit.
pub async fn run_app(preferences: UserPreferences, start_path: String) -> Result<()> {
    let mut input_receiver = spawn_input_task().await;
    let mut main_view = MainView::new();
    let mut app = App::new(preferences, start_path);

    // Seed the viewport before initialization so the compact breakpoint is
    // known from the first frame.
    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }

    // Initialization completes before any user event is dispatched.
    main_view.init(&mut app)?;

    let mut terminal = setup_terminal()?;
    let mut effects: Vec<Effect> = Vec::with_capacity(4);

    let mut ticker = time::interval(Duration::from_millis(500));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    // Track the last known terminal size to synthesize Resize messages when
    // a terminal fails to emit them reliably.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key_event))
                        if key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        break;
                    }
                    Some(event) => {
                        effects.extend(handle_input_event(&mut app, &mut main_view, event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                needs_render = !effects.is_empty();
            }

            _ = signal::ctrl_c() => break,
        }

        // Fallback: detect terminal size changes even without an explicit
        // Resize event.
        if let Ok((width, height)) = crossterm::terminal::size() {
            if last_size != Some((width, height)) {
                last_size = Some((width, height));
                effects.extend(main_view.handle_message(&mut app, Msg::Resize(width, height)));
                needs_render = true;
            }
        }

        if process_effects(&mut app, &mut effects) {
            break;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
