//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps in `poll` and only redraws after an
//! event (including terminal resize). All pending events are drained before
//! the next draw.
//!
//! ## Cursor
//!
//! The keyboard cursor is an index into the full sorted order, so it walks
//! down the left table and continues into the right one. When the sort
//! changes, the cursor follows the hero it was on.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::view::view;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Cursor position in the full sorted order.
    pub cursor: usize,
    pub left_table: TableState,
    pub right_table: TableState,
    pub summary: ScrollViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            left_table: TableState::default(),
            right_table: TableState::default(),
            summary: ScrollViewState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig, catalog: Arc<dyn Catalog>) -> std::io::Result<()> {
    let mut app = App::new(catalog, config.sort);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let frame_area = terminal.get_frame().area();
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            debug!("Event: {:?}", event);
            if let Some(action) = dispatch(event, &app, &mut tui, frame_area)
                && apply(&mut app, &mut tui, action) == Effect::Quit
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Exiting with team of {}", app.selection.len());
    ratatui::restore();
    Ok(())
}

/// Handle TUI-local events and translate the rest into core actions.
fn dispatch(event: TuiEvent, app: &App, tui: &mut TuiState, frame_area: Rect) -> Option<Action> {
    let model = view(app);
    let len = model.len();
    let left_len = model.left.len();

    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::SortBy(column) => Some(Action::SortBy(column)),
        TuiEvent::Toggle => model
            .row(tui.cursor)
            .map(|row| Action::ToggleHero(row.hero.name.clone())),
        TuiEvent::MouseClick(x, y) => match ui::hit_test(frame_area, x, y, &model, tui)? {
            Hit::Header(column) => Some(Action::SortBy(column)),
            Hit::Row(index) => {
                tui.cursor = index;
                model
                    .row(index)
                    .map(|row| Action::ToggleHero(row.hero.name.clone()))
            }
        },
        TuiEvent::CursorUp => {
            tui.cursor = tui.cursor.saturating_sub(1);
            None
        }
        TuiEvent::CursorDown => {
            if tui.cursor + 1 < len {
                tui.cursor += 1;
            }
            None
        }
        TuiEvent::CursorLeft => {
            if tui.cursor >= left_len {
                tui.cursor -= left_len;
            }
            None
        }
        TuiEvent::CursorRight => {
            if tui.cursor < left_len && len > left_len {
                tui.cursor = (tui.cursor + left_len).min(len - 1);
            }
            None
        }
        TuiEvent::SummaryPageUp => {
            tui.summary.scroll_page_up();
            None
        }
        TuiEvent::SummaryPageDown => {
            tui.summary.scroll_page_down();
            None
        }
        TuiEvent::Resize => None,
    }
}

/// Run an action through the core, keeping the cursor on the same hero.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let focused = view(app)
        .row(tui.cursor)
        .map(|row| row.hero.name.clone());

    let effect = update(app, action);

    if let Some(name) = focused
        && let Some(index) = view(app).position(&name)
    {
        tui.cursor = index;
    }
    effect
}
