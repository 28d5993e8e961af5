//! # Actions
//!
//! Everything that can happen in Roster becomes an `Action`.
//! User clicks a hero row? That's `Action::ToggleHero(name)`.
//! User clicks a column header? That's `Action::SortBy(column)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the outer loop has to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::sort::SortColumn;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleHero(String),
    SortBy(SortColumn),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleHero(name) => {
            // Names outside the catalog never enter the team.
            if app.catalog.hero(&name).is_none() {
                debug!("Ignoring toggle for unknown hero '{}'", name);
                return Effect::None;
            }
            app.status_message = if app.selection.toggle(&name) {
                format!("Added {} (team size {})", name, app.selection.len())
            } else {
                format!("Removed {} (team size {})", name, app.selection.len())
            };
            Effect::None
        }
        Action::SortBy(column) => {
            app.sort.click(column);
            app.status_message = format!("Sorted by {} {}", app.sort.column, app.sort.indicator());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
