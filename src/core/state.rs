//! # Application State
//!
//! Core business state for Roster. Domain logic only; presentation state
//! (cursor, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn Catalog>   // hero data source (read-only)
//! ├── selection: Selection        // the current team
//! ├── sort: SortState             // active column + direction
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::selection::Selection;
use crate::core::sort::SortState;

pub struct App {
    pub catalog: Arc<dyn Catalog>,
    pub selection: Selection,
    pub sort: SortState,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<dyn Catalog>, sort: SortState) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            sort,
            status_message: String::from("Click on heroes to add/remove them to/from your team."),
        }
    }

    pub fn is_picked(&self, name: &str) -> bool {
        self.selection.contains(name)
    }
}
