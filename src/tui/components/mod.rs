//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top line with status message and key hints
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! - `HeroTable`: one half of the sorted catalog; borrows a `TableState`
//! - `TeamSummary`: team size and feature counts; borrows a `ScrollViewState`
//!
//! The persistent half lives in `TuiState`; the wrapper is rebuilt every
//! frame from the render model.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor parameters), not
//! by reaching into `App`. This keeps dependencies explicit and components
//! testable against a `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── hero_table.rs    (Sortable hero table + hit testing)
//! └── team_summary.rs  (Scrollable team summary panel)
//! ```

pub mod hero_table;
pub mod team_summary;
mod title_bar;

pub use hero_table::{HeroTable, TableHit};
pub use team_summary::TeamSummary;
pub use title_bar::TitleBar;
