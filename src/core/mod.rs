//! # Core Application Logic
//!
//! This module contains Roster's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (team + sort)    │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │  • view() (derivation)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │  Catalog   │          │    TUI     │
//!             │  (heroes,  │          │  Adapter   │
//!             │   perks)   │          │ (ratatui)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: hero records, perk rules and feature counting
//! - [`sort`]: sort columns, comparator chains and the stable sort
//! - [`selection`]: the picked team
//! - [`state`]: the `App` struct, all core state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`view`]: the render model derived from `App`
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod selection;
pub mod sort;
pub mod state;
pub mod view;
