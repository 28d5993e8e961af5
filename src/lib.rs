//! Roster library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::catalog::{Catalog, FeatureCount, HeroRecord, Perk, StaticCatalog};
pub use crate::core::sort::{SortColumn, SortState};
